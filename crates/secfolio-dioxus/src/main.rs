use clap::Parser;
use dioxus::prelude::*;
use secfolio_config::Config;
use secfolio_engine::{Route, SiteInfo, data, highlight};
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;

#[derive(Parser)]
#[command(name = "secfolio-dioxus", version, about = "Security blog desktop reader")]
struct Args {
    /// Config file to use instead of ~/.config/secfolio/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start on this path, e.g. /blog or /blog/web3-security
    #[arg(long, default_value = "/blog")]
    route: String,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("secfolio starting up");

    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());

    if let Err(e) = Config::load_or_default(args.config.as_deref()) {
        log::error!("Config load failed: {e}");
        eprintln!("Error: Failed to load config file: {e}");
        process::exit(1);
    }

    log::info!("Launching desktop window");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // Re-read args and config; main has already rejected a broken config file
    let args = Args::parse();
    let config = Config::load_or_default(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("Using default config: {e}");
        Config::default()
    });

    let catalog = data::bundled();
    log::info!("Loaded {} posts", catalog.len());
    log::debug!(
        "Highlighting grammars: {}",
        highlight::grammar_names().collect::<Vec<_>>().join(", ")
    );

    rsx! {
        App {
            catalog,
            site: SiteInfo::new(config.author, config.role),
            dark_mode: config.dark_mode,
            initial_route: Route::parse(&args.route),
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("secfolio")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
