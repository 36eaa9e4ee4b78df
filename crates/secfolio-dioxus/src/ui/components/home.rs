use dioxus::prelude::*;
use secfolio_engine::{Route, SiteInfo, data};

use super::showcase::{AdvisoryList, CertificationList, StatGrid};

#[component]
pub fn Home(site: SiteInfo, post_count: usize, on_navigate: EventHandler<Route>) -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "{site.author}" }
            h2 { class: "hero-role", "{site.role}" }
            p {
                "Penetration testing, cloud and container hardening, smart contract audits and vulnerability research."
            }
            button {
                class: "cta",
                onclick: move |_| on_navigate.call(Route::Blog),
                "Read the blog ({post_count} posts)"
            }
        }
        StatGrid { stats: data::stats().to_vec() }
        CertificationList { certifications: data::certifications().to_vec() }
        AdvisoryList { advisories: data::advisories().to_vec() }
    }
}
