use dioxus::prelude::*;
use secfolio_engine::{Advisory, Certification, Stat};

#[component]
pub fn StatGrid(stats: Vec<Stat>) -> Element {
    rsx! {
        div {
            class: "stat-grid",
            for stat in stats.iter() {
                div {
                    key: "{stat.label}",
                    class: "stat",
                    div { class: "stat-value", "{stat.value}" }
                    div { class: "stat-label", "{stat.label}" }
                }
            }
        }
    }
}

#[component]
pub fn CertificationList(certifications: Vec<Certification>) -> Element {
    rsx! {
        section {
            class: "certifications",
            h2 { "Professional Certifications" }
            div {
                class: "cert-grid",
                for cert in certifications.iter() {
                    article {
                        key: "{cert.title}",
                        class: "cert-card",
                        h3 { "{cert.title}" }
                        p { class: "cert-name", "{cert.full_name}" }
                        div { class: "cert-date", "Obtained {cert.date}" }
                        p { "{cert.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdvisoryList(advisories: Vec<Advisory>) -> Element {
    rsx! {
        section {
            class: "advisories",
            h2 { "Recent Security Advisories" }
            for (i, advisory) in advisories.iter().enumerate() {
                AdvisoryCard { key: "{i}", advisory: *advisory }
            }
        }
    }
}

#[component]
fn AdvisoryCard(advisory: Advisory) -> Element {
    let severity_class = advisory.severity.css_class();

    rsx! {
        article {
            class: "advisory-card {severity_class}",
            div {
                class: "advisory-header",
                span { class: "severity", "{advisory.severity}" }
                span { class: "advisory-date", "{advisory.date}" }
                span { class: "advisory-status", "{advisory.status}" }
            }
            div {
                class: "advisory-title",
                h3 { "{advisory.platform}" }
                span { class: "bounty", "{advisory.bounty}" }
            }
            p { "{advisory.description}" }
            div {
                class: "advisory-impact",
                strong { "Potential Impact:" }
                " {advisory.impact}"
            }
        }
    }
}
