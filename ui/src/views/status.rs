//! Loading, error and not-found pages.

use dioxus::prelude::*;
use tracing::warn;

use crate::t;

#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { class: "page status-page status-page--loading",
            div { class: "spinner spinner--large" }
            h2 { class: "status-page__title", {t!("loading-title")} }
            p { class: "status-page__body", {t!("loading-subtitle")} }
        }
    }
}

/// Fallback for the router's `ErrorBoundary`.
///
/// "Try again" clears the boundary and reloads so the listing is fetched anew.
pub fn error_page(errors: ErrorContext) -> Element {
    for captured in errors.errors().iter() {
        warn!(error = %captured, "page-level error");
    }
    let retry_errors = errors.clone();
    let home_errors = errors.clone();

    rsx! {
        div { class: "page status-page error-page",
            span { class: "error-page__icon", aria_hidden: "true", "⚠" }
            h2 { class: "status-page__title", {t!("error-title")} }
            p { class: "status-page__body", {t!("error-body")} }
            div { class: "error-page__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| {
                        retry_errors.clear_errors();
                        document::eval("window.location.reload()");
                    },
                    {t!("error-retry")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| {
                        home_errors.clear_errors();
                        navigator().push("/");
                    },
                    {t!("error-home")}
                }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    if !segments.is_empty() {
        warn!(path = %segments.join("/"), "unknown route");
    }

    rsx! {
        div { class: "page status-page not-found",
            span { class: "not-found__code", "404" }
            h2 { class: "status-page__title", {t!("not-found-title")} }
            p { class: "status-page__body", {t!("not-found-body")} }
            Link { class: "button button--primary", to: "/", {t!("not-found-home")} }
        }
    }
}
