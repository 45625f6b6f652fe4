use dioxus::prelude::*;

use super::UploadDropzone;
use crate::state::AppState;
use crate::t;

/// Collapsible side panel. Upload state lives in [`AppState`], so closing or
/// remounting the panel never loses an upload in flight.
#[component]
pub fn UploadPanel() -> Element {
    let mut app = use_context::<AppState>();
    let controller = app.upload;
    let open = (app.upload_open)();
    let hidden = !open;

    rsx! {
        aside {
            class: if open { "upload-panel upload-panel--open" } else { "upload-panel" },
            aria_hidden: "{hidden}",
            div { class: "upload-panel__header",
                h2 { class: "upload-panel__title", {t!("nav-upload-label")} }
                button {
                    r#type: "button",
                    class: "upload-panel__close",
                    aria_label: t!("upload-close-label"),
                    onclick: move |_| app.close_upload(),
                    "✕"
                }
            }

            UploadDropzone { controller }

            div { class: "upload-panel__requirements",
                h3 { {t!("upload-requirements-title")} }
                ul {
                    li { {t!("upload-requirement-formats")} }
                    li { {t!("upload-requirement-size")} }
                }
            }
        }
    }
}
