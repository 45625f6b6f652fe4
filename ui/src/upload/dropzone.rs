use dioxus::html::HasFileData;
use dioxus::prelude::*;

use super::{status_text, UploadRequest};
use crate::core::upload::UploadController;
use crate::t;

#[component]
pub fn UploadDropzone(controller: Signal<UploadController>) -> Element {
    let uploads = use_coroutine_handle::<UploadRequest>();
    let mut drag_over = use_signal(|| false);

    let uploading = controller.read().is_uploading();
    let status = controller.read().status().clone();
    let banner = status_text(&status);
    let tone = status.tone();

    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        drag_over.set(false);
        if let Some(engine) = evt.files() {
            uploads.send(UploadRequest(engine));
        }
    };
    let on_pick = move |evt: FormEvent| {
        if let Some(engine) = evt.files() {
            uploads.send(UploadRequest(engine));
        }
    };

    let zone_class = match (drag_over(), uploading) {
        (_, true) => "upload-dropzone upload-dropzone--busy",
        (true, false) => "upload-dropzone upload-dropzone--active",
        (false, false) => "upload-dropzone",
    };

    rsx! {
        div {
            class: zone_class,
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                drag_over.set(true);
            },
            ondragleave: move |_| drag_over.set(false),
            ondrop: on_drop,

            span { class: "upload-dropzone__icon", aria_hidden: "true", "📁" }
            p { class: "upload-dropzone__prompt", {t!("upload-drop-prompt")} }

            label {
                class: if uploading { "button button--primary button--disabled" } else { "button button--primary" },
                r#for: "upload-file-input",
                if uploading {
                    {t!("upload-uploading")}
                } else {
                    {t!("upload-choose")}
                }
            }
            input {
                id: "upload-file-input",
                class: "visually-hidden",
                r#type: "file",
                accept: "image/*",
                multiple: false,
                disabled: uploading,
                onchange: on_pick,
            }

            if uploading {
                div { class: "spinner upload-dropzone__spinner" }
            }
        }

        if let Some(text) = banner {
            p { class: "upload-status {tone}", role: "status", "{text}" }
        }
    }
}
