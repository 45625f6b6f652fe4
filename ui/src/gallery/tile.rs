use api::GallerySummary;
use dioxus::prelude::*;

use super::TileModel;
use crate::core::score::score_color;
use crate::t;

#[component]
pub fn GalleryTile(tile: TileModel, on_select: EventHandler<GallerySummary>) -> Element {
    let TileModel {
        position,
        thumbnail,
        width,
        height,
        overall,
        summary,
        ..
    } = tile;
    let alt = t!("gallery-tile-alt", position = position);

    rsx! {
        button {
            r#type: "button",
            class: "gallery-tile",
            onclick: move |_| on_select.call(summary.clone()),

            div { class: "gallery-tile__frame",
                if let Some(src) = thumbnail {
                    img {
                        class: "gallery-tile__image",
                        src: "{src}",
                        width: "{width}",
                        height: "{height}",
                        alt: "{alt}",
                    }
                } else {
                    div { class: "gallery-tile__placeholder", {t!("gallery-tile-blocked")} }
                }

                if let Some(score) = overall {
                    span {
                        class: "gallery-tile__badge",
                        style: "background-color: {score_color(score)}",
                        "{score}%"
                    }
                }

                div { class: "gallery-tile__overlay",
                    p { {t!("gallery-tile-hint")} }
                }
            }
        }
    }
}
