use api::{BackendClient, GallerySummary};
use dioxus::prelude::*;

use super::{tile_models, GalleryTile};
use crate::t;

#[component]
pub fn GalleryGrid(images: Vec<GallerySummary>, on_select: EventHandler<GallerySummary>) -> Element {
    let client = use_context::<BackendClient>();
    let tiles = tile_models(&images, client.config());

    rsx! {
        section { class: "gallery",
            if tiles.is_empty() {
                p { class: "gallery__empty", {t!("gallery-empty")} }
            } else {
                div { class: "gallery__grid",
                    for tile in tiles.into_iter() {
                        GalleryTile { key: "{tile.key}", tile: tile.clone(), on_select }
                    }
                }
            }
        }
    }
}
