use api::DetectedItem;
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn ItemList(items: Vec<DetectedItem>) -> Element {
    if items.is_empty() {
        return rsx! {
            div { class: "item-list item-list--empty",
                p { class: "item-list__empty-title", {t!("panel-items-empty")} }
                p { class: "item-list__empty-hint", {t!("panel-items-empty-hint")} }
            }
        };
    }

    let good = t!("panel-item-good");
    let improve = t!("panel-item-improve");

    rsx! {
        ul { class: "item-list",
            for (index, item) in items.iter().enumerate() {
                li {
                    key: "{item_key(item, index)}",
                    class: if item.is_positive { "item-card item-card--positive" } else { "item-card item-card--negative" },
                    div { class: "item-card__header",
                        h3 { class: "item-card__name", "{item.name}" }
                        span { class: "item-card__badge",
                            if item.is_positive { "{good}" } else { "{improve}" }
                        }
                    }
                    p { class: "item-card__analysis", "{item.analysis_text}" }
                }
            }
        }
    }
}

fn item_key(item: &DetectedItem, index: usize) -> String {
    if item.item_id.is_empty() {
        format!("item-{index}")
    } else {
        item.item_id.clone()
    }
}
