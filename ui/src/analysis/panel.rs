use dioxus::prelude::*;

use super::{ItemList, ScoreSummary};
use crate::core::format::{format_bytes, format_dimensions};
use crate::core::panel::{PanelPhase, PanelState, PanelView};
use crate::t;

/// Full-screen analysis panel. Renders only what [`PanelState::view`] hands out.
#[component]
pub fn AnalysisPanel(panel: Signal<PanelState>, on_close: EventHandler<()>) -> Element {
    let state = panel.read();
    let open = state.is_visible() && state.phase() != PanelPhase::Closing;
    let hidden = !open;
    let body = match state.view() {
        Some(view) => render_body(&view),
        None => rsx! {
            div { class: "analysis-panel__media analysis-panel__media--empty",
                p { {t!("panel-no-image")} }
            }
        },
    };

    rsx! {
        div {
            class: if open { "analysis-panel analysis-panel--open" } else { "analysis-panel" },
            aria_hidden: "{hidden}",
            button {
                r#type: "button",
                class: "analysis-panel__close",
                aria_label: t!("panel-close-label"),
                onclick: move |_| on_close.call(()),
                "✕"
            }
            div { class: "analysis-panel__body", {body} }
        }
    }
}

fn render_body(view: &PanelView<'_>) -> Element {
    let alt = view
        .image
        .map(|image| image.original_name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| t!("panel-image-alt"));
    let src = view.summary.base_image_url.clone();

    let sidebar = if view.loading {
        rsx! {
            div { class: "analysis-panel__loading",
                div { class: "spinner" }
                p { {t!("panel-loading-scores")} }
            }
            div { class: "analysis-panel__loading",
                div { class: "spinner" }
                p { {t!("panel-loading-items")} }
            }
        }
    } else {
        render_loaded(view)
    };

    rsx! {
        div { class: "analysis-panel__media",
            img { class: "analysis-panel__image", src: "{src}", alt: "{alt}" }
        }
        div { class: "analysis-panel__sidebar", {sidebar} }
    }
}

fn render_loaded(view: &PanelView<'_>) -> Element {
    let image = view.image;
    let metadata: Vec<String> = image
        .map(|image| {
            [
                Some(image.original_name.clone()).filter(|name| !name.is_empty()),
                format_dimensions(image.width_px, image.height_px),
                (image.size_bytes > 0).then(|| format_bytes(image.size_bytes)),
                Some(image.mime_type.clone()).filter(|mime| !mime.is_empty()),
            ]
            .into_iter()
            .flatten()
            .collect()
        })
        .unwrap_or_default();
    let analysis_pending = image.map(|image| !image.analysis_complete).unwrap_or(false);
    let analysis = image
        .and_then(|image| image.analysis_text.clone())
        .filter(|text| !text.trim().is_empty());
    let items = view.items.map(|items| items.to_vec());

    rsx! {
        if !metadata.is_empty() {
            ul { class: "analysis-panel__meta",
                for entry in metadata.iter() {
                    li { "{entry}" }
                }
            }
        }

        if analysis_pending {
            span { class: "analysis-panel__badge", {t!("panel-analysis-pending")} }
        }

        ScoreSummary { card: view.score }

        if let Some(text) = analysis {
            div { class: "analysis-panel__analysis",
                h3 { {t!("panel-analysis-title")} }
                p { "{text}" }
            }
        }

        section { class: "analysis-panel__items",
            h3 { {t!("panel-items-title")} }
            match items {
                Some(items) => rsx! { ItemList { items } },
                None => rsx! {
                    p { class: "analysis-panel__degraded", {t!("panel-degraded")} }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{GallerySummary, ImageDetail, ImageWithItems};

    fn summary() -> GallerySummary {
        GallerySummary {
            base_image_url: "http://localhost/a.jpg".into(),
            thumbnail_url: "http://localhost/a_t.jpg".into(),
            width_px: 10,
            height_px: 10,
            thumbnail_width_px: 5,
            thumbnail_height_px: 5,
            image_id: "a".into(),
            scores: None,
        }
    }

    #[test]
    fn empty_item_list_is_distinct_from_degraded() {
        let mut state = PanelState::default();
        let ticket = state.open(summary()).unwrap();
        state.enter_loading();
        state.resolve(
            &ticket,
            Ok(ImageWithItems {
                image: ImageDetail {
                    original_name: "a.jpg".into(),
                    size_bytes: 1,
                    mime_type: "image/jpeg".into(),
                    width_px: 10,
                    height_px: 10,
                    analysis_complete: true,
                    score: None,
                    analysis_text: None,
                },
                items: Vec::new(),
            }),
        );

        let view = state.view().unwrap();
        // Some(empty) renders the "No items detected" state, None the degraded notice.
        assert_eq!(view.items.map(|items| items.len()), Some(0));
        assert!(!view.degraded);
    }
}
