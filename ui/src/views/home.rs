use api::ApiError;
use dioxus::prelude::*;
use tracing::error;

use super::LoadingView;
use crate::analysis::{AnalysisPanel, PanelEvent};
use crate::gallery::GalleryGrid;
use crate::state::{AppState, GalleryListing};

/// Raised into the surrounding `ErrorBoundary` when a strict listing fails.
#[derive(Debug, thiserror::Error)]
#[error("gallery listing unavailable: {reason}")]
pub struct GalleryUnavailable {
    pub reason: String,
}

impl From<&ApiError> for GalleryUnavailable {
    fn from(err: &ApiError) -> Self {
        Self {
            reason: err.to_string(),
        }
    }
}

#[component]
pub fn Home() -> Element {
    let GalleryListing(listing) = use_context::<GalleryListing>();
    let app = use_context::<AppState>();
    let coordinator = use_coroutine_handle::<PanelEvent>();

    let images = match &*listing.read() {
        None => return rsx! { LoadingView {} },
        Some(Err(err)) => {
            error!(error = %err, "gallery listing failed");
            return Err(GalleryUnavailable::from(err).into());
        }
        Some(Ok(images)) => images.clone(),
    };

    rsx! {
        main { class: "page page-home",
            GalleryGrid {
                images,
                on_select: move |summary| coordinator.send(PanelEvent::Open(summary)),
            }
            AnalysisPanel {
                panel: app.panel,
                on_close: move |_| coordinator.send(PanelEvent::Close),
            }
        }
    }
}
