//! Application-wide state owned by the platform root and shared through context.
//!
//! Everything here lives above the language-keyed subtree, so switching
//! language remounts the pages without refetching the gallery, resetting the
//! analysis panel or cancelling an upload.

use api::{ApiConfig, ApiError, BackendClient, GallerySummary, GalleryPolicy};
use dioxus::prelude::*;

use crate::analysis::use_panel_coordinator;
use crate::core::panel::PanelState;
use crate::core::upload::UploadController;
use crate::upload::use_upload_coordinator;

/// Cross-component UI state.
///
/// The title bar toggles the upload panel and the panel reads the same signal,
/// so neither needs to know about the other.
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub upload_open: Signal<bool>,
    pub panel: Signal<PanelState>,
    pub upload: Signal<UploadController>,
}

impl AppState {
    /// Must be called from inside a component scope (e.g. `use_context_provider`).
    pub fn new() -> Self {
        Self {
            upload_open: Signal::new(false),
            panel: Signal::new(PanelState::default()),
            upload: Signal::new(UploadController::default()),
        }
    }

    pub fn toggle_upload(&mut self) {
        let open = (self.upload_open)();
        self.upload_open.set(!open);
    }

    pub fn close_upload(&mut self) {
        self.upload_open.set(false);
    }
}

/// The gallery listing, fetched once per page load.
#[derive(Clone, Copy)]
pub struct GalleryListing(pub Resource<Result<Vec<GallerySummary>, ApiError>>);

/// Install the client, [`AppState`], the gallery listing and the panel and
/// upload coordinators. Call once from the platform root, above anything keyed
/// on the language.
pub fn use_app_root(config: impl FnOnce() -> ApiConfig) -> AppState {
    let client = use_context_provider(|| BackendClient::new(config()));
    let app = use_context_provider(AppState::new);

    let listing = use_resource(move || {
        let client = client.clone();
        async move {
            let policy = GalleryPolicy::from_config(client.config());
            client.gallery(policy).await
        }
    });
    use_context_provider(|| GalleryListing(listing));

    use_panel_coordinator(app.panel);
    use_upload_coordinator(app.upload);
    app
}
