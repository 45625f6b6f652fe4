use std::sync::Arc;

use api::{BackendClient, UploadFile};
use dioxus::html::FileEngine;
use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::debug;

use super::display_name;
use crate::core::timing;
use crate::core::upload::{SubmitBlocked, UploadController};

/// Files handed over by the drop zone or the picker.
pub struct UploadRequest(pub Arc<dyn FileEngine>);

/// Run uploads from the application root so they outlive the drop zone.
///
/// Each request becomes its own task; `controller` keeps them from overlapping.
pub fn use_upload_coordinator(controller: Signal<UploadController>) -> Coroutine<UploadRequest> {
    let client = use_context::<BackendClient>();

    use_coroutine(move |mut rx: UnboundedReceiver<UploadRequest>| {
        let client = client.clone();
        async move {
            while let Some(UploadRequest(engine)) = rx.next().await {
                spawn(run_upload(engine, controller, client.clone()));
            }
        }
    })
}

/// Read, validate, post and report one picked file. Later files of a
/// multi-file drop are ignored.
async fn run_upload(
    engine: Arc<dyn FileEngine>,
    mut controller: Signal<UploadController>,
    client: BackendClient,
) {
    let Some(path) = engine.files().into_iter().next() else {
        return;
    };
    let file_name = display_name(&path);
    if let Some(size_bytes) = engine.file_size(&path).await {
        match controller.write().precheck(&file_name, size_bytes) {
            Ok(()) => {}
            Err(SubmitBlocked::Busy) => {
                debug!(file = %file_name, "upload already in flight; ignoring new file");
                return;
            }
            Err(SubmitBlocked::Rejected(_)) => return,
        }
    }

    let Some(bytes) = engine.read_file(&path).await else {
        controller.write().read_failed(&file_name);
        return;
    };

    let file = UploadFile::sniffed(file_name, bytes);
    let ticket = match controller.write().submit(&file) {
        Ok(ticket) => ticket,
        Err(SubmitBlocked::Busy) => {
            debug!(file = %file.file_name, "upload already in flight; ignoring new file");
            return;
        }
        Err(SubmitBlocked::Rejected(_)) => return,
    };

    let result = client.upload_for_gallery(file).await;
    let clear_at = controller.write().finish(ticket, result);

    if let Some(generation) = clear_at {
        timing::sleep_ms(timing::UPLOAD_STATUS_CLEAR_MS).await;
        controller.write().clear_status(generation);
    }
}
