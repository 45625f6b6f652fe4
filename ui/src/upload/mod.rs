//! Upload side panel: drop zone, file picker and status banner.

mod coordinator;
mod dropzone;
mod panel;

pub use coordinator::{use_upload_coordinator, UploadRequest};
pub use dropzone::UploadDropzone;
pub use panel::UploadPanel;

use api::UploadRejection;

use crate::core::upload::UploadStatus;
use crate::t;

/// Localized banner text for `status`; `None` while idle.
pub fn status_text(status: &UploadStatus) -> Option<String> {
    match status {
        UploadStatus::Idle => None,
        UploadStatus::Uploading { .. } => Some(t!("upload-uploading")),
        UploadStatus::Succeeded(message) => Some(message.clone()),
        UploadStatus::Rejected(UploadRejection::NotAnImage { .. }) => Some(t!("upload-rejected-type")),
        UploadStatus::Rejected(UploadRejection::TooLarge { .. }) => Some(t!("upload-rejected-size")),
        UploadStatus::Failed => Some(t!("upload-failed")),
    }
}

/// Strip any directory part the platform put in front of the picked file name.
pub(crate) fn display_name(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(path)
        .to_string()
}
