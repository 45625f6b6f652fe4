//! Upload control state: one submission at a time, status text that clears itself.

use api::{check_size, ApiError, UploadFile, UploadRejection, UploadResponse};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Uploading { file_name: String },
    /// Message text as reported by the server.
    Succeeded(String),
    Rejected(UploadRejection),
    Failed,
}

impl UploadStatus {
    /// CSS modifier for the status banner.
    pub fn tone(&self) -> &'static str {
        match self {
            UploadStatus::Idle | UploadStatus::Uploading { .. } => "upload-status--info",
            UploadStatus::Succeeded(_) => "upload-status--success",
            UploadStatus::Rejected(_) | UploadStatus::Failed => "upload-status--error",
        }
    }
}

/// Handed out by [`UploadController::submit`]; required to report the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    status_generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous upload from this control is still in flight.
    Busy,
    Rejected(UploadRejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadController {
    status: UploadStatus,
    uploading: bool,
    status_generation: u64,
}

impl Default for UploadController {
    fn default() -> Self {
        Self {
            status: UploadStatus::Idle,
            uploading: false,
            status_generation: 0,
        }
    }
}

impl UploadController {
    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Cheap gate before the file is read: refuses while busy, and rejects by
    /// size alone so an oversized file is never buffered.
    pub fn precheck(&mut self, file_name: &str, size_bytes: u64) -> Result<(), SubmitBlocked> {
        if self.uploading {
            return Err(SubmitBlocked::Busy);
        }
        if let Err(rejection) = check_size(size_bytes) {
            info!(file = %file_name, %rejection, "upload rejected before reading");
            self.set_status(UploadStatus::Rejected(rejection.clone()));
            return Err(SubmitBlocked::Rejected(rejection));
        }
        Ok(())
    }

    /// Validate `file` and claim the control for it.
    ///
    /// Rejections update the status immediately; no request may be sent for them.
    pub fn submit(&mut self, file: &UploadFile) -> Result<UploadTicket, SubmitBlocked> {
        if self.uploading {
            return Err(SubmitBlocked::Busy);
        }
        if let Err(rejection) = file.validate() {
            info!(file = %file.file_name, %rejection, "upload rejected");
            self.set_status(UploadStatus::Rejected(rejection.clone()));
            return Err(SubmitBlocked::Rejected(rejection));
        }

        self.uploading = true;
        self.set_status(UploadStatus::Uploading {
            file_name: file.file_name.clone(),
        });
        Ok(UploadTicket {
            status_generation: self.status_generation,
        })
    }

    /// Record the outcome and release the control.
    ///
    /// Returns the status generation to clear after the display delay when the
    /// upload succeeded.
    pub fn finish(
        &mut self,
        _ticket: UploadTicket,
        result: Result<UploadResponse, ApiError>,
    ) -> Option<u64> {
        self.uploading = false;
        match result {
            Ok(response) => {
                info!(image_id = ?response.image_id, "upload accepted by backend");
                self.set_status(UploadStatus::Succeeded(response.message));
                Some(self.status_generation)
            }
            Err(ApiError::Rejected(rejection)) => {
                self.set_status(UploadStatus::Rejected(rejection));
                None
            }
            Err(err) => {
                warn!(error = %err, "upload failed");
                self.set_status(UploadStatus::Failed);
                None
            }
        }
    }

    /// The picked file could not be read; nothing was claimed or sent.
    pub fn read_failed(&mut self, file_name: &str) {
        warn!(file = %file_name, "could not read selected file");
        self.set_status(UploadStatus::Failed);
    }

    /// Clear the status only if it is still the one scheduled for clearing.
    pub fn clear_status(&mut self, generation: u64) -> bool {
        if generation != self.status_generation || self.uploading {
            return false;
        }
        self.set_status(UploadStatus::Idle);
        true
    }

    fn set_status(&mut self, status: UploadStatus) {
        self.status = status;
        self.status_generation += 1;
    }
}
