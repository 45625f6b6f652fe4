//! Client-side checks applied before an upload is allowed onto the wire.

use thiserror::Error;

/// Largest file the gallery upload endpoint accepts (25 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("`{mime_type}` is not an image type")]
    NotAnImage { mime_type: String },

    #[error("file is {size_bytes} bytes, limit is {MAX_UPLOAD_BYTES}")]
    TooLarge { size_bytes: u64 },
}

/// A file picked or dropped by the user, read fully into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Build from raw bytes. The MIME type comes from the file's magic numbers,
    /// then from its extension (text formats such as SVG have no magic), then
    /// `application/octet-stream`.
    pub fn sniffed(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = infer::get(&bytes)
            .map(|kind| kind.mime_type().to_string())
            .or_else(|| {
                mime_guess::from_path(&file_name)
                    .first()
                    .map(|mime| mime.essence_str().to_string())
            })
            .unwrap_or_else(|| FALLBACK_MIME.to_string());
        Self::new(file_name, mime_type, bytes)
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Type is checked before size, so a large text file reports the type problem.
    pub fn validate(&self) -> Result<(), UploadRejection> {
        if !self.mime_type.starts_with("image/") {
            return Err(UploadRejection::NotAnImage {
                mime_type: self.mime_type.clone(),
            });
        }
        check_size(self.size_bytes())
    }
}

/// Size limit on its own, for callers that know the size before reading the file.
pub fn check_size(size_bytes: u64) -> Result<(), UploadRejection> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge { size_bytes });
    }
    Ok(())
}
