//! Client-side access to the Lubezki analysis backend.
//!
//! The backend owns detection, scoring and narrative generation. This crate only
//! knows the shape of its JSON responses, where it lives, and how to talk to it.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod upload;

pub use client::{BackendClient, GalleryPolicy};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    BoundingBox, CompositionScore, DetectedItem, GalleryResponse, GallerySummary, ImageDetail,
    ImageWithItems, ScoreValue, UploadResponse,
};
pub use upload::{check_size, UploadFile, UploadRejection, MAX_UPLOAD_BYTES};
