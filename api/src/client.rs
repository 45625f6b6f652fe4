//! HTTP client for the three gallery endpoints.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{GalleryResponse, GallerySummary, ImageWithItems, UploadResponse};
use crate::upload::UploadFile;

const BASIC_PATH: &str = "api/v1/basic/";
const UPLOAD_PATH: &str = "api/v1/basic/upload-for-gallery";

/// What to do when the gallery listing cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryPolicy {
    /// Treat any failure as an empty gallery.
    Lenient,
    /// Hand the failure to the caller (page-level error view).
    Strict,
}

impl GalleryPolicy {
    pub fn from_config(config: &ApiConfig) -> Self {
        if config.strict_gallery {
            GalleryPolicy::Strict
        } else {
            GalleryPolicy::Lenient
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl BackendClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /api/v1/basic/`, in server order.
    pub async fn gallery(&self, policy: GalleryPolicy) -> Result<Vec<GallerySummary>, ApiError> {
        let url = self.listing_base().join(BASIC_PATH)?;
        debug!(%url, ?policy, "fetching gallery listing");

        match self.get_json::<GalleryResponse>(url).await {
            Ok(listing) => {
                info!(count = listing.images.len(), "gallery listing loaded");
                Ok(listing.images)
            }
            Err(err) if policy == GalleryPolicy::Lenient => {
                warn!(error = %err, "gallery listing failed; rendering empty gallery");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// `GET /api/v1/basic/{image_id}`.
    pub async fn image_detail(&self, image_id: &str) -> Result<ImageWithItems, ApiError> {
        let image_id = image_id.trim();
        if image_id.is_empty() {
            return Err(ApiError::MissingImageId);
        }
        let url = self.detail_url(image_id)?;
        debug!(%url, image_id, "fetching image detail");
        self.get_json(url).await
    }

    /// `POST /api/v1/basic/upload-for-gallery` with the file in multipart field `file`.
    ///
    /// Invalid files are refused before any request is built.
    pub async fn upload_for_gallery(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        if let Err(rejection) = file.validate() {
            info!(file = %file.file_name, %rejection, "upload rejected locally");
            return Err(rejection.into());
        }

        let url = self.config.public_url.join(UPLOAD_PATH)?;
        let size_bytes = file.size_bytes();
        let UploadFile {
            file_name,
            mime_type,
            bytes,
        } = file;

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.clone())
            .mime_str(&mime_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        info!(file = %file_name, size_bytes, %mime_type, "uploading image");
        let response = self.http.post(url.clone()).multipart(form).send().await?;
        decode(url, response).await
    }

    fn listing_base(&self) -> &Url {
        if cfg!(target_arch = "wasm32") {
            &self.config.public_url
        } else {
            &self.config.backend_url
        }
    }

    fn detail_url(&self, image_id: &str) -> Result<Url, ApiError> {
        let mut url = self.config.public_url.join(BASIC_PATH)?;
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(image_id);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.http.get(url.clone()).send().await?;
        decode(url, response).await
    }
}

async fn decode<T: DeserializeOwned>(url: Url, response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
