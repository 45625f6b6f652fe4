//! Backend location and image-host allow-list.
//!
//! Values resolve in this order: process environment (native only), values baked
//! in at compile time, then the built-in defaults below.

use tracing::warn;
use url::Url;

pub const BACKEND_URL_KEY: &str = "LUBEZKI_BACKEND_URL";
pub const PUBLIC_API_URL_KEY: &str = "LUBEZKI_PUBLIC_API_URL";
pub const IMAGE_HOSTS_KEY: &str = "LUBEZKI_IMAGE_HOSTS";
pub const GALLERY_STRICT_KEY: &str = "LUBEZKI_GALLERY_STRICT";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_IMAGE_HOSTS: &[&str] = &["localhost", "public-lubezki-images.s3.amazonaws.com"];

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base used for render-side fetches (the gallery listing on native shells).
    pub backend_url: Url,
    /// Base used for fetches issued from the browser.
    pub public_url: Url,
    pub image_hosts: Vec<String>,
    /// When set, a failed gallery listing is fatal for the page instead of rendering empty.
    pub strict_gallery: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| runtime_value(key).or_else(|| compiled_value(key)))
    }

    /// Resolve every setting through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = base_url(BACKEND_URL_KEY, lookup(BACKEND_URL_KEY));
        let public_url = base_url(PUBLIC_API_URL_KEY, lookup(PUBLIC_API_URL_KEY));

        let image_hosts = lookup(IMAGE_HOSTS_KEY)
            .map(|raw| {
                raw.split(',')
                    .map(|host| host.trim().to_ascii_lowercase())
                    .filter(|host| !host.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|hosts| !hosts.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_HOSTS.iter().map(|h| h.to_string()).collect());

        let strict_gallery = lookup(GALLERY_STRICT_KEY)
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            backend_url,
            public_url,
            image_hosts,
            strict_gallery,
        }
    }

    /// Whether an image URL served by the backend may be rendered directly.
    ///
    /// Relative URLs resolve against the public base and are always allowed.
    pub fn is_allowed_image(&self, raw: &str) -> bool {
        let resolved = match Url::parse(raw) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => return !raw.trim().is_empty(),
            Err(_) => return false,
        };
        match resolved.host_str() {
            Some(host) => {
                let host = host.to_ascii_lowercase();
                self.image_hosts.iter().any(|allowed| allowed == &host)
            }
            None => false,
        }
    }
}

fn base_url(key: &str, raw: Option<String>) -> Url {
    let fallback = || Url::parse(DEFAULT_BASE_URL).expect("default base url parses");
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return fallback();
    };
    // Normalize to a trailing slash so `join` appends instead of replacing the last segment.
    let mut candidate = raw.trim().trim_end_matches('/').to_string();
    candidate.push('/');
    match Url::parse(&candidate) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url,
        Ok(url) => {
            warn!(key, scheme = url.scheme(), "unsupported scheme; using default backend url");
            fallback()
        }
        Err(err) => {
            warn!(key, value = %raw, error = %err, "invalid url; using default backend url");
            fallback()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_value(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_value(_key: &str) -> Option<String> {
    None
}

fn compiled_value(key: &str) -> Option<String> {
    let value = match key {
        BACKEND_URL_KEY => option_env!("LUBEZKI_BACKEND_URL"),
        PUBLIC_API_URL_KEY => option_env!("LUBEZKI_PUBLIC_API_URL"),
        IMAGE_HOSTS_KEY => option_env!("LUBEZKI_IMAGE_HOSTS"),
        GALLERY_STRICT_KEY => option_env!("LUBEZKI_GALLERY_STRICT"),
        _ => None,
    };
    value.map(str::to_string)
}
