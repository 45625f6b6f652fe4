//! Exercises `BackendClient` against an in-process mock backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use api::{ApiConfig, ApiError, BackendClient, GalleryPolicy, UploadFile, UploadRejection};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Counters {
    listing: Arc<AtomicUsize>,
    detail: Arc<AtomicUsize>,
    upload: Arc<AtomicUsize>,
}

#[derive(Clone)]
struct MockState {
    counters: Counters,
    healthy: bool,
}

async fn listing(State(state): State<MockState>) -> (StatusCode, Json<Value>) {
    state.counters.listing.fetch_add(1, Ordering::SeqCst);
    if !state.healthy {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"detail": "boom"})));
    }
    let images: Vec<Value> = ["c", "a", "b"]
        .iter()
        .map(|id| {
            json!({
                "base_image": format!("http://localhost/{id}.jpg"),
                "thumbnail_image": format!("http://localhost/{id}_t.jpg"),
                "width_px": 1200,
                "height_px": 800,
                "thumbnail_width_px": 300,
                "thumbnail_height_px": 200,
                "image_id": id
            })
        })
        .collect();
    (StatusCode::OK, Json(json!({ "images": images, "total": 3 })))
}

async fn detail(
    State(state): State<MockState>,
    Path(image_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    state.counters.detail.fetch_add(1, Ordering::SeqCst);
    if image_id == "missing" {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "not found"})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "image": {
                "original_name": format!("{image_id}.jpg"),
                "size_bytes": 2048,
                "mime_type": "image/jpeg",
                "width_px": 1200,
                "height_px": 800,
                "is_analysis_complete": true,
                "score": { "color": "70", "lighting": 55, "composition": "61" },
                "analysis": "Balanced frame."
            },
            "items": [{
                "item_id": "i1",
                "image_id": image_id,
                "name": "tree",
                "bounding_box": { "y_min": 1, "y_max": 2, "x_min": 3, "x_max": 4 },
                "analysis": "Good anchor.",
                "is_positive": true
            }]
        })),
    )
}

async fn upload(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    state.counters.upload.fetch_add(1, Ordering::SeqCst);
    let is_multipart = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("multipart/form-data"))
        .unwrap_or(false);
    let has_file_field = String::from_utf8_lossy(&body).contains("name=\"file\"");
    if !state.healthy || !is_multipart || !has_file_field {
        return (StatusCode::BAD_REQUEST, Json(json!({"detail": "bad upload"})));
    }
    (
        StatusCode::OK,
        Json(json!({ "message": "Upload successful", "image_id": "new-1" })),
    )
}

async fn spawn_backend(healthy: bool) -> (BackendClient, Counters) {
    let counters = Counters::default();
    let app = Router::new()
        .route("/api/v1/basic/", get(listing))
        .route("/api/v1/basic/upload-for-gallery", post(upload))
        .route("/api/v1/basic/:image_id", get(detail))
        .with_state(MockState {
            counters: counters.clone(),
            healthy,
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base = format!("http://{addr}");
    let env: HashMap<&str, String> = HashMap::from([
        ("LUBEZKI_BACKEND_URL", base.clone()),
        ("LUBEZKI_PUBLIC_API_URL", base),
    ]);
    let config = ApiConfig::from_lookup(|key| env.get(key).cloned());
    (BackendClient::new(config), counters)
}

fn png_of_size(size: usize) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.resize(size, 0);
    bytes
}

#[tokio::test]
async fn gallery_preserves_server_order() {
    let (client, counters) = spawn_backend(true).await;

    let images = client.gallery(GalleryPolicy::Strict).await.unwrap();

    let ids: Vec<_> = images.iter().map(|s| s.image_id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
    assert_eq!(counters.listing.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn lenient_gallery_degrades_to_empty() {
    let (client, _) = spawn_backend(false).await;

    let images = client.gallery(GalleryPolicy::Lenient).await.unwrap();
    assert!(images.is_empty());
}

#[tokio::test]
async fn strict_gallery_propagates_status() {
    let (client, _) = spawn_backend(false).await;

    let err = client.gallery(GalleryPolicy::Strict).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn lenient_gallery_survives_unreachable_backend() {
    let config = ApiConfig::from_lookup(|key| {
        (key == "LUBEZKI_BACKEND_URL").then(|| "http://127.0.0.1:9".to_string())
    });
    let client = BackendClient::new(config);

    assert!(client.gallery(GalleryPolicy::Lenient).await.unwrap().is_empty());
    assert!(matches!(
        client.gallery(GalleryPolicy::Strict).await,
        Err(ApiError::Transport(_))
    ));
}

#[tokio::test]
async fn detail_round_trip() {
    let (client, counters) = spawn_backend(true).await;

    let detail = client.image_detail("abc").await.unwrap();

    assert_eq!(detail.image.original_name, "abc.jpg");
    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.items[0].image_id, "abc");
    assert_eq!(counters.detail.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn detail_not_found_is_a_status_error() {
    let (client, _) = spawn_backend(true).await;

    let err = client.image_detail("missing").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn detail_with_blank_id_sends_nothing() {
    let (client, counters) = spawn_backend(true).await;

    let err = client.image_detail("  ").await.unwrap_err();
    assert!(matches!(err, ApiError::MissingImageId));
    assert!(err.is_local());
    assert_eq!(counters.detail.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upload_rejects_invalid_files_without_a_request() {
    let (client, counters) = spawn_backend(true).await;

    let too_big = UploadFile::new("huge.png", "image/png", png_of_size(30 * 1024 * 1024));
    let err = client.upload_for_gallery(too_big).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Rejected(UploadRejection::TooLarge { .. })
    ));

    let text = UploadFile::new("notes.txt", "text/plain", b"just words".to_vec());
    let err = client.upload_for_gallery(text).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Rejected(UploadRejection::NotAnImage { .. })
    ));

    assert_eq!(counters.upload.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upload_accepts_png_with_exactly_one_post() {
    let (client, counters) = spawn_backend(true).await;

    let file = UploadFile::new("dunes.png", "image/png", png_of_size(1024 * 1024));
    let response = client.upload_for_gallery(file).await.unwrap();

    assert_eq!(response.message, "Upload successful");
    assert_eq!(response.image_id.as_deref(), Some("new-1"));
    assert_eq!(counters.upload.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn upload_failure_surfaces_status() {
    let (client, counters) = spawn_backend(false).await;

    let file = UploadFile::new("dunes.png", "image/png", png_of_size(4096));
    let err = client.upload_for_gallery(file).await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 400, .. }));
    assert!(!err.is_local());
    assert_eq!(counters.upload.load(Ordering::SeqCst), 1);
}
