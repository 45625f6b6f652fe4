//! Wire models for the `/api/v1/basic` endpoints.
//!
//! The backend has served identifiers both as strings and as integers, and axis
//! scores both as numbers and as numeric strings. Both forms deserialize here;
//! identifiers are normalized to `String`.

use serde::{Deserialize, Deserializer, Serialize};

/// Lightweight gallery entry, enough to render a thumbnail tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GallerySummary {
    #[serde(rename = "base_image")]
    pub base_image_url: String,
    #[serde(rename = "thumbnail_image")]
    pub thumbnail_url: String,
    #[serde(default)]
    pub width_px: u32,
    #[serde(default)]
    pub height_px: u32,
    #[serde(default)]
    pub thumbnail_width_px: u32,
    #[serde(default)]
    pub thumbnail_height_px: u32,
    #[serde(default, deserialize_with = "lenient_id")]
    pub image_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<CompositionScore>,
}

impl GallerySummary {
    /// Gallery entries without an id can still be displayed, but never fetched.
    pub fn has_id(&self) -> bool {
        !self.image_id.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryResponse {
    #[serde(default)]
    pub images: Vec<GallerySummary>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// A single axis value as served: `70`, `70.5` or `"70"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompositionScore {
    #[serde(default)]
    pub color: Option<ScoreValue>,
    #[serde(default)]
    pub lighting: Option<ScoreValue>,
    #[serde(default)]
    pub composition: Option<ScoreValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDetail {
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub width_px: u32,
    #[serde(default)]
    pub height_px: u32,
    #[serde(default, rename = "is_analysis_complete")]
    pub analysis_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<CompositionScore>,
    #[serde(default, rename = "analysis", skip_serializing_if = "Option::is_none")]
    pub analysis_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub y_min: f64,
    pub y_max: f64,
    pub x_min: f64,
    pub x_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedItem {
    #[serde(default, deserialize_with = "lenient_id")]
    pub item_id: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub image_id: String,
    pub name: String,
    #[serde(default)]
    pub bounding_box: BoundingBox,
    #[serde(default, rename = "analysis")]
    pub analysis_text: String,
    #[serde(default)]
    pub is_positive: bool,
}

/// Body of `GET /api/v1/basic/{image_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageWithItems {
    pub image: ImageDetail,
    #[serde(default)]
    pub items: Vec<DetectedItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(text)) => text,
        Some(RawId::Int(value)) => value.to_string(),
        Some(RawId::Float(value)) => value.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_accepts_numeric_id_and_missing_scores() {
        let summary: GallerySummary = serde_json::from_value(json!({
            "base_image": "https://cdn.example/a.jpg",
            "thumbnail_image": "https://cdn.example/a_t.jpg",
            "width_px": 4000,
            "height_px": 3000,
            "thumbnail_width_px": 400,
            "thumbnail_height_px": 300,
            "image_id": 42
        }))
        .unwrap();

        assert_eq!(summary.image_id, "42");
        assert!(summary.scores.is_none());
        assert!(summary.has_id());
    }

    #[test]
    fn summary_without_id_is_displayable_but_not_fetchable() {
        let summary: GallerySummary = serde_json::from_value(json!({
            "base_image": "a.jpg",
            "thumbnail_image": "a_t.jpg",
            "image_id": null
        }))
        .unwrap();

        assert_eq!(summary.image_id, "");
        assert!(!summary.has_id());
    }

    #[test]
    fn detail_scores_accept_numbers_and_strings() {
        let detail: ImageWithItems = serde_json::from_value(json!({
            "image": {
                "original_name": "dunes.png",
                "size_bytes": 1024,
                "mime_type": "image/png",
                "width_px": 10,
                "height_px": 10,
                "is_analysis_complete": true,
                "score": { "color": 81, "lighting": "64", "composition": "" },
                "analysis": "Strong leading lines."
            },
            "items": [{
                "item_id": 7,
                "image_id": "abc",
                "name": "horizon",
                "bounding_box": { "y_min": 0.1, "y_max": 0.2, "x_min": 0.0, "x_max": 1.0 },
                "analysis": "Tilted by two degrees.",
                "is_positive": false
            }]
        }))
        .unwrap();

        let score = detail.image.score.unwrap();
        assert_eq!(score.color, Some(ScoreValue::Number(81.0)));
        assert_eq!(score.lighting, Some(ScoreValue::Text("64".into())));
        assert_eq!(detail.items[0].item_id, "7");
        assert_eq!(detail.image.analysis_text.as_deref(), Some("Strong leading lines."));
        assert!(detail.image.analysis_complete);
    }

    #[test]
    fn detail_items_default_to_empty() {
        let detail: ImageWithItems = serde_json::from_value(json!({
            "image": { "original_name": "x.jpg", "is_analysis_complete": false }
        }))
        .unwrap();

        assert!(detail.items.is_empty());
        assert!(detail.image.score.is_none());
    }
}
