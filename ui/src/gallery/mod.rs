//! Thumbnail grid for the gallery listing.

mod grid;
pub use grid::GalleryGrid;

mod tile;
pub use tile::GalleryTile;

use api::{ApiConfig, GallerySummary};

use crate::core::score::ScoreCard;

/// Render model for one tile. One per summary, in listing order.
#[derive(Debug, Clone, PartialEq)]
pub struct TileModel {
    /// Unique within the grid even when ids repeat or are missing.
    pub key: String,
    /// 1-based position, used when the entry has no id.
    pub position: usize,
    /// `None` when the thumbnail host is not on the allow-list.
    pub thumbnail: Option<String>,
    pub width: u32,
    pub height: u32,
    pub overall: Option<u32>,
    pub summary: GallerySummary,
}

pub fn tile_models(images: &[GallerySummary], config: &ApiConfig) -> Vec<TileModel> {
    images
        .iter()
        .enumerate()
        .map(|(index, summary)| TileModel {
            key: format!("{index}:{}", summary.image_id),
            position: index + 1,
            thumbnail: config
                .is_allowed_image(&summary.thumbnail_url)
                .then(|| summary.thumbnail_url.clone()),
            width: summary.thumbnail_width_px,
            height: summary.thumbnail_height_px,
            overall: ScoreCard::from_score(summary.scores.as_ref()).overall(),
            summary: summary.clone(),
        })
        .collect()
}
