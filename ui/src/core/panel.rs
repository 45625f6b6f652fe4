//! Selection and detail-fetch coordination for the analysis panel.
//!
//! Every open and close bumps a generation counter. A detail fetch carries a
//! [`FetchTicket`] stamped with the generation it was started under, and its
//! result is committed only while that generation is still current and the
//! panel is still loading. Late responses for an earlier selection, or for a
//! panel that has started closing, are discarded.
//!
//! ```text
//! Closed ─open─▶ Opening ─enter_loading─▶ Loading ─resolve─▶ Loaded
//!                   │ (no id)                 │                 │
//!                   └──────────▶ Loaded       └──close──▶ Closing ◀──close──┘
//!                                                          │
//!                                              finish_close ▼
//!                                                        Closed
//! ```

use api::{ApiError, DetectedItem, GallerySummary, ImageDetail, ImageWithItems};
use tracing::{debug, error, warn};

use super::score::ScoreCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Closed,
    Opening,
    Loading,
    Loaded,
    Closing,
}

/// What the panel knows about the selected image beyond its summary.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Nothing requested yet, or the request is in flight.
    Pending,
    Ready(ImageWithItems),
    /// The fetch failed; the panel shows summary-level data only.
    Unavailable(String),
    /// The summary had no id, so nothing could be fetched.
    Skipped,
}

/// Proof that a fetch was started for a particular selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub image_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    phase: PanelPhase,
    generation: u64,
    selection: Option<GallerySummary>,
    detail: DetailState,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            phase: PanelPhase::Closed,
            generation: 0,
            selection: None,
            detail: DetailState::Pending,
        }
    }
}

impl PanelState {
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selection(&self) -> Option<&GallerySummary> {
        self.selection.as_ref()
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    /// The loading flag: raised on open, lowered once the current fetch settles.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, PanelPhase::Opening | PanelPhase::Loading)
    }

    pub fn is_visible(&self) -> bool {
        self.phase != PanelPhase::Closed
    }

    /// Select `summary` and invalidate whatever the previous selection had.
    ///
    /// Returns the ticket to fetch with, or `None` when the summary has no id.
    pub fn open(&mut self, summary: GallerySummary) -> Option<FetchTicket> {
        self.generation += 1;
        self.phase = PanelPhase::Opening;

        let ticket = if summary.has_id() {
            self.detail = DetailState::Pending;
            Some(FetchTicket {
                generation: self.generation,
                image_id: summary.image_id.trim().to_string(),
            })
        } else {
            error!(
                thumbnail = %summary.thumbnail_url,
                "gallery entry has no image id; opening with summary data only"
            );
            self.detail = DetailState::Skipped;
            None
        };

        self.selection = Some(summary);
        ticket
    }

    /// Leave `Opening`: start loading, or settle immediately if there is nothing to fetch.
    pub fn enter_loading(&mut self) {
        if self.phase != PanelPhase::Opening {
            return;
        }
        self.phase = match self.detail {
            DetailState::Pending => PanelPhase::Loading,
            _ => PanelPhase::Loaded,
        };
    }

    /// Commit a finished fetch if it still belongs to the current selection.
    ///
    /// Both success and failure lower the loading flag; failure keeps the panel
    /// open with summary-level data.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ImageWithItems, ApiError>,
    ) -> Resolution {
        let current = ticket.generation == self.generation
            && matches!(self.phase, PanelPhase::Opening | PanelPhase::Loading);
        if !current {
            debug!(
                image_id = %ticket.image_id,
                ticket = ticket.generation,
                current = self.generation,
                phase = ?self.phase,
                "discarding stale detail response"
            );
            return Resolution::Stale;
        }

        self.detail = match result {
            Ok(mut detail) => {
                let before = detail.items.len();
                detail.items.retain(|item| item.image_id == ticket.image_id);
                if detail.items.len() != before {
                    warn!(
                        image_id = %ticket.image_id,
                        dropped = before - detail.items.len(),
                        "detail response carried items for another image"
                    );
                }
                DetailState::Ready(detail)
            }
            Err(err) => {
                warn!(image_id = %ticket.image_id, error = %err, "detail fetch failed");
                DetailState::Unavailable(err.to_string())
            }
        };
        self.phase = PanelPhase::Loaded;
        Resolution::Applied
    }

    /// Begin the exit transition. Returns the generation to pass to [`finish_close`].
    ///
    /// [`finish_close`]: PanelState::finish_close
    pub fn close(&mut self) -> Option<u64> {
        match self.phase {
            PanelPhase::Closed | PanelPhase::Closing => None,
            _ => {
                self.generation += 1;
                self.phase = PanelPhase::Closing;
                Some(self.generation)
            }
        }
    }

    /// Clear selection and data once the exit transition is over.
    ///
    /// Ignored if the panel was reopened after `close` handed out `generation`.
    pub fn finish_close(&mut self, generation: u64) -> bool {
        if self.phase != PanelPhase::Closing || generation != self.generation {
            return false;
        }
        self.phase = PanelPhase::Closed;
        self.selection = None;
        self.detail = DetailState::Pending;
        true
    }

    /// Data the panel may render right now; never mixes two selections.
    pub fn view(&self) -> Option<PanelView<'_>> {
        let summary = self.selection.as_ref()?;
        let detail = match &self.detail {
            DetailState::Ready(detail) => Some(detail),
            _ => None,
        };

        let score = match detail.and_then(|d| d.image.score.as_ref()) {
            Some(score) => ScoreCard::from_score(Some(score)),
            None => ScoreCard::from_score(summary.scores.as_ref()),
        };

        Some(PanelView {
            summary,
            image: detail.map(|d| &d.image),
            items: detail.map(|d| d.items.as_slice()),
            score,
            // A fetch cut short by `close` keeps its spinner through the exit
            // transition instead of flashing the empty loaded layout.
            loading: matches!(self.detail, DetailState::Pending),
            degraded: matches!(
                self.detail,
                DetailState::Unavailable(_) | DetailState::Skipped
            ),
        })
    }
}

/// Borrowed, render-ready projection of [`PanelState`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView<'a> {
    pub summary: &'a GallerySummary,
    pub image: Option<&'a ImageDetail>,
    /// `None` until a detail response is committed.
    pub items: Option<&'a [DetectedItem]>,
    pub score: ScoreCard,
    pub loading: bool,
    pub degraded: bool,
}
