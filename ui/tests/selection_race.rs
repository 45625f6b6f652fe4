//! Rapid re-selection with out-of-order responses, driven on a paused clock.

use std::time::Duration;

use api::{BoundingBox, DetectedItem, GallerySummary, ImageDetail, ImageWithItems};
use futures_channel::mpsc;
use futures_util::StreamExt;
use ui::core::panel::{FetchTicket, PanelPhase, PanelState, Resolution};
use ui::core::timing::PANEL_EXIT_MS;

fn summary(id: &str) -> GallerySummary {
    GallerySummary {
        base_image_url: format!("http://localhost/{id}.jpg"),
        thumbnail_url: format!("http://localhost/{id}_thumb.jpg"),
        width_px: 1920,
        height_px: 1080,
        thumbnail_width_px: 320,
        thumbnail_height_px: 180,
        image_id: id.to_string(),
        scores: None,
    }
}

fn detail_for(id: &str) -> ImageWithItems {
    ImageWithItems {
        image: ImageDetail {
            original_name: format!("{id}.jpg"),
            size_bytes: 2048,
            mime_type: "image/jpeg".into(),
            width_px: 1920,
            height_px: 1080,
            analysis_complete: true,
            score: None,
            analysis_text: Some(format!("analysis of {id}")),
        },
        items: vec![DetectedItem {
            item_id: format!("{id}-item"),
            image_id: id.to_string(),
            name: "horizon".into(),
            bounding_box: BoundingBox {
                y_min: 0.0,
                y_max: 1.0,
                x_min: 0.0,
                x_max: 1.0,
            },
            analysis_text: "level".into(),
            is_positive: true,
        }],
    }
}

/// Resolve `ticket` after `delay`, like a backend with that latency.
fn fake_fetch(
    tx: mpsc::UnboundedSender<(FetchTicket, ImageWithItems)>,
    ticket: FetchTicket,
    delay: Duration,
) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let detail = detail_for(&ticket.image_id);
        let _ = tx.unbounded_send((ticket, detail));
    });
}

#[tokio::test(start_paused = true)]
async fn slow_first_selection_never_overwrites_the_second() {
    let mut state = PanelState::default();
    let (tx, mut rx) = mpsc::unbounded();

    let first = state.open(summary("a")).expect("ticket for a");
    state.enter_loading();
    fake_fetch(tx.clone(), first, Duration::from_millis(500));

    let second = state.open(summary("b")).expect("ticket for b");
    state.enter_loading();
    fake_fetch(tx, second, Duration::from_millis(50));

    let mut outcomes = Vec::new();
    while let Some((ticket, detail)) = rx.next().await {
        let id = ticket.image_id.clone();
        outcomes.push((id, state.resolve(&ticket, Ok(detail))));
    }

    assert_eq!(
        outcomes,
        vec![
            ("b".to_string(), Resolution::Applied),
            ("a".to_string(), Resolution::Stale),
        ]
    );
    let view = state.view().expect("panel open");
    assert_eq!(view.summary.image_id, "b");
    assert_eq!(view.image.map(|i| i.original_name.as_str()), Some("b.jpg"));
    assert!(view.items.unwrap().iter().all(|item| item.image_id == "b"));
}

#[tokio::test(start_paused = true)]
async fn response_arriving_during_exit_is_dropped() {
    let mut state = PanelState::default();
    let (tx, mut rx) = mpsc::unbounded();

    let ticket = state.open(summary("a")).expect("ticket");
    state.enter_loading();
    fake_fetch(tx, ticket, Duration::from_millis(PANEL_EXIT_MS / 2));

    let exit = state.close().expect("closing");
    let (ticket, detail) = rx.next().await.expect("response");
    assert_eq!(state.resolve(&ticket, Ok(detail)), Resolution::Stale);

    tokio::time::sleep(Duration::from_millis(PANEL_EXIT_MS)).await;
    assert!(state.finish_close(exit));
    assert_eq!(state.phase(), PanelPhase::Closed);
    assert!(state.view().is_none());
}
