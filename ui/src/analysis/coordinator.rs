use std::cell::RefCell;
use std::rc::Rc;

use api::{ApiError, BackendClient, GallerySummary, ImageWithItems};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tracing::{debug, info};

use crate::core::panel::{FetchTicket, PanelState, Resolution};
use crate::core::timing;

/// Everything that can change the analysis panel.
#[derive(Debug)]
pub enum PanelEvent {
    Open(GallerySummary),
    Close,
    DetailResolved {
        ticket: FetchTicket,
        result: Result<ImageWithItems, ApiError>,
    },
    ExitFinished {
        generation: u64,
    },
}

type SenderSlot = Rc<RefCell<Option<UnboundedSender<PanelEvent>>>>;

/// Drive `panel` from a single event loop. Fetches and the exit timer run as
/// separate tasks and report back through the same channel.
pub fn use_panel_coordinator(panel: Signal<PanelState>) -> Coroutine<PanelEvent> {
    let client = use_context::<BackendClient>();
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<PanelEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let client = client.clone();
        let mut panel = panel;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    PanelEvent::Open(summary) => {
                        let ticket = panel.with_mut(|state| {
                            let ticket = state.open(summary);
                            state.enter_loading();
                            ticket
                        });
                        if let Some(ticket) = ticket {
                            info!(image_id = %ticket.image_id, generation = ticket.generation, "loading image detail");
                            queue_fetch(sender_slot.clone(), client.clone(), ticket);
                        }
                    }
                    PanelEvent::Close => {
                        if let Some(generation) = panel.with_mut(|state| state.close()) {
                            queue_exit(sender_slot.clone(), generation);
                        }
                    }
                    PanelEvent::DetailResolved { ticket, result } => {
                        let resolution = panel.with_mut(|state| state.resolve(&ticket, result));
                        if resolution == Resolution::Stale {
                            debug!(image_id = %ticket.image_id, "late detail response ignored");
                        }
                    }
                    PanelEvent::ExitFinished { generation } => {
                        panel.with_mut(|state| state.finish_close(generation));
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());
    coroutine
}

fn queue_fetch(sender_slot: SenderSlot, client: BackendClient, ticket: FetchTicket) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        spawn(async move {
            let result = client.image_detail(&ticket.image_id).await;
            let _ = sender.unbounded_send(PanelEvent::DetailResolved { ticket, result });
        });
    }
}

fn queue_exit(sender_slot: SenderSlot, generation: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        spawn(async move {
            timing::sleep_ms(timing::PANEL_EXIT_MS).await;
            let _ = sender.unbounded_send(PanelEvent::ExitFinished { generation });
        });
    }
}
