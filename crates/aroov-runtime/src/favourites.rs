use aroov_client::{Api, GatewayError};
use aroov_types::{DestinationId, DestinationRecord};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, warn};

use crate::context::PageContext;
use crate::document::Anchor;
use crate::list::{LoadOutcome, ToggleTarget};
use crate::render::{CardRenderer, CardState, CardVariant, RecordTable, placeholder};
use crate::sequence::SequenceGuard;

const REMOVE_CONFIRM: &str = "Remove this trip from your favourites?";
const REMOVE_FAILED: &str = "⚠️ Could not remove. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The server agrees with what the card shows.
    Confirmed { liked: bool },
    /// A request failed; the card shows the last state the server confirmed.
    RolledBack { liked: bool },
    /// Another request for this card is in flight and will carry this intent.
    Queued,
    /// No such card is rendered.
    NotRendered,
}

/// Optimistic favourite toggling for the cards of one list.
///
/// The card flips before the request is sent. Requests for one destination are
/// serialized: clicks that land while a request is in flight only change the
/// card, and the in-flight loop sends whatever the card shows once the
/// current request completes. On failure the card reverts to the last
/// server-confirmed state without any alert.
pub struct FavouriteToggle<T: ToggleTarget> {
    api: Api,
    target: Rc<T>,
    pending: RefCell<HashSet<DestinationId>>,
}

impl<T: ToggleTarget> FavouriteToggle<T> {
    pub fn new(api: Api, target: Rc<T>) -> Self {
        Self {
            api,
            target,
            pending: RefCell::new(HashSet::new()),
        }
    }

    pub fn is_pending(&self, id: &DestinationId) -> bool {
        self.pending.borrow().contains(id)
    }

    pub async fn toggle(&self, id: &DestinationId) -> ToggleOutcome {
        let Some(current) = self.target.liked(id) else {
            return ToggleOutcome::NotRendered;
        };
        self.target.set_liked(id, !current);

        if !self.pending.borrow_mut().insert(id.clone()) {
            return ToggleOutcome::Queued;
        }

        let mut confirmed = current;
        let outcome = loop {
            let Some(wanted) = self.target.liked(id) else {
                break ToggleOutcome::NotRendered;
            };
            if wanted == confirmed {
                break ToggleOutcome::Confirmed { liked: confirmed };
            }

            match self.api.set_favourite(id, wanted).await {
                Ok(()) => confirmed = wanted,
                Err(err) => {
                    debug!(id = %id, error = %err, "favourite toggle failed, reverting");
                    self.target.set_liked(id, confirmed);
                    break ToggleOutcome::RolledBack { liked: confirmed };
                }
            }
        };

        self.pending.borrow_mut().remove(id);
        outcome
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed,
    /// The user declined the confirmation.
    Cancelled,
    Failed(GatewayError),
    NotRendered,
    /// A removal of this card is already under way.
    InProgress,
}

#[derive(Debug, Default)]
struct FavouritesState {
    records: Vec<DestinationRecord>,
    removing: HashSet<DestinationId>,
    /// DELETE sent, response not yet in.
    deleting: HashSet<DestinationId>,
    table: RecordTable,
    loaded: bool,
}

/// The saved-trips grid (`favGrid`).
pub struct FavouritesController {
    ctx: PageContext,
    renderer: CardRenderer,
    guard: SequenceGuard,
    state: RefCell<FavouritesState>,
}

impl FavouritesController {
    pub fn new(ctx: PageContext) -> Self {
        let renderer =
            CardRenderer::new(CardVariant::Favourite, ctx.ui.card_placeholder_image.clone());
        Self {
            ctx,
            renderer,
            guard: SequenceGuard::new(),
            state: RefCell::new(FavouritesState::default()),
        }
    }

    pub fn records(&self) -> Vec<DestinationRecord> {
        self.state.borrow().records.clone()
    }

    pub fn record(&self, element_id: &str) -> Option<DestinationRecord> {
        self.state.borrow().table.rehydrate(element_id).cloned()
    }

    pub async fn load(&self) -> LoadOutcome {
        let ticket = self.guard.issue();
        let response = self.ctx.api.favourites().await;

        if !self.guard.is_current(ticket) {
            debug!(seq = ticket.seq(), "dropping stale favourites response");
            return LoadOutcome::Superseded;
        }

        match response {
            Ok(records) => {
                let items = records.len();
                {
                    let mut state = self.state.borrow_mut();
                    state.records = records;
                    state.removing.clear();
                    state.loaded = true;
                }
                self.redraw();
                if items == 0 {
                    LoadOutcome::Empty
                } else {
                    LoadOutcome::Loaded {
                        items,
                        total_pages: 1,
                    }
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to load favourites");
                self.ctx
                    .document
                    .set_html(Anchor::FavGrid, placeholder::favourites_error());
                LoadOutcome::Failed(err)
            }
        }
    }

    pub fn redraw(&self) {
        let mut state = self.state.borrow_mut();
        if !state.loaded {
            return;
        }

        let (markup, table) = if state.records.is_empty() {
            (placeholder::favourites_empty(), RecordTable::new())
        } else {
            let grid = self.renderer.render_grid(state.records.iter().map(|record| {
                let card = CardState {
                    liked: true,
                    removing: state.removing.contains(&record.id),
                };
                (record, card)
            }));
            (grid.markup, grid.table)
        };
        state.table = table;
        drop(state);

        self.ctx.document.set_html(Anchor::FavGrid, markup);
    }

    /// Remove a saved trip after confirmation.
    ///
    /// On success the card is marked as removing for the removal delay, then
    /// dropped; removing the last card reloads so the empty state comes from
    /// the server's view.
    pub async fn remove(&self, id: &DestinationId) -> RemoveOutcome {
        {
            let state = self.state.borrow();
            if !state.records.iter().any(|record| &record.id == id) {
                return RemoveOutcome::NotRendered;
            }
            if state.deleting.contains(id) || state.removing.contains(id) {
                debug!(id = %id, "removal already in progress");
                return RemoveOutcome::InProgress;
            }
        }

        if !self.ctx.host.confirm(REMOVE_CONFIRM) {
            return RemoveOutcome::Cancelled;
        }
        self.state.borrow_mut().deleting.insert(id.clone());

        let response = self.ctx.api.remove_favourite(id).await;
        self.state.borrow_mut().deleting.remove(id);
        if let Err(err) = response {
            if err.is_network() {
                warn!(id = %id, error = %err, "could not reach server to remove favourite");
            } else {
                self.ctx.host.alert(REMOVE_FAILED);
            }
            return RemoveOutcome::Failed(err);
        }

        self.state.borrow_mut().removing.insert(id.clone());
        self.redraw();

        tokio::time::sleep(self.ctx.ui.removal_delay()).await;

        let now_empty = {
            let mut state = self.state.borrow_mut();
            state.records.retain(|record| &record.id != id);
            state.removing.remove(id);
            state.records.is_empty()
        };
        self.redraw();

        if now_empty {
            self.load().await;
        }
        RemoveOutcome::Removed
    }
}
