use aroov_client::GatewayError;
use aroov_types::{DestinationId, DestinationPage, DestinationRecord, FilterPatch, ListQuery};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::context::PageContext;
use crate::document::Anchor;
use crate::render::{
    CardRenderer, CardState, CardVariant, RecordTable, placeholder, render_pagination,
};
use crate::sequence::SequenceGuard;

/// What happened to one load of a list region.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded { items: usize, total_pages: u32 },
    Empty,
    /// The request failed; the previous result is left in place.
    Failed(GatewayError),
    /// A newer request was issued while this one was in flight.
    Superseded,
    /// The request was refused locally and never sent.
    Rejected,
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. } | LoadOutcome::Empty)
    }
}

/// A list region whose cards carry a liked flag.
pub trait ToggleTarget {
    /// Current liked state of a rendered card, `None` if no such card exists.
    fn liked(&self, id: &DestinationId) -> Option<bool>;

    /// Change the liked state and redraw the card.
    fn set_liked(&self, id: &DestinationId, liked: bool);
}

#[derive(Debug, Default)]
struct ListState {
    query: ListQuery,
    result: Option<DestinationPage>,
    liked: HashMap<DestinationId, bool>,
    table: RecordTable,
    /// The last applied load failed and the grid shows the error placeholder.
    failed: bool,
}

/// Paginated, filterable destination grid.
///
/// Owns the `destGrid` and `pagination` regions. Every reload takes a ticket
/// from its [`SequenceGuard`]; a response whose ticket is no longer current is
/// dropped, so overlapping filter changes always settle on the last one.
pub struct ListController {
    ctx: PageContext,
    renderer: CardRenderer,
    guard: SequenceGuard,
    state: RefCell<ListState>,
}

impl ListController {
    pub fn new(ctx: PageContext) -> Self {
        let renderer =
            CardRenderer::new(CardVariant::Explore, ctx.ui.card_placeholder_image.clone());
        Self {
            ctx,
            renderer,
            guard: SequenceGuard::new(),
            state: RefCell::new(ListState::default()),
        }
    }

    pub fn query(&self) -> ListQuery {
        self.state.borrow().query.clone()
    }

    pub fn result(&self) -> Option<DestinationPage> {
        self.state.borrow().result.clone()
    }

    /// Pages of the last applied result; zero before the first load.
    pub fn page_count(&self) -> u32 {
        self.state
            .borrow()
            .result
            .as_ref()
            .map_or(0, DestinationPage::page_count)
    }

    /// Record behind a rendered card.
    pub fn record(&self, element_id: &str) -> Option<DestinationRecord> {
        self.state.borrow().table.rehydrate(element_id).cloned()
    }

    pub async fn set_filter(&self, patch: FilterPatch) -> LoadOutcome {
        self.state.borrow_mut().query.apply(patch);
        self.reload().await
    }

    /// Jump to page `page`. Pages outside `1..=page_count` are refused
    /// without a request.
    pub async fn set_page(&self, page: u32) -> LoadOutcome {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            debug!(page, page_count, "page out of range");
            return LoadOutcome::Rejected;
        }
        self.state.borrow_mut().query.set_page(page);
        self.reload().await
    }

    pub async fn reload(&self) -> LoadOutcome {
        let ticket = self.guard.issue();
        let query = self.query();
        let response = self.ctx.api.destinations(&query).await;

        if !self.guard.is_current(ticket) {
            debug!(seq = ticket.seq(), "dropping stale destinations response");
            return LoadOutcome::Superseded;
        }

        match response {
            Ok(page) => {
                let items = page.items.len();
                let total_pages = page.page_count();
                {
                    let mut state = self.state.borrow_mut();
                    state.liked = page
                        .items
                        .iter()
                        .map(|record| (record.id.clone(), record.is_liked()))
                        .collect();
                    state.result = Some(page);
                    state.failed = false;
                }
                self.redraw();
                if items == 0 {
                    LoadOutcome::Empty
                } else {
                    LoadOutcome::Loaded { items, total_pages }
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to load destinations");
                self.state.borrow_mut().failed = true;
                self.ctx
                    .document
                    .set_html(Anchor::DestGrid, placeholder::load_error());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Render the grid and pagination from the current state. While the last
    /// load has failed the error placeholder stays in place.
    pub fn redraw(&self) {
        let mut state = self.state.borrow_mut();
        if state.failed {
            return;
        }
        let Some(page) = state.result.as_ref() else {
            return;
        };

        let grid_markup;
        let table;
        if page.is_empty() {
            grid_markup = placeholder::no_results();
            table = RecordTable::new();
        } else {
            let grid = self.renderer.render_grid(page.items.iter().map(|record| {
                let liked = state.liked.get(&record.id).copied().unwrap_or(false);
                (record, CardState::liked(liked))
            }));
            grid_markup = grid.markup;
            table = grid.table;
        }
        let pagination = render_pagination(state.query.page(), page.page_count());
        state.table = table;
        drop(state);

        self.ctx.document.set_html(Anchor::DestGrid, grid_markup);
        self.ctx.document.set_html(Anchor::Pagination, pagination);
    }
}

impl ToggleTarget for ListController {
    fn liked(&self, id: &DestinationId) -> Option<bool> {
        self.state.borrow().liked.get(id).copied()
    }

    fn set_liked(&self, id: &DestinationId, liked: bool) {
        let known = {
            let mut state = self.state.borrow_mut();
            match state.liked.get_mut(id) {
                Some(slot) => {
                    *slot = liked;
                    true
                }
                None => false,
            }
        };
        if known {
            self.redraw();
        }
    }
}
