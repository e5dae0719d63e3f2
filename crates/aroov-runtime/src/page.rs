//! Page assemblies: each page owns its controllers and routes user events to
//! them.

use aroov_client::GatewayError;
use aroov_types::{DestinationId, FilterPatch, GroupId, UserProfile};
use std::rc::Rc;
use tracing::debug;

use crate::context::PageContext;
use crate::document::{Anchor, Document};
use crate::favourites::{FavouriteToggle, FavouritesController, RemoveOutcome, ToggleOutcome};
use crate::list::{ListController, LoadOutcome};
use crate::navbar::NavBar;
use crate::overlay::{AddOutcome, GroupsOutcome, OverlayManager};
use crate::render::{CardAction, CardVariant};

/// A user interaction, as the page would receive it from an event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// A card button; `element_id` is the card's `data-card` value.
    Card {
        action: CardAction,
        element_id: String,
    },
    Filter(FilterPatch),
    Page(u32),
    /// A click whose target is `Anchor`.
    Click(Anchor),
    CloseOverlay,
    ShareFromDetail,
    AddToGroup(GroupId),
    CopyLink,
    EmailShare,
}

/// What handling one event did.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Load(LoadOutcome),
    Toggle(ToggleOutcome),
    Remove(RemoveOutcome),
    DetailOpened,
    Share(GroupsOutcome),
    AddToGroup(AddOutcome),
    LinkCopied(String),
    EmailOpened(String),
    Closed,
    /// The event did not apply to the page's current state.
    Ignored,
}

/// The explore page: filterable catalogue, favourite toggles and both
/// overlays.
pub struct ExplorePage {
    ctx: PageContext,
    nav: NavBar,
    list: Rc<ListController>,
    toggle: FavouriteToggle<ListController>,
    overlay: OverlayManager,
}

impl ExplorePage {
    pub fn new(ctx: PageContext) -> Self {
        let list = Rc::new(ListController::new(ctx.clone()));
        Self {
            nav: NavBar::new(ctx.clone()),
            toggle: FavouriteToggle::new(ctx.api.clone(), Rc::clone(&list)),
            overlay: OverlayManager::new(ctx.clone(), CardVariant::Explore),
            list,
            ctx,
        }
    }

    pub fn document(&self) -> &Document {
        &self.ctx.document
    }

    pub fn list(&self) -> &ListController {
        &self.list
    }

    pub fn overlay(&self) -> &OverlayManager {
        &self.overlay
    }

    /// Initial load: the navigation bar and the first page run side by side.
    pub async fn load(&self) -> (Result<UserProfile, GatewayError>, LoadOutcome) {
        tokio::join!(self.nav.load(), self.list.reload())
    }

    /// Initial load with filters already applied, as from a bookmarked
    /// search.
    pub async fn open(
        &self,
        patch: FilterPatch,
    ) -> (Result<UserProfile, GatewayError>, LoadOutcome) {
        tokio::join!(self.nav.load(), self.list.set_filter(patch))
    }

    pub async fn dispatch(&self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::Filter(patch) => EventOutcome::Load(self.list.set_filter(patch).await),
            PageEvent::Page(page) => EventOutcome::Load(self.list.set_page(page).await),
            PageEvent::Card { action, element_id } => {
                let Some(record) = self.list.record(&element_id) else {
                    debug!(element_id = %element_id, "event for a card that is not rendered");
                    return EventOutcome::Ignored;
                };
                match action {
                    CardAction::Details => {
                        self.overlay.open_detail(&record);
                        EventOutcome::DetailOpened
                    }
                    CardAction::Share => EventOutcome::Share(self.overlay.open_share(&record).await),
                    CardAction::Favourite => {
                        EventOutcome::Toggle(self.toggle.toggle(&record.id).await)
                    }
                    CardAction::Remove => EventOutcome::Ignored,
                }
            }
            PageEvent::Click(target) => {
                if self.overlay.backdrop_click(target) {
                    EventOutcome::Closed
                } else {
                    EventOutcome::Ignored
                }
            }
            PageEvent::CloseOverlay => {
                self.overlay.close();
                EventOutcome::Closed
            }
            PageEvent::ShareFromDetail => match self.overlay.share_from_detail().await {
                Some(outcome) => EventOutcome::Share(outcome),
                None => EventOutcome::Ignored,
            },
            PageEvent::AddToGroup(group_id) => {
                EventOutcome::AddToGroup(self.overlay.add_to_group(group_id).await)
            }
            PageEvent::CopyLink => match self.overlay.copy_link().await {
                Some(link) => EventOutcome::LinkCopied(link),
                None => EventOutcome::Ignored,
            },
            PageEvent::EmailShare => match self.overlay.email_share() {
                Some(link) => EventOutcome::EmailOpened(link),
                None => EventOutcome::Ignored,
            },
        }
    }
}

/// The favourites page: saved trips, removal and the detail overlay.
pub struct FavouritesPage {
    ctx: PageContext,
    nav: NavBar,
    favourites: FavouritesController,
    overlay: OverlayManager,
}

impl FavouritesPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            nav: NavBar::new(ctx.clone()),
            favourites: FavouritesController::new(ctx.clone()),
            overlay: OverlayManager::new(ctx.clone(), CardVariant::Favourite),
            ctx,
        }
    }

    pub fn document(&self) -> &Document {
        &self.ctx.document
    }

    pub fn favourites(&self) -> &FavouritesController {
        &self.favourites
    }

    pub fn overlay(&self) -> &OverlayManager {
        &self.overlay
    }

    pub async fn load(&self) -> (Result<UserProfile, GatewayError>, LoadOutcome) {
        tokio::join!(self.nav.load(), self.favourites.load())
    }

    pub async fn remove(&self, id: &DestinationId) -> RemoveOutcome {
        let outcome = self.favourites.remove(id).await;
        if outcome == RemoveOutcome::Removed {
            self.overlay.close();
        }
        outcome
    }

    pub async fn dispatch(&self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::Card { action, element_id } => {
                let Some(record) = self.favourites.record(&element_id) else {
                    debug!(element_id = %element_id, "event for a card that is not rendered");
                    return EventOutcome::Ignored;
                };
                match action {
                    CardAction::Details => {
                        self.overlay.open_detail(&record);
                        EventOutcome::DetailOpened
                    }
                    CardAction::Remove | CardAction::Favourite => {
                        EventOutcome::Remove(self.remove(&record.id).await)
                    }
                    CardAction::Share => {
                        // No share overlay on this page: copy the link directly.
                        let link = self.overlay.share_link(&record);
                        if self.ctx.host.copy_to_clipboard(&link) {
                            self.ctx
                                .host
                                .alert(&format!("Link for {} copied to clipboard!", record.name));
                            EventOutcome::LinkCopied(link)
                        } else {
                            EventOutcome::Ignored
                        }
                    }
                }
            }
            PageEvent::Click(target) => {
                if self.overlay.backdrop_click(target) {
                    EventOutcome::Closed
                } else {
                    EventOutcome::Ignored
                }
            }
            PageEvent::CloseOverlay => {
                self.overlay.close();
                EventOutcome::Closed
            }
            PageEvent::Filter(_)
            | PageEvent::Page(_)
            | PageEvent::ShareFromDetail
            | PageEvent::AddToGroup(_)
            | PageEvent::CopyLink
            | PageEvent::EmailShare => EventOutcome::Ignored,
        }
    }
}
