use aroov_client::GatewayError;
use aroov_types::{DestinationRecord, Group, GroupId};
use std::cell::RefCell;
use tracing::{debug, warn};

use crate::context::PageContext;
use crate::document::{Anchor, ButtonState};
use crate::render::{CardVariant, OverlayRenderer, group_button_id, placeholder};
use crate::sequence::SequenceGuard;

pub const COPY_BUTTON: &str = "share-copy";
const COPY_LABEL: &str = "🔗 Copy Link";
const COPIED_LABEL: &str = "✅ Copied!";
const ADD_LABEL: &str = "Add +";
const ADD_PENDING_LABEL: &str = "...";
const ADDED_LABEL: &str = "Added ✅";

/// The record selected for sharing. Overwritten by each share action and
/// dropped when the overlay closes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareContext {
    pub record: DestinationRecord,
}

/// Which overlay is open. Holding the record in the variant keeps the two
/// overlays mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OverlayState {
    #[default]
    Closed,
    Detail(DestinationRecord),
    Share(ShareContext),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupsOutcome {
    Listed(Vec<Group>),
    NoGroups,
    SignedOut,
    Failed(GatewayError),
    /// The overlay closed or moved to another record before the list arrived.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added,
    Failed(GatewayError),
    /// No share overlay is open.
    NoContext,
    /// The overlay closed or moved to another record before the server
    /// answered; the buttons were left alone.
    Stale,
}

/// Detail and share overlays of a page.
pub struct OverlayManager {
    ctx: PageContext,
    renderer: OverlayRenderer,
    /// Reissued whenever the share overlay opens, closes or changes record.
    groups_guard: SequenceGuard,
    copy_feedback: SequenceGuard,
    state: RefCell<OverlayState>,
}

impl OverlayManager {
    pub fn new(ctx: PageContext, variant: CardVariant) -> Self {
        let renderer = OverlayRenderer::new(variant, ctx.ui.detail_placeholder_image.clone());
        Self {
            ctx,
            renderer,
            groups_guard: SequenceGuard::new(),
            copy_feedback: SequenceGuard::new(),
            state: RefCell::new(OverlayState::Closed),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state.borrow().clone()
    }

    pub fn share_context(&self) -> Option<ShareContext> {
        match &*self.state.borrow() {
            OverlayState::Share(context) => Some(context.clone()),
            _ => None,
        }
    }

    pub fn renderer(&self) -> &OverlayRenderer {
        &self.renderer
    }

    /// Show the detail overlay. Everything it shows is already in the record.
    pub fn open_detail(&self, record: &DestinationRecord) {
        let document = &self.ctx.document;
        self.groups_guard.invalidate();
        document.hide(Anchor::ShareModal);
        document.set_html(Anchor::DetailContent, self.renderer.detail(record));
        document.show(Anchor::DetailModal);
        *self.state.borrow_mut() = OverlayState::Detail(record.clone());
    }

    /// Show the share overlay for `record` and fill in the caller's groups.
    pub async fn open_share(&self, record: &DestinationRecord) -> GroupsOutcome {
        let document = &self.ctx.document;
        document.hide(Anchor::DetailModal);
        document.set_html(Anchor::ShareHeader, self.renderer.share_header(record));
        document.set_html(Anchor::ShareGroupList, placeholder::groups_loading());
        document.clear_buttons("add-group-");
        document.set_button(COPY_BUTTON, ButtonState::enabled(COPY_LABEL));
        document.show(Anchor::ShareModal);
        *self.state.borrow_mut() = OverlayState::Share(ShareContext {
            record: record.clone(),
        });

        let ticket = self.groups_guard.issue();
        let response = self.ctx.api.groups().await;
        if !self.groups_guard.is_current(ticket) {
            debug!(seq = ticket.seq(), "dropping stale groups response");
            return GroupsOutcome::Superseded;
        }

        match response {
            Ok(groups) if groups.is_empty() => {
                document.set_html(Anchor::ShareGroupList, placeholder::groups_empty());
                GroupsOutcome::NoGroups
            }
            Ok(groups) => {
                document.set_html(Anchor::ShareGroupList, self.renderer.group_list(&groups));
                for group in &groups {
                    document.set_button(
                        group_button_id(group.group_id),
                        ButtonState::enabled(ADD_LABEL),
                    );
                }
                GroupsOutcome::Listed(groups)
            }
            Err(err) if err.is_unauthorized() => {
                debug!("groups require sign-in");
                document.set_html(Anchor::ShareGroupList, placeholder::groups_sign_in());
                GroupsOutcome::SignedOut
            }
            Err(err) => {
                warn!(error = %err, "failed to load groups");
                document.set_html(Anchor::ShareGroupList, placeholder::groups_error());
                GroupsOutcome::Failed(err)
            }
        }
    }

    /// Share the record shown in the detail overlay.
    pub async fn share_from_detail(&self) -> Option<GroupsOutcome> {
        let record = match &*self.state.borrow() {
            OverlayState::Detail(record) => record.clone(),
            _ => return None,
        };
        Some(self.open_share(&record).await)
    }

    pub fn close(&self) {
        self.groups_guard.invalidate();
        self.ctx.document.hide(Anchor::DetailModal);
        self.ctx.document.hide(Anchor::ShareModal);
        *self.state.borrow_mut() = OverlayState::Closed;
    }

    /// A click that landed on `target`. Clicking the open overlay's own
    /// container (its backdrop) closes it; clicks inside the content do not.
    pub fn backdrop_click(&self, target: Anchor) -> bool {
        let open_container = match &*self.state.borrow() {
            OverlayState::Closed => None,
            OverlayState::Detail(_) => Some(Anchor::DetailModal),
            OverlayState::Share(_) => Some(Anchor::ShareModal),
        };
        if open_container == Some(target) {
            self.close();
            true
        } else {
            false
        }
    }

    pub async fn add_to_group(&self, group_id: GroupId) -> AddOutcome {
        let Some(context) = self.share_context() else {
            return AddOutcome::NoContext;
        };

        let document = &self.ctx.document;
        let button_id = group_button_id(group_id);
        let session = self.groups_guard.current();
        document.set_button(&button_id, ButtonState::busy(ADD_PENDING_LABEL));

        let response = self
            .ctx
            .api
            .recommend_to_group(group_id, &context.record.id)
            .await;
        if !self.groups_guard.is_current(session) {
            debug!(
                group_id,
                id = %context.record.id,
                ok = response.is_ok(),
                "share overlay changed before the group answered"
            );
            return AddOutcome::Stale;
        }

        match response {
            Ok(()) => {
                document.set_button(&button_id, ButtonState::done(ADDED_LABEL));
                AddOutcome::Added
            }
            Err(err) => {
                let message = if err.is_network() {
                    "Network error".to_string()
                } else {
                    format!("⚠️ {}", err.server_message().unwrap_or("Failed to add"))
                };
                self.ctx.host.alert(&message);
                document.set_button(&button_id, ButtonState::enabled(ADD_LABEL));
                AddOutcome::Failed(err)
            }
        }
    }

    pub fn share_link(&self, record: &DestinationRecord) -> String {
        format!(
            "{}/destination?id={}",
            self.ctx.ui.origin.trim_end_matches('/'),
            urlencoding::encode(record.id.as_str())
        )
    }

    /// Copy the share link and flash the copy button.
    pub async fn copy_link(&self) -> Option<String> {
        let context = self.share_context()?;
        let link = self.share_link(&context.record);
        if !self.ctx.host.copy_to_clipboard(&link) {
            warn!("clipboard unavailable");
            return None;
        }

        let document = &self.ctx.document;
        let ticket = self.copy_feedback.issue();
        document.set_button(COPY_BUTTON, ButtonState::done(COPIED_LABEL));
        tokio::time::sleep(self.ctx.ui.copied_feedback()).await;
        // A later copy restarts the feedback and restores the label itself.
        if self.copy_feedback.is_current(ticket) {
            document.set_button(COPY_BUTTON, ButtonState::enabled(COPY_LABEL));
        }
        Some(link)
    }

    pub fn email_link(&self, record: &DestinationRecord) -> String {
        let subject = format!("Trip Recommendation: {}", record.name);
        let body = format!(
            "Hey,\n\nI found this amazing place on Aroov Trip!\n\nDestination: {}\nState: {}\nEst. Cost: {}",
            record.name,
            record.state,
            record.price_range()
        );
        format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }

    /// Open the mail client with a prefilled recommendation.
    pub fn email_share(&self) -> Option<String> {
        let context = self.share_context()?;
        let link = self.email_link(&context.record);
        self.ctx.host.open_url(&link);
        Some(link)
    }
}
