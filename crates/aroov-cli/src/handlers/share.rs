use anyhow::{Result, bail};
use aroov_runtime::render::CardAction;
use aroov_runtime::{AddOutcome, Document, EventOutcome, ExplorePage, PageEvent, ToggleTarget};
use aroov_types::{DestinationId, GroupId};

use super::HandlerContext;
use crate::presentation::presenters;

pub struct ShareOptions {
    pub page: u32,
    pub group: Option<GroupId>,
    pub copy_link: bool,
    pub email: bool,
}

/// Open the share overlay for a destination on the given catalogue page, then
/// run whichever share actions were requested.
pub async fn handle(ctx: &HandlerContext, id: String, options: ShareOptions) -> Result<()> {
    let id = DestinationId::from(id);
    let explore = ExplorePage::new(ctx.page(Document::explore_page())?);

    let (_, mut outcome) = explore.load().await;
    if options.page > 1 && outcome.is_applied() {
        outcome = explore.list().set_page(options.page).await;
    }
    if !outcome.is_applied() {
        bail!("Could not load page {} of the catalogue", options.page);
    }

    let element_id = id.card_element_id();
    let Some(record) = explore.list().record(&element_id) else {
        bail!(
            "Destination {} is not on page {}; pass --page to look elsewhere",
            id,
            options.page
        );
    };

    let groups = match explore
        .dispatch(PageEvent::Card {
            action: CardAction::Share,
            element_id,
        })
        .await
    {
        EventOutcome::Share(groups) => groups,
        other => bail!("Share overlay did not open: {:?}", other),
    };

    let mut added_to = None;
    if let Some(group_id) = options.group {
        match explore.dispatch(PageEvent::AddToGroup(group_id)).await {
            EventOutcome::AddToGroup(AddOutcome::Added) => added_to = Some(group_id),
            // The host has already shown the server's reason.
            EventOutcome::AddToGroup(AddOutcome::Failed(err)) => {
                bail!("Could not add to group {}: {}", group_id, err)
            }
            other => bail!("Could not add to group {}: {:?}", group_id, other),
        }
    }

    let copied = options.copy_link
        && matches!(
            explore.dispatch(PageEvent::CopyLink).await,
            EventOutcome::LinkCopied(_)
        );
    let email = if options.email {
        match explore.dispatch(PageEvent::EmailShare).await {
            EventOutcome::EmailOpened(link) => Some(link),
            _ => None,
        }
    } else {
        None
    };

    let liked = explore.list().liked(&record.id).unwrap_or(false);
    let link = explore.overlay().share_link(&record);
    let view_model = presenters::present_share(
        presenters::destination_entry(&record, liked),
        link,
        &groups,
        added_to,
        copied,
        email,
    )
    .with_page(explore.document().snapshot());
    ctx.render(view_model)
}
