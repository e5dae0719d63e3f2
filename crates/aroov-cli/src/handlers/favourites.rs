use anyhow::{Result, bail};
use aroov_runtime::{Document, FavouritesPage, LoadOutcome, RemoveOutcome};
use aroov_types::DestinationId;

use super::HandlerContext;
use crate::presentation::presenters;

async fn open(ctx: &HandlerContext) -> Result<FavouritesPage> {
    let page = FavouritesPage::new(ctx.page(Document::favourites_page())?);
    let (_, outcome) = page.load().await;
    if let LoadOutcome::Failed(err) = outcome {
        bail!("Could not load favourites: {}", err);
    }
    Ok(page)
}

pub async fn list(ctx: &HandlerContext) -> Result<()> {
    let page = open(ctx).await?;
    let destinations = page
        .favourites()
        .records()
        .iter()
        .map(|record| presenters::destination_entry(record, true))
        .collect();

    let view_model =
        presenters::present_favourites(destinations).with_page(page.document().snapshot());
    ctx.render(view_model)
}

pub async fn add(ctx: &HandlerContext, id: String) -> Result<()> {
    let id = DestinationId::from(id);
    let page = ctx.page(Document::new())?;
    page.api.add_favourite(&id).await?;
    ctx.render(presenters::present_favourite_change(id, true))
}

pub async fn remove(ctx: &HandlerContext, id: String) -> Result<()> {
    let id = DestinationId::from(id);
    let page = open(ctx).await?;

    match page.remove(&id).await {
        RemoveOutcome::Removed => {
            let view_model = presenters::present_favourite_change(id, false)
                .with_page(page.document().snapshot());
            ctx.render(view_model)
        }
        RemoveOutcome::Cancelled => bail!("Cancelled"),
        RemoveOutcome::NotRendered => bail!("Destination {} is not in your favourites", id),
        RemoveOutcome::InProgress => bail!("Destination {} is already being removed", id),
        RemoveOutcome::Failed(err) => bail!("Could not remove destination {}: {}", id, err),
    }
}
