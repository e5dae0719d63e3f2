use anyhow::{Result, bail};
use aroov_runtime::{Document, ExplorePage, LoadOutcome, ToggleTarget};
use aroov_types::FilterPatch;

use super::HandlerContext;
use crate::presentation::presenters;

pub async fn handle(
    ctx: &HandlerContext,
    search: Option<String>,
    kind: Option<String>,
    max_price: Option<f64>,
    page: u32,
) -> Result<()> {
    let explore = ExplorePage::new(ctx.page(Document::explore_page())?);

    let mut patch = FilterPatch::new();
    if let Some(search) = search {
        patch = patch.search(search);
    }
    if kind.is_some() {
        patch = patch.kind(kind);
    }
    if max_price.is_some() {
        patch = patch.max_price(max_price);
    }

    let (profile, mut outcome) = explore.open(patch).await;
    if page > 1 && outcome.is_applied() {
        outcome = explore.list().set_page(page).await;
    }

    match outcome {
        LoadOutcome::Failed(err) => bail!("Could not load destinations: {}", err),
        LoadOutcome::Rejected => bail!(
            "Page {} is out of range; there are {} page(s)",
            page,
            explore.list().page_count()
        ),
        LoadOutcome::Loaded { .. } | LoadOutcome::Empty | LoadOutcome::Superseded => {}
    }

    let list = explore.list();
    let result = list.result().unwrap_or_default();
    let destinations = result
        .items
        .iter()
        .map(|record| {
            let liked = list.liked(&record.id).unwrap_or_else(|| record.is_liked());
            presenters::destination_entry(record, liked)
        })
        .collect();

    let user = profile.ok().map(|p| p.display_name().to_string());
    let view_model = presenters::present_destination_list(
        user,
        &list.query(),
        result.page_count(),
        destinations,
    )
    .with_page(explore.document().snapshot());
    ctx.render(view_model)
}
