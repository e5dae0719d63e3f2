use anyhow::{Result, bail};
use aroov_runtime::{AvailabilityPlanner, Document};
use aroov_types::DateRange;
use chrono::NaiveDate;

use super::HandlerContext;
use crate::presentation::presenters;

fn planner(ctx: &HandlerContext) -> Result<AvailabilityPlanner> {
    Ok(AvailabilityPlanner::new(ctx.page(Document::profile_page())?))
}

pub async fn list(ctx: &HandlerContext) -> Result<()> {
    let planner = planner(ctx)?;
    let events = planner.refresh().await?;
    ctx.render(presenters::present_availability_list(&events))
}

/// `end` is the last free day, as typed.
pub async fn add(
    ctx: &HandlerContext,
    start: NaiveDate,
    end: NaiveDate,
    note: String,
) -> Result<()> {
    let range = DateRange::inclusive(start, end)?;
    let planner = planner(ctx)?;

    planner.select_range(range);
    let request = planner.save(&note).await?;
    ctx.render(presenters::present_availability_added(range, &request))
}

pub async fn remove(ctx: &HandlerContext, id: String) -> Result<()> {
    let planner = planner(ctx)?;
    let events = planner.refresh().await?;
    let Some(event) = events.into_iter().find(|event| event.id == id) else {
        bail!("No calendar event with ID {}", id);
    };

    let removed = planner.remove(&event).await?;
    ctx.render(presenters::present_availability_removed(&event, removed))
}
