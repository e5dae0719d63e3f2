use anyhow::{Result, bail};
use aroov_runtime::{Document, ProfileEditor, UniversityPicker};
use aroov_types::{UserProfile, split_tag_list};
use tracing::warn;

use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::StatusBadge;

fn present(
    ctx: &HandlerContext,
    editor: &ProfileEditor,
    profile: &UserProfile,
    badge: StatusBadge,
    page: &Document,
) -> Result<()> {
    let university = editor
        .picker()
        .selected()
        .and_then(|id| editor.picker().universities().into_iter().find(|u| u.id == id));
    let activities = split_tag_list(&editor.tags().value());

    let view_model = presenters::present_profile(
        profile,
        university.as_ref(),
        activities,
        editor.tags().available().to_vec(),
        badge,
    )
    .with_page(page.snapshot());
    ctx.render(view_model)
}

pub async fn show(ctx: &HandlerContext) -> Result<()> {
    let page = ctx.page(Document::profile_page())?;
    let document = page.document.clone();
    let editor = ProfileEditor::new(page);
    let profile = editor.load().await?;

    let badge = StatusBadge::info(profile.display_name());
    present(ctx, &editor, &profile, badge, &document)
}

pub async fn set(
    ctx: &HandlerContext,
    name: Option<String>,
    university: Option<i64>,
    activities: Option<String>,
) -> Result<()> {
    if name.is_none() && university.is_none() && activities.is_none() {
        bail!("Nothing to change; pass --name, --university or --activities");
    }

    let page = ctx.page(Document::profile_page())?;
    let document = page.document.clone();
    let editor = ProfileEditor::new(page);
    let mut profile = editor.load().await?;

    if let Some(name) = &name {
        editor.set_name(name);
    }
    if let Some(id) = university
        && editor.picker().select(id).is_none()
    {
        bail!("Unknown university {}; see `aroov universities`", id);
    }
    if let Some(activities) = &activities {
        let wanted = split_tag_list(activities);
        editor.tags().restore(&wanted);
        for tag in wanted.iter().filter(|tag| !editor.tags().is_selected(tag)) {
            warn!(tag = %tag, "not an offered activity, ignoring");
        }
    }

    // Alerts for failures come from the editor itself.
    let update = editor.save().await?;
    profile.name = Some(update.name.clone()).filter(|n| !n.is_empty());
    present(
        ctx,
        &editor,
        &profile,
        StatusBadge::success("Profile updated successfully!"),
        &document,
    )
}

pub async fn change_password(
    ctx: &HandlerContext,
    current: String,
    new: String,
    confirm: Option<String>,
) -> Result<()> {
    let confirm = confirm.unwrap_or_else(|| new.clone());
    let editor = ProfileEditor::new(ctx.page(Document::new())?);
    editor.change_password(&current, &new, &confirm).await?;
    ctx.render(presenters::present_message("Password updated successfully!"))
}

pub async fn universities(ctx: &HandlerContext, filter: Option<String>) -> Result<()> {
    let picker = UniversityPicker::new(ctx.page(Document::profile_page())?);
    picker.load().await?;

    let matches = match &filter {
        Some(text) => picker.search(text),
        None => picker.universities(),
    };
    ctx.render(presenters::present_universities(filter, &matches))
}
