use anyhow::Result;
use aroov_runtime::Config;

use super::HandlerContext;
use crate::presentation::presenters;

/// `config` is the effective configuration, overrides included.
pub fn show(ctx: &HandlerContext) -> Result<()> {
    let exists = ctx.config_path.exists();
    let view_model =
        presenters::present_config(ctx.config_path.clone(), exists, ctx.config.clone());
    ctx.render(view_model)
}

/// Writes the file as loaded from disk, so a one-off `--api-url` is not
/// persisted along with the change.
pub fn set_url(ctx: &HandlerContext, url: &str) -> Result<()> {
    let mut config = Config::load_from(&ctx.config_path)?;
    config.set_base_url(url)?;
    config.save_to(&ctx.config_path)?;

    let view_model =
        presenters::present_config_set_url(ctx.config_path.clone(), config.api.base_url);
    ctx.render(view_model)
}

pub fn guidance(ctx: &HandlerContext) -> Result<()> {
    let view_model = presenters::present_guidance(
        ctx.config_path.clone(),
        ctx.config_path.exists(),
        ctx.config.api.base_url.clone(),
    );
    ctx.render(view_model)
}
