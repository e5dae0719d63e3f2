use anyhow::Result;
use aroov_runtime::{Config, resolve_config_dir};
use tracing::debug;

use super::args::{
    AvailabilityCommand, Cli, Commands, ConfigCommand, FavouritesCommand, ProfileCommand,
};
use super::handlers::{self, HandlerContext};
use crate::logging;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let config_path = config_dir.join("config.toml");
    let mut config = Config::load_from(&config_path)?;
    if let Some(url) = &cli.api_url {
        config.set_base_url(url)?;
    }
    debug!(path = %config_path.display(), "loaded configuration");

    let ctx = HandlerContext::new(cli.format, config, config_path, cli.yes);

    let Some(command) = cli.command else {
        return handlers::config::guidance(&ctx);
    };

    // Controllers share state through `Rc`, so everything runs on this
    // thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(&ctx, command))
}

async fn dispatch(ctx: &HandlerContext, command: Commands) -> Result<()> {
    match command {
        Commands::Explore {
            search,
            kind,
            max_price,
            page,
        } => handlers::explore::handle(ctx, search, kind, max_price, page).await,

        Commands::Favourites { command } => match command {
            FavouritesCommand::List => handlers::favourites::list(ctx).await,
            FavouritesCommand::Add { id } => handlers::favourites::add(ctx, id).await,
            FavouritesCommand::Remove { id } => handlers::favourites::remove(ctx, id).await,
        },

        Commands::Share {
            id,
            page,
            group,
            copy_link,
            email,
        } => {
            let options = handlers::share::ShareOptions {
                page,
                group,
                copy_link,
                email,
            };
            handlers::share::handle(ctx, id, options).await
        }

        Commands::Profile { command } => match command {
            ProfileCommand::Show => handlers::profile::show(ctx).await,
            ProfileCommand::Set {
                name,
                university,
                activities,
            } => handlers::profile::set(ctx, name, university, activities).await,
        },

        Commands::Password {
            current,
            new,
            confirm,
        } => handlers::profile::change_password(ctx, current, new, confirm).await,

        Commands::Universities { filter } => handlers::profile::universities(ctx, filter).await,

        Commands::Availability { command } => match command {
            AvailabilityCommand::List => handlers::availability::list(ctx).await,
            AvailabilityCommand::Add { start, end, note } => {
                handlers::availability::add(ctx, start, end, note).await
            }
            AvailabilityCommand::Remove { id } => handlers::availability::remove(ctx, id).await,
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(ctx),
            ConfigCommand::SetUrl { url } => handlers::config::set_url(ctx, &url),
        },
    }
}
