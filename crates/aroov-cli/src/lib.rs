//! The `aroov` command-line client.
//!
//! Each command drives the same page controllers a browser would, against a
//! headless document, then reports what happened through the presentation
//! layer (plain text, JSON, or the rendered page HTML).

mod args;
mod commands;
mod handlers;
pub mod host;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{
    AvailabilityCommand, Cli, Commands, ConfigCommand, FavouritesCommand, ProfileCommand,
};
pub use commands::run;
pub use host::ConsoleHost;
