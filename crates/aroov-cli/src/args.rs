use crate::types::{LogLevel, OutputFormat};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aroov")]
#[command(about = "Browse and share Aroov Trip destinations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (defaults to $AROOV_PATH, then the XDG config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Backend URL for this invocation, overriding the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List destinations
    Explore {
        #[arg(long)]
        search: Option<String>,

        /// Destination type, e.g. Island or Culture
        #[arg(long = "type")]
        kind: Option<String>,

        /// Upper bound on the estimated cost (RM)
        #[arg(long)]
        max_price: Option<f64>,

        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Saved trips
    Favourites {
        #[command(subcommand)]
        command: FavouritesCommand,
    },

    /// Recommend a destination to a group, or get its share link
    Share {
        /// Destination ID
        id: String,

        /// Catalogue page the destination is listed on
        #[arg(long, default_value = "1")]
        page: u32,

        /// Add the destination to this group's recommendations
        #[arg(long)]
        group: Option<i64>,

        #[arg(long)]
        copy_link: bool,

        /// Print a mailto: link with a prepared message
        #[arg(long)]
        email: bool,
    },

    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Change the account password
    Password {
        #[arg(long)]
        current: String,

        #[arg(long)]
        new: String,

        /// Repeat of --new; defaults to it
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Search the university list
    Universities {
        #[arg(long)]
        filter: Option<String>,
    },

    /// Free dates shown to travel groups
    Availability {
        #[command(subcommand)]
        command: AvailabilityCommand,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum FavouritesCommand {
    List,

    Add {
        /// Destination ID
        id: String,
    },

    Remove {
        /// Destination ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    Show,

    Set {
        #[arg(long)]
        name: Option<String>,

        /// University ID (see `aroov universities`)
        #[arg(long)]
        university: Option<i64>,

        /// Comma-separated activity tags
        #[arg(long)]
        activities: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum AvailabilityCommand {
    List,

    Add {
        /// First free day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last free day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        #[arg(long, default_value = "")]
        note: String,
    },

    Remove {
        /// Event ID from `aroov availability list`
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    Show,

    /// Point the client at another backend
    SetUrl { url: String },
}
