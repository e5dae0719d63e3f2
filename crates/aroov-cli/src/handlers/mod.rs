mod context;

pub mod availability;
pub mod config;
pub mod explore;
pub mod favourites;
pub mod profile;
pub mod share;

pub use context::HandlerContext;
