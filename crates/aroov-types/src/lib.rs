pub mod calendar;
pub mod destination;
pub mod error;
pub mod group;
pub mod query;
pub mod user;
mod util;

pub use calendar::*;
pub use destination::*;
pub use error::{Error, Result};
pub use group::*;
pub use query::*;
pub use user::*;
pub use util::split_tag_list;
