//! aroov-runtime: page controllers for the Aroov client.
//!
//! Controllers own regions of a headless [`Document`] and talk to the backend
//! through [`aroov_client::Api`]. Everything runs on one thread: shared state
//! lives in `RefCell`s, and no borrow is held across an `.await`, so a handler
//! suspended on the network never blocks another one.
//!
//! - [`ListController`]: filterable, paginated catalogue guarded by a
//!   [`SequenceGuard`] so only the latest query is shown
//! - [`FavouriteToggle`]: optimistic favourite flips with rollback
//! - [`FavouritesController`]: the saved-trips grid
//! - [`OverlayManager`]: exclusive detail/share overlays
//! - [`ProfileEditor`] and [`AvailabilityPlanner`]: the profile page

pub mod availability;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod favourites;
pub mod host;
pub mod list;
pub mod navbar;
pub mod overlay;
pub mod page;
pub mod profile;
pub mod render;
pub mod sequence;

pub use availability::AvailabilityPlanner;
pub use config::{ApiConfig, Config, UiConfig, resolve_config_dir};
pub use context::PageContext;
pub use document::{Anchor, ButtonState, ButtonTone, Document, DocumentSnapshot, Field, Region};
pub use error::{Error, Result};
pub use favourites::{FavouriteToggle, FavouritesController, RemoveOutcome, ToggleOutcome};
pub use host::Host;
pub use list::{ListController, LoadOutcome, ToggleTarget};
pub use navbar::{NavBar, Tab};
pub use overlay::{AddOutcome, GroupsOutcome, OverlayManager, OverlayState, ShareContext};
pub use page::{EventOutcome, ExplorePage, FavouritesPage, PageEvent};
pub use profile::{ActivityTags, ProfileEditor, UniversityPicker};
pub use sequence::{SequenceGuard, Ticket};
