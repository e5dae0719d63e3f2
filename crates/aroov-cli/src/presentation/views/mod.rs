mod calendar;
mod config;
mod destination;
mod document;
mod profile;
mod share;

pub use calendar::{AvailabilityAddedView, AvailabilityListView, AvailabilityRemovedView};
pub use config::{ConfigSetUrlView, ConfigView, GuidanceView};
pub use destination::{DestinationListView, FavouriteChangeView, FavouritesView};
pub use document::DocumentView;
pub use profile::{ProfileView, UniversityListView};
pub use share::ShareView;
