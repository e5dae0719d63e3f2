pub mod calendar;
pub mod common;
pub mod config;
pub mod destination;
pub mod profile;
pub mod result;
pub mod share;

pub use calendar::{
    AvailabilityAddedViewModel, AvailabilityListViewModel, AvailabilityRemovedViewModel,
    CalendarEventEntry,
};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigSetUrlViewModel, ConfigViewModel, GuidanceViewModel};
pub use destination::{
    DestinationEntry, DestinationListViewModel, FavouriteChangeViewModel, FavouritesViewModel,
};
pub use profile::{
    MessageViewModel, ProfileViewModel, UniversityEntry, UniversityListViewModel,
};
pub use result::CommandResultViewModel;
pub use share::{GroupEntry, GroupsStatus, ShareViewModel};
