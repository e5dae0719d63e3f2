mod calendar;
mod config;
mod destination;
mod profile;
mod share;

pub use calendar::{
    present_availability_added, present_availability_list, present_availability_removed,
};
pub use config::{present_config, present_config_set_url, present_guidance};
pub use destination::{
    destination_entry, present_destination_list, present_favourite_change, present_favourites,
};
pub use profile::{present_message, present_profile, present_universities};
pub use share::present_share;
