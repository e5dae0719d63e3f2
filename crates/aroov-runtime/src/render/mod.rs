//! Markup for the page regions.
//!
//! Renderers are pure: record in, [`maud::Markup`] out, with every
//! interpolated value escaped by `maud`. Anything that has to survive a round
//! trip through the markup (the record behind a card) goes into a
//! [`RecordTable`] instead of an attribute.

pub mod card;
pub mod overlay;
pub mod pagination;
pub mod placeholder;

pub use card::{
    CardAction, CardFragment, CardRenderer, CardState, CardVariant, GridFragment, RecordTable,
};
pub use overlay::{OverlayRenderer, group_button_id};
pub use pagination::render_pagination;
