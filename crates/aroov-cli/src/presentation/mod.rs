//! # Presentation layer
//!
//! Handlers never print. They hand domain results to a presenter, which
//! builds a view model; the renderer then writes it out in the requested
//! format.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(json)==> serde_json
//!                                                                 ==(plain)==> [ View ] (Display)
//!                                                                 ==(html)===> [ DocumentView ]
//! ```
//!
//! - `view_models/`: raw data, `Serialize`. A price is two numbers, not
//!   `"RM20 - RM80"`; JSON output is the view model as is.
//! - `presenters/`: domain values to view models. Decides badges and tips.
//! - `views/`: `Display` layouts, colors and formatting.
//! - `renderers/`: picks JSON, text or the page HTML.
//! - `formatters/`: string helpers used by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
