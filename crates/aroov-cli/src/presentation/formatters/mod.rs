pub mod text;

pub use text::{price_label, truncate};
