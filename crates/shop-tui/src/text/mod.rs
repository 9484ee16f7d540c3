//! Text utilities.
//!
//! - [`truncate_to_width`] - unicode-aware truncation for card labels

mod width;

pub use width::truncate_to_width;
