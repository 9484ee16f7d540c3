//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha/Latte/High Contrast)
//! - [`BorderSet`] - Border and marker characters with Unicode/ASCII modes

mod borders;
mod colors;

pub use borders::{BorderSet, IconMode};
pub use colors::Theme;
