//! Border sets for Unicode and ASCII fallback.
//!
//! Supports `NO_COLOR` (via config) by using pure ASCII borders.

use ratatui::symbols::border;
use shop_core::IconPreference;

/// Character set used for borders and markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    #[default]
    Unicode,
    Ascii,
}

impl From<IconPreference> for IconMode {
    fn from(pref: IconPreference) -> Self {
        match pref {
            IconPreference::Unicode => Self::Unicode,
            IconPreference::Ascii => Self::Ascii,
        }
    }
}

const ASCII_NORMAL: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

const ASCII_FOCUSED: border::Set = border::Set {
    top_left: "#",
    top_right: "#",
    bottom_left: "#",
    bottom_right: "#",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "=",
    horizontal_bottom: "=",
};

/// Border set based on icon mode.
#[derive(Debug, Clone, Default)]
pub struct BorderSet {
    mode: IconMode,
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Normal borders - rounded for Unicode.
    pub fn normal(&self) -> border::Set {
        match self.mode {
            IconMode::Unicode => border::ROUNDED,
            IconMode::Ascii => ASCII_NORMAL,
        }
    }

    /// Focused borders - thick for Unicode.
    pub fn focused(&self) -> border::Set {
        match self.mode {
            IconMode::Unicode => border::THICK,
            IconMode::Ascii => ASCII_FOCUSED,
        }
    }

    /// Vertical divider between panes.
    pub fn divider(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "│",
            IconMode::Ascii => "|",
        }
    }

    /// Marker in front of the list entry under the keyboard cursor.
    pub fn cursor(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "›",
            IconMode::Ascii => ">",
        }
    }
}
