//! Page Models
//!
//! Small value types read from or written to the server-rendered markup.

use serde::{Deserialize, Serialize};

/// Ordering requested for the marketplace grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ascending price
    PriceLow,
    /// Descending price
    PriceHigh,
    /// Descending listing date
    #[default]
    Newest,
}

impl SortMode {
    /// Anything unrecognized sorts by newest first.
    pub fn parse(value: &str) -> Self {
        match value {
            "price_low" => SortMode::PriceLow,
            "price_high" => SortMode::PriceHigh,
            _ => SortMode::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::PriceLow => "price_low",
            SortMode::PriceHigh => "price_high",
            SortMode::Newest => "newest",
        }
    }
}

/// Sort keys of one `.marketplace-item` (`data-price`, `data-date`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListingKeys {
    pub price: f64,
    /// Listing timestamp
    pub date: f64,
}

/// Color tier of the description character counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CounterTier {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl CounterTier {
    pub const ALL: [CounterTier; 3] = [CounterTier::Normal, CounterTier::Warning, CounterTier::Danger];

    /// State class on `.char-count`; the stylesheet maps it to a color
    pub fn class(&self) -> Option<&'static str> {
        match self {
            CounterTier::Normal => None,
            CounterTier::Warning => Some("char-count--warning"),
            CounterTier::Danger => Some("char-count--danger"),
        }
    }
}

/// Visibility of the mobile navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Open,
    Closed,
}

impl MenuState {
    /// Class on `#navMenu` while open
    pub const OPEN_CLASS: &'static str = "active";

    pub fn from_open(open: bool) -> Self {
        if open { MenuState::Open } else { MenuState::Closed }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(&self) -> Self {
        Self::from_open(!self.is_open())
    }
}

/// Visual state of a favorite button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    Favorited,
    Unfavorited,
}

impl FavoriteState {
    pub const CLASS: &'static str = "favorited";

    pub fn from_favorited(favorited: bool) -> Self {
        if favorited { FavoriteState::Favorited } else { FavoriteState::Unfavorited }
    }

    pub fn is_favorited(&self) -> bool {
        matches!(self, FavoriteState::Favorited)
    }

    pub fn toggled(&self) -> Self {
        Self::from_favorited(!self.is_favorited())
    }

    /// Font Awesome classes for the heart icon
    pub fn icon_class(&self) -> &'static str {
        match self {
            FavoriteState::Favorited => "fas fa-heart",
            FavoriteState::Unfavorited => "far fa-heart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!(SortMode::parse("price_low"), SortMode::PriceLow);
        assert_eq!(SortMode::parse("price_high"), SortMode::PriceHigh);
        assert_eq!(SortMode::parse("newest"), SortMode::Newest);
        assert_eq!(SortMode::parse(""), SortMode::Newest);
        assert_eq!(SortMode::parse("PRICE_LOW"), SortMode::Newest);
        assert_eq!(SortMode::parse(SortMode::PriceHigh.as_str()), SortMode::PriceHigh);
    }

    #[test]
    fn test_sort_mode_serde_names() {
        let mode: SortMode = serde_json::from_str("\"price_low\"").unwrap();
        assert_eq!(mode, SortMode::PriceLow);
        assert_eq!(serde_json::to_string(&SortMode::Newest).unwrap(), "\"newest\"");
    }

    #[test]
    fn test_favorite_double_toggle_is_identity() {
        for state in [FavoriteState::Favorited, FavoriteState::Unfavorited] {
            assert_ne!(state.toggled(), state);
            assert_eq!(state.toggled().toggled(), state);
        }
        assert_eq!(FavoriteState::Favorited.icon_class(), "fas fa-heart");
        assert_eq!(FavoriteState::Unfavorited.icon_class(), "far fa-heart");
    }

    #[test]
    fn test_menu_toggle() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    }

    proptest! {
        #[test]
        fn prop_menu_toggle_parity(start in any::<bool>(), clicks in 0usize..64) {
            let start = MenuState::from_open(start);
            let end = (0..clicks).fold(start, |state, _| state.toggled());
            prop_assert_eq!(end == start, clicks % 2 == 0);
        }

        #[test]
        fn prop_favorite_toggle_parity(start in any::<bool>(), clicks in 0usize..64) {
            let start = FavoriteState::from_favorited(start);
            let end = (0..clicks).fold(start, |state, _| state.toggled());
            prop_assert_eq!(end == start, clicks % 2 == 0);
            prop_assert_eq!(end.icon_class() == start.icon_class(), clicks % 2 == 0);
        }
    }

    #[test]
    fn test_counter_tier_classes() {
        assert_eq!(CounterTier::Normal.class(), None);
        assert_eq!(CounterTier::Warning.class(), Some("char-count--warning"));
        assert_eq!(CounterTier::Danger.class(), Some("char-count--danger"));
    }
}
