//! Place kinds and price-range tags.
//!
//! The string forms must match the CHECK constraints on `places.kind` and
//! `places.price_range`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Place kind
// ---------------------------------------------------------------------------

/// The kind of a place. Used for display grouping and list filtering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    Restaurant,
    Hotel,
    Landmark,
    Beach,
    Shop,
    Event,
    Tour,
    Activity,
}

impl PlaceKind {
    /// Every kind, in display order.
    pub const ALL: [PlaceKind; 8] = [
        Self::Landmark,
        Self::Beach,
        Self::Restaurant,
        Self::Hotel,
        Self::Tour,
        Self::Activity,
        Self::Event,
        Self::Shop,
    ];

    /// Parse a kind string from the database or a query parameter.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "restaurant" => Ok(Self::Restaurant),
            "hotel" => Ok(Self::Hotel),
            "landmark" => Ok(Self::Landmark),
            "beach" => Ok(Self::Beach),
            "shop" => Ok(Self::Shop),
            "event" => Ok(Self::Event),
            "tour" => Ok(Self::Tour),
            "activity" => Ok(Self::Activity),
            _ => Err(CoreError::Validation(format!(
                "Invalid place kind '{s}'. Must be one of: restaurant, hotel, landmark, \
                 beach, shop, event, tour, activity"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Hotel => "hotel",
            Self::Landmark => "landmark",
            Self::Beach => "beach",
            Self::Shop => "shop",
            Self::Event => "event",
            Self::Tour => "tour",
            Self::Activity => "activity",
        }
    }

    /// Plural heading used on city pages.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurants",
            Self::Hotel => "Places to stay",
            Self::Landmark => "Landmarks",
            Self::Beach => "Beaches",
            Self::Shop => "Shops",
            Self::Event => "Events",
            Self::Tour => "Tours",
            Self::Activity => "Activities",
        }
    }

    /// Whether places of this kind can be booked by the night.
    pub fn is_lodging(self) -> bool {
        matches!(self, Self::Hotel)
    }
}

// ---------------------------------------------------------------------------
// Price range
// ---------------------------------------------------------------------------

/// Accepted price-range tags, cheapest first.
pub const PRICE_RANGES: [&str; 4] = ["$", "$$", "$$$", "$$$$"];

/// Validate a price-range tag (`$` through `$$$$`).
pub fn validate_price_range(tag: &str) -> Result<(), CoreError> {
    if PRICE_RANGES.contains(&tag) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid price range '{tag}'. Must be one of: $, $$, $$$, $$$$"
        )))
    }
}

/// Numeric level of a price tag (1 for `$`), or `None` for unknown tags.
pub fn price_level(tag: &str) -> Option<usize> {
    PRICE_RANGES.iter().position(|t| *t == tag).map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrip() {
        for kind in PlaceKind::ALL {
            assert_eq!(PlaceKind::from_str_db(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn kind_invalid() {
        assert!(PlaceKind::from_str_db("rental").is_err());
        assert!(PlaceKind::from_str_db("").is_err());
        assert!(PlaceKind::from_str_db("Hotel").is_err());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&PlaceKind::Landmark).unwrap();
        assert_eq!(json, "\"landmark\"");
    }

    #[test]
    fn only_hotels_are_lodging() {
        let lodging: Vec<_> = PlaceKind::ALL.into_iter().filter(|k| k.is_lodging()).collect();
        assert_eq!(lodging, vec![PlaceKind::Hotel]);
    }

    #[test]
    fn price_range_validation() {
        assert!(validate_price_range("$$").is_ok());
        assert!(validate_price_range("$$$$").is_ok());
        assert!(validate_price_range("$$$$$").is_err());
        assert!(validate_price_range("cheap").is_err());
    }

    #[test]
    fn price_levels() {
        assert_eq!(price_level("$"), Some(1));
        assert_eq!(price_level("$$$"), Some(3));
        assert_eq!(price_level("x"), None);
    }
}
