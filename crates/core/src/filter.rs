//! List filtering and sorting for restaurant and rental listings.
//!
//! These run over lists that have already been loaded, the way a
//! spreadsheet filter would. Both filters are plain data so they can be
//! deserialized straight from query strings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::place_kind::{price_level, PlaceKind};

/// Read access to the fields the filters look at.
pub trait Listing {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// Database string form of the place kind.
    fn kind(&self) -> &str;
    fn price_range(&self) -> Option<&str>;
    fn cuisine(&self) -> Option<&str>;
    fn nightly_rate(&self) -> Option<f64>;
    fn bedrooms(&self) -> Option<i32>;
    fn max_guests(&self) -> Option<i32>;
    fn rating(&self) -> Option<f64>;
}

// ---------------------------------------------------------------------------
// Restaurants
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestaurantSort {
    #[default]
    Name,
    Rating,
    PriceAsc,
    PriceDesc,
}

/// Filter criteria for the restaurant list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantFilter {
    /// Exact price tag (`$`..`$$$$`).
    pub price_range: Option<String>,
    /// Cuisine, matched case-insensitively.
    pub cuisine: Option<String>,
    /// Free text matched against name, description and cuisine.
    pub q: Option<String>,
    #[serde(default, deserialize_with = "blank_as_default")]
    pub sort: RestaurantSort,
}

impl RestaurantFilter {
    pub fn matches<L: Listing>(&self, item: &L) -> bool {
        if item.kind() != PlaceKind::Restaurant.as_str() {
            return false;
        }
        if let Some(price) = non_empty(&self.price_range) {
            if item.price_range() != Some(price) {
                return false;
            }
        }
        if let Some(cuisine) = non_empty(&self.cuisine) {
            match item.cuisine() {
                Some(c) if c.eq_ignore_ascii_case(cuisine) => {}
                _ => return false,
            }
        }
        if let Some(q) = non_empty(&self.q) {
            let q = q.to_lowercase();
            let hit = contains_lower(item.name(), &q)
                || contains_lower(item.description(), &q)
                || item.cuisine().is_some_and(|c| contains_lower(c, &q));
            if !hit {
                return false;
            }
        }
        true
    }

    /// Keep the matching items and order them by the selected sort.
    pub fn apply<'a, L: Listing>(&self, items: &'a [L]) -> Vec<&'a L> {
        let mut out: Vec<&L> = items.iter().filter(|i| self.matches(*i)).collect();
        match self.sort {
            RestaurantSort::Name => out.sort_by(|a, b| by_name(*a, *b)),
            RestaurantSort::Rating => {
                out.sort_by(|a, b| desc_missing_last(a.rating(), b.rating()).then(by_name(*a, *b)))
            }
            RestaurantSort::PriceAsc => out.sort_by(|a, b| {
                asc_missing_last(price_of(*a), price_of(*b)).then(by_name(*a, *b))
            }),
            RestaurantSort::PriceDesc => out.sort_by(|a, b| {
                desc_missing_last(price_of(*a), price_of(*b)).then(by_name(*a, *b))
            }),
        }
        out
    }
}

fn price_of<L: Listing>(item: &L) -> Option<f64> {
    item.price_range()
        .and_then(price_level)
        .map(|level| level as f64)
}

// ---------------------------------------------------------------------------
// Rentals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalSort {
    #[default]
    PriceAsc,
    PriceDesc,
    Rating,
    Name,
}

/// Filter criteria for the rental (nightly lodging) list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RentalFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_bedrooms: Option<i32>,
    /// Party size the rental must accommodate.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub guests: Option<i32>,
    pub q: Option<String>,
    #[serde(default, deserialize_with = "blank_as_default")]
    pub sort: RentalSort,
}

impl RentalFilter {
    pub fn matches<L: Listing>(&self, item: &L) -> bool {
        let lodging = PlaceKind::from_str_db(item.kind()).is_ok_and(PlaceKind::is_lodging);
        let Some(rate) = item.nightly_rate().filter(|_| lodging) else {
            return false;
        };
        if self.min_price.is_some_and(|min| rate < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| rate > max) {
            return false;
        }
        if let Some(min) = self.min_bedrooms {
            if item.bedrooms().unwrap_or(0) < min {
                return false;
            }
        }
        if let Some(guests) = self.guests {
            // Unknown capacity is not excluded.
            if item.max_guests().is_some_and(|cap| cap < guests) {
                return false;
            }
        }
        if let Some(q) = non_empty(&self.q) {
            let q = q.to_lowercase();
            if !contains_lower(item.name(), &q) && !contains_lower(item.description(), &q) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a, L: Listing>(&self, items: &'a [L]) -> Vec<&'a L> {
        let mut out: Vec<&L> = items.iter().filter(|i| self.matches(*i)).collect();
        match self.sort {
            RentalSort::PriceAsc => out.sort_by(|a, b| {
                asc_missing_last(a.nightly_rate(), b.nightly_rate()).then(by_name(*a, *b))
            }),
            RentalSort::PriceDesc => out.sort_by(|a, b| {
                desc_missing_last(a.nightly_rate(), b.nightly_rate()).then(by_name(*a, *b))
            }),
            RentalSort::Rating => {
                out.sort_by(|a, b| desc_missing_last(a.rating(), b.rating()).then(by_name(*a, *b)))
            }
            RentalSort::Name => out.sort_by(|a, b| by_name(*a, *b)),
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Treat a blank query-string value (`?min_price=`) as absent.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// A blank select (`?sort=`) keeps the default order.
fn blank_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "" => Ok(T::default()),
        value => {
            let value: de::value::StrDeserializer<'_, D::Error> = value.into_deserializer();
            T::deserialize(value)
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn contains_lower(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn by_name<L: Listing>(a: &L, b: &L) -> Ordering {
    a.name().to_lowercase().cmp(&b.name().to_lowercase())
}

fn asc_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn desc_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
