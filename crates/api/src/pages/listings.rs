//! `/restaurants` and `/rentals`: filterable lists across all cities.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use ayiti_core::filter::{RentalFilter, RentalSort, RestaurantFilter, RestaurantSort};
use ayiti_core::place_kind::{PlaceKind, PRICE_RANGES};
use ayiti_db::models::place::{Place, PlaceListFilter};
use ayiti_db::repositories::PlaceRepo;
use maud::{html, Markup};

use super::layout::{page, place_card};
use super::{render, PageResult};
use crate::state::AppState;

async fn load_kind(state: &AppState, kind: PlaceKind) -> Result<Vec<Place>, sqlx::Error> {
    let filter = PlaceListFilter {
        kind: Some(kind.as_str().to_string()),
        city_id: None,
    };
    PlaceRepo::list(&state.pool, &filter, true).await
}

fn results(items: &[&Place]) -> Markup {
    html! {
        p class="meta" { (items.len()) " result" @if items.len() != 1 { "s" } }
        @for place in items { (place_card(place)) }
    }
}

/// GET /restaurants
pub async fn restaurants(
    State(state): State<AppState>,
    filter: Result<Query<RestaurantFilter>, QueryRejection>,
) -> PageResult {
    let Query(filter) = filter?;
    let places = load_kind(&state, PlaceKind::Restaurant).await?;
    let matches = filter.apply(&places);

    let sorts = [
        (RestaurantSort::Name, "name", "Name"),
        (RestaurantSort::Rating, "rating", "Rating"),
        (RestaurantSort::PriceAsc, "price_asc", "Price: low to high"),
        (RestaurantSort::PriceDesc, "price_desc", "Price: high to low"),
    ];

    Ok(render(page(
        "Restaurants",
        html! {
            h1 { "Restaurants" }
            form class="filters" method="get" action="/restaurants" {
                label { "Price "
                    select name="price_range" {
                        option value="" { "Any" }
                        @for tag in PRICE_RANGES {
                            option value=(tag) selected[filter.price_range.as_deref() == Some(tag)] { (tag) }
                        }
                    }
                }
                label { "Cuisine " input type="text" name="cuisine" value=[filter.cuisine.as_deref()]; }
                label { "Search " input type="search" name="q" value=[filter.q.as_deref()]; }
                label { "Sort "
                    select name="sort" {
                        @for (sort, value, label) in sorts {
                            option value=(value) selected[filter.sort == sort] { (label) }
                        }
                    }
                }
                button type="submit" { "Filter" }
            }
            (results(&matches))
        },
    )))
}

/// GET /rentals
pub async fn rentals(
    State(state): State<AppState>,
    filter: Result<Query<RentalFilter>, QueryRejection>,
) -> PageResult {
    let Query(filter) = filter?;
    let places = load_kind(&state, PlaceKind::Hotel).await?;
    let matches = filter.apply(&places);

    let sorts = [
        (RentalSort::PriceAsc, "price_asc", "Price: low to high"),
        (RentalSort::PriceDesc, "price_desc", "Price: high to low"),
        (RentalSort::Rating, "rating", "Rating"),
        (RentalSort::Name, "name", "Name"),
    ];

    Ok(render(page(
        "Rentals",
        html! {
            h1 { "Places to stay" }
            form class="filters" method="get" action="/rentals" {
                label { "Min $ " input type="number" name="min_price" min="0" value=[filter.min_price]; }
                label { "Max $ " input type="number" name="max_price" min="0" value=[filter.max_price]; }
                label { "Bedrooms " input type="number" name="min_bedrooms" min="0" value=[filter.min_bedrooms]; }
                label { "Guests " input type="number" name="guests" min="1" value=[filter.guests]; }
                label { "Search " input type="search" name="q" value=[filter.q.as_deref()]; }
                label { "Sort "
                    select name="sort" {
                        @for (sort, value, label) in sorts {
                            option value=(value) selected[filter.sort == sort] { (label) }
                        }
                    }
                }
                button type="submit" { "Filter" }
            }
            (results(&matches))
        },
    )))
}
