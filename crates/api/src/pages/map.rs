//! `/map` and `/map/hit`: the clickable department map.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::response::{IntoResponse, Redirect, Response};
use ayiti_core::map::{self, VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use maud::{html, Markup};

use super::layout::page;
use super::{render, PageError};
use crate::query::MapPointParams;

/// SVG of every department, each region linking to its page.
pub fn map_svg() -> Markup {
    html! {
        svg class="map" xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {VIEWBOX_WIDTH} {VIEWBOX_HEIGHT}"))
            role="img" aria-label="Map of the departments of Haiti" {
            @for region in map::regions() {
                @let (lx, ly) = region.label_point();
                a href=(format!("/departments/{}", region.slug)) {
                    title { (region.name) " (" (region.capital) ")" }
                    path id=(format!("region-{}", region.slug)) d=(region.svg_path()) {}
                    text x=(format!("{lx:.0}")) y=(format!("{ly:.0}")) text-anchor="middle" {
                        (region.name)
                    }
                }
            }
        }
    }
}

/// GET /map
pub async fn map_page() -> impl IntoResponse {
    render(page(
        "Map",
        html! {
            h1 { "Explore by department" }
            (map_svg())
            ul class="department-index" {
                @for region in map::regions() {
                    li {
                        a href=(format!("/departments/{}", region.slug)) { (region.name) }
                        " · " (region.capital)
                    }
                }
            }
        },
    ))
}

/// GET /map/hit?x=&y=
///
/// Redirects to the department under the point, or the not-found page when
/// the point falls in the sea.
pub async fn hit(point: Result<Query<MapPointParams>, QueryRejection>) -> Response {
    let Query(point) = match point {
        Ok(point) => point,
        Err(rejection) => return PageError::from(rejection).into_response(),
    };
    match map::department_at(point.x, point.y) {
        Some(region) => {
            tracing::debug!(x = point.x, y = point.y, slug = region.slug, "Map hit");
            Redirect::to(&format!("/departments/{}", region.slug)).into_response()
        }
        None => PageError::NotFound.into_response(),
    }
}
