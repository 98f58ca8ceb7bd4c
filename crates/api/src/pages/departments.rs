//! Department and city pages.

use axum::extract::{Path, State};
use ayiti_core::figure::lifespan;
use ayiti_core::place_kind::PlaceKind;
use ayiti_db::repositories::{CityRepo, DepartmentRepo, FigureRepo, PlaceRepo};
use ayiti_db::safe_db_operation;
use maud::html;

use super::layout::{breadcrumbs, page, place_card};
use super::{published, render, PageResult};
use crate::state::AppState;

/// GET /departments/{slug}
pub async fn department_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> PageResult {
    let department = published(
        DepartmentRepo::find_by_slug(&state.pool, &slug).await?,
        |d| d.is_published,
    )?;
    let cities = CityRepo::list_by_department(&state.pool, department.id, true).await?;

    Ok(render(page(
        &department.name,
        html! {
            (breadcrumbs(&[("Home", "/".into()), (department.name.as_str(), String::new())]))
            h1 { (department.name) }
            @if let Some(capital) = &department.capital {
                p class="meta" { "Capital: " (capital) }
            }
            @if let Some(image) = &department.hero_image {
                img class="hero" src=(image) alt=(department.name);
            }
            p { (department.intro) }
            h2 { "Cities" }
            @if cities.is_empty() {
                p { "No cities have been published here yet." }
            } @else {
                ul {
                    @for city in &cities {
                        li {
                            a href=(format!("/departments/{}/{}", department.slug, city.slug)) {
                                (city.name)
                            }
                        }
                    }
                }
            }
        },
    )))
}

/// GET /departments/{dept}/{city}
///
/// Places are grouped under one heading per kind.
pub async fn city_page(
    State(state): State<AppState>,
    Path((dept_slug, city_slug)): Path<(String, String)>,
) -> PageResult {
    let department = published(
        DepartmentRepo::find_by_slug(&state.pool, &dept_slug).await?,
        |d| d.is_published,
    )?;
    let city = published(
        CityRepo::find_by_slug(&state.pool, department.id, &city_slug).await?,
        |c| c.is_published,
    )?;
    let places = PlaceRepo::list_by_city(&state.pool, city.id, true).await?;
    let figures = safe_db_operation(
        "city.figures",
        FigureRepo::list_by_city(&state.pool, city.id, true),
        Vec::new(),
    )
    .await;

    let sections: Vec<_> = PlaceKind::ALL
        .iter()
        .map(|kind| {
            let items: Vec<_> = places.iter().filter(|p| p.kind == kind.as_str()).collect();
            (kind.heading(), items)
        })
        .filter(|(_, items)| !items.is_empty())
        .collect();

    Ok(render(page(
        &city.name,
        html! {
            (breadcrumbs(&[
                ("Home", "/".into()),
                (department.name.as_str(), format!("/departments/{}", department.slug)),
                (city.name.as_str(), String::new()),
            ]))
            h1 { (city.name) }
            p class="meta" { (format!("{:.4}, {:.4}", city.latitude, city.longitude)) }
            p { (city.intro) }
            @for (heading, items) in &sections {
                section {
                    h2 { (heading) }
                    @for place in items { (place_card(place)) }
                }
            }
            @if !figures.is_empty() {
                section class="figures" {
                    h2 { "Historical figures" }
                    ul {
                        @for f in &figures {
                            li {
                                a href=(format!("/figures/{}", f.id)) { (f.name) }
                                @if let Some(span) = lifespan(f.birth_year, f.death_year) {
                                    " (" (span) ")"
                                }
                            }
                        }
                    }
                }
            }
        },
    )))
}
