//! `/`: department index with the map.

use axum::extract::State;
use ayiti_db::repositories::DepartmentRepo;
use ayiti_db::safe_db_operation;
use maud::html;

use super::layout::page;
use super::map::map_svg;
use super::{render, PageResult};
use crate::state::AppState;

/// GET /
///
/// Always renders: without the database the department list is replaced by
/// a notice and the static map still links to every department.
pub async fn home(State(state): State<AppState>) -> PageResult {
    // `None` means the query failed, not that nothing is published.
    let departments = safe_db_operation(
        "home.departments",
        async { DepartmentRepo::list(&state.pool, true).await.map(Some) },
        None,
    )
    .await;

    Ok(render(page(
        "Discover Haiti",
        html! {
            section class="hero" {
                h1 { "Discover Haiti" }
                p { "Beaches, mountains, history and food across ten departments." }
            }
            (map_svg())
            section class="departments" {
                h2 { "Departments" }
                @match &departments {
                    None => { p class="notice" { "Content is temporarily unavailable." } }
                    Some(list) if list.is_empty() => {
                        p class="notice" { "No departments are listed yet." }
                    }
                    Some(list) => {
                        ul {
                            @for d in list {
                                li {
                                    a href=(format!("/departments/{}", d.slug)) { (d.name) }
                                    @if let Some(capital) = &d.capital { " · " (capital) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )))
}
