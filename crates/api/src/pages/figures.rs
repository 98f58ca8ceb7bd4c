//! `/figures/{id}`.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use ayiti_core::figure::lifespan;
use ayiti_core::types::DbId;
use ayiti_db::repositories::{CityRepo, DepartmentRepo, FigureRepo};
use maud::html;

use super::layout::page;
use super::{published, render, PageResult};
use crate::state::AppState;

/// GET /figures/{id}
pub async fn figure_page(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> PageResult {
    let Path(id) = id?;
    let figure = published(FigureRepo::find_by_id(&state.pool, id).await?, |f| {
        f.is_published
    })?;
    let city = published(CityRepo::find_by_id(&state.pool, figure.city_id).await?, |c| {
        c.is_published
    })?;
    let department = published(
        DepartmentRepo::find_by_id(&state.pool, city.department_id).await?,
        |d| d.is_published,
    )?;
    let quotes = figure.quote_list();
    let achievements = figure.achievement_list();

    Ok(render(page(
        &figure.name,
        html! {
            article class="figure" {
                h1 { (figure.name) }
                @if let Some(title) = &figure.title { p class="meta" { (title) } }
                @if let Some(span) = lifespan(figure.birth_year, figure.death_year) {
                    p class="meta" { (span) }
                }
                p class="meta" {
                    "Associated with "
                    a href=(format!("/departments/{}/{}", department.slug, city.slug)) { (city.name) }
                }
                @if let Some(portrait) = &figure.portrait_image {
                    img class="portrait" src=(portrait) alt=(figure.name);
                }
                p { (figure.biography) }
                @if !achievements.is_empty() {
                    h2 { "Achievements" }
                    ul { @for a in &achievements { li { (a) } } }
                }
                @if !quotes.is_empty() {
                    h2 { "In their words" }
                    @for q in &quotes { blockquote { (q) } }
                }
            }
        },
    )))
}
