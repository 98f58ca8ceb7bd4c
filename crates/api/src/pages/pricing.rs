//! `/pricing`: business listing plans.

use axum::extract::State;
use ayiti_db::repositories::BusinessPlanRepo;
use maud::html;

use super::layout::page;
use super::{render, PageResult};
use crate::state::AppState;

/// GET /pricing
pub async fn pricing_page(State(state): State<AppState>) -> PageResult {
    let plans = BusinessPlanRepo::list(&state.pool).await?;

    Ok(render(page(
        "Pricing",
        html! {
            h1 { "List your business" }
            p { "Reach visitors planning their trip to Haiti." }
            div class="plans" {
                @for plan in &plans {
                    section class="plan" id=(format!("plan-{}", plan.slug)) {
                        h2 { (plan.name) }
                        p class="price" {
                            (plan.display_price())
                            @if plan.monthly_price_cents > 0 { " / month" }
                        }
                        ul { @for feature in plan.feature_list() { li { (feature) } } }
                    }
                }
            }
        },
    )))
}
