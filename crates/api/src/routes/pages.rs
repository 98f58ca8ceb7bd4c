//! Route definitions for the HTML pages.

use axum::routing::get;
use axum::Router;

use crate::pages::{departments, figures, home, listings, map, places, pricing};
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET /                                  -> home
/// GET /departments/{slug}                -> department_page
/// GET /departments/{dept}/{city}         -> city_page
/// GET /places/{id}                       -> place_page (?check_in=&check_out=&guests=)
/// GET /figures/{id}                      -> figure_page
/// GET /restaurants                       -> restaurants (filter query)
/// GET /rentals                           -> rentals (filter query)
/// GET /map                               -> map_page
/// GET /map/hit                           -> hit (?x=&y=)
/// GET /pricing                           -> pricing_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/departments/{slug}", get(departments::department_page))
        .route("/departments/{dept}/{city}", get(departments::city_page))
        .route("/places/{id}", get(places::place_page))
        .route("/figures/{id}", get(figures::figure_page))
        .route("/restaurants", get(listings::restaurants))
        .route("/rentals", get(listings::rentals))
        .route("/map", get(map::map_page))
        .route("/map/hit", get(map::hit))
        .route("/pricing", get(pricing::pricing_page))
}
