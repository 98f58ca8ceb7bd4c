use ayiti_core::place_kind::PlaceKind;
use ayiti_db::models::place::Place;
use maud::{html, Markup, DOCTYPE};

const SITE_NAME: &str = "Ayiti Guide";

const STYLES: &str = "
body { font-family: system-ui, sans-serif; margin: 0; color: #1d2a35; }
main { max-width: 60rem; margin: 0 auto; padding: 1rem; }
.site-header { display: flex; gap: 2rem; padding: 1rem; background: #00209f; }
.site-header a { color: #fff; margin-right: 1rem; }
.place-card, .plan { border: 1px solid #ddd; border-radius: 6px; padding: 0.75rem; margin: 0.5rem 0; }
.meta { color: #5a6b7a; }
.notice { background: #fff4d6; padding: 0.75rem; }
.map path { fill: #d9e4f2; stroke: #00209f; }
.map a:hover path { fill: #d21034; }
";

pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                style { (maud::PreEscaped(STYLES)) }
            }
            body {
                header class="site-header" {
                    a class="brand" href="/" { (SITE_NAME) }
                    nav {
                        a href="/map" { "Map" }
                        a href="/restaurants" { "Restaurants" }
                        a href="/rentals" { "Rentals" }
                        a href="/pricing" { "List your business" }
                    }
                }
                main { (content) }
                footer class="site-footer" {
                    p { "Discover the ten departments of Haiti." }
                }
            }
        }
    }
}

pub fn not_found() -> Markup {
    page(
        "Not found",
        html! {
            section class="error-page" {
                h1 { "Page not found" }
                p { "The page you are looking for does not exist or is not published yet." }
                a href="/" { "Back to the guide" }
            }
        },
    )
}

pub fn unavailable() -> Markup {
    page(
        "Temporarily unavailable",
        html! {
            section class="error-page" {
                h1 { "Content is temporarily unavailable" }
                p { "We could not load this page right now. Please try again in a moment." }
            }
        },
    )
}

/// Breadcrumb trail; the last entry is rendered as plain text.
pub fn breadcrumbs(trail: &[(&str, String)]) -> Markup {
    html! {
        nav class="breadcrumbs" {
            @for (i, (label, href)) in trail.iter().enumerate() {
                @if i + 1 == trail.len() {
                    span { (label) }
                } @else {
                    a href=(href) { (label) } " / "
                }
            }
        }
    }
}

pub fn place_card(place: &Place) -> Markup {
    let kind = PlaceKind::from_str_db(&place.kind).ok();
    html! {
        article class="place-card" {
            h3 { a href=(format!("/places/{}", place.id)) { (place.name) } }
            p class="meta" {
                @if let Some(kind) = kind { span class="kind" { (kind.heading()) } }
                @if let Some(price) = &place.price_range { " · " span class="price" { (price) } }
                @if let Some(cuisine) = &place.cuisine { " · " (cuisine) }
                @if let Some(rate) = place.nightly_rate { " · " (format!("${rate:.0} / night")) }
                @if let Some(rating) = place.rating { " · " (format!("★ {rating:.1}")) }
            }
            @if !place.description.is_empty() {
                p { (place.description) }
            }
        }
    }
}
