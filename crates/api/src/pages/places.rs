//! `/places/{id}`: place detail with photos and, for nightly lodging, a
//! booking price calculator.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use ayiti_core::booking::{self, BookingQuote};
use ayiti_core::error::CoreError;
use ayiti_core::place_kind::PlaceKind;
use ayiti_core::types::DbId;
use ayiti_db::models::place::Place;
use ayiti_db::repositories::{CityRepo, DepartmentRepo, MediaRepo, PlaceRepo};
use ayiti_db::safe_db_operation;
use chrono::NaiveDate;
use maud::{html, Markup};
use serde::Deserialize;

use super::layout::{breadcrumbs, page};
use super::{published, render, PageResult};
use crate::state::AppState;

/// Booking calculator inputs, as submitted by the GET form.
#[derive(Debug, Default, Deserialize)]
pub struct BookingParams {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<String>,
}

impl BookingParams {
    fn is_empty(&self) -> bool {
        [&self.check_in, &self.check_out]
            .iter()
            .all(|v| v.as_deref().map_or(true, |s| s.trim().is_empty()))
    }

    /// Quote the stay, or explain what is wrong with the inputs.
    fn quote(&self, place: &Place) -> Option<Result<BookingQuote, CoreError>> {
        let rate = place.nightly_rate?;
        if self.is_empty() {
            return None;
        }
        Some(self.quote_at(rate, place.max_guests))
    }

    fn quote_at(&self, rate: f64, max_guests: Option<i32>) -> Result<BookingQuote, CoreError> {
        let check_in = parse_date(self.check_in.as_deref(), "check-in")?;
        let check_out = parse_date(self.check_out.as_deref(), "check-out")?;
        let guests = match self.guests.as_deref().map(str::trim) {
            None | Some("") => 1,
            Some(raw) => raw
                .parse()
                .map_err(|_| CoreError::Validation(format!("Invalid guest count '{raw}'")))?,
        };
        let max_guests = max_guests.and_then(|n| u32::try_from(n).ok());
        booking::quote(check_in, check_out, rate, guests, max_guests)
    }
}

fn parse_date(raw: Option<&str>, label: &str) -> Result<NaiveDate, CoreError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| {
        CoreError::Validation(format!("Please choose a {label} date"))
    })?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(format!("Invalid {label} date '{raw}'")))
}

/// GET /places/{id}
pub async fn place_page(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    booking_params: Result<Query<BookingParams>, QueryRejection>,
) -> PageResult {
    let Path(id) = id?;
    let Query(booking_params) = booking_params?;
    let place = published(PlaceRepo::find_by_id(&state.pool, id).await?, |p| {
        p.is_published
    })?;
    let city = published(CityRepo::find_by_id(&state.pool, place.city_id).await?, |c| {
        c.is_published
    })?;
    let department = published(
        DepartmentRepo::find_by_id(&state.pool, city.department_id).await?,
        |d| d.is_published,
    )?;
    let photos = safe_db_operation(
        "place.photos",
        MediaRepo::list_by_place(&state.pool, place.id),
        Vec::new(),
    )
    .await;
    let quote = booking_params.quote(&place);
    let heading = PlaceKind::from_str_db(&place.kind).map(PlaceKind::heading).ok();

    Ok(render(page(
        &place.name,
        html! {
            (breadcrumbs(&[
                ("Home", "/".into()),
                (department.name.as_str(), format!("/departments/{}", department.slug)),
                (city.name.as_str(), format!("/departments/{}/{}", department.slug, city.slug)),
                (place.name.as_str(), String::new()),
            ]))
            article class="place" {
                h1 { (place.name) }
                p class="meta" {
                    @if let Some(heading) = heading { (heading) }
                    @if let Some(price) = &place.price_range { " · " (price) }
                    @if let Some(rating) = place.rating { " · " (format!("★ {rating:.1}")) }
                }
                p { (place.description) }
                (details(&place))
                @if !photos.is_empty() {
                    section class="photos" {
                        @for photo in &photos {
                            img src=(photo.path) alt=(photo.alt) loading="lazy";
                        }
                    }
                }
                @if let Some(rate) = place.nightly_rate {
                    (booking_section(place.id, rate, &booking_params, quote))
                }
            }
        },
    )))
}

fn details(place: &Place) -> Markup {
    html! {
        dl class="details" {
            @if let Some(cuisine) = &place.cuisine { dt { "Cuisine" } dd { (cuisine) } }
            @if let Some(hours) = &place.hours { dt { "Hours" } dd { (hours) } }
            @if let Some(phone) = &place.phone {
                dt { "Phone" } dd { a href=(format!("tel:{phone}")) { (phone) } }
            }
            @if let Some(website) = &place.website {
                dt { "Website" } dd { a href=(website) rel="noopener" { (website) } }
            }
            @if let Some(bedrooms) = place.bedrooms { dt { "Bedrooms" } dd { (bedrooms) } }
            @if let Some(guests) = place.max_guests { dt { "Sleeps" } dd { (guests) } }
            @if let (Some(lat), Some(lng)) = (place.latitude, place.longitude) {
                dt { "Location" } dd { (format!("{lat:.4}, {lng:.4}")) }
            }
        }
    }
}

fn booking_section(
    place_id: DbId,
    rate: f64,
    params: &BookingParams,
    quote: Option<Result<BookingQuote, CoreError>>,
) -> Markup {
    html! {
        section class="booking" {
            h2 { (format!("${rate:.2} per night")) }
            form method="get" action=(format!("/places/{place_id}")) {
                label { "Check-in " input type="date" name="check_in" value=[params.check_in.as_deref()]; }
                label { "Check-out " input type="date" name="check_out" value=[params.check_out.as_deref()]; }
                label { "Guests " input type="number" name="guests" min="1" value=(params.guests.as_deref().unwrap_or("1")); }
                button type="submit" { "Calculate" }
            }
            @match quote {
                Some(Ok(q)) => {
                    table class="quote" {
                        tr { td { (format!("${:.2} × {} nights", q.nightly_rate, q.nights)) } td { (format!("${:.2}", q.subtotal)) } }
                        tr { td { "Service fee" } td { (format!("${:.2}", q.service_fee)) } }
                        tr { td { "Taxes" } td { (format!("${:.2}", q.taxes)) } }
                        tr class="total" { td { "Total" } td { (format!("${:.2}", q.total)) } }
                    }
                }
                Some(Err(CoreError::Validation(msg))) => { p class="notice" { (msg) } }
                Some(Err(other)) => { p class="notice" { (other.to_string()) } }
                None => {}
            }
        }
    }
}
