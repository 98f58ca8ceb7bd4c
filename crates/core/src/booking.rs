//! Nightly booking price calculation.
//!
//! A quote is a linear calculation: `nights × nightly rate` plus a fixed
//! service fee and tax percentage on that subtotal. Amounts are worked in
//! whole cents. The total is rounded once from `subtotal × 1.25` and the tax
//! absorbs the rounding, so the parts always add up to the total.
//! Nothing is persisted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;

/// Service fee charged on the subtotal, in percent.
pub const SERVICE_FEE_PERCENT: i64 = 15;

/// Taxes charged on the subtotal, in percent.
pub const TAX_PERCENT: i64 = 10;

const TOTAL_PERCENT: i64 = 100 + SERVICE_FEE_PERCENT + TAX_PERCENT;

/// Longest stay that can be quoted in one booking.
pub const MAX_NIGHTS: i64 = 90;

/// Price breakdown for a stay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingQuote {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub guests: u32,
    pub nightly_rate: f64,
    pub subtotal: f64,
    pub service_fee: f64,
    pub taxes: f64,
    pub total: f64,
}

/// Number of nights between two dates. Errors unless `check_out` is after `check_in`.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> Result<i64, CoreError> {
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(CoreError::Validation(
            "Check-out date must be after check-in date".into(),
        ));
    }
    if nights > MAX_NIGHTS {
        return Err(CoreError::Validation(format!(
            "Stays are limited to {MAX_NIGHTS} nights"
        )));
    }
    Ok(nights)
}

/// Quote a stay at `nightly_rate` for `guests` people.
///
/// `max_guests`, when known, caps the party size.
pub fn quote(
    check_in: NaiveDate,
    check_out: NaiveDate,
    nightly_rate: f64,
    guests: u32,
    max_guests: Option<u32>,
) -> Result<BookingQuote, CoreError> {
    if !nightly_rate.is_finite() || nightly_rate <= 0.0 {
        return Err(CoreError::Validation(
            "Nightly rate must be a positive amount".into(),
        ));
    }
    if guests == 0 {
        return Err(CoreError::Validation("At least one guest is required".into()));
    }
    if let Some(max) = max_guests {
        if guests > max {
            return Err(CoreError::Validation(format!(
                "This place accommodates at most {max} guests"
            )));
        }
    }

    let nights = nights_between(check_in, check_out)?;
    let subtotal = (nights as f64 * nightly_rate * 100.0).round() as i64;
    let total = percent_of(subtotal, TOTAL_PERCENT);
    let service_fee = percent_of(subtotal, SERVICE_FEE_PERCENT);
    let taxes = total - subtotal - service_fee;

    Ok(BookingQuote {
        check_in,
        check_out,
        nights,
        guests,
        nightly_rate,
        subtotal: to_amount(subtotal),
        service_fee: to_amount(service_fee),
        taxes: to_amount(taxes),
        total: to_amount(total),
    })
}

/// `cents × percent / 100`, rounded half up.
fn percent_of(cents: i64, percent: i64) -> i64 {
    (cents * percent + 50).div_euclid(100)
}

fn to_amount(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn total_is_subtotal_plus_25_percent() {
        let q = quote(date(2026, 3, 1), date(2026, 3, 4), 120.0, 2, Some(4)).unwrap();
        assert_eq!(q.nights, 3);
        assert_eq!(q.subtotal, 360.0);
        assert_eq!(q.service_fee, 54.0);
        assert_eq!(q.taxes, 36.0);
        assert_eq!(q.total, 3.0 * 120.0 * 1.25);
    }

    #[test]
    fn quote_crosses_month_boundary() {
        let q = quote(date(2026, 1, 30), date(2026, 2, 2), 80.0, 1, None).unwrap();
        assert_eq!(q.nights, 3);
        assert_eq!(q.total, 300.0);
    }

    #[test]
    fn fractional_rates_round_to_cents() {
        let q = quote(date(2026, 5, 1), date(2026, 5, 2), 33.33, 1, None).unwrap();
        assert_eq!(q.subtotal, 33.33);
        assert_eq!(q.service_fee, 5.0);
        assert_eq!(q.taxes, 3.33);
        assert_eq!(q.total, 41.66);
    }

    #[test]
    fn total_tracks_a_quarter_on_top_for_every_cent_rate() {
        let (a, b) = (date(2026, 5, 1), date(2026, 5, 4));
        for rate_cents in 100..20_000_i64 {
            let rate = rate_cents as f64 / 100.0;
            for nights in 1..=3_i64 {
                let q = quote(a, a + chrono::Days::new(nights as u64), rate, 1, None).unwrap();
                let exact = (nights * rate_cents * 125) as f64 / 100.0;
                let total = (q.total * 100.0).round();
                assert!(
                    (total - exact).abs() <= 0.5,
                    "rate {rate} x {nights}: total {} vs {}",
                    q.total,
                    exact / 100.0
                );
                let parts = (q.subtotal * 100.0).round()
                    + (q.service_fee * 100.0).round()
                    + (q.taxes * 100.0).round();
                assert_eq!(parts, total, "rate {rate} x {nights}: parts do not add up");
            }
        }
        assert_eq!(quote(a, b, 10.0, 1, None).unwrap().total, 37.5);
    }

    #[test]
    fn half_cent_totals_round_up() {
        let (a, b) = (date(2026, 5, 1), date(2026, 5, 2));
        assert_eq!(quote(a, b, 1.03, 1, None).unwrap().total, 1.29);
        assert_eq!(quote(a, b, 1.25, 1, None).unwrap().total, 1.56);
        assert_eq!(quote(a, b, 1.05, 1, None).unwrap().total, 1.31);
    }

    #[test]
    fn same_day_checkout_is_rejected() {
        let d = date(2026, 6, 10);
        assert_matches!(quote(d, d, 100.0, 1, None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn checkout_before_checkin_is_rejected() {
        assert_matches!(
            nights_between(date(2026, 6, 10), date(2026, 6, 9)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn overly_long_stay_is_rejected() {
        assert!(nights_between(date(2026, 1, 1), date(2026, 4, 2)).is_err());
        assert_eq!(nights_between(date(2026, 1, 1), date(2026, 4, 1)).unwrap(), 90);
    }

    #[test]
    fn guest_limits() {
        let (a, b) = (date(2026, 7, 1), date(2026, 7, 3));
        assert!(quote(a, b, 90.0, 0, None).is_err());
        assert!(quote(a, b, 90.0, 5, Some(4)).is_err());
        assert!(quote(a, b, 90.0, 4, Some(4)).is_ok());
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        let (a, b) = (date(2026, 7, 1), date(2026, 7, 3));
        assert!(quote(a, b, 0.0, 1, None).is_err());
        assert!(quote(a, b, -10.0, 1, None).is_err());
        assert!(quote(a, b, f64::NAN, 1, None).is_err());
    }
}
