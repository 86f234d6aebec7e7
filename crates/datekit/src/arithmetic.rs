//! Validated calendar arithmetic.

use chrono::{DateTime, Duration, Months, Utc};

use crate::errors::{DateError, DateResult};
use crate::unit::DateUnit;

/// Parse an RFC 3339 string into a date.
///
/// This is the validation boundary for textual input: unparsable values
/// are rejected with [`DateError::InvalidDate`] rather than propagating
/// a half-constructed date into the arithmetic below.
pub fn parse_date(input: &str) -> DateResult<DateTime<Utc>> {
    input
        .parse::<DateTime<Utc>>()
        .map_err(|_| DateError::InvalidDate)
}

/// Add `amount` units of `unit` to `date`, returning a new date.
///
/// `amount` must be finite; fractional amounts truncate toward zero.
/// Negative amounts subtract. Day/week/hour/minute/second arithmetic
/// crosses month and year boundaries exactly; month and year arithmetic
/// clamps day-of-month per calendar rules (Jan 31 + 1 month = Feb 28,
/// or Feb 29 in a leap year).
///
/// Returns [`DateError::InvalidAmount`] for NaN or infinite amounts and
/// [`DateError::InvalidDate`] when the result falls outside chrono's
/// representable range.
pub fn add(date: DateTime<Utc>, amount: f64, unit: DateUnit) -> DateResult<DateTime<Utc>> {
    if !amount.is_finite() {
        return Err(DateError::InvalidAmount);
    }
    let n = amount.trunc() as i64;

    let shifted = match unit {
        DateUnit::Days => Duration::try_days(n).and_then(|d| date.checked_add_signed(d)),
        DateUnit::Weeks => Duration::try_weeks(n).and_then(|d| date.checked_add_signed(d)),
        DateUnit::Months => shift_months(date, n),
        DateUnit::Years => n.checked_mul(12).and_then(|m| shift_months(date, m)),
        DateUnit::Hours => Duration::try_hours(n).and_then(|d| date.checked_add_signed(d)),
        DateUnit::Minutes => Duration::try_minutes(n).and_then(|d| date.checked_add_signed(d)),
        DateUnit::Seconds => Duration::try_seconds(n).and_then(|d| date.checked_add_signed(d)),
    };

    shifted.ok_or(DateError::InvalidDate)
}

/// Signed month shift with day-of-month clamping.
fn shift_months(date: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let m = i32::try_from(months).ok()?;
    if m >= 0 {
        date.checked_add_months(Months::new(m as u32))
    } else {
        date.checked_sub_months(Months::new(m.unsigned_abs()))
    }
}
