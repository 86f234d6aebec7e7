//! Ordering, interval containment, and same-day comparisons.

use chrono::{DateTime, Utc};

use crate::errors::{DateError, DateResult};

/// True iff `date` falls within the closed interval `[from, to]`.
///
/// Both endpoints are included. `from == to` is accepted as a valid
/// single-instant range; only `from` strictly after `to` is rejected,
/// with [`DateError::InvalidRange`].
pub fn is_within_range(
    date: DateTime<Utc>,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> DateResult<bool> {
    if from > to {
        return Err(DateError::InvalidRange);
    }
    Ok(from <= date && date <= to)
}

/// True iff `date` is strictly earlier than `compare`.
pub fn is_date_before(date: DateTime<Utc>, compare: DateTime<Utc>) -> bool {
    date < compare
}

/// True iff both instants fall on the same calendar day, ignoring time
/// of day.
pub fn is_same_day(date: DateTime<Utc>, compare: DateTime<Utc>) -> bool {
    date.date_naive() == compare.date_naive()
}
