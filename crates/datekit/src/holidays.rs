//! Simulated remote holiday lookups.
//!
//! The provider trait keeps the data source pluggable: alternate
//! calendars or locales can substitute without touching the holiday
//! check itself.

use std::time::Duration;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use tracing::debug;

use crate::compare::is_same_day;
use crate::config::HolidayFetchConfig;
use crate::errors::{DateError, DateResult};

/// Source of holiday calendars.
#[allow(async_fn_in_trait)]
pub trait HolidayProvider: Send + Sync {
    /// Holiday dates for `year`, in calendar order.
    async fn holidays(&self, year: i32) -> DateResult<Vec<DateTime<Utc>>>;
}

/// Fixed three-holiday calendar: Jan 1, Dec 25, and Dec 31 of the
/// requested year, resolved after an artificial fetch delay.
#[derive(Debug, Clone)]
pub struct FixedHolidayProvider {
    fetch_delay: Duration,
}

impl FixedHolidayProvider {
    pub fn new(config: &HolidayFetchConfig) -> Self {
        Self {
            fetch_delay: Duration::from_millis(config.fetch_delay_ms),
        }
    }

    /// No artificial latency.
    pub fn immediate() -> Self {
        Self {
            fetch_delay: Duration::ZERO,
        }
    }
}

impl Default for FixedHolidayProvider {
    fn default() -> Self {
        Self::new(&HolidayFetchConfig::default())
    }
}

impl HolidayProvider for FixedHolidayProvider {
    async fn holidays(&self, year: i32) -> DateResult<Vec<DateTime<Utc>>> {
        debug!(
            year,
            delay_ms = self.fetch_delay.as_millis() as u64,
            "simulating holiday fetch"
        );
        tokio::time::sleep(self.fetch_delay).await;
        [(1, 1), (12, 25), (12, 31)]
            .iter()
            .map(|&(month, day)| holiday_date(year, month, day))
            .collect()
    }
}

/// Midnight UTC on the given calendar day. Fails only for years outside
/// chrono's representable range.
fn holiday_date(year: i32, month: u32, day: u32) -> DateResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or(DateError::InvalidDate)
}

/// Holiday list for `year` from the default fixed calendar.
pub async fn get_holidays(year: i32) -> DateResult<Vec<DateTime<Utc>>> {
    FixedHolidayProvider::default().holidays(year).await
}

/// True iff `date` falls on a holiday of its own year, time of day
/// ignored. Uses the default fixed calendar.
pub async fn is_holiday(date: DateTime<Utc>) -> DateResult<bool> {
    is_holiday_with(&FixedHolidayProvider::default(), date).await
}

/// [`is_holiday`] against a caller-supplied provider.
pub async fn is_holiday_with(
    provider: &impl HolidayProvider,
    date: DateTime<Utc>,
) -> DateResult<bool> {
    let holidays = provider.holidays(date.year()).await?;
    Ok(holidays.iter().any(|&holiday| is_same_day(date, holiday)))
}
