//! Async holiday lookups. Paused tokio time makes the simulated fetch
//! delay virtual, so the default 100 ms latency costs nothing here.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use datekit::{
    get_holidays, is_holiday, is_holiday_with, DateResult, FixedHolidayProvider,
    HolidayFetchConfig, HolidayProvider,
};

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[tokio::test(start_paused = true)]
async fn three_fixed_holidays_in_order() {
    let holidays = get_holidays(2026).await.unwrap();
    assert_eq!(
        holidays,
        vec![at(2026, 1, 1), at(2026, 12, 25), at(2026, 12, 31)]
    );
    assert!(holidays.iter().all(|h| h.year() == 2026));
}

#[tokio::test(start_paused = true)]
async fn list_is_regenerated_per_call() {
    assert_eq!(
        get_holidays(2026).await.unwrap(),
        get_holidays(2026).await.unwrap()
    );
    assert_eq!(get_holidays(2027).await.unwrap()[0], at(2027, 1, 1));
}

#[tokio::test(start_paused = true)]
async fn new_years_day_is_a_holiday() {
    assert!(is_holiday(at(2026, 1, 1)).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn regular_day_is_not_a_holiday() {
    assert!(!is_holiday(at(2026, 1, 2)).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn holiday_match_ignores_time_of_day() {
    let christmas_dinner = Utc.with_ymd_and_hms(2026, 12, 25, 18, 30, 0).unwrap();
    assert!(is_holiday(christmas_dinner).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn fetch_waits_for_the_configured_delay() {
    let provider = FixedHolidayProvider::new(&HolidayFetchConfig { fetch_delay_ms: 100 });
    let started = tokio::time::Instant::now();
    provider.holidays(2026).await.unwrap();
    assert_eq!(started.elapsed(), std::time::Duration::from_millis(100));
}

#[tokio::test]
async fn immediate_provider_skips_the_delay() {
    let provider = FixedHolidayProvider::immediate();
    assert_eq!(provider.holidays(2026).await.unwrap().len(), 3);
}

struct EmptyCalendar;

impl HolidayProvider for EmptyCalendar {
    async fn holidays(&self, _year: i32) -> DateResult<Vec<DateTime<Utc>>> {
        Ok(vec![])
    }
}

#[tokio::test]
async fn alternate_provider_substitutes_without_changing_the_check() {
    assert!(!is_holiday_with(&EmptyCalendar, at(2026, 1, 1)).await.unwrap());
}
