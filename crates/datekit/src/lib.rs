//! # datekit
//!
//! Small date-manipulation layer over chrono: validated calendar
//! arithmetic, closed-interval range checks, same-day equality, and a
//! simulated asynchronous holiday lookup.

pub mod arithmetic;
pub mod clock;
pub mod compare;
pub mod config;
pub mod errors;
pub mod holidays;
pub mod unit;

pub use arithmetic::{add, parse_date};
pub use clock::{current_year, current_year_with, Clock, FixedClock, SystemClock};
pub use compare::{is_date_before, is_same_day, is_within_range};
pub use config::HolidayFetchConfig;
pub use errors::{DateError, DateResult};
pub use holidays::{
    get_holidays, is_holiday, is_holiday_with, FixedHolidayProvider, HolidayProvider,
};
pub use unit::DateUnit;
