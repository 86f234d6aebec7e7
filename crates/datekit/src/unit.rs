//! Calendar fields used to parameterize date arithmetic.

use serde::{Deserialize, Serialize};

/// A named granularity of calendar time for [`add`](crate::arithmetic::add).
///
/// The set is closed: out-of-enumeration units are unrepresentable, so
/// `add` never has to reject one at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateUnit {
    #[default]
    Days,
    Weeks,
    Months,
    Years,
    Hours,
    Minutes,
    Seconds,
}
