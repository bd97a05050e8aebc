//! Money stored in integer minor currency units

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount in cents. Nightly costs are persisted in this unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    #[inline]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Convert a whole-dollar amount, as used by search filters
    ///
    /// Returns `None` on overflow.
    pub fn from_dollars(dollars: i64) -> Option<Self> {
        dollars.checked_mul(100).map(Self)
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl From<i32> for Cents {
    fn from(cents: i32) -> Self {
        Self(i64::from(cents))
    }
}

/// Formats in major units without trailing zeros: `100`, `125.5`, `0.05`.
impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (whole, frac) = (abs / 100, abs % 100);

        match frac {
            0 => write!(f, "{sign}{whole}"),
            f2 if f2 % 10 == 0 => write!(f, "{sign}{whole}.{}", f2 / 10),
            f2 => write!(f, "{sign}{whole}.{f2:02}"),
        }
    }
}
