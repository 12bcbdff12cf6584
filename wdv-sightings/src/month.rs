use crate::error::InvalidMonth;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, 1 (January) through 12 (December).
///
/// Month selection comes from chart interaction rather than the data
/// service, so the range is enforced here instead of trusting the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub fn new(number: u8) -> Result<Self, InvalidMonth> {
        if (1..=12).contains(&number) {
            Ok(Month(number))
        } else {
            Err(InvalidMonth(number))
        }
    }

    /// Month number in `1..=12`.
    pub fn number(self) -> u8 {
        self.0
    }

    /// English month name, e.g. "March".
    pub fn name(self) -> &'static str {
        chrono::Month::try_from(self.0)
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidMonth;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Month::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> u8 {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
