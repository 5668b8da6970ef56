//! The calendar months a report averages over.

use chrono::Month;
use std::fmt;

/// An ordered run of month numbers that may wrap from December to January.
///
/// Values are not validated: a month outside `1..=12` (including zero or a negative
/// number) is kept and simply never matches a climate record.
///
/// # Examples
///
/// ```
/// use wwo_climate::MonthRange;
///
/// assert_eq!(MonthRange::new(3, 6).months(), &[3, 4, 5, 6]);
/// assert_eq!(MonthRange::new(11, 2).months(), &[11, 12, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRange {
    months: Vec<i32>,
}

impl MonthRange {
    /// Resolves the months from `from_month` to `to_month`, both inclusive.
    ///
    /// When `to_month` is smaller than `from_month` the range runs to December and
    /// continues from January up to `to_month`.
    pub fn new(from_month: i32, to_month: i32) -> Self {
        let months = if to_month >= from_month {
            (from_month..=to_month).collect()
        } else {
            (from_month..=12).chain(1..=to_month).collect()
        };
        Self { months }
    }

    /// Every month of the range in order, including values outside the calendar.
    pub fn months(&self) -> &[i32] {
        &self.months
    }

    pub fn contains(&self, month: i32) -> bool {
        self.months.contains(&month)
    }

    /// The members of the range that name a real month, in calendar order.
    ///
    /// At most twelve entries, however wide the range is.
    pub fn calendar_months(&self) -> Vec<i32> {
        (1..=12).filter(|month| self.contains(*month)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Human readable summary of the range, used for the run log.
    pub fn describe(&self) -> String {
        match self.months.as_slice() {
            [] => "No months selected".to_string(),
            [single] => format!("Getting data for {}", month_name(*single)),
            [init @ .., last] => format!(
                "Averaging over {} and {}",
                init.iter()
                    .map(|m| month_name(*m))
                    .collect::<Vec<_>>()
                    .join(", "),
                month_name(*last)
            ),
        }
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

fn month_name(month: i32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}
