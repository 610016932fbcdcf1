mod billing;
mod consts;
mod prelude;
mod types;

pub use billing::{BillingDateCalculator, BillingDates, compute_billing_dates};
pub use consts::*;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A valid Gregorian date.
/// The day never exceeds the length of its month in its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Which part of a date a value was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateComponent {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A year, month or day that cannot be part of a real calendar date.
    #[error("Invalid {component}: {value} (must be {min}-{max})")]
    InvalidDateComponent {
        component: DateComponent,
        value:     i64,
        min:       i64,
        max:       i64,
    },

    /// Text that is not a `YYYY-MM-DD` date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

impl DateError {
    pub(crate) fn out_of_range(
        component: DateComponent,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Self::InvalidDateComponent {
            component,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

impl CalendarDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` for the first component that
    /// is out of range, checking year, then month, then day.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        let year = Year::try_from(year)?;
        let month = Month::try_from(month)?;
        let day = u8::try_from(day).map_err(|_| {
            DateError::out_of_range(DateComponent::Day, day, MIN_DAY, month.length(year))
        })?;
        Ok(Self {
            year,
            month,
            day: Day::in_month(day, year, month)?,
        })
    }

    /// Creates a date from validated components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if `day` is past the end of
    /// the month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        let day = Day::in_month(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Date in the given month on `day`, or on the month's last day when the
    /// month is too short.
    pub const fn clamped(year: Year, month: Month, day: Day) -> Self {
        Self {
            year,
            month,
            day: day.clamped_to(year, month),
        }
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Converts to plain (year, month, day)
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Whether this is the last day of its month
    pub const fn is_month_end(&self) -> bool {
        self.day() == self.month.length(self.year)
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        s.trim()
            .parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses ISO 8601 `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };

        let year = Year::new(Self::parse_component(year)?)?;
        let month = Month::new(Self::parse_component(month)?)?;
        let day = Day::in_month(Self::parse_component(day)?, year, month)?;
        Ok(Self { year, month, day })
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Ok(Self {
            year,
            month,
            day: Day::in_month(day, year, month)?,
        })
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
