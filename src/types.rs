use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LAST_BILLED_MONTH, LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::{DateComponent, DateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        match NonZeroU16::new(value) {
            Some(non_zero) if value <= MAX_YEAR => Ok(Self(non_zero)),
            _ => Err(invalid_year(value)),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether February has 29 days in this year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

fn invalid_year(value: impl Into<i64>) -> DateError {
    DateError::out_of_range(DateComponent::Year, value, MIN_YEAR, MAX_YEAR)
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Year {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let value = u16::try_from(value).map_err(|_| invalid_year(value))?;
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// January
    pub const JANUARY: Self = Self::from_const(JANUARY);
    /// Last month of the default billing schedule (November)
    pub const LAST_BILLED: Self = Self::from_const(LAST_BILLED_MONTH);
    /// December
    pub const DECEMBER: Self = Self::from_const(DECEMBER);

    const fn from_const(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_MONTH => Self(non_zero),
            _ => panic!("month constant out of range"),
        }
    }

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_MONTH => Ok(Self(non_zero)),
            _ => Err(invalid_month(value)),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days in this month of `year`
    #[inline]
    pub const fn length(self, year: Year) -> u8 {
        days_in_month(year.get(), self.get())
    }

    /// Last valid day of this month in `year`
    pub const fn last_day(self, year: Year) -> Day {
        match NonZeroU8::new(self.length(year)) {
            Some(day) => Day(day),
            None => Day(NonZeroU8::MIN),
        }
    }

    /// Iterates January through `self`, inclusive.
    pub fn iter_through(self) -> impl Iterator<Item = Self> {
        (JANUARY..=self.get()).filter_map(NonZeroU8::new).map(Month)
    }
}

fn invalid_month(value: impl Into<i64>) -> DateError {
    DateError::out_of_range(DateComponent::Month, value, JANUARY, MAX_MONTH)
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Month {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let value = u8::try_from(value).map_err(|_| invalid_month(value))?;
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month in `MIN_DAY..=MAX_DAY` (1..=31).
///
/// On its own a `Day` is only a requested day; it is checked against a real
/// month length when placed in a [`CalendarDate`](crate::CalendarDate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's within `MIN_DAY..=MAX_DAY`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_DAY => Ok(Self(non_zero)),
            _ => Err(invalid_day(value, MAX_DAY)),
        }
    }

    /// Creates a Day that must exist in the given month of `year`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if the value is 0 or past the
    /// month's last day.
    pub fn in_month(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let last = month.length(year);
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= last => Ok(Self(non_zero)),
            _ => Err(invalid_day(value, last)),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// This day, or the month's last day when the month is shorter.
    pub const fn clamped_to(self, year: Year, month: Month) -> Self {
        let last = month.last_day(year);
        if self.get() <= last.get() { self } else { last }
    }
}

fn invalid_day(value: impl Into<i64>, max: u8) -> DateError {
    DateError::out_of_range(DateComponent::Day, value, MIN_DAY, max)
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Day {
    type Error = DateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let value = u8::try_from(value).map_err(|_| invalid_day(value, MAX_DAY))?;
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Gregorian leap year rule
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
