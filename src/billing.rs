use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{CalendarDate, DateError, Day, Month, Year, prelude::*};

/// Computes two billing dates per month for a year.
///
/// Each requested day is clamped to the month's last day when the month is
/// shorter. Months run from January through `last_month`, which is
/// November unless changed with [`through_month`](Self::through_month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BillingDateCalculator {
    first_day:  Day,
    second_day: Day,
    last_month: Month,
}

impl BillingDateCalculator {
    /// Creates a calculator for the two requested days of month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if either day is outside 1-31.
    pub fn new(first_day: i32, second_day: i32) -> Result<Self, DateError> {
        Ok(Self::from_days(
            Day::try_from(first_day)?,
            Day::try_from(second_day)?,
        ))
    }

    pub const fn from_days(first_day: Day, second_day: Day) -> Self {
        Self {
            first_day,
            second_day,
            last_month: Month::LAST_BILLED,
        }
    }

    /// Bill every month from January through `last_month`.
    pub const fn through_month(self, last_month: Month) -> Self {
        Self { last_month, ..self }
    }

    pub const fn first_day(&self) -> Day {
        self.first_day
    }

    pub const fn second_day(&self) -> Day {
        self.second_day
    }

    pub const fn last_month(&self) -> Month {
        self.last_month
    }

    /// Billing dates for `year`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDateComponent` if `year` is outside 1-9999.
    pub fn compute(&self, year: i32) -> Result<BillingDates, DateError> {
        Ok(self.compute_for(Year::try_from(year)?))
    }

    /// Billing dates for an already validated year.
    pub fn compute_for(&self, year: Year) -> BillingDates {
        debug!(
            year = year.get(),
            first_day = self.first_day.get(),
            second_day = self.second_day.get(),
            last_month = self.last_month.get(),
            "computing billing dates"
        );

        let dates = self
            .last_month
            .iter_through()
            .flat_map(|month| {
                let (first, second) = self.dates_for_month(year, month);
                [first, second]
            })
            .collect();
        BillingDates(dates)
    }

    /// The two billing dates of one month, first day before second day.
    pub fn dates_for_month(&self, year: Year, month: Month) -> (CalendarDate, CalendarDate) {
        (
            Self::billing_date(year, month, self.first_day),
            Self::billing_date(year, month, self.second_day),
        )
    }

    fn billing_date(year: Year, month: Month, requested: Day) -> CalendarDate {
        let date = CalendarDate::clamped(year, month, requested);
        if date.day() != requested.get() {
            trace!(
                year = year.get(),
                month = month.get(),
                requested = requested.get(),
                clamped = date.day(),
                "billing day clamped to month end"
            );
        }
        date
    }
}

/// Billing dates for `first_day` and `second_day` of each month of `year`,
/// January through November.
///
/// # Errors
/// Returns `DateError::InvalidDateComponent` if either day is outside 1-31 or
/// `year` is outside 1-9999.
pub fn compute_billing_dates(
    first_day: i32,
    second_day: i32,
    year: i32,
) -> Result<BillingDates, DateError> {
    BillingDateCalculator::new(first_day, second_day)?.compute(year)
}

/// Billing dates in month order, two per month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Into, Serialize)]
#[serde(transparent)]
pub struct BillingDates(Vec<CalendarDate>);

impl BillingDates {
    pub fn as_slice(&self) -> &[CalendarDate] {
        &self.0
    }

    /// (first, second) date of each billed month.
    pub fn pairs(&self) -> impl Iterator<Item = (CalendarDate, CalendarDate)> + '_ {
        self.0.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// The pair for `month`, if that month was billed.
    pub fn for_month(&self, month: Month) -> Option<(CalendarDate, CalendarDate)> {
        self.pairs().find(|(first, _)| first.month_typed() == month)
    }
}

impl IntoIterator for BillingDates {
    type Item = CalendarDate;
    type IntoIter = std::vec::IntoIter<CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BillingDates {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for BillingDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, date) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{date}")?;
        }
        f.write_str("]")
    }
}
