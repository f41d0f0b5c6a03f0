//! Strict `DD/MM/YYYY` calendar dates.
//!
//! Whether a written date exists is decided by normalizing its components the
//! way a lenient calendar constructor does (month 13 becomes January of the
//! next year, 31 February becomes early March) and then checking that nothing
//! moved. No month-length table is consulted.

use std::{cmp::Ordering, str::FromStr, sync::LazyLock};

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    DATE_LAYOUT, DATE_PATTERN, FormatError, MAX_YEAR, consts::MONTHS_PER_YEAR, prelude::*,
};

#[allow(clippy::expect_used)]
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("date pattern is a valid regex"));

/// Validates `DD/MM/YYYY` text and returns the date it names.
///
/// Returns `None` for anything that is not exactly two digits, `/`, two
/// digits, `/`, four digits, and for well-shaped text naming a date that does
/// not exist (`31/02/2023`, `29/02/2021`, `01/13/2021`). Any year from `0000`
/// to `9999` is accepted; bounding it is left to a [`YearWindow`].
///
/// [`YearWindow`]: crate::YearWindow
pub fn parse_strict_date(text: &str) -> Option<CalendarDate> {
    let Some(triple) = DateTriple::scan(text) else {
        tracing::trace!(input = text, "rejected date not in {DATE_LAYOUT} layout");
        return None;
    };
    CalendarDate::try_from(triple).ok()
}

/// Day, month and year as written, before any calendar check.
///
/// Components may be out of range (`00`, `13`, day 31 in a 30-day month);
/// such a triple simply fails to become a [`CalendarDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{day:02}/{month:02}/{year:04}")]
pub struct DateTriple {
    pub day:   u8,
    pub month: u8,
    pub year:  u16,
}

impl DateTriple {
    /// Creates a triple from components in written order (no validation)
    pub const fn new(day: u8, month: u8, year: u16) -> Self {
        Self { day, month, year }
    }

    /// Extracts the components of `DD/MM/YYYY` text, or `None` if the text
    /// does not have that exact layout.
    pub fn scan(text: &str) -> Option<Self> {
        let (_, [day, month, year]) = DATE_RE.captures(text)?.extract();
        Some(Self {
            day:   day.parse().ok()?,
            month: month.parse().ok()?,
            year:  year.parse().ok()?,
        })
    }

    /// The date a lenient constructor would produce for these components.
    ///
    /// Months outside `1..=12` carry into the year, day `0` is the last day of
    /// the previous month and days past the end of the month carry forward.
    fn normalize(self) -> Option<NaiveDate> {
        let months = i32::from(self.year) * MONTHS_PER_YEAR + i32::from(self.month) - 1;
        let month = months.rem_euclid(MONTHS_PER_YEAR).unsigned_abs() + 1;
        let first = NaiveDate::from_ymd_opt(months.div_euclid(MONTHS_PER_YEAR), month, 1)?;

        match self.day.checked_sub(1) {
            Some(offset) => first.checked_add_days(Days::new(u64::from(offset))),
            None => first.pred_opt(),
        }
    }

    fn matches(self, date: NaiveDate) -> bool {
        date.year() == i32::from(self.year)
            && date.month() == u32::from(self.month)
            && date.day() == u32::from(self.day)
    }
}

/// A real Gregorian date with a four-digit year, as accepted from
/// `DD/MM/YYYY` text. No time of day and no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{triple}")]
pub struct CalendarDate {
    date:   NaiveDate,
    triple: DateTriple,
}

impl CalendarDate {
    /// Builds a date from numeric components.
    ///
    /// # Errors
    /// Returns `FormatError::NonexistentDate` if the components do not name a
    /// real date or the year has more than four digits.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, FormatError> {
        Self::try_from(DateTriple::new(day, month, year))
    }

    /// Returns the day of the month (1-based)
    pub const fn day(&self) -> u8 {
        self.triple.day
    }

    /// Returns the month (1-based, January is 1)
    pub const fn month(&self) -> u8 {
        self.triple.month
    }

    /// Returns the four-digit year
    pub const fn year(&self) -> u16 {
        self.triple.year
    }

    /// Returns the components as they were written
    pub const fn triple(&self) -> DateTriple {
        self.triple
    }

    /// Returns the chrono date for calendar arithmetic
    pub const fn naive_date(&self) -> NaiveDate {
        self.date
    }
}

impl TryFrom<DateTriple> for CalendarDate {
    type Error = FormatError;

    fn try_from(triple: DateTriple) -> Result<Self, Self::Error> {
        if triple.year > MAX_YEAR {
            tracing::trace!(%triple, "rejected date with a year past {MAX_YEAR}");
            return Err(FormatError::NonexistentDate(triple));
        }

        match triple.normalize() {
            Some(date) if triple.matches(date) => Ok(Self { date, triple }),
            normalized => {
                tracing::trace!(%triple, ?normalized, "rejected nonexistent calendar date");
                Err(FormatError::NonexistentDate(triple))
            },
        }
    }
}

impl FromStr for CalendarDate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let triple = DateTriple::scan(s).ok_or_else(|| {
            tracing::trace!(input = s, "rejected date not in {DATE_LAYOUT} layout");
            FormatError::DateLayout(s.to_owned())
        })?;
        Self::try_from(triple)
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.date
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
