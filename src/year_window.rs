use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::{ALBUM_EARLIEST_YEAR, CalendarDate, prelude::*};

/// An inclusive range of acceptable years, applied on top of a strict parse.
///
/// The date parser accepts every four-digit year; a window is the place to
/// say which of those an application considers plausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{earliest}..={latest}")]
pub struct YearWindow {
    earliest: u16,
    latest:   u16,
}

/// Error type for year window construction and checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Earliest bound is after the latest bound.
    #[error("Invalid year window: earliest ({earliest}) is after latest ({latest})")]
    Inverted { earliest: u16, latest: u16 },

    /// Year falls outside the window.
    #[error("Year must be between {earliest} and {latest}")]
    OutOfRange { year: u16, earliest: u16, latest: u16 },

    /// The clock reports a year that does not fit a four-digit bound.
    #[error("Current year {0} cannot bound a year window")]
    CurrentYear(i32),
}

impl YearWindow {
    /// Creates a window with validation.
    ///
    /// # Errors
    /// Returns `WindowError::Inverted` if earliest > latest.
    pub const fn new(earliest: u16, latest: u16) -> Result<Self, WindowError> {
        if earliest > latest {
            return Err(WindowError::Inverted { earliest, latest });
        }
        Ok(Self { earliest, latest })
    }

    /// A window from `earliest` through the current local year.
    ///
    /// # Errors
    /// Returns `WindowError::Inverted` if `earliest` is in the future, or
    /// `WindowError::CurrentYear` if the clock's year is not representable.
    pub fn up_to_current_year(earliest: u16) -> Result<Self, WindowError> {
        let now = Local::now().year();
        let latest = u16::try_from(now).map_err(|_| WindowError::CurrentYear(now))?;
        Self::new(earliest, latest)
    }

    /// The window the album services apply to release years.
    ///
    /// # Errors
    /// See [`YearWindow::up_to_current_year`].
    pub fn album_years() -> Result<Self, WindowError> {
        Self::up_to_current_year(ALBUM_EARLIEST_YEAR)
    }

    /// Returns the earliest accepted year (inclusive)
    pub const fn earliest(&self) -> u16 {
        self.earliest
    }

    /// Returns the latest accepted year (inclusive)
    pub const fn latest(&self) -> u16 {
        self.latest
    }

    /// Checks if `year` lies within the window, bounds included
    pub const fn contains(&self, year: u16) -> bool {
        self.earliest <= year && year <= self.latest
    }

    /// Passes `year` through if it lies in the window.
    ///
    /// # Errors
    /// Returns `WindowError::OutOfRange` otherwise.
    pub fn check(&self, year: u16) -> Result<u16, WindowError> {
        if self.contains(year) {
            Ok(year)
        } else {
            tracing::debug!(year, window = %self, "year outside window");
            Err(WindowError::OutOfRange {
                year,
                earliest: self.earliest,
                latest: self.latest,
            })
        }
    }

    /// Passes `date` through if its year lies in the window.
    ///
    /// # Errors
    /// Returns `WindowError::OutOfRange` otherwise.
    pub fn check_date(&self, date: CalendarDate) -> Result<CalendarDate, WindowError> {
        self.check(date.year()).map(|_| date)
    }
}

impl<'de> Deserialize<'de> for YearWindow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Bounds {
            earliest: u16,
            latest:   u16,
        }

        let Bounds { earliest, latest } = Bounds::deserialize(deserializer)?;
        Self::new(earliest, latest).map_err(serde::de::Error::custom)
    }
}
