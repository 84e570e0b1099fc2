use std::fmt::{Display, Formatter};

use time::{Date, Month};

use crate::{UtcDateTime, ValidationError};

/// Inclusive calendar-date range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// January 1st through December 31st of `year`.
    pub fn calendar_year(year: i32) -> Result<Self, ValidationError> {
        let invalid = |_| ValidationError::InvalidCalendarYear { year };
        let start = Date::from_calendar_date(year, Month::January, 1).map_err(invalid)?;
        let end = Date::from_calendar_date(year, Month::December, 31).map_err(invalid)?;
        Self::new(start, end)
    }

    pub const fn start(self) -> Date {
        self.start
    }

    pub const fn end(self) -> Date {
        self.end
    }

    pub fn contains(self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(self) -> i64 {
        (self.end - self.start).whole_days() + 1
    }

    /// Half-open unix-second bounds `[start 00:00, day after end 00:00)`.
    pub fn unix_bounds(self) -> (i64, i64) {
        let start = UtcDateTime::start_of_day(self.start).unix_timestamp();
        let end = match self.end.next_day() {
            Some(next) => UtcDateTime::start_of_day(next).unix_timestamp(),
            None => UtcDateTime::start_of_day(self.end).unix_timestamp() + 86_400,
        };
        (start, end)
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Fixed, descending set of whole years offered for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    newest: i32,
    oldest: i32,
}

impl YearRange {
    pub fn new(newest: i32, oldest: i32) -> Result<Self, ValidationError> {
        if newest < oldest {
            return Err(ValidationError::InvalidYearRange { newest, oldest });
        }
        Ok(Self { newest, oldest })
    }

    pub const fn newest(self) -> i32 {
        self.newest
    }

    pub const fn oldest(self) -> i32 {
        self.oldest
    }

    /// The preselected year (first option in the list).
    pub const fn default_year(self) -> i32 {
        self.newest
    }

    /// Selectable years, newest first.
    pub fn years(self) -> impl Iterator<Item = i32> {
        (self.oldest..=self.newest).rev()
    }

    pub fn contains(self, year: i32) -> bool {
        self.oldest <= year && year <= self.newest
    }

    pub fn validate(self, year: i32) -> Result<i32, ValidationError> {
        if self.contains(year) {
            Ok(year)
        } else {
            Err(ValidationError::YearOutOfRange {
                year,
                newest: self.newest,
                oldest: self.oldest,
            })
        }
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            newest: 2023,
            oldest: 2018,
        }
    }
}
