use std::{fmt, ops::Bound};

use chrono::NaiveDate;
use prost_types::Timestamp;
use sqlx::postgres::types::PgRange;

use crate::{date_to_timestamp, timestamp_to_date, Error};

/// A run of whole calendar days, `start` and `end` both included.
///
/// `new` does not reject `end < start`: a candidate picked by a renter is
/// validated as is, so the caller can be told which rule it broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// build a range from wire timestamps, dropping the time of day
    pub fn from_timestamps(
        start: Option<&Timestamp>,
        end: Option<&Timestamp>,
    ) -> Result<Self, Error> {
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self::new(
                timestamp_to_date(start)?,
                timestamp_to_date(end)?,
            )),
            _ => Err(Error::InvalidInput(
                "start and end dates are required".into(),
            )),
        }
    }

    pub fn to_timestamps(&self) -> (Timestamp, Timestamp) {
        (date_to_timestamp(self.start), date_to_timestamp(self.end))
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// number of days covered, both ends counted. a same-day range is one day.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// `other` lies entirely inside this range
    pub fn contains(&self, other: &DateRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// the two ranges share at least one day
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// postgres canonical daterange form: `[start, end + 1)`
    pub fn to_pg_range(&self) -> Result<PgRange<NaiveDate>, Error> {
        let upper = self.end.succ_opt().ok_or_else(|| {
            Error::InvalidInput(format!("date out of supported range: {}", self.end))
        })?;
        Ok(PgRange {
            start: Bound::Included(self.start),
            end: Bound::Excluded(upper),
        })
    }

    pub fn from_pg_range(range: &PgRange<NaiveDate>) -> Result<Self, Error> {
        let start = match range.start {
            Bound::Included(d) => Some(d),
            Bound::Excluded(d) => d.succ_opt(),
            Bound::Unbounded => return Err(Error::InvalidInput("unbounded date range".into())),
        };
        let end = match range.end {
            Bound::Included(d) => Some(d),
            Bound::Excluded(d) => d.pred_opt(),
            Bound::Unbounded => return Err(Error::InvalidInput("unbounded date range".into())),
        };
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self::new(start, end)),
            _ => Err(Error::InvalidInput("date out of supported range".into())),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
