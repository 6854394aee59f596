use chrono::{DateTime, Datelike, NaiveDate, Utc};
use prost_types::Timestamp;

use crate::Error;

/// years a booking or listing date may fall in; postgres `date` and the
/// `[start, end + 1)` range form are always representable inside it
const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

pub fn convert_to_utc_time(ts: &Timestamp) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(ts.nanos)
        .ok()
        .filter(|n| *n < 1_000_000_000)?;
    DateTime::from_timestamp(ts.seconds, nanos)
}

pub fn convert_to_timestamp(dt: DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as _,
    }
}

/// the calendar day a timestamp falls on, in UTC. time of day is dropped.
pub fn timestamp_to_date(ts: &Timestamp) -> Result<NaiveDate, Error> {
    let date = convert_to_utc_time(ts)
        .ok_or_else(|| Error::InvalidInput("invalid timestamp".into()))?
        .date_naive();
    if !SUPPORTED_YEARS.contains(&date.year()) {
        return Err(Error::InvalidInput(format!(
            "date out of supported range: {}",
            date
        )));
    }
    Ok(date)
}

/// midnight UTC of the given day
pub fn date_to_timestamp(date: NaiveDate) -> Timestamp {
    convert_to_timestamp(date.and_time(chrono::NaiveTime::MIN).and_utc())
}
