// postgres reports exclusion violations like:
// "Key (item_id, during)=(b1b2..., [2024-06-14,2024-06-17)) conflicts with existing key (item_id, during)=(b1b2..., [2024-06-10,2024-06-16))."

use chrono::NaiveDate;
use regex::Regex;
use std::{collections::HashMap, convert::Infallible, fmt, str::FromStr};

use crate::DateRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingConflictInfo {
    Parsed(BookingConflict),
    Unparsed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConflict {
    pub new: BookingWindow,
    pub old: BookingWindow,
}

/// the days an item is held by one booking, both ends inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWindow {
    pub item_id: String,
    pub range: DateRange,
}

impl fmt::Display for BookingConflictInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingConflictInfo::Parsed(c) => write!(
                f,
                "{} overlaps {} on item {}",
                c.new.range, c.old.range, c.old.item_id
            ),
            BookingConflictInfo::Unparsed(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for BookingConflictInfo {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(conflict) = s.parse() {
            Ok(Self::Parsed(conflict))
        } else {
            Ok(Self::Unparsed(s.to_string()))
        }
    }
}

impl FromStr for BookingConflict {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParsedInfo::from_str(s)?.try_into()
    }
}

impl TryFrom<ParsedInfo> for BookingConflict {
    type Error = ();

    fn try_from(value: ParsedInfo) -> Result<Self, Self::Error> {
        Ok(Self {
            new: value.new.try_into()?,
            old: value.old.try_into()?,
        })
    }
}

impl TryFrom<HashMap<String, String>> for BookingWindow {
    type Error = ();

    fn try_from(value: HashMap<String, String>) -> Result<Self, Self::Error> {
        let during = value.get("during").ok_or(())?.replace('"', "");

        let mut split = during.splitn(2, ',');
        let start = parse_date(split.next().ok_or(())?)?;
        // canonical daterange upper bound is exclusive
        let end = parse_date(split.next().ok_or(())?)?.pred_opt().ok_or(())?;

        Ok(Self {
            item_id: value.get("item_id").ok_or(())?.to_string(),
            range: DateRange::new(start, end),
        })
    }
}

struct ParsedInfo {
    new: HashMap<String, String>,
    old: HashMap<String, String>,
}

impl FromStr for ParsedInfo {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let re = Regex::new(
            r#"\((?P<k1>[a-zA-Z0-9_-]+)\s*,\s*(?P<k2>[a-zA-Z0-9_-]+)\)=\((?P<v1>[a-zA-Z0-9_-]+)\s*,\s*\[(?P<v2>[^\)\]]+)"#,
        )
        .map_err(|_| ())?;

        let mut maps = vec![];
        for cap in re.captures_iter(s) {
            let mut map = HashMap::new();
            map.insert(cap["k1"].to_string(), cap["v1"].to_string());
            map.insert(cap["k2"].to_string(), cap["v2"].to_string());
            maps.push(map);
        }

        if maps.len() != 2 {
            return Err(());
        }

        let old = maps.pop().ok_or(())?;
        let new = maps.pop().ok_or(())?;
        Ok(Self { new, old })
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, ()> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TEXT: &str = "Key (item_id, during)=(6f1c2d7e-0b55-4c3e-9a36-1f0c7bb0d6a1, [2024-06-14,2024-06-17)) conflicts with existing key (item_id, during)=(6f1c2d7e-0b55-4c3e-9a36-1f0c7bb0d6a1, [2024-06-10,2024-06-16)).";

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn parsed_info_should_work() {
        let parsed = TEST_TEXT.parse::<ParsedInfo>().unwrap();
        assert_eq!(
            parsed.new.get("item_id").unwrap(),
            "6f1c2d7e-0b55-4c3e-9a36-1f0c7bb0d6a1"
        );
        assert_eq!(parsed.new.get("during").unwrap(), "2024-06-14,2024-06-17");
        assert_eq!(parsed.old.get("during").unwrap(), "2024-06-10,2024-06-16");
    }

    #[test]
    fn hash_map_to_booking_window_should_make_end_inclusive() {
        let mut map = HashMap::new();
        map.insert("item_id".to_string(), "drill-1".to_string());
        map.insert("during".to_string(), "2024-06-10,2024-06-16".to_string());
        let window: BookingWindow = map.try_into().unwrap();
        assert_eq!(window.item_id, "drill-1");
        assert_eq!(window.range, DateRange::new(day(6, 10), day(6, 15)));
    }

    #[test]
    fn conflict_error_message_should_parse() {
        let info = TEST_TEXT.parse::<BookingConflictInfo>().unwrap();
        let BookingConflictInfo::Parsed(conflict) = info else {
            panic!("expected a parsed conflict");
        };
        assert_eq!(conflict.new.range, DateRange::new(day(6, 14), day(6, 16)));
        assert_eq!(conflict.old.range, DateRange::new(day(6, 10), day(6, 15)));
        assert_eq!(conflict.old.item_id, conflict.new.item_id);
    }

    #[test]
    fn garbage_should_stay_unparsed() {
        let info = "something else".parse::<BookingConflictInfo>().unwrap();
        assert_eq!(info, BookingConflictInfo::Unparsed("something else".into()));
        assert_eq!(info.to_string(), "something else");
    }
}
