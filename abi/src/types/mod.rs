mod booking;
mod booking_filter;
mod booking_query;
mod date_range;
mod item;
mod item_filter;
mod request;
mod status;

pub use date_range::DateRange;

use crate::{BookingStatus, Error};

/// page sizes accepted by query and filter
pub(crate) fn validate_page_size(page_size: i64) -> Result<(), Error> {
    if !(10..=100).contains(&page_size) {
        return Err(Error::InvalidPageSize(page_size));
    }
    Ok(())
}

pub(crate) fn validate_status(status: i32) -> Result<(), Error> {
    if BookingStatus::from_i32(status).is_none() {
        return Err(Error::InvalidStatus(status));
    }
    Ok(())
}

/// `%term%` for ILIKE, with the pattern metacharacters escaped
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_should_be_bounded() {
        assert!(validate_page_size(10).is_ok());
        assert!(validate_page_size(100).is_ok());
        assert_eq!(
            validate_page_size(9).unwrap_err(),
            Error::InvalidPageSize(9)
        );
        assert_eq!(
            validate_page_size(101).unwrap_err(),
            Error::InvalidPageSize(101)
        );
    }

    #[test]
    fn like_pattern_should_escape_wildcards() {
        assert_eq!(like_pattern("drone"), "%drone%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }
}
