mod conflict;

use sqlx::postgres::PgDatabaseError;

pub use conflict::{BookingConflict, BookingConflictInfo, BookingWindow};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Database error: `{0}`")]
    DbError(sqlx::Error),

    #[error("Failed to read configuration file")]
    ConfigReadError,

    #[error("Failed to parse configuration file")]
    ConfigParseError,

    #[error("No record found by the given condition")]
    NotFound,

    #[error("Selected dates must be within the available range")]
    OutOfRange,

    #[error("End date cannot be before start date")]
    InvertedRange,

    #[error("These dates are not available")]
    DateConflict(BookingConflictInfo),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Item is not available for rent: `{0}`")]
    ItemUnavailable(String),

    #[error("Invalid booking id: `{0}`")]
    InvalidBookingId(i64),

    #[error("Invalid renter id: `{0}`")]
    InvalidRenterId(String),

    #[error("Invalid item id: `{0}`")]
    InvalidItemId(String),

    #[error("Invalid page size: `{0}`")]
    InvalidPageSize(i64),

    #[error("Invalid cursor: `{0}`")]
    InvalidCursor(i64),

    #[error("Invalid status: `{0}`")]
    InvalidStatus(i32),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // db errors are never compared by content
            (Error::DbError(_), Error::DbError(_)) => true,
            (Error::ConfigReadError, Error::ConfigReadError) => true,
            (Error::ConfigParseError, Error::ConfigParseError) => true,
            (Error::NotFound, Error::NotFound) => true,
            (Error::OutOfRange, Error::OutOfRange) => true,
            (Error::InvertedRange, Error::InvertedRange) => true,
            (Error::DateConflict(v1), Error::DateConflict(v2)) => v1 == v2,
            (Error::InvalidInput(v1), Error::InvalidInput(v2)) => v1 == v2,
            (Error::ItemUnavailable(v1), Error::ItemUnavailable(v2)) => v1 == v2,
            (Error::InvalidBookingId(v1), Error::InvalidBookingId(v2)) => v1 == v2,
            (Error::InvalidRenterId(v1), Error::InvalidRenterId(v2)) => v1 == v2,
            (Error::InvalidItemId(v1), Error::InvalidItemId(v2)) => v1 == v2,
            (Error::InvalidPageSize(v1), Error::InvalidPageSize(v2)) => v1 == v2,
            (Error::InvalidCursor(v1), Error::InvalidCursor(v2)) => v1 == v2,
            (Error::InvalidStatus(v1), Error::InvalidStatus(v2)) => v1 == v2,
            _ => false,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(e) => {
                let err: &PgDatabaseError = e.downcast_ref();
                match (err.code(), err.schema(), err.table()) {
                    // exclusion constraint on overlapping bookings of one item
                    ("23P01", Some("rental"), Some("bookings")) => {
                        let info = match err.detail() {
                            Some(detail) => detail.parse().unwrap_or_else(|_| {
                                BookingConflictInfo::Unparsed(detail.to_string())
                            }),
                            None => BookingConflictInfo::Unparsed(err.message().to_string()),
                        };
                        Error::DateConflict(info)
                    }
                    _ => Error::DbError(sqlx::Error::Database(e)),
                }
            }
            sqlx::Error::RowNotFound => Error::NotFound,
            _ => Error::DbError(e),
        }
    }
}

impl From<Error> for tonic::Status {
    fn from(e: Error) -> Self {
        match e {
            Error::DbError(_) | Error::ConfigReadError | Error::ConfigParseError => {
                tonic::Status::internal(e.to_string())
            }
            Error::OutOfRange
            | Error::InvertedRange
            | Error::InvalidInput(_)
            | Error::InvalidBookingId(_)
            | Error::InvalidRenterId(_)
            | Error::InvalidItemId(_)
            | Error::InvalidPageSize(_)
            | Error::InvalidCursor(_)
            | Error::InvalidStatus(_) => tonic::Status::invalid_argument(e.to_string()),
            Error::DateConflict(info) => {
                tonic::Status::failed_precondition(format!("Date conflict: {}", info))
            }
            Error::ItemUnavailable(_) => tonic::Status::failed_precondition(e.to_string()),
            Error::NotFound => tonic::Status::not_found("No record found by the given condition"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn validation_errors_should_map_to_invalid_argument() {
        for e in [
            Error::OutOfRange,
            Error::InvertedRange,
            Error::InvalidInput("price must be positive".into()),
            Error::InvalidPageSize(1000),
        ] {
            let status: tonic::Status = e.into();
            assert_eq!(status.code(), Code::InvalidArgument);
        }
    }

    #[test]
    fn conflict_should_map_to_failed_precondition() {
        let info = BookingConflictInfo::Unparsed("overlap".into());
        let status: tonic::Status = Error::DateConflict(info).into();
        assert_eq!(status.code(), Code::FailedPrecondition);
        assert_eq!(status.message(), "Date conflict: overlap");
    }

    #[test]
    fn row_not_found_should_become_not_found() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert_eq!(err, Error::NotFound);
        let status: tonic::Status = err.into();
        assert_eq!(status.code(), Code::NotFound);
    }
}
