mod config;
mod error;
mod pager;
mod pb;
mod pricing;
mod types;
mod utils;
mod validator;

pub use config::*;
pub use error::{BookingConflict, BookingConflictInfo, BookingWindow, Error};
pub use pb::*;
pub use pricing::{parse_price, price, Quote};
pub use types::*;
pub use utils::*;
pub use validator::validate_booking;

pub type BookingId = i64;

/// validate the data structure, raise error if invalid
pub trait Validator {
    fn validate(&self) -> Result<(), Error>;
}

/// validate and normalize the data structure
pub trait Normalizer: Validator {
    /// caller should call normalize to make sure the data structure is ready to use
    fn normalize(&mut self) -> Result<(), Error> {
        self.validate()?;
        self.do_normalize();
        Ok(())
    }

    /// user shall implement do_normalize() to normalize the data structure
    fn do_normalize(&mut self);
}

/// database equivalent of the "booking_status" enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
pub enum RentalStatus {
    Unknown,
    Pending,
    Confirmed,
    Cancelled,
}

/// database equivalent of the "item_status" enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "item_status", rename_all = "lowercase")]
pub enum ListingStatus {
    Unknown,
    Available,
    Rented,
    Unavailable,
}

impl Validator for BookingId {
    fn validate(&self) -> Result<(), Error> {
        if *self <= 0 {
            Err(Error::InvalidBookingId(*self))
        } else {
            Ok(())
        }
    }
}

/// render a query into a parameterized postgres statement
pub trait ToSql {
    fn to_sql(&self) -> sqlx::QueryBuilder<'_, sqlx::Postgres>;
}
