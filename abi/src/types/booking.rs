use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{
    postgres::{types::PgRange, PgRow},
    types::Uuid,
    FromRow, Row,
};

use crate::{Booking, BookingStatus, DateRange, Error, RentalStatus, Validator};

impl Booking {
    pub fn new_pending(
        renter_id: impl Into<String>,
        item_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        let (start, end) = DateRange::new(start, end).to_timestamps();
        Self {
            id: 0,
            item_id: item_id.into(),
            renter_id: renter_id.into(),
            start: Some(start),
            end: Some(end),
            status: BookingStatus::Pending as i32,
            total_price: String::new(),
        }
    }

    /// the booked days, time of day stripped
    pub fn date_range(&self) -> Result<DateRange, Error> {
        DateRange::from_timestamps(self.start.as_ref(), self.end.as_ref())
    }

    /// pending and confirmed bookings hold the item, cancelled ones do not
    pub fn is_active(&self) -> bool {
        matches!(
            BookingStatus::from_i32(self.status),
            Some(BookingStatus::Pending) | Some(BookingStatus::Confirmed)
        )
    }
}

impl Validator for Booking {
    fn validate(&self) -> Result<(), Error> {
        if self.renter_id.is_empty() {
            return Err(Error::InvalidRenterId(self.renter_id.clone()));
        }

        if self.item_id.is_empty() {
            return Err(Error::InvalidItemId(self.item_id.clone()));
        }

        self.date_range()?;
        Ok(())
    }
}

impl FromRow<'_, PgRow> for Booking {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let item_id: Uuid = row.try_get("item_id")?;
        let during: PgRange<NaiveDate> = row.try_get("during")?;
        let status: RentalStatus = row.try_get("status")?;
        let total_price: Decimal = row.try_get("total_price")?;

        let range = DateRange::from_pg_range(&during).map_err(|e| sqlx::Error::ColumnDecode {
            index: "during".to_string(),
            source: Box::new(e),
        })?;
        let (start, end) = range.to_timestamps();

        Ok(Self {
            id,
            item_id: item_id.to_string(),
            renter_id: row.try_get("renter_id")?,
            start: Some(start),
            end: Some(end),
            status: BookingStatus::from(status) as i32,
            total_price: total_price.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn new_pending_should_keep_the_days() {
        let booking = Booking::new_pending("alice", "drill-1", day(6, 16), day(6, 20));
        assert_eq!(booking.status, BookingStatus::Pending as i32);
        assert_eq!(
            booking.date_range().unwrap(),
            DateRange::new(day(6, 16), day(6, 20))
        );
        assert!(booking.is_active());
        assert!(booking.validate().is_ok());
    }

    #[test]
    fn validate_should_reject_missing_ids() {
        let booking = Booking::new_pending("", "drill-1", day(6, 16), day(6, 20));
        assert_eq!(
            booking.validate().unwrap_err(),
            Error::InvalidRenterId("".into())
        );

        let booking = Booking::new_pending("alice", "", day(6, 16), day(6, 20));
        assert_eq!(
            booking.validate().unwrap_err(),
            Error::InvalidItemId("".into())
        );
    }

    #[test]
    fn cancelled_booking_should_not_be_active() {
        let mut booking = Booking::new_pending("alice", "drill-1", day(6, 16), day(6, 20));
        booking.status = BookingStatus::Cancelled as i32;
        assert!(!booking.is_active());
    }
}
