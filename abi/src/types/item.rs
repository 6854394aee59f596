use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{
    postgres::{types::PgRange, PgRow},
    types::Uuid,
    FromRow, Row,
};

use crate::{parse_price, DateRange, Error, Item, ItemStatus, ListingStatus, Validator};

impl Item {
    pub fn new_available(
        owner_id: impl Into<String>,
        title: impl Into<String>,
        price_per_day: impl Into<String>,
        available_start: NaiveDate,
        available_end: NaiveDate,
    ) -> Self {
        let (start, end) = DateRange::new(available_start, available_end).to_timestamps();
        Self {
            owner_id: owner_id.into(),
            title: title.into(),
            price_per_day: price_per_day.into(),
            available_start: Some(start),
            available_end: Some(end),
            status: ItemStatus::Available as i32,
            ..Default::default()
        }
    }

    /// the window the owner allows bookings in
    pub fn availability(&self) -> Result<DateRange, Error> {
        let window =
            DateRange::from_timestamps(self.available_start.as_ref(), self.available_end.as_ref())?;
        if window.is_inverted() {
            return Err(Error::InvalidInput(
                "availability window ends before it starts".into(),
            ));
        }
        Ok(window)
    }

    pub fn daily_rate(&self) -> Result<Decimal, Error> {
        parse_price(&self.price_per_day)
    }

    pub fn is_rentable(&self) -> bool {
        ItemStatus::from_i32(self.status) == Some(ItemStatus::Available)
    }
}

impl Validator for Item {
    fn validate(&self) -> Result<(), Error> {
        if self.owner_id.is_empty() {
            return Err(Error::InvalidInput("owner is required".into()));
        }
        if self.title.trim().is_empty() {
            return Err(Error::InvalidInput("title is required".into()));
        }
        self.daily_rate()?;
        self.availability()?;
        Ok(())
    }
}

impl FromRow<'_, PgRow> for Item {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let id: Uuid = row.try_get("id")?;
        let availability: PgRange<NaiveDate> = row.try_get("availability")?;
        let status: ListingStatus = row.try_get("status")?;
        let price_per_day: Decimal = row.try_get("price_per_day")?;

        let window =
            DateRange::from_pg_range(&availability).map_err(|e| sqlx::Error::ColumnDecode {
                index: "availability".to_string(),
                source: Box::new(e),
            })?;
        let (start, end) = window.to_timestamps();

        Ok(Self {
            id: id.to_string(),
            owner_id: row.try_get("owner_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            location: row.try_get("location")?,
            image_url: row.try_get("image_url")?,
            price_per_day: price_per_day.to_string(),
            available_start: Some(start),
            available_end: Some(end),
            status: ItemStatus::from(status) as i32,
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
    fn valid_item_should_pass() {
        let item = Item::new_available("bob", "Electric Scooter", "20.00", day(6, 1), day(6, 30));
        assert!(item.validate().is_ok());
        assert!(item.is_rentable());
        assert_eq!(item.daily_rate().unwrap(), Decimal::new(2000, 2));
        assert_eq!(
            item.availability().unwrap(),
            DateRange::new(day(6, 1), day(6, 30))
        );
    }

    #[test]
    fn item_with_bad_price_should_be_rejected() {
        let item = Item::new_available("bob", "DJ Equipment", "0", day(6, 1), day(6, 30));
        assert!(matches!(item.validate(), Err(Error::InvalidInput(_))));

        let item = Item::new_available("bob", "DJ Equipment", "sixty", day(6, 1), day(6, 30));
        assert!(matches!(item.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn item_with_inverted_window_should_be_rejected() {
        let item = Item::new_available("bob", "Power Tools Set", "30", day(6, 30), day(6, 1));
        assert!(matches!(item.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn item_available_until_last_date_should_be_rejected() {
        let mut item = Item::new_available("bob", "Kayak", "40", day(6, 1), day(6, 30));
        item.available_end = Some(crate::date_to_timestamp(NaiveDate::MAX));
        assert!(matches!(item.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn item_with_too_high_price_should_be_rejected() {
        let item = Item::new_available("bob", "Kayak", "10000000000", day(6, 1), day(6, 30));
        assert!(matches!(item.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn item_without_title_should_be_rejected() {
        let item = Item::new_available("bob", "  ", "30", day(6, 1), day(6, 30));
        assert_eq!(
            item.validate().unwrap_err(),
            Error::InvalidInput("title is required".into())
        );
    }
}
