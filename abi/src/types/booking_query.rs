use chrono::NaiveDate;
use sqlx::{postgres::types::PgRange, Postgres, QueryBuilder};

use crate::{
    types::{validate_page_size, validate_status},
    BookingQuery, BookingQueryBuilder, BookingStatus, DateRange, Error, Normalizer, ToSql,
    Validator,
};

impl BookingQueryBuilder {
    pub fn build(&self) -> Result<BookingQuery, Error> {
        let mut query = self
            .private_build()
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        query.normalize()?;
        Ok(query)
    }
}

impl BookingQuery {
    /// the days the query is restricted to, if any
    pub fn date_range(&self) -> Result<Option<DateRange>, Error> {
        match (self.start.as_ref(), self.end.as_ref()) {
            (None, None) => Ok(None),
            (start, end) => {
                let range = DateRange::from_timestamps(start, end)?;
                if range.is_inverted() {
                    return Err(Error::InvertedRange);
                }
                Ok(Some(range))
            }
        }
    }

    fn during(&self) -> Result<Option<PgRange<NaiveDate>>, Error> {
        self.date_range()?.map(|r| r.to_pg_range()).transpose()
    }
}

impl Validator for BookingQuery {
    fn validate(&self) -> Result<(), Error> {
        validate_page_size(self.page_size)?;
        validate_status(self.status)?;
        self.during()?;
        Ok(())
    }
}

impl Normalizer for BookingQuery {
    fn do_normalize(&mut self) {
        if self.page < 1 {
            self.page = 1;
        }
    }
}

/// expects a validated query: a date range that fails validation is left out
impl ToSql for BookingQuery {
    fn to_sql(&self) -> QueryBuilder<'_, Postgres> {
        let mut qb = QueryBuilder::new("SELECT * FROM rental.bookings WHERE TRUE");

        if !self.item_id.is_empty() {
            qb.push(" AND item_id = ")
                .push_bind(self.item_id.as_str())
                .push("::uuid");
        }
        if !self.renter_id.is_empty() {
            qb.push(" AND renter_id = ")
                .push_bind(self.renter_id.as_str());
        }
        if let Some(status) = BookingStatus::from_i32(self.status) {
            if status != BookingStatus::Unknown {
                qb.push(" AND status = ")
                    .push_bind(status.to_string())
                    .push("::rental.booking_status");
            }
        }
        if let Ok(Some(during)) = self.during() {
            qb.push(" AND during && ").push_bind(during);
        }

        let direction = if self.desc { "DESC" } else { "ASC" };
        qb.push(format!(
            " ORDER BY lower(during) {direction}, id {direction}"
        ));
        qb.push(" LIMIT ")
            .push_bind(self.page_size)
            .push(" OFFSET ")
            .push_bind((self.page.max(1) - 1) * self.page_size);
        qb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_to_timestamp;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn builder_should_apply_defaults() {
        let query = BookingQueryBuilder::default()
            .renter_id("alice")
            .build()
            .unwrap();
        assert_eq!(query.page_size, 10);
        assert_eq!(query.page, 1);
        assert_eq!(query.status, BookingStatus::Unknown as i32);
    }

    #[test]
    fn builder_should_reject_bad_page_size() {
        let err = BookingQueryBuilder::default()
            .page_size(500)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::InvalidPageSize(500));
    }

    #[test]
    fn builder_should_reject_inverted_dates() {
        let err = BookingQueryBuilder::default()
            .start(date_to_timestamp(day(6, 20)))
            .end(date_to_timestamp(day(6, 1)))
            .build()
            .unwrap_err();
        assert_eq!(err, Error::InvertedRange);
    }

    #[test]
    fn last_representable_date_should_be_rejected() {
        let err = BookingQueryBuilder::default()
            .start(date_to_timestamp(day(6, 1)))
            .end(date_to_timestamp(NaiveDate::MAX))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        // built without validation, rendering must still not fail
        let query = BookingQuery {
            start: Some(date_to_timestamp(day(6, 1))),
            end: Some(date_to_timestamp(NaiveDate::MAX)),
            page_size: 10,
            ..Default::default()
        };
        assert_eq!(
            query.to_sql().sql(),
            "SELECT * FROM rental.bookings WHERE TRUE ORDER BY lower(during) ASC, id ASC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn to_sql_should_bind_every_filter() {
        let query = BookingQueryBuilder::default()
            .item_id("6f1c2d7e-0b55-4c3e-9a36-1f0c7bb0d6a1")
            .renter_id("alice")
            .status(BookingStatus::Confirmed as i32)
            .start(date_to_timestamp(day(6, 1)))
            .end(date_to_timestamp(day(6, 30)))
            .desc(true)
            .page(2)
            .build()
            .unwrap();
        let qb = query.to_sql();
        assert_eq!(
            qb.sql(),
            "SELECT * FROM rental.bookings WHERE TRUE AND item_id = $1::uuid AND renter_id = $2 \
             AND status = $3::rental.booking_status AND during && $4 \
             ORDER BY lower(during) DESC, id DESC LIMIT $5 OFFSET $6"
        );
    }

    #[test]
    fn to_sql_should_skip_empty_filters() {
        let query = BookingQueryBuilder::default().build().unwrap();
        let qb = query.to_sql();
        assert_eq!(
            qb.sql(),
            "SELECT * FROM rental.bookings WHERE TRUE ORDER BY lower(during) ASC, id ASC LIMIT $1 OFFSET $2"
        );
    }
}
