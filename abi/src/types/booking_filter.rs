use sqlx::{Postgres, QueryBuilder};

use crate::{
    pager::{Id, PageInfo, Pager, Paginator},
    types::{validate_page_size, validate_status},
    Booking, BookingFilter, BookingFilterBuilder, BookingStatus, Error, FilterPager, Normalizer,
    ToSql, Validator,
};

impl BookingFilterBuilder {
    pub fn build(&self) -> Result<BookingFilter, Error> {
        let mut filter = self
            .private_build()
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        filter.normalize()?;
        Ok(filter)
    }
}

impl BookingFilter {
    /// trims `data` to one page; `total` counts every match of the filter
    /// regardless of the cursor
    pub fn get_pager(&self, data: &mut Vec<Booking>, total: i64) -> FilterPager {
        let page_info = self.page_info();
        let Pager { prev, next } = page_info.get_pager(data);
        FilterPager {
            prev,
            next,
            total: Some(total),
        }
    }

    /// `SELECT count(*)` over the same conditions as `to_sql`, cursor ignored
    pub fn to_count_sql(&self) -> QueryBuilder<'_, Postgres> {
        let mut qb = QueryBuilder::new("SELECT count(*) FROM rental.bookings WHERE status = ");
        self.push_conditions(&mut qb);
        qb
    }

    fn push_conditions<'a>(&'a self, qb: &mut QueryBuilder<'a, Postgres>) {
        let status = BookingStatus::from_i32(self.status).unwrap_or(BookingStatus::Pending);
        qb.push_bind(status.to_string())
            .push("::rental.booking_status");

        if !self.item_id.is_empty() {
            qb.push(" AND item_id = ")
                .push_bind(self.item_id.as_str())
                .push("::uuid");
        }
        if !self.renter_id.is_empty() {
            qb.push(" AND renter_id = ")
                .push_bind(self.renter_id.as_str());
        }
    }

    fn page_info(&self) -> PageInfo {
        PageInfo {
            cursor: self.cursor,
            page_size: self.page_size,
        }
    }
}

impl Validator for BookingFilter {
    fn validate(&self) -> Result<(), Error> {
        validate_page_size(self.page_size)?;

        if let Some(cursor) = self.cursor {
            if cursor < 0 {
                return Err(Error::InvalidCursor(cursor));
            }
        }

        validate_status(self.status)?;
        Ok(())
    }
}

impl Normalizer for BookingFilter {
    fn do_normalize(&mut self) {
        if self.status == BookingStatus::Unknown as i32 {
            self.status = BookingStatus::Pending as i32;
        }
    }
}

impl ToSql for BookingFilter {
    fn to_sql(&self) -> QueryBuilder<'_, Postgres> {
        let mut qb = QueryBuilder::new("SELECT * FROM rental.bookings WHERE status = ");
        self.push_conditions(&mut qb);

        if let Some(cursor) = self.cursor {
            let op = if self.desc {
                " AND id < "
            } else {
                " AND id > "
            };
            qb.push(op).push_bind(cursor);
        }

        let direction = if self.desc { "DESC" } else { "ASC" };
        // one extra row tells whether a next page exists
        qb.push(format!(" ORDER BY id {direction} LIMIT "))
            .push_bind(self.page_size + 1);
        qb
    }
}

impl Id for Booking {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_should_default_to_pending() {
        let filter = BookingFilterBuilder::default()
            .renter_id("alice")
            .build()
            .unwrap();
        assert_eq!(filter.status, BookingStatus::Pending as i32);
        assert_eq!(filter.page_size, 10);
        assert_eq!(filter.cursor, None);
    }

    #[test]
    fn filter_should_reject_negative_cursor() {
        let err = BookingFilterBuilder::default()
            .cursor(-1)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::InvalidCursor(-1));
    }

    #[test]
    fn filter_should_reject_unknown_status_value() {
        let err = BookingFilterBuilder::default()
            .status(42)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::InvalidStatus(42));
    }

    #[test]
    fn filter_to_sql_should_page_after_cursor() {
        let filter = BookingFilterBuilder::default()
            .renter_id("alice")
            .status(BookingStatus::Confirmed as i32)
            .cursor(100)
            .build()
            .unwrap();
        assert_eq!(
            filter.to_sql().sql(),
            "SELECT * FROM rental.bookings WHERE status = $1::rental.booking_status \
             AND renter_id = $2 AND id > $3 ORDER BY id ASC LIMIT $4"
        );
    }

    #[test]
    fn filter_to_sql_desc_should_page_before_cursor() {
        let filter = BookingFilterBuilder::default()
            .item_id("6f1c2d7e-0b55-4c3e-9a36-1f0c7bb0d6a1")
            .cursor(100)
            .desc(true)
            .build()
            .unwrap();
        assert_eq!(
            filter.to_sql().sql(),
            "SELECT * FROM rental.bookings WHERE status = $1::rental.booking_status \
             AND item_id = $2::uuid AND id < $3 ORDER BY id DESC LIMIT $4"
        );
    }

    #[test]
    fn get_pager_should_drop_the_extra_row() {
        let filter = BookingFilterBuilder::default().build().unwrap();
        let mut data: Vec<Booking> = (1..=11)
            .map(|id| Booking {
                id,
                ..Default::default()
            })
            .collect();
        let pager = filter.get_pager(&mut data, 23);
        assert_eq!(data.len(), 10);
        assert_eq!(pager.next, Some(10));
        assert_eq!(pager.prev, None);
        assert_eq!(pager.total, Some(23));
    }

    #[test]
    fn count_sql_should_ignore_cursor() {
        let filter = BookingFilterBuilder::default()
            .renter_id("alice")
            .cursor(100)
            .build()
            .unwrap();
        assert_eq!(
            filter.to_count_sql().sql(),
            "SELECT count(*) FROM rental.bookings WHERE status = $1::rental.booking_status \
             AND renter_id = $2"
        );
    }
}
