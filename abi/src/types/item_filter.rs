use sqlx::{Postgres, QueryBuilder};

use crate::{parse_price, types::like_pattern, Error, ItemFilter, ToSql, Validator};

impl ItemFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn by_search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Default::default()
        }
    }
}

impl Validator for ItemFilter {
    fn validate(&self) -> Result<(), Error> {
        let min = (!self.min_price.is_empty())
            .then(|| parse_price(&self.min_price))
            .transpose()?;
        let max = (!self.max_price.is_empty())
            .then(|| parse_price(&self.max_price))
            .transpose()?;

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(Error::InvalidInput(
                    "min price cannot exceed max price".into(),
                ));
            }
        }
        Ok(())
    }
}

impl ToSql for ItemFilter {
    fn to_sql(&self) -> QueryBuilder<'_, Postgres> {
        let mut qb = QueryBuilder::new(
            "SELECT * FROM rental.items WHERE status = 'available'::rental.item_status",
        );

        if !self.category.is_empty() {
            qb.push(" AND category = ")
                .push_bind(self.category.as_str());
        }
        let search = self.search.trim();
        if !search.is_empty() {
            let pattern = like_pattern(search);
            qb.push(" AND (title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Ok(min) = parse_price(&self.min_price) {
            qb.push(" AND price_per_day >= ").push_bind(min);
        }
        if let Ok(max) = parse_price(&self.max_price) {
            qb.push(" AND price_per_day <= ").push_bind(max);
        }

        qb.push(" ORDER BY created_at DESC");
        qb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_should_list_available_items() {
        let filter = ItemFilter::default();
        assert!(filter.validate().is_ok());
        assert_eq!(
            filter.to_sql().sql(),
            "SELECT * FROM rental.items WHERE status = 'available'::rental.item_status ORDER BY created_at DESC"
        );
    }

    #[test]
    fn full_filter_should_bind_everything() {
        let filter = ItemFilter {
            category: "electronics".into(),
            search: "drone".into(),
            min_price: "10".into(),
            max_price: "50".into(),
        };
        assert!(filter.validate().is_ok());
        assert_eq!(
            filter.to_sql().sql(),
            "SELECT * FROM rental.items WHERE status = 'available'::rental.item_status \
             AND category = $1 AND (title ILIKE $2 OR description ILIKE $3) \
             AND price_per_day >= $4 AND price_per_day <= $5 ORDER BY created_at DESC"
        );
    }

    #[test]
    fn inverted_price_bounds_should_be_rejected() {
        let filter = ItemFilter {
            min_price: "50".into(),
            max_price: "10".into(),
            ..Default::default()
        };
        assert!(matches!(filter.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn malformed_price_bound_should_be_rejected() {
        let filter = ItemFilter {
            min_price: "cheap".into(),
            ..Default::default()
        };
        assert!(matches!(filter.validate(), Err(Error::InvalidInput(_))));
    }
}
