use crate::{manager::parse_item_id, Catalog, RentalManager};
use abi::{ItemStatus, ToSql, Validator};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl Catalog for RentalManager {
    async fn create_item(&self, item: abi::Item) -> Result<abi::Item, abi::Error> {
        item.validate()?;

        let status = match ItemStatus::from_i32(item.status) {
            Some(ItemStatus::Unknown) | None => ItemStatus::Available,
            Some(status) => status,
        };

        let created: abi::Item = sqlx::query_as(
            "INSERT INTO rental.items \
             (owner_id, title, description, category, location, image_url, price_per_day, availability, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9::rental.item_status) RETURNING *",
        )
        .bind(&item.owner_id)
        .bind(item.title.trim())
        .bind(&item.description)
        .bind(&item.category)
        .bind(&item.location)
        .bind(&item.image_url)
        .bind(item.daily_rate()?)
        .bind(item.availability()?.to_pg_range()?)
        .bind(status.to_string())
        .fetch_one(&self.pool)
        .await?;

        info!("Item {} listed by {}", created.id, created.owner_id);
        Ok(created)
    }

    async fn get_item(&self, id: &str) -> Result<abi::Item, abi::Error> {
        let id = parse_item_id(id)?;
        let item = sqlx::query_as("SELECT * FROM rental.items WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(item)
    }

    async fn list_items(&self, filter: abi::ItemFilter) -> Result<Vec<abi::Item>, abi::Error> {
        filter.validate()?;

        let mut qb = filter.to_sql();
        let items = qb.build_query_as().fetch_all(&self.pool).await?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abi::{Item, ItemFilter};
    use chrono::NaiveDate;
    use sqlx_db_test::TestDb;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn get_tdb() -> TestDb {
        TestDb::new("localhost", 5432, "postgres", "postgres", "../migrations")
    }

    fn listing(title: &str, category: &str, price: &str) -> Item {
        let mut item = Item::new_available("bob", title, price, day(6, 1), day(6, 30));
        item.category = category.into();
        item.description = format!("{} for rent in Lisbon", title);
        item
    }

    #[tokio::test]
    #[ignore = "needs a local postgres"]
    async fn create_item_should_work() {
        let tdb = get_tdb();
        let manager = RentalManager::new(tdb.get_pool().await);

        let item = manager
            .create_item(listing("Camping Tent", "outdoor", "15"))
            .await
            .unwrap();
        assert!(!item.id.is_empty());
        assert_eq!(item.price_per_day, "15.00");
        assert_eq!(item.status, ItemStatus::Available as i32);

        let item1 = manager.get_item(&item.id).await.unwrap();
        assert_eq!(item, item1);
    }

    #[tokio::test]
    #[ignore = "needs a local postgres"]
    async fn create_invalid_item_should_reject() {
        let tdb = get_tdb();
        let manager = RentalManager::new(tdb.get_pool().await);

        let err = manager
            .create_item(listing("Camping Tent", "outdoor", "-3"))
            .await
            .unwrap_err();
        assert!(matches!(err, abi::Error::InvalidInput(_)));
    }

    #[tokio::test]
    #[ignore = "needs a local postgres"]
    async fn get_missing_item_should_be_not_found() {
        let tdb = get_tdb();
        let manager = RentalManager::new(tdb.get_pool().await);

        let err = manager
            .get_item(&uuid::Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert_eq!(err, abi::Error::NotFound);
    }

    #[tokio::test]
    #[ignore = "needs a local postgres"]
    async fn list_items_should_filter() {
        let tdb = get_tdb();
        let manager = RentalManager::new(tdb.get_pool().await);

        let tent = manager
            .create_item(listing("Camping Tent", "outdoor", "15"))
            .await
            .unwrap();
        let drone = manager
            .create_item(listing("Camera Drone", "electronics", "60"))
            .await
            .unwrap();
        let mut hidden = listing("Kayak", "outdoor", "40");
        hidden.status = ItemStatus::Unavailable as i32;
        manager.create_item(hidden).await.unwrap();

        let items = manager
            .list_items(ItemFilter::by_category("outdoor"))
            .await
            .unwrap();
        assert_eq!(items, vec![tent.clone()]);

        let items = manager
            .list_items(ItemFilter::by_search("DRONE"))
            .await
            .unwrap();
        assert_eq!(items, vec![drone.clone()]);

        // newest first
        let items = manager.list_items(ItemFilter::default()).await.unwrap();
        assert_eq!(items, vec![drone, tent.clone()]);

        let filter = ItemFilter {
            max_price: "20".into(),
            ..Default::default()
        };
        let items = manager.list_items(filter).await.unwrap();
        assert_eq!(items, vec![tent]);
    }

    #[tokio::test]
    #[ignore = "needs a local postgres"]
    async fn search_should_not_treat_wildcards_as_patterns() {
        let tdb = get_tdb();
        let manager = RentalManager::new(tdb.get_pool().await);
        manager
            .create_item(listing("Camping Tent", "outdoor", "15"))
            .await
            .unwrap();

        let items = manager
            .list_items(ItemFilter::by_search("%"))
            .await
            .unwrap();
        assert!(items.is_empty());
    }
}
