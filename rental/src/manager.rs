use crate::{Rental, RentalManager};
use abi::{
    validate_booking, BookingId, DateRange, DbConfig, FilterPager, Normalizer, Quote, ToSql,
    Validator,
};
use async_trait::async_trait;
use futures::StreamExt;
use sqlx::{postgres::PgPoolOptions, PgConnection, PgPool};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

impl RentalManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn from_config(config: &DbConfig) -> Result<Self, abi::Error> {
        let url = config.url();
        let pool = PgPoolOptions::default()
            .max_connections(config.max_connections)
            .connect(&url)
            .await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Rental for RentalManager {
    async fn quote(&self, item_id: &str, range: DateRange) -> Result<Quote, abi::Error> {
        let item_id = parse_item_id(item_id)?;
        let mut conn = self.pool.acquire().await?;

        let item = fetch_item(&mut conn, item_id, false).await?;
        let existing = fetch_active_bookings(&mut conn, item_id, &item.availability()?).await?;

        check_availability(&item, range, &existing)
    }

    async fn book(&self, booking: abi::Booking) -> Result<abi::Booking, abi::Error> {
        booking.validate()?;

        let item_id = parse_item_id(&booking.item_id)?;
        let range = booking.date_range()?;

        // the item row lock serializes concurrent bookings of the same item;
        // the exclusion constraint on rental.bookings backs this up
        let mut tx = self.pool.begin().await?;
        let item = fetch_item(&mut tx, item_id, true).await?;
        let existing = fetch_active_bookings(&mut tx, item_id, &item.availability()?).await?;

        let quote = check_availability(&item, range, &existing).map_err(|e| {
            warn!("Booking rejected for item {}: {}", item.id, e);
            e
        })?;

        let created: abi::Booking = sqlx::query_as(
            "INSERT INTO rental.bookings (item_id, renter_id, during, status, total_price) \
             VALUES ($1, $2, $3, 'pending'::rental.booking_status, $4) RETURNING *",
        )
        .bind(item_id)
        .bind(&booking.renter_id)
        .bind(range.to_pg_range()?)
        .bind(quote.total)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            "Booking {} created for item {} ({}, total {})",
            created.id, created.item_id, range, quote.total
        );
        Ok(created)
    }

    async fn confirm(&self, id: BookingId) -> Result<abi::Booking, abi::Error> {
        // only a pending booking can be confirmed, anything else is not found
        id.validate()?;
        let booking: abi::Booking = sqlx::query_as(
            "UPDATE rental.bookings SET status = 'confirmed' WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        info!("Booking {} confirmed", id);
        Ok(booking)
    }

    async fn cancel(&self, id: BookingId) -> Result<abi::Booking, abi::Error> {
        id.validate()?;
        let booking: abi::Booking = sqlx::query_as(
            "UPDATE rental.bookings SET status = 'cancelled' WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        info!("Booking {} cancelled", id);
        Ok(booking)
    }

    async fn get(&self, id: BookingId) -> Result<abi::Booking, abi::Error> {
        id.validate()?;
        let booking: abi::Booking = sqlx::query_as("SELECT * FROM rental.bookings WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(booking)
    }

    async fn query(
        &self,
        query: abi::BookingQuery,
    ) -> mpsc::Receiver<Result<abi::Booking, abi::Error>> {
        let pool = self.pool.clone();
        let (tx, rx) = mpsc::channel(128);

        tokio::spawn(async move {
            if let Err(e) = query.validate() {
                let _ = tx.send(Err(e)).await;
                return;
            }

            let mut qb = query.to_sql();
            let mut bookings = qb.build_query_as::<abi::Booking>().fetch(&pool);
            while let Some(ret) = bookings.next().await {
                let ret = ret.map_err(|e| {
                    warn!("Query error: {:?}", e);
                    abi::Error::from(e)
                });
                if tx.send(ret).await.is_err() {
                    // rx is dropped, so client disconnected
                    break;
                }
            }
        });

        rx
    }

    async fn filter(
        &self,
        mut filter: abi::BookingFilter,
    ) -> Result<(FilterPager, Vec<abi::Booking>), abi::Error> {
        filter.normalize()?;

        let mut qb = filter.to_sql();
        let mut bookings: Vec<abi::Booking> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await?;

        let mut qb = filter.to_count_sql();
        let total: i64 = qb.build_query_scalar().fetch_one(&self.pool).await?;

        let pager = filter.get_pager(&mut bookings, total);
        Ok((pager, bookings))
    }
}

/// the validator and the price, against the item as stored now
fn check_availability(
    item: &abi::Item,
    range: DateRange,
    existing: &[abi::Booking],
) -> Result<Quote, abi::Error> {
    if !item.is_rentable() {
        return Err(abi::Error::ItemUnavailable(item.id.clone()));
    }
    let range = validate_booking(range, &item.availability()?, existing)?;
    Quote::new(range, item.daily_rate()?)
}

pub(crate) fn parse_item_id(id: &str) -> Result<Uuid, abi::Error> {
    Uuid::parse_str(id).map_err(|_| abi::Error::InvalidItemId(id.to_string()))
}

async fn fetch_item(
    conn: &mut PgConnection,
    id: Uuid,
    for_update: bool,
) -> Result<abi::Item, abi::Error> {
    let sql = if for_update {
        "SELECT * FROM rental.items WHERE id = $1 FOR UPDATE"
    } else {
        "SELECT * FROM rental.items WHERE id = $1"
    };
    let item = sqlx::query_as(sql).bind(id).fetch_one(conn).await?;
    Ok(item)
}

/// pending and confirmed bookings of the item that touch `window`
async fn fetch_active_bookings(
    conn: &mut PgConnection,
    item_id: Uuid,
    window: &DateRange,
) -> Result<Vec<abi::Booking>, abi::Error> {
    let bookings = sqlx::query_as(
        "SELECT * FROM rental.bookings WHERE item_id = $1 AND status <> 'cancelled' AND during && $2 ORDER BY lower(during)",
    )
    .bind(item_id)
    .bind(window.to_pg_range()?)
    .fetch_all(conn)
    .await?;
    Ok(bookings)
}
