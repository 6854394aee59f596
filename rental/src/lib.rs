mod catalog;
mod manager;

use abi::{BookingId, DateRange, FilterPager, Quote};
use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct RentalManager {
    pool: PgPool,
}

#[async_trait]
pub trait Rental {
    /// price a date range for an item, checking it could be booked right now
    async fn quote(&self, item_id: &str, range: DateRange) -> Result<Quote, abi::Error>;
    /// make a pending booking; the price is computed here, not taken from the caller
    async fn book(&self, booking: abi::Booking) -> Result<abi::Booking, abi::Error>;
    /// payment captured: pending -> confirmed
    async fn confirm(&self, id: BookingId) -> Result<abi::Booking, abi::Error>;
    /// pending -> cancelled
    async fn cancel(&self, id: BookingId) -> Result<abi::Booking, abi::Error>;
    /// get booking by id
    async fn get(&self, id: BookingId) -> Result<abi::Booking, abi::Error>;
    /// query bookings
    async fn query(
        &self,
        query: abi::BookingQuery,
    ) -> mpsc::Receiver<Result<abi::Booking, abi::Error>>;
    /// query bookings ordered by id, one page at a time
    async fn filter(
        &self,
        filter: abi::BookingFilter,
    ) -> Result<(FilterPager, Vec<abi::Booking>), abi::Error>;
}

#[async_trait]
pub trait Catalog {
    /// list a new item
    async fn create_item(&self, item: abi::Item) -> Result<abi::Item, abi::Error>;
    /// get item by id
    async fn get_item(&self, id: &str) -> Result<abi::Item, abi::Error>;
    /// available items, newest first
    async fn list_items(&self, filter: abi::ItemFilter) -> Result<Vec<abi::Item>, abi::Error>;
}
