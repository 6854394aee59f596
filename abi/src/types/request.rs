use crate::{
    BookRequest, Booking, BookingFilter, BookingQuery, CancelRequest, ConfirmRequest,
    CreateItemRequest, DateRange, FilterRequest, GetItemRequest, GetRequest, Item, ItemFilter,
    ListItemsRequest, QueryRequest, QuoteRequest,
};

macro_rules! impl_new {
    ($name:ident, $field:ident, $type:ty) => {
        impl $name {
            pub fn new($field: $type) -> Self {
                Self {
                    $field: Some($field),
                }
            }
        }
    };
    ($name:ident) => {
        impl $name {
            pub fn new(id: i64) -> Self {
                Self { id }
            }
        }
    };
}

impl_new!(BookRequest, booking, Booking);
impl_new!(FilterRequest, filter, BookingFilter);
impl_new!(QueryRequest, query, BookingQuery);
impl_new!(CreateItemRequest, item, Item);
impl_new!(ListItemsRequest, filter, ItemFilter);
impl_new!(ConfirmRequest);
impl_new!(CancelRequest);
impl_new!(GetRequest);

impl GetItemRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl QuoteRequest {
    pub fn new(item_id: impl Into<String>, range: DateRange) -> Self {
        let (start, end) = range.to_timestamps();
        Self {
            item_id: item_id.into(),
            start: Some(start),
            end: Some(end),
        }
    }
}
