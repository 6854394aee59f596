use abi::{
    rental_service_server::RentalService, BookRequest, BookResponse, CancelRequest,
    CancelResponse, ConfirmRequest, ConfirmResponse, CreateItemRequest, CreateItemResponse,
    DateRange, FilterRequest, FilterResponse, GetItemRequest, GetItemResponse, GetRequest,
    GetResponse, ListItemsRequest, ListItemsResponse, QueryRequest, QuoteRequest, QuoteResponse,
};
use rental::{Catalog, Rental};
use tonic::{async_trait, Request, Response, Status};

use crate::{BookingStream, RentalServiceImpl, TonicReceiverStream};

#[async_trait]
impl RentalService for RentalServiceImpl {
    /// price a date range without booking it
    async fn quote(
        &self,
        request: Request<QuoteRequest>,
    ) -> Result<Response<QuoteResponse>, Status> {
        let request = request.into_inner();
        let range = DateRange::from_timestamps(request.start.as_ref(), request.end.as_ref())?;
        let quote = self.manager.quote(&request.item_id, range).await?;
        Ok(Response::new(quote.into()))
    }

    /// make a pending booking
    async fn book(&self, request: Request<BookRequest>) -> Result<Response<BookResponse>, Status> {
        let Some(booking) = request.into_inner().booking else {
            return Err(Status::invalid_argument("missing booking"));
        };

        let booking = self.manager.book(booking).await?;
        Ok(Response::new(BookResponse {
            booking: Some(booking),
        }))
    }

    /// confirm a pending booking once it is paid
    async fn confirm(
        &self,
        request: Request<ConfirmRequest>,
    ) -> Result<Response<ConfirmResponse>, Status> {
        let request = request.into_inner();
        let booking = self.manager.confirm(request.id).await?;
        Ok(Response::new(ConfirmResponse {
            booking: Some(booking),
        }))
    }

    async fn cancel(
        &self,
        request: Request<CancelRequest>,
    ) -> Result<Response<CancelResponse>, Status> {
        let request = request.into_inner();
        let booking = self.manager.cancel(request.id).await?;
        Ok(Response::new(CancelResponse {
            booking: Some(booking),
        }))
    }

    async fn get(&self, request: Request<GetRequest>) -> Result<Response<GetResponse>, Status> {
        let request = request.into_inner();
        let booking = self.manager.get(request.id).await?;
        Ok(Response::new(GetResponse {
            booking: Some(booking),
        }))
    }

    /// Server streaming response type for the Query method.
    type QueryStream = BookingStream;

    /// query bookings by item id, renter id, status and date range
    async fn query(
        &self,
        request: Request<QueryRequest>,
    ) -> Result<Response<Self::QueryStream>, Status> {
        let Some(query) = request.into_inner().query else {
            return Err(Status::invalid_argument("missing query params"));
        };
        let bookings = self.manager.query(query).await;
        let stream = TonicReceiverStream::new(bookings);
        Ok(Response::new(Box::pin(stream)))
    }

    /// filter bookings ordered by booking id
    async fn filter(
        &self,
        request: Request<FilterRequest>,
    ) -> Result<Response<FilterResponse>, Status> {
        let Some(filter) = request.into_inner().filter else {
            return Err(Status::invalid_argument("missing filter params"));
        };
        let (pager, bookings) = self.manager.filter(filter).await?;
        Ok(Response::new(FilterResponse {
            pager: Some(pager),
            bookings,
        }))
    }

    async fn create_item(
        &self,
        request: Request<CreateItemRequest>,
    ) -> Result<Response<CreateItemResponse>, Status> {
        let Some(item) = request.into_inner().item else {
            return Err(Status::invalid_argument("missing item"));
        };
        let item = self.manager.create_item(item).await?;
        Ok(Response::new(CreateItemResponse { item: Some(item) }))
    }

    async fn get_item(
        &self,
        request: Request<GetItemRequest>,
    ) -> Result<Response<GetItemResponse>, Status> {
        let request = request.into_inner();
        let item = self.manager.get_item(&request.id).await?;
        Ok(Response::new(GetItemResponse { item: Some(item) }))
    }

    /// available items, narrowed by category, text search and price
    async fn list_items(
        &self,
        request: Request<ListItemsRequest>,
    ) -> Result<Response<ListItemsResponse>, Status> {
        let filter = request.into_inner().filter.unwrap_or_default();
        let items = self.manager.list_items(filter).await?;
        Ok(Response::new(ListItemsResponse { items }))
    }
}
