mod service;
#[cfg(test)]
pub mod test_utils;

use std::{pin::Pin, task::Poll};

use abi::{rental_service_server::RentalServiceServer, Booking, Config};
use futures::Stream;
use rental::RentalManager;
use tokio::sync::mpsc;
use tonic::{transport::Server, Status};
use tracing::info;

type BookingStream = Pin<Box<dyn Stream<Item = Result<Booking, Status>> + Send>>;

#[derive(Debug)]
pub struct RentalServiceImpl {
    pub manager: RentalManager,
}

/// adapts a channel of `abi::Error` results into a stream tonic can send
pub struct TonicReceiverStream<T> {
    inner: mpsc::Receiver<Result<T, abi::Error>>,
}

impl<T> TonicReceiverStream<T> {
    pub fn new(inner: mpsc::Receiver<Result<T, abi::Error>>) -> Self {
        Self { inner }
    }
}

impl RentalServiceImpl {
    pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        Ok(Self {
            manager: RentalManager::from_config(&config.db).await?,
        })
    }
}

impl<T> Stream for TonicReceiverStream<T> {
    type Item = Result<T, Status>;

    fn poll_next(
        mut self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> Poll<Option<Self::Item>> {
        match self.inner.poll_recv(cx) {
            Poll::Ready(Some(Ok(t))) => Poll::Ready(Some(Ok(t))),
            Poll::Ready(Some(Err(e))) => Poll::Ready(Some(Err(e.into()))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

pub async fn start_server(config: &Config) -> Result<(), anyhow::Error> {
    let addr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let svc = RentalServiceImpl::from_config(config).await?;
    let svc = RentalServiceServer::new(svc);

    info!("Listening on {}", addr);
    Server::builder()
        .add_service(svc)
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
