use std::future::Future;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

pub mod client;
pub mod convert;
pub mod error;
pub mod service;
pub mod state;

pub use client::{ClientError, TicketClient};
pub use service::TicketServiceImpl;
pub use state::AppState;
pub use train_proto::TicketServiceServer;

pub fn app(state: AppState) -> TicketServiceServer<TicketServiceImpl> {
    TicketServiceServer::new(TicketServiceImpl::new(state))
}

/// Serve the ticket service on an already bound listener until `shutdown`
/// resolves.
pub async fn serve(
    state: AppState,
    listener: TcpListener,
    shutdown: impl Future<Output = ()>,
) -> Result<(), tonic::transport::Error> {
    Server::builder()
        .trace_fn(|req| tracing::info_span!("grpc", method = %req.uri().path()))
        .add_service(app(state))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
}
