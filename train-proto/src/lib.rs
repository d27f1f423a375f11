//! Generated gRPC types and stubs for `train.TicketService`.

pub mod train {
    tonic::include_proto!("train");
}

pub use train::ticket_service_client::TicketServiceClient;
pub use train::ticket_service_server::{TicketService, TicketServiceServer};
pub use train::*;
