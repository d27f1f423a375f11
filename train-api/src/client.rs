//! Typed wrapper around the generated `TicketServiceClient`.
//!
//! Callers work with the shared models; the proto messages stay inside this
//! module and `convert`.

use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use train_proto::{
    ModifySeatRequest, PurchaseRequest, ReceiptRequest, RemoveUserRequest, TicketServiceClient,
    ViewUsersRequest,
};
use train_shared::{Passenger, Reservation, SectionSeat};

use crate::convert;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("could not connect: {0}")]
    Transport(#[from] tonic::transport::Error),
    #[error("{}", .0.message())]
    Rpc(#[from] tonic::Status),
    #[error("response is missing {0}")]
    MissingField(&'static str),
}

#[derive(Clone)]
pub struct TicketClient {
    inner: TicketServiceClient<Channel>,
}

impl TicketClient {
    /// Connect to `endpoint` (e.g. `http://localhost:50055`). `timeout`
    /// bounds both the connection attempt and every call.
    pub async fn connect(endpoint: &str, timeout: Duration) -> Result<Self, ClientError> {
        let channel = Endpoint::from_shared(endpoint.to_string())?
            .connect_timeout(timeout)
            .timeout(timeout)
            .connect()
            .await?;

        Ok(Self {
            inner: TicketServiceClient::new(channel),
        })
    }

    // The generated client is a cheap handle over the channel; cloning it per
    // call lets every method take `&self`.
    fn rpc(&self) -> TicketServiceClient<Channel> {
        self.inner.clone()
    }

    pub async fn purchase(
        &self,
        from: &str,
        to: &str,
        passenger: Passenger,
    ) -> Result<String, ClientError> {
        let response = self
            .rpc()
            .purchase_ticket(PurchaseRequest {
                from: from.to_string(),
                to: to.to_string(),
                user: Some(convert::passenger_to_proto(passenger)),
            })
            .await?;
        Ok(response.into_inner().receipt_id)
    }

    pub async fn get_receipt(&self, receipt_id: &str) -> Result<Reservation, ClientError> {
        let response = self
            .rpc()
            .get_receipt(ReceiptRequest {
                receipt_id: receipt_id.to_string(),
            })
            .await?;
        convert::receipt_from_proto(response.into_inner()).ok_or(ClientError::MissingField("user"))
    }

    pub async fn view_users(&self, section: &str) -> Result<Vec<SectionSeat>, ClientError> {
        let response = self
            .rpc()
            .view_users_by_section(ViewUsersRequest {
                section: section.to_string(),
            })
            .await?;
        Ok(response
            .into_inner()
            .user_seats
            .into_iter()
            .map(convert::section_seat_from_proto)
            .collect())
    }

    pub async fn remove_user(&self, email: &str) -> Result<bool, ClientError> {
        let response = self
            .rpc()
            .remove_user(RemoveUserRequest {
                email: email.to_string(),
            })
            .await?;
        Ok(response.into_inner().success)
    }

    pub async fn modify_seat(&self, email: &str, new_seat: &str) -> Result<bool, ClientError> {
        let response = self
            .rpc()
            .modify_seat(ModifySeatRequest {
                email: email.to_string(),
                new_seat: new_seat.to_string(),
            })
            .await?;
        Ok(response.into_inner().success)
    }
}
