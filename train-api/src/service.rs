use tonic::{Request, Response, Status};
use tracing::{info, warn};
use train_proto::{
    ModifySeatRequest, ModifySeatResponse, PurchaseRequest, PurchaseResponse, ReceiptRequest,
    ReceiptResponse, RemoveUserRequest, RemoveUserResponse, TicketService, ViewUsersRequest,
    ViewUsersResponse,
};
use train_shared::Masked;

use crate::convert;
use crate::error::AppError;
use crate::state::AppState;

/// gRPC front for the booking store. Each call decodes its request, runs one
/// store operation and encodes the result.
pub struct TicketServiceImpl {
    state: AppState,
}

impl TicketServiceImpl {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[tonic::async_trait]
impl TicketService for TicketServiceImpl {
    async fn purchase_ticket(
        &self,
        request: Request<PurchaseRequest>,
    ) -> Result<Response<PurchaseResponse>, Status> {
        let req = request.into_inner();
        let passenger = req.user.map(convert::passenger_from_proto);
        let email = passenger.as_ref().map(|p| p.email.clone()).unwrap_or_default();

        let receipt_id = self
            .state
            .store
            .purchase(&req.from, &req.to, passenger)
            .map_err(AppError::from)?;

        info!("Ticket purchased: {} for {}", receipt_id, Masked(&email));
        Ok(Response::new(PurchaseResponse { receipt_id }))
    }

    async fn get_receipt(
        &self,
        request: Request<ReceiptRequest>,
    ) -> Result<Response<ReceiptResponse>, Status> {
        let req = request.into_inner();
        let receipt = self
            .state
            .store
            .get_receipt(&req.receipt_id)
            .map_err(AppError::from)?;

        Ok(Response::new(convert::receipt_to_proto(receipt)))
    }

    async fn view_users_by_section(
        &self,
        request: Request<ViewUsersRequest>,
    ) -> Result<Response<ViewUsersResponse>, Status> {
        let req = request.into_inner();
        let rows = self
            .state
            .store
            .list_by_section(&req.section)
            .map_err(AppError::from)?;

        Ok(Response::new(ViewUsersResponse {
            user_seats: rows.into_iter().map(convert::section_seat_to_proto).collect(),
        }))
    }

    async fn remove_user(
        &self,
        request: Request<RemoveUserRequest>,
    ) -> Result<Response<RemoveUserResponse>, Status> {
        let req = request.into_inner();
        let success = self
            .state
            .store
            .remove_user(&req.email)
            .map_err(AppError::from)?;

        if success {
            info!("Passenger removed: {}", Masked(&req.email));
        } else {
            warn!("Remove requested for unknown passenger: {}", Masked(&req.email));
        }
        Ok(Response::new(RemoveUserResponse { success }))
    }

    async fn modify_seat(
        &self,
        request: Request<ModifySeatRequest>,
    ) -> Result<Response<ModifySeatResponse>, Status> {
        let req = request.into_inner();
        let success = self
            .state
            .store
            .modify_seat(&req.email, &req.new_seat)
            .map_err(AppError::from)?;

        if success {
            info!("Seat changed to {} for {}", req.new_seat, Masked(&req.email));
        } else {
            warn!("Seat change requested for unknown passenger: {}", Masked(&req.email));
        }
        Ok(Response::new(ModifySeatResponse { success }))
    }
}
