use tonic::Status;
use train_core::CoreError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    InternalServerError(String),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidArgument(msg) => AppError::ValidationError(msg),
            CoreError::NotFound(msg) => AppError::NotFoundError(msg),
            CoreError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::ValidationError(msg) => Status::invalid_argument(msg),
            AppError::NotFoundError(msg) => Status::not_found(msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                Status::internal("Internal Server Error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_status_codes() {
        let status: Status = AppError::from(CoreError::InvalidArgument("origin is required".into())).into();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "origin is required");

        let status: Status = AppError::from(CoreError::NotFound("receipt not found".into())).into();
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "receipt not found");
    }

    #[test]
    fn test_internal_details_not_leaked() {
        let status: Status = AppError::from(CoreError::Internal("booking store lock poisoned".into())).into();
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "Internal Server Error");
    }
}
