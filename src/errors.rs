use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::{OrderError, ServiceError, TransactionError};
use crate::handlers::response::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The request body or query string could not be decoded.
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<BlockingError> for AppError {
    fn from(e: BlockingError) -> Self {
        AppError::Internal(e.to_string())
    }
}

fn service_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::NotFound(_) | ServiceError::UploadNotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::AlreadyExists(_) => StatusCode::CONFLICT,
        ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        ServiceError::Failed(..) | ServiceError::UploadRemoval(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ServiceError::Transaction(err) => match err {
            TransactionError::UserNotFound
            | TransactionError::MerchantNotFound
            | TransactionError::OrderNotFound
            | TransactionError::ShippingAddressNotFound => StatusCode::NOT_FOUND,
            TransactionError::OrderItemsEmpty | TransactionError::InvalidQuantity => {
                StatusCode::BAD_REQUEST
            }
            TransactionError::InsufficientBalance => StatusCode::PAYMENT_REQUIRED,
            TransactionError::AlreadySettled => StatusCode::CONFLICT,
            TransactionError::NotifyFailed => StatusCode::INTERNAL_SERVER_ERROR,
        },
        ServiceError::Order(err) => match err {
            OrderError::UserNotFound | OrderError::MerchantNotFound | OrderError::ProductNotFound => {
                StatusCode::NOT_FOUND
            }
            OrderError::InsufficientStock => StatusCode::CONFLICT,
            OrderError::NoItems => StatusCode::BAD_REQUEST,
        },
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Service(err) => service_status(err),
            AppError::Malformed(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody::new(message))
    }
}
