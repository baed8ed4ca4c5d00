use actix_web::web;

use crate::errors::AppError;

pub mod crud;
pub mod metrics;
pub mod orders;
pub mod response;
pub mod shipping;
pub mod stats;
pub mod transactions;

/// Undecodable JSON bodies answer with the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Malformed(err.to_string()).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::Malformed(err.to_string()).into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::Malformed(err.to_string()).into())
}
