use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::pagination::{Page, Pagination};

// ── Envelopes ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ApiResponsePagination<T> {
    pub status: &'static str,
    pub message: String,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

/// Count of rows touched by a bulk operation.
#[derive(Debug, Serialize)]
pub struct Affected {
    pub affected: usize,
}

// ── Builders ─────────────────────────────────────────────────────────────────

pub fn ok<T: Serialize>(message: impl Into<String>, data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        status: "success",
        message: message.into(),
        data,
    })
}

pub fn created<T: Serialize>(message: impl Into<String>, data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse {
        status: "success",
        message: message.into(),
        data,
    })
}

pub fn paginated<T: Serialize>(message: impl Into<String>, page: Page<T>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponsePagination {
        status: "success",
        message: message.into(),
        data: page.items,
        pagination: page.pagination,
    })
}
