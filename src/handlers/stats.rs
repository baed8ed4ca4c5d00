use actix_web::{web, HttpResponse, Scope};

use super::response;
use crate::application::stats_service::StatsService;
use crate::domain::ports::RevenueRepository;
use crate::domain::stats::RevenueFilter;
use crate::errors::AppError;

/// Adds `/stats/monthly` and `/stats/yearly` order reports to `scope`.
pub fn with_order_stats<S: RevenueRepository>(scope: Scope) -> Scope {
    scope
        .route("/stats/monthly", web::get().to(order_monthly::<S>))
        .route("/stats/yearly", web::get().to(order_yearly::<S>))
}

/// Adds `/stats/monthly` and `/stats/yearly` category reports to `scope`.
pub fn with_category_stats<S: RevenueRepository>(scope: Scope) -> Scope {
    scope
        .route("/stats/monthly", web::get().to(category_monthly::<S>))
        .route("/stats/yearly", web::get().to(category_yearly::<S>))
}

pub async fn order_monthly<S: RevenueRepository>(
    service: web::Data<StatsService<S>>,
    filter: web::Query<RevenueFilter>,
) -> Result<HttpResponse, AppError> {
    let filter = filter.into_inner();
    let report = web::block(move || service.order_monthly(&filter)).await??;
    Ok(response::ok("Successfully fetched monthly order revenue", report))
}

pub async fn order_yearly<S: RevenueRepository>(
    service: web::Data<StatsService<S>>,
    filter: web::Query<RevenueFilter>,
) -> Result<HttpResponse, AppError> {
    let filter = filter.into_inner();
    let report = web::block(move || service.order_yearly(&filter)).await??;
    Ok(response::ok("Successfully fetched yearly order revenue", report))
}

pub async fn category_monthly<S: RevenueRepository>(
    service: web::Data<StatsService<S>>,
    filter: web::Query<RevenueFilter>,
) -> Result<HttpResponse, AppError> {
    let filter = filter.into_inner();
    let report = web::block(move || service.category_monthly(&filter)).await??;
    Ok(response::ok("Successfully fetched monthly category revenue", report))
}

pub async fn category_yearly<S: RevenueRepository>(
    service: web::Data<StatsService<S>>,
    filter: web::Query<RevenueFilter>,
) -> Result<HttpResponse, AppError> {
    let filter = filter.into_inner();
    let report = web::block(move || service.category_yearly(&filter)).await??;
    Ok(response::ok("Successfully fetched yearly category revenue", report))
}
