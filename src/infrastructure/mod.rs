#[macro_use]
mod macros;

pub mod cache;
pub mod models;
pub mod order_repo;
pub mod payment_lookup;
pub mod publisher;
pub mod repositories;
pub mod stats_repo;
pub mod uploads;
