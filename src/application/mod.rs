pub mod caching;
pub mod command;
pub mod instrument;
pub mod order_service;
pub mod query;
pub mod stats_service;
pub mod transaction_service;
