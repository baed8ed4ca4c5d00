use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use super::account::User;
use super::errors::{
    CacheError, Entity, PlacementError, PublishError, RepositoryError, UploadError,
};
use super::merchant::Merchant;
use super::order::{Order, OrderItem, PlaceOrderRequest, ReviseOrderRequest, ShippingAddress};
use super::pagination::{ListResult, PageQuery, Scope};
use super::stats::{CategoryRevenue, MonthlyRevenue, RevenueFilter, YearlyRevenue};

/// A soft-deletable row as seen by the service layer.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const ENTITY: Entity;
    /// Entities whose rows the database deletes together with this one.
    const CASCADES: &'static [Entity] = &[];

    fn id(&self) -> i32;

    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Path of a file uploaded alongside the row, removed on permanent delete.
    fn upload(&self) -> Option<&str> {
        None
    }

    fn is_trashed(&self) -> bool {
        self.deleted_at().is_some()
    }
}

/// Listing and lifecycle operations shared by every entity.
pub trait SoftDeleteRepository: Send + Sync + 'static {
    type Record: Record;

    fn find_page(
        &self,
        scope: Scope,
        query: &PageQuery,
    ) -> Result<ListResult<Self::Record>, RepositoryError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Self::Record>, RepositoryError>;
    /// Marks an active row as deleted. `None` when no active row matched.
    fn trash(&self, id: i32) -> Result<Option<Self::Record>, RepositoryError>;
    /// Clears the marker of a trashed row. `None` when no trashed row matched.
    fn restore(&self, id: i32) -> Result<Option<Self::Record>, RepositoryError>;
    /// Removes a trashed row. `None` when no trashed row matched.
    fn delete_permanent(&self, id: i32) -> Result<Option<Self::Record>, RepositoryError>;
    fn restore_all(&self) -> Result<usize, RepositoryError>;
    fn delete_all_permanent(&self) -> Result<Vec<Self::Record>, RepositoryError>;

    /// Uploads of child rows that go away with row `id`.
    fn cascaded_uploads(&self, _id: i32) -> Result<Vec<String>, RepositoryError> {
        Ok(Vec::new())
    }

    /// Uploads of child rows that go away with every trashed row.
    fn trashed_cascaded_uploads(&self) -> Result<Vec<String>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Entities created and updated directly from a request body.
pub trait WritableRepository: SoftDeleteRepository {
    type Input: Validate + Send + Sync + 'static;

    fn create(&self, input: &Self::Input) -> Result<Self::Record, RepositoryError>;
    fn update(&self, id: i32, input: &Self::Input)
        -> Result<Option<Self::Record>, RepositoryError>;
}

pub trait ShippingAddressLookup: Send + Sync + 'static {
    fn find_by_order(&self, order_id: i32) -> Result<Option<ShippingAddress>, RepositoryError>;
}

pub trait OrderRepository: SoftDeleteRepository<Record = Order> {
    /// Inserts the order, its items and its shipping address atomically.
    fn place(&self, request: &PlaceOrderRequest) -> Result<Order, PlacementError>;
    /// Replaces the items and shipping address of an active order.
    fn revise(
        &self,
        id: i32,
        request: &ReviseOrderRequest,
    ) -> Result<Option<Order>, PlacementError>;
    fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError>;
}

/// Reads the transaction flow needs from other entities. Trashed rows are
/// treated as missing.
pub trait PaymentLookup: Send + Sync + 'static {
    fn find_user(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    fn find_merchant(&self, id: i32) -> Result<Option<Merchant>, RepositoryError>;
    fn find_order(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
    fn find_order_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError>;
    fn find_shipping_address(
        &self,
        order_id: i32,
    ) -> Result<Option<ShippingAddress>, RepositoryError>;
}

pub trait RevenueRepository: Send + Sync + 'static {
    fn order_monthly(&self, filter: &RevenueFilter)
        -> Result<Vec<MonthlyRevenue>, RepositoryError>;
    fn order_yearly(&self, filter: &RevenueFilter) -> Result<Vec<YearlyRevenue>, RepositoryError>;
    fn category_monthly(
        &self,
        filter: &RevenueFilter,
    ) -> Result<Vec<CategoryRevenue>, RepositoryError>;
    fn category_yearly(
        &self,
        filter: &RevenueFilter,
    ) -> Result<Vec<CategoryRevenue>, RepositoryError>;
}

pub trait Cache: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
    fn invalidate_prefix(&self, prefix: &str) -> Result<(), CacheError>;
}

pub trait EventPublisher: Send + Sync + 'static {
    fn publish(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), PublishError>;
}

pub trait UploadStore: Send + Sync + 'static {
    fn remove(&self, path: &str) -> Result<(), UploadError>;
}
