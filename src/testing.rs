//! In-memory collaborators for service and handler tests. The repository
//! fakes follow the Diesel implementations: ids ascend from 1, listings are
//! ordered by id, search is case-insensitive and lifecycle calls only match
//! rows in the expected trash state.

use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use validator::Validate;

use crate::domain::account::User;
use crate::domain::catalog::{Banner, BannerRequest, Slider, SliderRequest};
use crate::domain::errors::{
    CacheError, OrderError, PlacementError, PublishError, RepositoryError, UploadError,
};
use crate::domain::merchant::Merchant;
use crate::domain::order::{
    Order, OrderItem, OrderLineRequest, PlaceOrderRequest, ReviseOrderRequest, ShippingAddress,
    ShippingAddressRequest,
};
use crate::domain::pagination::{ListResult, PageQuery, Scope};
use crate::domain::review::{Review, ReviewRequest};
use crate::domain::ports::{
    Cache, EventPublisher, OrderRepository, PaymentLookup, Record, RevenueRepository,
    ShippingAddressLookup, SoftDeleteRepository, UploadStore, WritableRepository,
};
use crate::domain::stats::{CategoryRevenue, MonthlyRevenue, RevenueFilter, YearlyRevenue};
use crate::domain::transaction::{NewTransaction, Transaction};

// ── Repository fakes ─────────────────────────────────────────────────────────

/// Records the in-memory repository can filter by search term.
pub trait Searchable: Record {
    /// `needle` is lowercase and non-empty. Entities without search columns
    /// match everything.
    fn matches(&self, _needle: &str) -> bool {
        true
    }
}

/// Records the in-memory repository can create and update from a request.
pub trait Buildable<I>: Searchable {
    fn build(id: i32, input: &I, now: DateTime<Utc>) -> Self;
    fn apply(&mut self, input: &I, now: DateTime<Utc>);
}

pub struct MemoryRepository<T, I = ()> {
    rows: Mutex<Vec<T>>,
    fail: AtomicBool,
    conflict: AtomicBool,
    children: Mutex<HashMap<i32, Vec<String>>>,
    input: PhantomData<fn(&I)>,
}

impl<T: Searchable, I> Default for MemoryRepository<T, I> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
            conflict: AtomicBool::new(false),
            children: Mutex::new(HashMap::new()),
            input: PhantomData,
        }
    }
}

impl<T: Searchable, I> MemoryRepository<T, I> {
    /// The next repository call fails with a database error.
    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// The next create or update fails with a unique violation.
    pub fn conflict_next(&self) {
        self.conflict.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn modify(&self, id: i32, f: impl FnOnce(&mut T)) {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .expect("no row with that id");
        f(row);
    }

    /// Uploads of child rows that cascade with row `id`.
    pub fn attach_uploads(&self, id: i32, paths: &[&str]) {
        self.children
            .lock()
            .unwrap()
            .entry(id)
            .or_default()
            .extend(paths.iter().map(|path| path.to_string()));
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail.swap(false, Ordering::SeqCst) {
            return Err(RepositoryError::Database("injected failure".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), RepositoryError> {
        self.check()?;
        if self.conflict.swap(false, Ordering::SeqCst) {
            return Err(RepositoryError::Conflict("duplicate key".to_string()));
        }
        Ok(())
    }

    fn insert_with(&self, build: impl FnOnce(i32) -> T) -> T {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|row| row.id()).max().unwrap_or(0) + 1;
        let row = build(id);
        rows.push(row.clone());
        row
    }

    fn update_where(
        &self,
        id: i32,
        trashed: bool,
        f: impl FnOnce(&mut T),
    ) -> Option<T> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id && row.is_trashed() == trashed)?;
        f(row);
        Some(row.clone())
    }
}

/// Write access to the soft-delete marker of fake rows.
pub trait Stamped {
    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>);
}

macro_rules! stamped {
    ($($ty:ty),+ $(,)?) => {
        $(impl Stamped for $ty {
            fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) {
                self.deleted_at = at;
                self.updated_at = Utc::now();
            }
        })+
    };
}

stamped!(Banner, Slider, Transaction, Order, ShippingAddress, Review);

impl<T, I> SoftDeleteRepository for MemoryRepository<T, I>
where
    T: Searchable + Stamped,
    I: 'static,
{
    type Record = T;

    fn find_page(&self, scope: Scope, query: &PageQuery) -> Result<ListResult<T>, RepositoryError> {
        self.check()?;
        let needle = query.search.to_lowercase();
        let mut rows: Vec<T> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| match scope {
                Scope::All => true,
                Scope::Active => !row.is_trashed(),
                Scope::Trashed => row.is_trashed(),
            })
            .filter(|row| needle.is_empty() || row.matches(&needle))
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.id());
        let total = rows.len() as i64;
        let data = rows
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.page_size as usize)
            .collect();
        Ok(ListResult { data, total })
    }

    fn find_by_id(&self, id: i32) -> Result<Option<T>, RepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id() == id)
            .cloned())
    }

    fn trash(&self, id: i32) -> Result<Option<T>, RepositoryError> {
        self.check()?;
        Ok(self.update_where(id, false, |row| row.set_deleted_at(Some(Utc::now()))))
    }

    fn restore(&self, id: i32) -> Result<Option<T>, RepositoryError> {
        self.check()?;
        Ok(self.update_where(id, true, |row| row.set_deleted_at(None)))
    }

    fn delete_permanent(&self, id: i32) -> Result<Option<T>, RepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let position = rows
            .iter()
            .position(|row| row.id() == id && row.is_trashed());
        let deleted = position.map(|at| rows.remove(at));
        if deleted.is_some() {
            self.children.lock().unwrap().remove(&id);
        }
        Ok(deleted)
    }

    fn restore_all(&self) -> Result<usize, RepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let mut restored = 0;
        for row in rows.iter_mut().filter(|row| row.is_trashed()) {
            row.set_deleted_at(None);
            restored += 1;
        }
        Ok(restored)
    }

    fn delete_all_permanent(&self) -> Result<Vec<T>, RepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let (trashed, kept): (Vec<T>, Vec<T>) = rows.drain(..).partition(|row| row.is_trashed());
        *rows = kept;
        let mut children = self.children.lock().unwrap();
        for row in &trashed {
            children.remove(&row.id());
        }
        Ok(trashed)
    }

    fn cascaded_uploads(&self, id: i32) -> Result<Vec<String>, RepositoryError> {
        self.check()?;
        Ok(self.children.lock().unwrap().get(&id).cloned().unwrap_or_default())
    }

    fn trashed_cascaded_uploads(&self) -> Result<Vec<String>, RepositoryError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        let children = self.children.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|row| row.is_trashed())
            .filter_map(|row| children.get(&row.id()))
            .flatten()
            .cloned()
            .collect())
    }
}

impl<T, I> WritableRepository for MemoryRepository<T, I>
where
    T: Buildable<I> + Stamped,
    I: Validate + Send + Sync + 'static,
{
    type Input = I;

    fn create(&self, input: &I) -> Result<T, RepositoryError> {
        self.check_write()?;
        Ok(self.insert_with(|id| T::build(id, input, Utc::now())))
    }

    fn update(&self, id: i32, input: &I) -> Result<Option<T>, RepositoryError> {
        self.check_write()?;
        Ok(self.update_where(id, false, |row| row.apply(input, Utc::now())))
    }
}

impl Searchable for Banner {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl Buildable<BannerRequest> for Banner {
    fn build(id: i32, input: &BannerRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name.clone(),
            start_date: input.start_date,
            end_date: input.end_date,
            start_time: input.start_time,
            end_time: input.end_time,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn apply(&mut self, input: &BannerRequest, now: DateTime<Utc>) {
        *self = Self {
            id: self.id,
            created_at: self.created_at,
            ..Self::build(self.id, input, now)
        };
    }
}

impl Searchable for Slider {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

impl Buildable<SliderRequest> for Slider {
    fn build(id: i32, input: &SliderRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name.clone(),
            image: input.image.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn apply(&mut self, input: &SliderRequest, now: DateTime<Utc>) {
        self.name = input.name.clone();
        self.image = input.image.clone();
        self.updated_at = now;
    }
}

impl Searchable for Transaction {
    fn matches(&self, needle: &str) -> bool {
        self.payment_method.to_lowercase().contains(needle)
            || self.payment_status.to_lowercase().contains(needle)
    }
}

impl Buildable<NewTransaction> for Transaction {
    fn build(id: i32, input: &NewTransaction, now: DateTime<Utc>) -> Self {
        Self {
            id,
            order_id: input.order_id,
            merchant_id: input.merchant_id,
            payment_method: input.payment_method.clone(),
            amount: input.amount,
            payment_status: input.payment_status.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn apply(&mut self, input: &NewTransaction, now: DateTime<Utc>) {
        self.order_id = input.order_id;
        self.merchant_id = input.merchant_id;
        self.payment_method = input.payment_method.clone();
        self.amount = input.amount;
        self.payment_status = input.payment_status.clone();
        self.updated_at = now;
    }
}

impl Searchable for Order {}

impl Searchable for Review {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.comment.to_lowercase().contains(needle)
    }
}

impl Buildable<ReviewRequest> for Review {
    fn build(id: i32, input: &ReviewRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: input.user_id,
            product_id: input.product_id,
            name: input.name.clone(),
            comment: input.comment.clone(),
            rating: input.rating,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn apply(&mut self, input: &ReviewRequest, now: DateTime<Utc>) {
        *self = Self {
            id: self.id,
            created_at: self.created_at,
            ..Self::build(self.id, input, now)
        };
    }
}

impl Searchable for ShippingAddress {
    fn matches(&self, needle: &str) -> bool {
        [&self.address, &self.city, &self.province, &self.country, &self.courier]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Buildable<ShippingAddressRequest> for ShippingAddress {
    fn build(id: i32, input: &ShippingAddressRequest, now: DateTime<Utc>) -> Self {
        let details = &input.details;
        Self {
            id,
            order_id: input.order_id,
            address: details.address.clone(),
            province: details.province.clone(),
            city: details.city.clone(),
            country: details.country.clone(),
            courier: details.courier.clone(),
            shipping_method: details.shipping_method.clone(),
            shipping_cost: details.shipping_cost,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn apply(&mut self, input: &ShippingAddressRequest, now: DateTime<Utc>) {
        *self = Self {
            id: self.id,
            created_at: self.created_at,
            ..Self::build(self.id, input, now)
        };
    }
}

impl ShippingAddressLookup for MemoryRepository<ShippingAddress, ShippingAddressRequest> {
    fn find_by_order(&self, order_id: i32) -> Result<Option<ShippingAddress>, RepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|address| address.order_id == order_id && !address.is_trashed())
            .max_by_key(|address| address.id)
            .cloned())
    }
}

pub type BannerRepository = MemoryRepository<Banner, BannerRequest>;
pub type SliderRepository = MemoryRepository<Slider, SliderRequest>;
pub type TransactionRepository = MemoryRepository<Transaction, NewTransaction>;
pub type ShippingAddressRepository = MemoryRepository<ShippingAddress, ShippingAddressRequest>;
pub type ReviewRepository = MemoryRepository<Review, ReviewRequest>;

pub fn banners() -> BannerRepository {
    MemoryRepository::default()
}

pub fn sliders() -> SliderRepository {
    MemoryRepository::default()
}

pub fn transactions() -> TransactionRepository {
    MemoryRepository::default()
}

pub fn shipping_addresses() -> ShippingAddressRepository {
    MemoryRepository::default()
}

pub fn reviews() -> ReviewRepository {
    MemoryRepository::default()
}

pub fn banner_input(name: &str) -> BannerRequest {
    BannerRequest {
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        is_active: true,
    }
}

pub fn slider_input(name: &str, image: &str) -> SliderRequest {
    SliderRequest {
        name: name.to_string(),
        image: image.to_string(),
    }
}

pub fn review_input(name: &str) -> ReviewRequest {
    ReviewRequest {
        user_id: 1,
        product_id: 1,
        name: name.to_string(),
        comment: "Arrived quickly".to_string(),
        rating: 5,
    }
}

// ── Orders ───────────────────────────────────────────────────────────────────

/// Orders over a fixed product table of `(price, count_in_stock)` by id.
pub struct MemoryOrders {
    orders: MemoryRepository<Order>,
    products: Mutex<HashMap<i32, (i32, i32)>>,
    items: Mutex<Vec<OrderItem>>,
}

impl MemoryOrders {
    /// Products as `(id, price, count_in_stock)`.
    pub fn with_products(products: &[(i32, i32, i32)]) -> Self {
        Self {
            orders: MemoryRepository::default(),
            products: Mutex::new(
                products
                    .iter()
                    .map(|&(id, price, stock)| (id, (price, stock)))
                    .collect(),
            ),
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn stock(&self, product_id: i32) -> i32 {
        self.products.lock().unwrap()[&product_id].1
    }

    /// Reserves every line against `products` or none of them.
    fn reserve(
        products: &mut HashMap<i32, (i32, i32)>,
        lines: &[OrderLineRequest],
    ) -> Result<Vec<(i32, i32, i32)>, PlacementError> {
        if lines.is_empty() {
            return Err(OrderError::NoItems.into());
        }
        let mut staged = products.clone();
        let mut priced = Vec::with_capacity(lines.len());
        for line in lines {
            let (price, stock) = staged
                .get_mut(&line.product_id)
                .ok_or(OrderError::ProductNotFound)?;
            if *stock < line.quantity {
                return Err(OrderError::InsufficientStock.into());
            }
            *stock -= line.quantity;
            priced.push((line.product_id, line.quantity, *price));
        }
        *products = staged;
        Ok(priced)
    }

    fn push_items(&self, order_id: i32, priced: &[(i32, i32, i32)]) {
        let now = Utc::now();
        let mut items = self.items.lock().unwrap();
        for &(product_id, quantity, price) in priced {
            let id = items.len() as i32 + 1;
            items.push(OrderItem {
                id,
                order_id,
                product_id,
                quantity,
                price,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            });
        }
    }
}

fn total_of(priced: &[(i32, i32, i32)]) -> i32 {
    priced.iter().map(|&(_, quantity, price)| quantity * price).sum()
}

impl SoftDeleteRepository for MemoryOrders {
    type Record = Order;

    fn find_page(&self, scope: Scope, query: &PageQuery) -> Result<ListResult<Order>, RepositoryError> {
        self.orders.find_page(scope, query)
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        self.orders.find_by_id(id)
    }

    fn trash(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        self.orders.trash(id)
    }

    fn restore(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        self.orders.restore(id)
    }

    fn delete_permanent(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        let deleted = self.orders.delete_permanent(id)?;
        if deleted.is_some() {
            self.items.lock().unwrap().retain(|item| item.order_id != id);
        }
        Ok(deleted)
    }

    fn restore_all(&self) -> Result<usize, RepositoryError> {
        self.orders.restore_all()
    }

    fn delete_all_permanent(&self) -> Result<Vec<Order>, RepositoryError> {
        let deleted = self.orders.delete_all_permanent()?;
        let ids: HashSet<i32> = deleted.iter().map(|order| order.id).collect();
        self.items.lock().unwrap().retain(|item| !ids.contains(&item.order_id));
        Ok(deleted)
    }
}

impl OrderRepository for MemoryOrders {
    fn place(&self, request: &PlaceOrderRequest) -> Result<Order, PlacementError> {
        let priced = Self::reserve(&mut self.products.lock().unwrap(), &request.items)?;
        let now = Utc::now();
        let order = self.orders.insert_with(|id| Order {
            id,
            merchant_id: request.merchant_id,
            user_id: request.user_id,
            total_price: total_of(&priced),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        });
        self.push_items(order.id, &priced);
        Ok(order)
    }

    fn revise(
        &self,
        id: i32,
        request: &ReviseOrderRequest,
    ) -> Result<Option<Order>, PlacementError> {
        if self.orders.find_by_id(id)?.filter(|o| !o.is_trashed()).is_none() {
            return Ok(None);
        }
        let priced = {
            let mut products = self.products.lock().unwrap();
            let mut restocked = products.clone();
            let mut items = self.items.lock().unwrap();
            for item in items.iter().filter(|item| item.order_id == id) {
                if let Some((_, stock)) = restocked.get_mut(&item.product_id) {
                    *stock += item.quantity;
                }
            }
            let priced = Self::reserve(&mut restocked, &request.items)?;
            items.retain(|item| item.order_id != id);
            *products = restocked;
            priced
        };
        self.push_items(id, &priced);
        Ok(self.orders.update_where(id, false, |order| {
            order.total_price = total_of(&priced);
            order.updated_at = Utc::now();
        }))
    }

    fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect())
    }
}

// ── Payment lookup ───────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct FakePaymentLookup {
    user: Option<User>,
    merchant: Option<Merchant>,
    order: Option<Order>,
    items: Vec<OrderItem>,
    shipping: Option<ShippingAddress>,
}

impl FakePaymentLookup {
    /// A complete order 1 with the given `(price, quantity)` items.
    pub fn with_order(items: &[(i32, i32)], shipping_cost: i32) -> Self {
        let now = Utc::now();
        let mut lookup = Self::default().with_user().with_merchant();
        lookup.order = Some(Order {
            id: 1,
            merchant_id: 1,
            user_id: 1,
            total_price: items.iter().map(|(price, quantity)| price * quantity).sum(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        });
        lookup.items = items
            .iter()
            .enumerate()
            .map(|(n, &(price, quantity))| OrderItem {
                id: n as i32 + 1,
                order_id: 1,
                product_id: n as i32 + 1,
                quantity,
                price,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            })
            .collect();
        lookup.shipping = Some(ShippingAddress {
            id: 1,
            order_id: 1,
            address: "Jl. Asia Afrika 8".to_string(),
            province: "Jawa Barat".to_string(),
            city: "Bandung".to_string(),
            country: "Indonesia".to_string(),
            courier: "JNE".to_string(),
            shipping_method: "REG".to_string(),
            shipping_cost,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        });
        lookup
    }

    pub fn with_user(mut self) -> Self {
        let now = Utc::now();
        self.user = Some(User {
            id: 1,
            firstname: "Ayu".to_string(),
            lastname: "Lestari".to_string(),
            email: "ayu@example.com".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        });
        self
    }

    pub fn with_merchant(mut self) -> Self {
        let now = Utc::now();
        self.merchant = Some(Merchant {
            id: 1,
            user_id: 1,
            name: "Acme".to_string(),
            description: None,
            address: "Jl. Sudirman 1".to_string(),
            contact_email: "shop@acme.test".to_string(),
            contact_phone: "+628123456789".to_string(),
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        });
        self
    }

    pub fn without_shipping(mut self) -> Self {
        self.shipping = None;
        self
    }
}

impl PaymentLookup for FakePaymentLookup {
    fn find_user(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self.user.clone().filter(|user| user.id == id))
    }

    fn find_merchant(&self, id: i32) -> Result<Option<Merchant>, RepositoryError> {
        Ok(self.merchant.clone().filter(|merchant| merchant.id == id))
    }

    fn find_order(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        Ok(self.order.clone().filter(|order| order.id == id))
    }

    fn find_order_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        Ok(self
            .items
            .iter()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect())
    }

    fn find_shipping_address(
        &self,
        order_id: i32,
    ) -> Result<Option<ShippingAddress>, RepositoryError> {
        Ok(self
            .shipping
            .clone()
            .filter(|address| address.order_id == order_id))
    }
}

// ── Revenue ──────────────────────────────────────────────────────────────────

/// Returns one row per month or year of the requested window.
#[derive(Default)]
pub struct FixedRevenue {
    failing: bool,
}

impl FixedRevenue {
    pub fn failing() -> Self {
        Self { failing: true }
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.failing {
            return Err(RepositoryError::Database("report failed".to_string()));
        }
        Ok(())
    }
}

impl RevenueRepository for FixedRevenue {
    fn order_monthly(&self, filter: &RevenueFilter) -> Result<Vec<MonthlyRevenue>, RepositoryError> {
        self.check()?;
        Ok((1..=12)
            .map(|month| MonthlyRevenue {
                year: filter.year,
                month,
                order_count: 1,
                items_sold: 2,
                total_revenue: 250,
            })
            .collect())
    }

    fn order_yearly(&self, filter: &RevenueFilter) -> Result<Vec<YearlyRevenue>, RepositoryError> {
        self.check()?;
        Ok((filter.first_year()..=filter.year)
            .map(|year| YearlyRevenue {
                year,
                order_count: 12,
                items_sold: 24,
                total_revenue: 3000,
            })
            .collect())
    }

    fn category_monthly(
        &self,
        filter: &RevenueFilter,
    ) -> Result<Vec<CategoryRevenue>, RepositoryError> {
        self.check()?;
        Ok(vec![CategoryRevenue {
            year: filter.year,
            month: Some(1),
            category_id: filter.category_id.unwrap_or(1),
            category_name: "Shoes".to_string(),
            order_count: 1,
            items_sold: 2,
            total_revenue: 250,
        }])
    }

    fn category_yearly(
        &self,
        filter: &RevenueFilter,
    ) -> Result<Vec<CategoryRevenue>, RepositoryError> {
        self.check()?;
        Ok(vec![CategoryRevenue {
            year: filter.year,
            month: None,
            category_id: filter.category_id.unwrap_or(1),
            category_name: "Shoes".to_string(),
            order_count: 12,
            items_sold: 24,
            total_revenue: 3000,
        }])
    }
}

// ── Cache, uploads, publishing ───────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str, _ttl: Duration) -> Result<(), CacheError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn invalidate_prefix(&self, prefix: &str) -> Result<(), CacheError> {
        self.entries
            .lock()
            .unwrap()
            .retain(|key, _| !key.starts_with(prefix));
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryUploads {
    files: Mutex<HashSet<String>>,
    fail: AtomicBool,
}

impl MemoryUploads {
    pub fn with_files(paths: &[&str]) -> Self {
        Self {
            files: Mutex::new(paths.iter().map(|path| path.to_string()).collect()),
            fail: AtomicBool::new(false),
        }
    }

    /// Every later removal fails with an I/O error.
    pub fn fail_removals(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains(path)
    }
}

impl UploadStore for MemoryUploads {
    fn remove(&self, path: &str) -> Result<(), UploadError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(UploadError::Io {
                path: path.to_string(),
                reason: "permission denied".to_string(),
            });
        }
        if self.files.lock().unwrap().remove(path) {
            Ok(())
        } else {
            Err(UploadError::NotFound(path.to_string()))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Published {
    pub topic: String,
    pub key: String,
    pub payload: Vec<u8>,
}

#[derive(Default)]
pub struct RecordingPublisher {
    sent: Mutex<Vec<Published>>,
}

impl RecordingPublisher {
    pub fn sent(&self) -> Vec<Published> {
        self.sent.lock().unwrap().clone()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), PublishError> {
        self.sent.lock().unwrap().push(Published {
            topic: topic.to_string(),
            key: key.to_string(),
            payload: payload.to_vec(),
        });
        Ok(())
    }
}

pub struct FailingPublisher;

impl EventPublisher for FailingPublisher {
    fn publish(&self, _topic: &str, _key: &str, _payload: &[u8]) -> Result<(), PublishError> {
        Err(PublishError("broker unavailable".to_string()))
    }
}
