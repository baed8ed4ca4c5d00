use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};

use crate::application::command::CommandService;
use crate::application::order_service::OrderService;
use crate::application::query::QueryService;
use crate::application::stats_service::StatsService;
use crate::application::transaction_service::TransactionService;
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::domain::errors::PublishError;
use crate::domain::ports::{Cache, EventPublisher, SoftDeleteRepository, UploadStore};
use crate::handlers::crud::{soft_delete_scope, writable_scope};
use crate::handlers::orders::order_scope;
use crate::handlers::shipping::shipping_scope;
use crate::handlers::stats::{with_category_stats, with_order_stats};
use crate::handlers::transactions::transaction_scope;
use crate::handlers::{json_config, metrics, path_config, query_config};
use crate::infrastructure::cache::{create_redis_pool, NullCache, RedisCache};
use crate::infrastructure::order_repo::DieselOrderRepository;
use crate::infrastructure::payment_lookup::DieselPaymentLookup;
use crate::infrastructure::publisher::{KafkaPublisher, LogPublisher};
use crate::infrastructure::repositories::*;
use crate::infrastructure::stats_repo::DieselRevenueRepository;
use crate::infrastructure::uploads::LocalUploads;

/// Connections shared by every worker.
#[derive(Clone)]
pub struct Backends {
    pub pool: DbPool,
    pub cache: Arc<dyn Cache>,
    pub uploads: Arc<dyn UploadStore>,
    pub publisher: Arc<dyn EventPublisher>,
}

impl Backends {
    /// An unreachable Redis only disables caching; a Kafka producer that
    /// cannot be created is an error.
    pub fn connect(config: &AppConfig, pool: DbPool) -> Result<Self, PublishError> {
        let cache: Arc<dyn Cache> = match &config.redis_url {
            Some(url) => match create_redis_pool(url) {
                Ok(redis) => {
                    log::info!("Caching enabled against {}", url);
                    Arc::new(RedisCache::new(redis))
                }
                Err(e) => {
                    log::warn!("Redis unavailable, caching disabled: {}", e);
                    Arc::new(NullCache)
                }
            },
            None => Arc::new(NullCache),
        };
        let publisher: Arc<dyn EventPublisher> = match &config.kafka_brokers {
            Some(brokers) => Arc::new(KafkaPublisher::new(brokers)?),
            None => Arc::new(LogPublisher),
        };
        Ok(Self {
            pool,
            cache,
            uploads: Arc::new(LocalUploads::new(config.upload_dir.clone())),
            publisher,
        })
    }

    fn queries<R: SoftDeleteRepository>(&self, repo: &Arc<R>) -> web::Data<QueryService<R>> {
        web::Data::new(QueryService::new(repo.clone(), self.cache.clone()))
    }

    fn commands<R: SoftDeleteRepository>(&self, repo: &Arc<R>) -> web::Data<CommandService<R>> {
        web::Data::new(CommandService::new(
            repo.clone(),
            self.cache.clone(),
            self.uploads.clone(),
        ))
    }
}

/// Registers the query and command services of one Diesel repository and its
/// routes.
macro_rules! entity {
    ($cfg:ident, $backends:ident, $repo:ty, $scope:expr) => {{
        let repo = Arc::new(<$repo>::new($backends.pool.clone()));
        $cfg.app_data($backends.queries(&repo))
            .app_data($backends.commands(&repo))
            .service($scope);
    }};
}

pub fn configure(cfg: &mut web::ServiceConfig, backends: &Backends) {
    let stats = web::Data::new(StatsService::new(Arc::new(DieselRevenueRepository::new(
        backends.pool.clone(),
    ))));
    cfg.app_data(stats);

    // ── Catalog ──────────────────────────────────────────────────────────────
    entity!(cfg, backends, DieselBannerRepository,
        writable_scope::<DieselBannerRepository>("/api/banners"));
    entity!(cfg, backends, DieselSliderRepository,
        writable_scope::<DieselSliderRepository>("/api/sliders"));
    entity!(cfg, backends, DieselCategoryRepository,
        with_category_stats::<DieselRevenueRepository>(
            writable_scope::<DieselCategoryRepository>("/api/categories"),
        ));
    entity!(cfg, backends, DieselProductRepository,
        writable_scope::<DieselProductRepository>("/api/products"));

    // ── Merchants ────────────────────────────────────────────────────────────
    entity!(cfg, backends, DieselMerchantRepository,
        writable_scope::<DieselMerchantRepository>("/api/merchants"));
    entity!(cfg, backends, DieselMerchantAwardRepository,
        writable_scope::<DieselMerchantAwardRepository>("/api/merchant-awards"));
    entity!(cfg, backends, DieselMerchantBusinessRepository,
        writable_scope::<DieselMerchantBusinessRepository>("/api/merchant-businesses"));
    entity!(cfg, backends, DieselMerchantDetailRepository,
        writable_scope::<DieselMerchantDetailRepository>("/api/merchant-details"));
    entity!(cfg, backends, DieselMerchantPolicyRepository,
        writable_scope::<DieselMerchantPolicyRepository>("/api/merchant-policies"));
    entity!(cfg, backends, DieselMerchantSocialLinkRepository,
        writable_scope::<DieselMerchantSocialLinkRepository>("/api/merchant-social-links"));

    // ── Accounts and reviews ─────────────────────────────────────────────────
    entity!(cfg, backends, DieselUserRepository,
        writable_scope::<DieselUserRepository>("/api/users"));
    entity!(cfg, backends, DieselRoleRepository,
        writable_scope::<DieselRoleRepository>("/api/roles"));
    entity!(cfg, backends, DieselReviewRepository,
        writable_scope::<DieselReviewRepository>("/api/reviews"));
    entity!(cfg, backends, DieselReviewDetailRepository,
        writable_scope::<DieselReviewDetailRepository>("/api/review-details"));

    // ── Orders and payments ──────────────────────────────────────────────────
    let orders = Arc::new(DieselOrderRepository::new(backends.pool.clone()));
    cfg.app_data(web::Data::new(OrderService::new(
        orders,
        backends.cache.clone(),
    )));
    entity!(cfg, backends, DieselOrderRepository,
        with_order_stats::<DieselRevenueRepository>(
            order_scope::<DieselOrderRepository>("/api/orders"),
        ));
    entity!(cfg, backends, DieselOrderItemRepository,
        soft_delete_scope::<DieselOrderItemRepository>("/api/order-items"));
    entity!(cfg, backends, DieselShippingAddressRepository,
        shipping_scope::<DieselShippingAddressRepository>("/api/shipping-addresses"));

    let transactions = Arc::new(DieselTransactionRepository::new(backends.pool.clone()));
    cfg.app_data(web::Data::new(TransactionService::new(
        transactions.clone(),
        Arc::new(DieselPaymentLookup::new(backends.pool.clone())),
        backends.publisher.clone(),
        backends.cache.clone(),
    )))
    .app_data(backends.queries(&transactions))
    .app_data(backends.commands(&transactions))
    .service(transaction_scope::<DieselTransactionRepository>("/api/transactions"));
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    backends: Backends,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(json_config())
            .app_data(query_config())
            .app_data(path_config())
            .route("/metrics", web::get().to(metrics::metrics))
            .configure(|cfg| configure(cfg, &backends))
    })
    .bind((host.to_string(), port))?
    .run())
}
