use std::sync::Arc;

use super::caching::{page_key, read_cache, record_key, write_cache};
use super::instrument::Instrument;
use crate::domain::errors::{Entity, Operation, ServiceError};
use crate::domain::order::ShippingAddress;
use crate::domain::pagination::{ListResult, Page, PageQuery, Scope};
use crate::domain::ports::{Cache, Record, ShippingAddressLookup, SoftDeleteRepository};

/// Read side of an entity: paged listings and single lookups, read through
/// the cache.
pub struct QueryService<R: SoftDeleteRepository> {
    repo: Arc<R>,
    cache: Arc<dyn Cache>,
    instrument: Instrument,
}

impl<R: SoftDeleteRepository> QueryService<R> {
    const ENTITY: Entity = <R::Record as Record>::ENTITY;

    pub fn new(repo: Arc<R>, cache: Arc<dyn Cache>) -> Self {
        Self {
            repo,
            cache,
            instrument: Instrument::new(format!("{}_query_service", Self::ENTITY)),
        }
    }

    pub fn find_all(&self, query: &PageQuery) -> Result<Page<R::Record>, ServiceError> {
        self.find_page(Scope::All, Operation::FindAll, query)
    }

    pub fn find_active(&self, query: &PageQuery) -> Result<Page<R::Record>, ServiceError> {
        self.find_page(Scope::Active, Operation::FindActive, query)
    }

    pub fn find_trashed(&self, query: &PageQuery) -> Result<Page<R::Record>, ServiceError> {
        self.find_page(Scope::Trashed, Operation::FindTrashed, query)
    }

    /// Finds a record whether or not it is trashed.
    pub fn find_by_id(&self, id: i32) -> Result<R::Record, ServiceError> {
        let op = Operation::FindById;
        self.instrument.observe(op.name(), |call| {
            let key = record_key(Self::ENTITY, id);
            if let Some(record) = read_cache::<R::Record>(&*self.cache, call, &key) {
                return Ok(record);
            }
            let record = self
                .repo
                .find_by_id(id)
                .map_err(|err| call.fail(err, ServiceError::Failed(Self::ENTITY, op)))?
                .ok_or(ServiceError::NotFound(Self::ENTITY))?;
            write_cache(&*self.cache, call, &key, &record);
            Ok(record)
        })
    }

    fn find_page(
        &self,
        scope: Scope,
        op: Operation,
        query: &PageQuery,
    ) -> Result<Page<R::Record>, ServiceError> {
        self.instrument.observe(op.name(), |call| {
            let key = page_key(Self::ENTITY, scope, query);
            if let Some(list) = read_cache::<ListResult<R::Record>>(&*self.cache, call, &key) {
                return Ok(Page::from_list(list, query));
            }
            let list = self
                .repo
                .find_page(scope, query)
                .map_err(|err| call.fail(err, ServiceError::Failed(Self::ENTITY, op)))?;
            write_cache(&*self.cache, call, &key, &list);
            Ok(Page::from_list(list, query))
        })
    }
}

impl<R> QueryService<R>
where
    R: SoftDeleteRepository<Record = ShippingAddress> + ShippingAddressLookup,
{
    pub fn find_by_order(&self, order_id: i32) -> Result<ShippingAddress, ServiceError> {
        self.instrument.observe("find_by_order", |call| {
            let key = format!("{}:order:{}", Entity::ShippingAddress, order_id);
            if let Some(address) = read_cache::<ShippingAddress>(&*self.cache, call, &key) {
                return Ok(address);
            }
            let address = self
                .repo
                .find_by_order(order_id)
                .map_err(|err| {
                    call.fail(
                        err,
                        ServiceError::Failed(Entity::ShippingAddress, Operation::FindById),
                    )
                })?
                .ok_or(ServiceError::NotFound(Entity::ShippingAddress))?;
            write_cache(&*self.cache, call, &key, &address);
            Ok(address)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::WritableRepository;
    use crate::infrastructure::cache::NullCache;
    use crate::testing::{banner_input, banners, MemoryCache};

    #[test]
    fn pages_are_normalized_and_counted() {
        let repo = Arc::new(banners());
        for n in 0..12 {
            repo.create(&banner_input(&format!("banner {}", n))).unwrap();
        }
        let service = QueryService::new(repo, Arc::new(NullCache));

        let page = service.find_all(&PageQuery::new(0, 0, "")).unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.page_size, 10);
        assert_eq!(page.pagination.total_records, 12);
        assert_eq!(page.pagination.total_pages, 2);

        let second = service.find_all(&PageQuery::new(2, 10, "")).unwrap();
        assert_eq!(second.items.len(), 2);
    }

    #[test]
    fn scopes_split_on_the_trash_marker() {
        let repo = Arc::new(banners());
        let kept = repo.create(&banner_input("kept")).unwrap();
        let binned = repo.create(&banner_input("binned")).unwrap();
        repo.trash(binned.id).unwrap();
        let service = QueryService::new(repo, Arc::new(NullCache));

        let active = service.find_active(&PageQuery::default()).unwrap();
        assert_eq!(active.items, vec![kept]);
        let trashed = service.find_trashed(&PageQuery::default()).unwrap();
        assert_eq!(trashed.items.len(), 1);
        assert_eq!(trashed.items[0].id, binned.id);
        assert_eq!(service.find_all(&PageQuery::default()).unwrap().items.len(), 2);
    }

    #[test]
    fn search_filters_case_insensitively() {
        let repo = Arc::new(banners());
        repo.create(&banner_input("Summer Sale")).unwrap();
        repo.create(&banner_input("Winter clearance")).unwrap();
        let service = QueryService::new(repo, Arc::new(NullCache));

        let page = service.find_all(&PageQuery::new(1, 10, "summer")).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Summer Sale");
    }

    #[test]
    fn missing_record_is_not_found() {
        let service = QueryService::new(Arc::new(banners()), Arc::new(NullCache));
        assert_eq!(
            service.find_by_id(404),
            Err(ServiceError::NotFound(Entity::Banner))
        );
    }

    #[test]
    fn repository_failures_become_static_errors() {
        let repo = Arc::new(banners());
        repo.fail_next();
        let service = QueryService::new(repo, Arc::new(NullCache));
        assert_eq!(
            service.find_active(&PageQuery::default()).unwrap_err(),
            ServiceError::Failed(Entity::Banner, Operation::FindActive)
        );
    }

    #[test]
    fn reads_go_through_the_cache() {
        let repo = Arc::new(banners());
        let banner = repo.create(&banner_input("cached")).unwrap();
        let cache = Arc::new(MemoryCache::default());
        let service = QueryService::new(repo.clone(), cache.clone());

        assert_eq!(service.find_by_id(banner.id).unwrap(), banner);
        assert!(cache.contains(&format!("banner:id:{}", banner.id)));

        repo.fail_next();
        assert_eq!(service.find_by_id(banner.id).unwrap(), banner);
    }
}
