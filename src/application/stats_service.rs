use std::sync::Arc;

use validator::Validate;

use super::instrument::Instrument;
use crate::domain::errors::{Entity, Operation, RepositoryError, ServiceError};
use crate::domain::ports::RevenueRepository;
use crate::domain::stats::{CategoryRevenue, MonthlyRevenue, RevenueFilter, YearlyRevenue};

/// Revenue reports over orders and over product categories.
pub struct StatsService<R> {
    repo: Arc<R>,
    orders: Instrument,
    categories: Instrument,
}

impl<R: RevenueRepository> StatsService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            orders: Instrument::new("order_stats_service"),
            categories: Instrument::new("category_stats_service"),
        }
    }

    pub fn order_monthly(&self, filter: &RevenueFilter) -> Result<Vec<MonthlyRevenue>, ServiceError> {
        self.report(&self.orders, Entity::Order, "find_monthly", filter, |repo, filter| {
            repo.order_monthly(filter)
        })
    }

    pub fn order_yearly(&self, filter: &RevenueFilter) -> Result<Vec<YearlyRevenue>, ServiceError> {
        self.report(&self.orders, Entity::Order, "find_yearly", filter, |repo, filter| {
            repo.order_yearly(filter)
        })
    }

    pub fn category_monthly(
        &self,
        filter: &RevenueFilter,
    ) -> Result<Vec<CategoryRevenue>, ServiceError> {
        self.report(
            &self.categories,
            Entity::Category,
            "find_monthly",
            filter,
            |repo, filter| repo.category_monthly(filter),
        )
    }

    pub fn category_yearly(
        &self,
        filter: &RevenueFilter,
    ) -> Result<Vec<CategoryRevenue>, ServiceError> {
        self.report(
            &self.categories,
            Entity::Category,
            "find_yearly",
            filter,
            |repo, filter| repo.category_yearly(filter),
        )
    }

    fn report<T, F>(
        &self,
        instrument: &Instrument,
        entity: Entity,
        method: &'static str,
        filter: &RevenueFilter,
        query: F,
    ) -> Result<Vec<T>, ServiceError>
    where
        F: FnOnce(&R, &RevenueFilter) -> Result<Vec<T>, RepositoryError>,
    {
        instrument.observe(method, |call| {
            filter
                .validate()
                .map_err(|err| call.reject(err, ServiceError::InvalidRequest(entity)))?;
            query(&*self.repo, filter)
                .map_err(|err| call.fail(err, ServiceError::Failed(entity, Operation::Report)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedRevenue;

    fn filter(year: i32) -> RevenueFilter {
        RevenueFilter {
            year,
            merchant_id: None,
            category_id: None,
        }
    }

    #[test]
    fn reports_come_from_the_repository() {
        let service = StatsService::new(Arc::new(FixedRevenue::default()));
        let months = service.order_monthly(&filter(2024)).unwrap();
        assert_eq!(months.len(), 12);
        assert!(months.iter().all(|m| m.year == 2024));

        let years = service.order_yearly(&filter(2024)).unwrap();
        assert_eq!(
            years.iter().map(|y| y.year).collect::<Vec<_>>(),
            vec![2020, 2021, 2022, 2023, 2024]
        );
    }

    #[test]
    fn invalid_filters_are_rejected() {
        let service = StatsService::new(Arc::new(FixedRevenue::default()));
        assert_eq!(
            service.category_yearly(&filter(0)),
            Err(ServiceError::InvalidRequest(Entity::Category))
        );
    }

    #[test]
    fn repository_failures_are_reported_per_surface() {
        let service = StatsService::new(Arc::new(FixedRevenue::failing()));
        assert_eq!(
            service.category_monthly(&filter(2024)),
            Err(ServiceError::Failed(Entity::Category, Operation::Report))
        );
        assert_eq!(
            service.order_yearly(&filter(2024)),
            Err(ServiceError::Failed(Entity::Order, Operation::Report))
        );
    }
}
