use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::instrument::Call;
use crate::domain::errors::Entity;
use crate::domain::pagination::{PageQuery, Scope};
use crate::domain::ports::Cache;

pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

pub fn entity_prefix(entity: Entity) -> String {
    format!("{}:", entity)
}

pub fn page_key(entity: Entity, scope: Scope, query: &PageQuery) -> String {
    format!(
        "{}:{}:page:{}:pageSize:{}:search:{}",
        entity,
        scope.name(),
        query.page,
        query.page_size,
        query.search
    )
}

pub fn record_key(entity: Entity, id: i32) -> String {
    format!("{}:id:{}", entity, id)
}

/// Cache misses, read failures and undecodable entries all yield `None`.
pub fn read_cache<T: DeserializeOwned>(cache: &dyn Cache, call: &Call<'_>, key: &str) -> Option<T> {
    let raw = match cache.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            call.warn(format_args!("cache read {} bypassed: {}", key, err));
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            call.warn(format_args!("cache entry {} ignored: {}", key, err));
            None
        }
    }
}

pub fn write_cache<T: Serialize>(cache: &dyn Cache, call: &Call<'_>, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            call.warn(format_args!("cache entry {} not encoded: {}", key, err));
            return;
        }
    };
    if let Err(err) = cache.set(key, &raw, CACHE_TTL) {
        call.warn(format_args!("cache write {} skipped: {}", key, err));
    }
}

pub fn invalidate(cache: &dyn Cache, call: &Call<'_>, entities: &[Entity]) {
    for entity in entities {
        let prefix = entity_prefix(*entity);
        if let Err(err) = cache.invalidate_prefix(&prefix) {
            call.warn(format_args!("cache invalidation of {} failed: {}", prefix, err));
        }
    }
}
