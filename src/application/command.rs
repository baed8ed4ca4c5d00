use std::sync::Arc;

use validator::Validate;

use super::caching::invalidate;
use super::instrument::{Call, Instrument};
use crate::domain::errors::{Entity, Operation, RepositoryError, ServiceError, UploadError};
use crate::domain::ports::{Cache, Record, SoftDeleteRepository, UploadStore, WritableRepository};

/// Maps a repository failure of a write to the error returned to callers.
pub(crate) fn write_failure(
    call: &Call<'_>,
    entity: Entity,
    op: Operation,
    err: RepositoryError,
) -> ServiceError {
    match err {
        RepositoryError::Conflict(_) => call.reject(err, ServiceError::AlreadyExists(entity)),
        RepositoryError::NotFound(_) => call.reject(err, ServiceError::InvalidRequest(entity)),
        other => call.fail(other, ServiceError::Failed(entity, op)),
    }
}

/// Write side of an entity: create, update and the soft-delete lifecycle.
/// Every successful write drops the entity's cached pages and records.
pub struct CommandService<R: SoftDeleteRepository> {
    repo: Arc<R>,
    cache: Arc<dyn Cache>,
    uploads: Arc<dyn UploadStore>,
    instrument: Instrument,
}

impl<R: SoftDeleteRepository> CommandService<R> {
    const ENTITY: Entity = <R::Record as Record>::ENTITY;

    /// The entity itself plus every entity its permanent deletes cascade to.
    fn deleted_entities() -> Vec<Entity> {
        std::iter::once(Self::ENTITY)
            .chain(<R::Record as Record>::CASCADES.iter().copied())
            .collect()
    }

    fn remove_cascaded(&self, call: &Call<'_>, paths: &[String]) {
        for path in paths {
            if let Err(err) = self.uploads.remove(path) {
                call.warn(format_args!("cascaded upload left behind: {}", err));
            }
        }
    }

    pub fn new(repo: Arc<R>, cache: Arc<dyn Cache>, uploads: Arc<dyn UploadStore>) -> Self {
        Self {
            repo,
            cache,
            uploads,
            instrument: Instrument::new(format!("{}_command_service", Self::ENTITY)),
        }
    }

    pub fn trash(&self, id: i32) -> Result<R::Record, ServiceError> {
        let op = Operation::Trash;
        self.instrument.observe(op.name(), |call| {
            let record = self
                .repo
                .trash(id)
                .map_err(|err| call.fail(err, ServiceError::Failed(Self::ENTITY, op)))?
                .ok_or(ServiceError::NotFound(Self::ENTITY))?;
            invalidate(&*self.cache, call, &[Self::ENTITY]);
            Ok(record)
        })
    }

    pub fn restore(&self, id: i32) -> Result<R::Record, ServiceError> {
        let op = Operation::Restore;
        self.instrument.observe(op.name(), |call| {
            let record = self
                .repo
                .restore(id)
                .map_err(|err| call.fail(err, ServiceError::Failed(Self::ENTITY, op)))?
                .ok_or(ServiceError::NotFound(Self::ENTITY))?;
            invalidate(&*self.cache, call, &[Self::ENTITY]);
            Ok(record)
        })
    }

    /// Removes a trashed record for good. An uploaded file is deleted first;
    /// when that fails the row stays. Uploads of cascaded child rows are
    /// looked up before the delete and removed, best effort, after it.
    pub fn delete_permanent(&self, id: i32) -> Result<(), ServiceError> {
        let op = Operation::DeletePermanent;
        self.instrument.observe(op.name(), |call| {
            let record = self
                .repo
                .find_by_id(id)
                .map_err(|err| call.fail(err, ServiceError::Failed(Self::ENTITY, op)))?
                .filter(Record::is_trashed)
                .ok_or(ServiceError::NotFound(Self::ENTITY))?;
            let cascaded = self
                .repo
                .cascaded_uploads(id)
                .map_err(|err| call.fail(err, ServiceError::Failed(Self::ENTITY, op)))?;

            if let Some(path) = record.upload() {
                self.uploads.remove(path).map_err(|err| match err {
                    UploadError::NotFound(_) => {
                        call.fail(err, ServiceError::UploadNotFound(Self::ENTITY))
                    }
                    UploadError::Io { .. } | UploadError::OutsideRoot(_) => {
                        call.fail(err, ServiceError::UploadRemoval(Self::ENTITY))
                    }
                })?;
            }

            self.repo
                .delete_permanent(id)
                .map_err(|err| call.fail(err, ServiceError::Failed(Self::ENTITY, op)))?
                .ok_or(ServiceError::NotFound(Self::ENTITY))?;
            self.remove_cascaded(call, &cascaded);
            invalidate(&*self.cache, call, &Self::deleted_entities());
            Ok(())
        })
    }

    /// Returns the number of restored records.
    pub fn restore_all(&self) -> Result<usize, ServiceError> {
        let op = Operation::RestoreAll;
        self.instrument.observe(op.name(), |call| {
            let restored = self
                .repo
                .restore_all()
                .map_err(|err| call.fail(err, ServiceError::Failed(Self::ENTITY, op)))?;
            invalidate(&*self.cache, call, &[Self::ENTITY]);
            Ok(restored)
        })
    }

    /// Deletes every trashed record and then, best effort, their uploads.
    /// Returns the number of deleted records.
    pub fn delete_all_permanent(&self) -> Result<usize, ServiceError> {
        let op = Operation::DeleteAllPermanent;
        self.instrument.observe(op.name(), |call| {
            let cascaded = self
                .repo
                .trashed_cascaded_uploads()
                .map_err(|err| call.fail(err, ServiceError::Failed(Self::ENTITY, op)))?;
            let deleted = self
                .repo
                .delete_all_permanent()
                .map_err(|err| call.fail(err, ServiceError::Failed(Self::ENTITY, op)))?;
            for path in deleted.iter().filter_map(Record::upload) {
                if let Err(err) = self.uploads.remove(path) {
                    call.warn(format_args!("upload left behind: {}", err));
                }
            }
            self.remove_cascaded(call, &cascaded);
            invalidate(&*self.cache, call, &Self::deleted_entities());
            Ok(deleted.len())
        })
    }
}

impl<R: WritableRepository> CommandService<R> {
    pub fn create(&self, input: &R::Input) -> Result<R::Record, ServiceError> {
        let op = Operation::Create;
        self.instrument.observe(op.name(), |call| {
            input
                .validate()
                .map_err(|err| call.reject(err, ServiceError::InvalidRequest(Self::ENTITY)))?;
            let record = self
                .repo
                .create(input)
                .map_err(|err| write_failure(call, Self::ENTITY, op, err))?;
            invalidate(&*self.cache, call, &[Self::ENTITY]);
            Ok(record)
        })
    }

    /// Updates an active record.
    pub fn update(&self, id: i32, input: &R::Input) -> Result<R::Record, ServiceError> {
        let op = Operation::Update;
        self.instrument.observe(op.name(), |call| {
            input
                .validate()
                .map_err(|err| call.reject(err, ServiceError::InvalidRequest(Self::ENTITY)))?;
            let record = self
                .repo
                .update(id, input)
                .map_err(|err| write_failure(call, Self::ENTITY, op, err))?
                .ok_or(ServiceError::NotFound(Self::ENTITY))?;
            invalidate(&*self.cache, call, &[Self::ENTITY]);
            Ok(record)
        })
    }
}
