use actix_web::{web, HttpResponse, Scope};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::response::{self, Affected};
use crate::application::command::CommandService;
use crate::application::query::QueryService;
use crate::domain::errors::Entity;
use crate::domain::pagination::PageQuery;
use crate::domain::ports::{Record, SoftDeleteRepository, WritableRepository};
use crate::errors::AppError;

// ── Query string ─────────────────────────────────────────────────────────────

/// `page` and `page_size` default to 0 and are normalized by [`PageQuery`].
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub page_size: i64,
    #[serde(default)]
    pub search: String,
}

impl From<ListParams> for PageQuery {
    fn from(params: ListParams) -> Self {
        PageQuery::new(params.page, params.page_size, params.search)
    }
}

fn entity<R: SoftDeleteRepository>() -> Entity {
    <R::Record as Record>::ENTITY
}

// ── Routes ───────────────────────────────────────────────────────────────────

/// Read and lifecycle routes of one entity. Static segments are registered
/// ahead of `/{id}`.
pub fn soft_delete_scope<R: SoftDeleteRepository>(path: &str) -> Scope {
    web::scope(path)
        .route("", web::get().to(find_all::<R>))
        .route("/active", web::get().to(find_active::<R>))
        .route("/trashed", web::get().to(find_trashed::<R>))
        .route("/restore-all", web::post().to(restore_all::<R>))
        .route("/permanent-all", web::delete().to(delete_all_permanent::<R>))
        .route("/{id}", web::get().to(find_by_id::<R>))
        .route("/{id}/trash", web::post().to(trash::<R>))
        .route("/{id}/restore", web::post().to(restore::<R>))
        .route("/{id}/permanent", web::delete().to(delete_permanent::<R>))
}

/// [`soft_delete_scope`] plus create and update from a JSON body.
pub fn writable_scope<R>(path: &str) -> Scope
where
    R: WritableRepository,
    R::Input: DeserializeOwned,
{
    soft_delete_scope::<R>(path)
        .route("", web::post().to(create::<R>))
        .route("/{id}", web::put().to(update::<R>))
}

// ── Handlers ─────────────────────────────────────────────────────────────────

pub async fn find_all<R: SoftDeleteRepository>(
    service: web::Data<QueryService<R>>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let query = PageQuery::from(params.into_inner());
    let page = web::block(move || service.find_all(&query)).await??;
    Ok(response::paginated(
        format!("Successfully fetched {} records", entity::<R>()),
        page,
    ))
}

pub async fn find_active<R: SoftDeleteRepository>(
    service: web::Data<QueryService<R>>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let query = PageQuery::from(params.into_inner());
    let page = web::block(move || service.find_active(&query)).await??;
    Ok(response::paginated(
        format!("Successfully fetched active {} records", entity::<R>()),
        page,
    ))
}

pub async fn find_trashed<R: SoftDeleteRepository>(
    service: web::Data<QueryService<R>>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let query = PageQuery::from(params.into_inner());
    let page = web::block(move || service.find_trashed(&query)).await??;
    Ok(response::paginated(
        format!("Successfully fetched trashed {} records", entity::<R>()),
        page,
    ))
}

pub async fn find_by_id<R: SoftDeleteRepository>(
    service: web::Data<QueryService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let record = web::block(move || service.find_by_id(id)).await??;
    Ok(response::ok(
        format!("Successfully fetched {}", entity::<R>()),
        record,
    ))
}

pub async fn create<R>(
    service: web::Data<CommandService<R>>,
    body: web::Json<R::Input>,
) -> Result<HttpResponse, AppError>
where
    R: WritableRepository,
    R::Input: DeserializeOwned,
{
    let input = body.into_inner();
    let record = web::block(move || service.create(&input)).await??;
    Ok(response::created(
        format!("Successfully created {}", entity::<R>()),
        record,
    ))
}

pub async fn update<R>(
    service: web::Data<CommandService<R>>,
    path: web::Path<i32>,
    body: web::Json<R::Input>,
) -> Result<HttpResponse, AppError>
where
    R: WritableRepository,
    R::Input: DeserializeOwned,
{
    let id = path.into_inner();
    let input = body.into_inner();
    let record = web::block(move || service.update(id, &input)).await??;
    Ok(response::ok(
        format!("Successfully updated {}", entity::<R>()),
        record,
    ))
}

pub async fn trash<R: SoftDeleteRepository>(
    service: web::Data<CommandService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let record = web::block(move || service.trash(id)).await??;
    Ok(response::ok(
        format!("Successfully trashed {}", entity::<R>()),
        record,
    ))
}

pub async fn restore<R: SoftDeleteRepository>(
    service: web::Data<CommandService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let record = web::block(move || service.restore(id)).await??;
    Ok(response::ok(
        format!("Successfully restored {}", entity::<R>()),
        record,
    ))
}

pub async fn delete_permanent<R: SoftDeleteRepository>(
    service: web::Data<CommandService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    web::block(move || service.delete_permanent(id)).await??;
    Ok(response::ok(
        format!("Successfully deleted {} permanently", entity::<R>()),
        (),
    ))
}

pub async fn restore_all<R: SoftDeleteRepository>(
    service: web::Data<CommandService<R>>,
) -> Result<HttpResponse, AppError> {
    let affected = web::block(move || service.restore_all()).await??;
    Ok(response::ok(
        format!("Successfully restored all {} records", entity::<R>()),
        Affected { affected },
    ))
}

pub async fn delete_all_permanent<R: SoftDeleteRepository>(
    service: web::Data<CommandService<R>>,
) -> Result<HttpResponse, AppError> {
    let affected = web::block(move || service.delete_all_permanent()).await??;
    Ok(response::ok(
        format!("Successfully deleted all trashed {} records", entity::<R>()),
        Affected { affected },
    ))
}
