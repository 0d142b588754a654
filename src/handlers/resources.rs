//! The CRUD router every resource noun gets.

use actix_web::{web, HttpResponse, Scope};
use uuid::Uuid;

use crate::application::resource_service::ResourceService;
use crate::domain::resource::Resource;
use crate::errors::AppError;
use crate::state::AppState;

/// Mounts the uniform CRUD routes for `T` under `path`.
///
/// | Method | Route          | Result                     |
/// |--------|----------------|----------------------------|
/// | POST   | `/`, `/add`    | 201 + created record       |
/// | GET    | `/`            | every record               |
/// | GET    | `/get/{id}`    | the record or 404          |
/// | PUT    | `/update/{id}` | acknowledgement or 404     |
/// | PATCH  | `/update/{id}` | same as PUT                |
/// | DELETE | `/delete/{id}` | acknowledgement or 404     |
///
/// Updates overwrite only the fields present in the body. A `null` value
/// counts as absent, so an update cannot clear an optional field such as
/// `image` or `budget`.
pub fn crud_scope<T: Resource>(path: &str) -> Scope {
    web::scope(path)
        .route("", web::get().to(list::<T>))
        .route("/", web::get().to(list::<T>))
        .route("", web::post().to(create::<T>))
        .route("/", web::post().to(create::<T>))
        .route("/add", web::post().to(create::<T>))
        .route("/get/{id}", web::get().to(get::<T>))
        .route("/update/{id}", web::put().to(update::<T>))
        .route("/update/{id}", web::patch().to(update::<T>))
        .route("/delete/{id}", web::delete().to(delete::<T>))
}

pub async fn create<T: Resource>(
    state: web::Data<AppState>,
    body: web::Json<T>,
) -> Result<HttpResponse, AppError> {
    let service = ResourceService::<T>::new(state.store.clone());
    let record = web::block(move || service.create(body.into_inner())).await??;
    Ok(HttpResponse::Created().json(record))
}

pub async fn list<T: Resource>(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = ResourceService::<T>::new(state.store.clone());
    let records = web::block(move || service.list()).await??;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn get<T: Resource>(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = ResourceService::<T>::new(state.store.clone());
    let record = web::block(move || service.get(id)).await??;

    match record {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(AppError::NotFound(T::NAME.to_string())),
    }
}

pub async fn update<T: Resource>(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<T::Patch>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = ResourceService::<T>::new(state.store.clone());
    let ack = web::block(move || service.update(id, body.into_inner())).await??;
    Ok(HttpResponse::Ok().json(ack))
}

pub async fn delete<T: Resource>(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let service = ResourceService::<T>::new(state.store.clone());
    let ack = web::block(move || service.delete(id)).await??;
    Ok(HttpResponse::Ok().json(ack))
}
