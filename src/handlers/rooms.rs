use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::application::room_service::RoomService;
use crate::domain::availability::AvailabilityQuery;
use crate::domain::resource::Acknowledgement;
use crate::domain::room::{Room, RoomStatus, RoomStatusUpdate};
use crate::errors::{AppError, ErrorBody};
use crate::state::AppState;

/// PUT /room/status/{room_number}
///
/// Sets the status of the room with the given number.
#[utoipa::path(
    put,
    path = "/room/status/{room_number}",
    params(
        ("room_number" = String, Path, description = "Room number, e.g. \"204\""),
    ),
    request_body = RoomStatusUpdate,
    responses(
        (status = 200, description = "Status updated", body = Acknowledgement),
        (status = 400, description = "Value outside Available, Reserved, Booked", body = ErrorBody),
        (status = 404, description = "No room with that number", body = ErrorBody),
    ),
    tag = "room"
)]
pub async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<RoomStatusUpdate>,
) -> Result<HttpResponse, AppError> {
    let room_number = path.into_inner();
    let status: RoomStatus = body.into_inner().status.parse()?;
    let service = RoomService::new(state.store.clone());
    let ack = web::block(move || service.update_status(&room_number, status)).await??;
    Ok(HttpResponse::Ok().json(ack))
}

/// GET /room/type/{room_type}
///
/// Rooms whose type equals `room_type` exactly (case-sensitive).
#[utoipa::path(
    get,
    path = "/room/type/{room_type}",
    params(
        ("room_type" = String, Path, description = "Room type, e.g. \"Double\""),
    ),
    responses(
        (status = 200, description = "Matching rooms", body = [Room]),
    ),
    tag = "room"
)]
pub async fn by_type(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let room_type = path.into_inner();
    let service = RoomService::new(state.store.clone());
    let rooms = web::block(move || service.by_type(&room_type)).await??;
    Ok(HttpResponse::Ok().json(rooms))
}

/// GET /room/available
///
/// Rooms free for the requested stay: Available, large enough, of the
/// requested type, and without an overlapping customer booking.
#[utoipa::path(
    get,
    path = "/room/available",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Rooms free for the stay", body = [Room]),
        (status = 400, description = "Dates in the past or inverted", body = ErrorBody),
    ),
    tag = "room"
)]
pub async fn available(
    state: web::Data<AppState>,
    query: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let today = Utc::now().date_naive();
    let service = RoomService::new(state.store.clone());
    let rooms = web::block(move || service.available(&query, today)).await??;
    Ok(HttpResponse::Ok().json(rooms))
}
