use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::application::booking_service::BookingService;
use crate::domain::customer::Customer;
use crate::errors::{AppError, ErrorBody};
use crate::state::AppState;

/// POST /customer/book
///
/// Marks the chosen room Booked and stores the customer in one call. When
/// the customer cannot be stored the room's previous status is restored.
#[utoipa::path(
    post,
    path = "/customer/book",
    request_body = Customer,
    responses(
        (status = 201, description = "Room booked and customer created", body = Customer),
        (status = 400, description = "Invalid customer or check-in in the past", body = ErrorBody),
        (status = 404, description = "No room with that number", body = ErrorBody),
        (status = 409, description = "Room is not available", body = ErrorBody),
    ),
    tag = "customer"
)]
pub async fn book(
    state: web::Data<AppState>,
    body: web::Json<Customer>,
) -> Result<HttpResponse, AppError> {
    let customer = body.into_inner();
    let today = Utc::now().date_naive();
    let service = BookingService::new(state.store.clone());
    let record = web::block(move || service.book(customer, today)).await??;
    Ok(HttpResponse::Created().json(record))
}
