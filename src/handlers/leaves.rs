use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::application::leave_service::LeaveService;
use crate::domain::leave::ApprovalUpdate;
use crate::domain::resource::Acknowledgement;
use crate::errors::{AppError, ErrorBody};
use crate::state::AppState;

/// PUT /leave/approval/{id}
///
/// Sets the approval of one leave request. Only `Pending`, `Yes` and `No`
/// are accepted; anything else is rejected and the stored value is kept.
#[utoipa::path(
    put,
    path = "/leave/approval/{id}",
    params(
        ("id" = Uuid, Path, description = "Leave UUID"),
    ),
    request_body = ApprovalUpdate,
    responses(
        (status = 200, description = "Approval recorded", body = Acknowledgement),
        (status = 400, description = "Value outside Pending, Yes, No", body = ErrorBody),
        (status = 404, description = "Leave not found", body = ErrorBody),
    ),
    tag = "leave"
)]
pub async fn update_approval(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ApprovalUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let approval = body.into_inner().approval;
    let service = LeaveService::new(state.store.clone());
    let ack = web::block(move || service.set_approval(id, &approval)).await??;
    Ok(HttpResponse::Ok().json(ack))
}
