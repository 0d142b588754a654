pub mod customers;
pub mod leaves;
pub mod resources;
pub mod rooms;
pub mod uploads;

use actix_web::web;

use crate::domain::bar::{BarItem, Bill};
use crate::domain::customer::Customer;
use crate::domain::employee::Employee;
use crate::domain::event::{Event, EventPlanner};
use crate::domain::gift::{Gift, Voucher};
use crate::domain::leave::Leave;
use crate::domain::order::GiftOrder;
use crate::domain::room::Room;
use crate::errors::{json_error_handler, path_error_handler, query_error_handler};

use resources::crud_scope;

/// Registers every resource router plus the image check endpoints.
///
/// Expects an [`AppState`](crate::state::AppState) in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            crud_scope::<Leave>("/leave")
                .route("/approval/{id}", web::put().to(leaves::update_approval)),
        )
        .service(crud_scope::<Employee>("/employee"))
        .service(
            crud_scope::<Customer>("/customer").route("/book", web::post().to(customers::book)),
        )
        .service(
            crud_scope::<Room>("/room")
                .route("/status/{room_number}", web::put().to(rooms::update_status))
                .route("/type/{room_type}", web::get().to(rooms::by_type))
                .route("/available", web::get().to(rooms::available)),
        )
        .service(crud_scope::<Event>("/events"))
        .service(crud_scope::<EventPlanner>("/eventplanner"))
        .service(crud_scope::<Gift>("/gifts"))
        .service(crud_scope::<Voucher>("/vouchers"))
        .service(crud_scope::<GiftOrder>("/orders"))
        .service(crud_scope::<BarItem>("/api/items"))
        .service(crud_scope::<Bill>("/api/bills"))
        .route("/check-image/{filename}", web::get().to(uploads::check_image))
        .route(
            "/check-image/{folder}/{filename}",
            web::get().to(uploads::check_image_in_folder),
        );
}
