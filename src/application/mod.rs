pub mod booking_service;
pub mod leave_service;
pub mod resource_service;
pub mod room_service;
