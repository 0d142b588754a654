pub mod availability;
pub mod bar;
pub mod customer;
pub mod employee;
pub mod errors;
pub mod event;
pub mod gift;
pub mod leave;
pub mod order;
pub mod ports;
pub mod pricing;
pub mod resource;
pub mod room;
pub mod validation;
