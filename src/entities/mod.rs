pub mod prelude;

pub mod customer;
pub mod customer_reservation;
pub mod employee;
pub mod expense;
pub mod hotel;
pub mod post;
pub mod reservation;
pub mod room;
pub mod room_service;
pub mod task;
pub mod user;
