pub mod customers;
pub mod employees;
pub mod expenses;
pub mod hotels;
pub mod posts;
pub mod reservations;
pub mod room_services;
pub mod rooms;
pub mod tasks;
pub mod users;
