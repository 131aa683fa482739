pub use super::customer::Entity as Customer;
pub use super::customer_reservation::Entity as CustomerReservation;
pub use super::employee::Entity as Employee;
pub use super::expense::Entity as Expense;
pub use super::hotel::Entity as Hotel;
pub use super::post::Entity as Post;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
pub use super::room_service::Entity as RoomService;
pub use super::task::Entity as Task;
pub use super::user::Entity as User;
