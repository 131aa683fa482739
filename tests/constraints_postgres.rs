//! End-to-end constraint behavior against a real Postgres.
//!
//! These tests need a database; run them with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.

use migration::{Migrator, MigratorTrait};
use pousada_rs::entities::{
    customer, customer_reservation, employee, expense, hotel, reservation, room, task, user,
};
use pousada_rs::error::AppError;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, Database,
    DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
};

async fn connect() -> DatabaseConnection {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for these tests");
    let db = Database::connect(&url).await.expect("connect to postgres");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

async fn new_hotel(db: &DatabaseConnection, name: &str) -> hotel::Model {
    hotel::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert hotel")
}

async fn new_user(db: &DatabaseConnection, email: &str) -> user::Model {
    user::Entity::delete_many()
        .filter(user::Column::Email.eq(email))
        .exec(db)
        .await
        .expect("clean up user");

    user::ActiveModel {
        email: Set(email.to_string()),
        password: Set("$2b$12$abcdefghijklmnopqrstuv".to_string()),
        role: NotSet,
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert user")
}

async fn new_room(db: &DatabaseConnection, number: i32, hotel_id: i32) -> room::Model {
    room::Entity::delete_by_id(number)
        .exec(db)
        .await
        .expect("clean up room");

    room::ActiveModel {
        number: Set(number),
        hotel_id: Set(hotel_id),
        floor: Set(1),
        available: NotSet,
        beds: Set(2),
        description: NotSet,
        daily_rate: Set(150.0),
    }
    .insert(db)
    .await
    .expect("insert room")
}

async fn new_employee(
    db: &DatabaseConnection,
    cpf: &str,
    user_id: i32,
    hotel_id: i32,
) -> employee::Model {
    employee::Entity::delete_by_id(cpf)
        .exec(db)
        .await
        .expect("clean up employee");

    employee::ActiveModel {
        cpf: Set(cpf.to_string()),
        user_id: Set(user_id),
        hotel_id: Set(hotel_id),
        name: Set("Ana Souza".to_string()),
        phone: Set("+55 11 91234-5678".to_string()),
        address: Set(None),
    }
    .insert(db)
    .await
    .expect("insert employee")
}

async fn new_customer(db: &DatabaseConnection, cpf: &str) -> customer::Model {
    customer::Entity::delete_by_id(cpf)
        .exec(db)
        .await
        .expect("clean up customer");

    customer::ActiveModel {
        cpf: Set(cpf.to_string()),
        name: Set("João Lima".to_string()),
        email: Set(None),
        phone: Set(None),
        address: Set(None),
    }
    .insert(db)
    .await
    .expect("insert customer")
}

#[tokio::test]
#[ignore = "requires a Postgres at DATABASE_URL"]
async fn inserts_pick_up_column_defaults() {
    let db = connect().await;

    let hotel = new_hotel(&db, "Defaults").await;
    assert!(!hotel.deleted);

    let room = new_room(&db, 9101, hotel.id).await;
    assert!(room.available);
    assert_eq!(room.description, "");

    let user = new_user(&db, "defaults@pousada.example").await;
    assert!(user.role.is_empty());

    let reservation = reservation::ActiveModel {
        room_number: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("insert bare reservation");
    assert_eq!(reservation.total_price, 0.0);
    assert!(!reservation.status_paid);
    assert!(reservation.vehicles.is_empty());

    let expense = expense::ActiveModel {
        hotel_id: Set(hotel.id),
        description: Set("linen".to_string()),
        value: Set(80.0),
        date: NotSet,
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("insert expense");
    assert!(expense.date.and_utc().timestamp() > 0);

    reservation.delete(&db).await.expect("delete reservation");
    hotel.delete(&db).await.expect("delete hotel");
}

#[tokio::test]
#[ignore = "requires a Postgres at DATABASE_URL"]
async fn duplicate_primary_key_is_a_unique_violation() {
    let db = connect().await;

    new_customer(&db, "900.000.000-01").await;
    let err = customer::ActiveModel {
        cpf: Set("900.000.000-01".to_string()),
        name: Set("Duplicate".to_string()),
        email: Set(None),
        phone: Set(None),
        address: Set(None),
    }
    .insert(&db)
    .await
    .expect_err("duplicate cpf must fail");

    assert!(matches!(AppError::from(err), AppError::UniqueViolation(_)));
}

#[tokio::test]
#[ignore = "requires a Postgres at DATABASE_URL"]
async fn dangling_user_reference_is_a_foreign_key_violation() {
    let db = connect().await;

    let hotel = new_hotel(&db, "Dangling").await;
    let err = employee::ActiveModel {
        cpf: Set("900.000.000-02".to_string()),
        user_id: Set(i32::MAX),
        hotel_id: Set(hotel.id),
        name: Set("Ghost".to_string()),
        phone: Set("-".to_string()),
        address: Set(None),
    }
    .insert(&db)
    .await
    .expect_err("unknown user id must fail");

    assert!(matches!(
        AppError::from(err),
        AppError::ForeignKeyViolation(_)
    ));

    hotel.delete(&db).await.expect("delete hotel");
}

#[tokio::test]
#[ignore = "requires a Postgres at DATABASE_URL"]
async fn deleting_a_hotel_cascades_to_rooms_employees_and_expenses() {
    let db = connect().await;

    let hotel = new_hotel(&db, "Grand").await;
    let user = new_user(&db, "cascade@pousada.example").await;
    let room = new_room(&db, 9201, hotel.id).await;
    let employee = new_employee(&db, "900.000.000-03", user.id, hotel.id).await;
    let expense = expense::ActiveModel {
        hotel_id: Set(hotel.id),
        description: Set("paint".to_string()),
        value: Set(200.0),
        date: NotSet,
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("insert expense");

    hotel.delete(&db).await.expect("delete hotel");

    assert!(
        room::Entity::find_by_id(room.number)
            .one(&db)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        employee::Entity::find_by_id(employee.cpf)
            .one(&db)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        expense::Entity::find_by_id(expense.id)
            .one(&db)
            .await
            .unwrap()
            .is_none()
    );
    // the login account is not part of the cascade
    assert!(
        user::Entity::find_by_id(user.id)
            .one(&db)
            .await
            .unwrap()
            .is_some()
    );

    user.delete(&db).await.expect("delete user");
}

#[tokio::test]
#[ignore = "requires a Postgres at DATABASE_URL"]
async fn deleting_a_room_keeps_its_reservations() {
    let db = connect().await;

    let hotel = new_hotel(&db, "SetNull").await;
    let room = new_room(&db, 9301, hotel.id).await;

    let reservation = reservation::ActiveModel {
        room_number: Set(Some(room.number)),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("insert reservation");

    room.delete(&db).await.expect("delete room");

    let survivor = reservation::Entity::find_by_id(reservation.number)
        .one(&db)
        .await
        .unwrap()
        .expect("reservation must survive");
    assert_eq!(survivor.room_number, None);

    survivor.delete(&db).await.expect("delete reservation");
    hotel.delete(&db).await.expect("delete hotel");
}

#[tokio::test]
#[ignore = "requires a Postgres at DATABASE_URL"]
async fn deleting_an_employee_keeps_their_tasks() {
    let db = connect().await;

    let hotel = new_hotel(&db, "TaskHistory").await;
    let user = new_user(&db, "tasks@pousada.example").await;
    let employee = new_employee(&db, "900.000.000-04", user.id, hotel.id).await;

    let task = task::ActiveModel {
        employee_id: Set(Some(employee.user_id)),
        description: Set("fix the boiler".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("insert task");

    employee.delete(&db).await.expect("delete employee");

    let survivor = task::Entity::find_by_id(task.id)
        .one(&db)
        .await
        .unwrap()
        .expect("task must survive");
    assert_eq!(survivor.employee_id, None);

    survivor.delete(&db).await.expect("delete task");
    hotel.delete(&db).await.expect("delete hotel");
    user.delete(&db).await.expect("delete user");
}

#[tokio::test]
#[ignore = "requires a Postgres at DATABASE_URL"]
async fn join_rows_cascade_from_either_side() {
    let db = connect().await;

    let customer_a = new_customer(&db, "900.000.000-05").await;
    let customer_b = new_customer(&db, "900.000.000-06").await;
    let reservation = reservation::ActiveModel {
        room_number: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("insert reservation");

    for customer in [&customer_a, &customer_b] {
        customer_reservation::ActiveModel {
            customer_cpf: Set(customer.cpf.clone()),
            reservation_number: Set(reservation.number),
        }
        .insert(&db)
        .await
        .expect("link customer");
    }

    // deleting one customer removes only their join row
    customer_a.delete(&db).await.expect("delete customer");
    let remaining = customer_reservation::Entity::find()
        .filter(customer_reservation::Column::ReservationNumber.eq(reservation.number))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);

    // deleting the reservation removes the rest
    reservation.delete(&db).await.expect("delete reservation");
    let remaining = customer_reservation::Entity::find()
        .filter(customer_reservation::Column::CustomerCpf.eq(customer_b.cpf.clone()))
        .all(&db)
        .await
        .unwrap();
    assert!(remaining.is_empty());

    customer_b.delete(&db).await.expect("delete customer");
}
