use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    EntityTrait, IntoActiveModel, ModelTrait, QueryOrder,
};
use serde::Deserialize;

use crate::{
    entities::{customer, customer_reservation, reservation},
    error::AppError,
    router::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reservations).post(create_reservation))
        .route(
            "/{number}",
            get(get_reservation)
                .put(update_reservation)
                .delete(delete_reservation),
        )
        .route("/{number}/customers", get(list_reservation_customers))
        .route(
            "/{number}/customers/{cpf}",
            put(link_customer).delete(unlink_customer),
        )
}

#[derive(Deserialize)]
pub struct CreateReservation {
    pub room_number: Option<i32>,
    pub check_in: Option<chrono::NaiveDateTime>,
    pub check_out: Option<chrono::NaiveDateTime>,
    pub total_price: Option<f64>,
    pub status_paid: Option<bool>,
    pub vehicles: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct UpdateReservation {
    pub room_number: Option<i32>,
    pub check_in: Option<chrono::NaiveDateTime>,
    pub check_out: Option<chrono::NaiveDateTime>,
    pub total_price: Option<f64>,
    pub status_paid: Option<bool>,
    pub vehicles: Option<Vec<String>>,
}

pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<reservation::Model>>, AppError> {
    Ok(Json(
        reservation::Entity::find()
            .order_by_asc(reservation::Column::Number)
            .all(&state.db)
            .await?,
    ))
}

pub async fn get_reservation(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<Json<reservation::Model>, AppError> {
    reservation::Entity::find_by_id(number)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("reservation"))
}

pub async fn create_reservation(
    State(state): State<AppState>,
    Json(payload): Json<CreateReservation>,
) -> Result<(StatusCode, Json<reservation::Model>), AppError> {
    let reservation = reservation::ActiveModel {
        room_number: Set(payload.room_number),
        check_in: Set(payload.check_in),
        check_out: Set(payload.check_out),
        // omitted price/paid/vehicles fall back to the column defaults
        total_price: payload.total_price.map_or(NotSet, Set),
        status_paid: payload.status_paid.map_or(NotSet, Set),
        vehicles: payload.vehicles.map_or(NotSet, Set),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

pub async fn update_reservation(
    State(state): State<AppState>,
    Path(number): Path<i32>,
    Json(payload): Json<UpdateReservation>,
) -> Result<Json<reservation::Model>, AppError> {
    let reservation = reservation::Entity::find_by_id(number)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("reservation"))?;

    let mut reservation = reservation.into_active_model();
    if let Some(room_number) = payload.room_number {
        reservation.room_number = Set(Some(room_number));
    }
    if let Some(check_in) = payload.check_in {
        reservation.check_in = Set(Some(check_in));
    }
    if let Some(check_out) = payload.check_out {
        reservation.check_out = Set(Some(check_out));
    }
    if let Some(total_price) = payload.total_price {
        reservation.total_price = Set(total_price);
    }
    if let Some(status_paid) = payload.status_paid {
        reservation.status_paid = Set(status_paid);
    }
    if let Some(vehicles) = payload.vehicles {
        reservation.vehicles = Set(vehicles);
    }

    Ok(Json(reservation.update(&state.db).await?))
}

pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = reservation::Entity::delete_by_id(number)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("reservation"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Every customer party to this reservation, through the join table.
pub async fn list_reservation_customers(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<Json<Vec<customer::Model>>, AppError> {
    let reservation = reservation::Entity::find_by_id(number)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("reservation"))?;

    Ok(Json(
        reservation
            .find_related(customer::Entity)
            .all(&state.db)
            .await?,
    ))
}

/// Adds a customer to the reservation. A dangling cpf or number surfaces
/// as a foreign-key violation, a repeated link as a unique violation.
pub async fn link_customer(
    State(state): State<AppState>,
    Path((number, cpf)): Path<(i32, String)>,
) -> Result<StatusCode, AppError> {
    customer_reservation::ActiveModel {
        customer_cpf: Set(cpf),
        reservation_number: Set(number),
    }
    .insert(&state.db)
    .await?;

    Ok(StatusCode::CREATED)
}

pub async fn unlink_customer(
    State(state): State<AppState>,
    Path((number, cpf)): Path<(i32, String)>,
) -> Result<StatusCode, AppError> {
    let result = customer_reservation::Entity::delete_by_id((cpf, number))
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("customer reservation"));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn walk_in() -> reservation::Model {
        reservation::Model {
            number: 1,
            room_number: None,
            check_in: None,
            check_out: None,
            total_price: 0.0,
            status_paid: false,
            vehicles: vec![],
        }
    }

    #[tokio::test]
    async fn create_leaves_omitted_fields_to_column_defaults() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![walk_in()]])
            .into_connection();
        let state = AppState { db: db.clone() };

        let (status, reservation) = create_reservation(
            State(state),
            Json(CreateReservation {
                room_number: None,
                check_in: None,
                check_out: None,
                total_price: None,
                status_paid: None,
                vehicles: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(reservation.0.total_price, 0.0);
        assert!(!reservation.0.status_paid);
        assert!(reservation.0.vehicles.is_empty());
    }

    #[tokio::test]
    async fn link_inserts_a_join_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![customer_reservation::Model {
                customer_cpf: "111.222.333-44".to_string(),
                reservation_number: 1,
            }]])
            .into_connection();
        let state = AppState { db: db.clone() };

        let status = link_customer(State(state), Path((1, "111.222.333-44".to_string())))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        let log = format!("{:?}", db.into_transaction_log()).replace("\\\"", "\"");
        assert!(log.contains(r#"INSERT INTO "customer_reservations""#));
    }

    #[tokio::test]
    async fn unlink_reports_missing_join_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let state = AppState { db };

        let err = unlink_customer(State(state), Path((1, "111.222.333-44".to_string())))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
