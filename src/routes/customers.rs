use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder,
};
use serde::Deserialize;

use crate::{
    entities::{customer, reservation},
    error::AppError,
    router::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/{cpf}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/{cpf}/reservations", get(list_customer_reservations))
}

#[derive(Deserialize)]
pub struct CreateCustomer {
    pub cpf: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<customer::Model>>, AppError> {
    Ok(Json(
        customer::Entity::find()
            .order_by_asc(customer::Column::Cpf)
            .all(&state.db)
            .await?,
    ))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<customer::Model>, AppError> {
    customer::Entity::find_by_id(cpf)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("customer"))
}

/// Every reservation this customer is party to, through the join table.
pub async fn list_customer_reservations(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<Vec<reservation::Model>>, AppError> {
    let customer = customer::Entity::find_by_id(cpf)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("customer"))?;

    Ok(Json(
        customer
            .find_related(reservation::Entity)
            .all(&state.db)
            .await?,
    ))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomer>,
) -> Result<(StatusCode, Json<customer::Model>), AppError> {
    let customer = customer::ActiveModel {
        cpf: Set(payload.cpf),
        name: Set(payload.name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        address: Set(payload.address),
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
    Json(payload): Json<UpdateCustomer>,
) -> Result<Json<customer::Model>, AppError> {
    let customer = customer::Entity::find_by_id(cpf)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("customer"))?;

    let mut customer = customer.into_active_model();
    if let Some(name) = payload.name {
        customer.name = Set(name);
    }
    if let Some(email) = payload.email {
        customer.email = Set(Some(email));
    }
    if let Some(phone) = payload.phone {
        customer.phone = Set(Some(phone));
    }
    if let Some(address) = payload.address {
        customer.address = Set(Some(address));
    }

    Ok(Json(customer.update(&state.db).await?))
}

/// Cascades over the customer's join rows; the reservations themselves
/// are untouched.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<StatusCode, AppError> {
    let result = customer::Entity::delete_by_id(cpf).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("customer"));
    }

    Ok(StatusCode::NO_CONTENT)
}
