use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel, QueryOrder,
};
use serde::Deserialize;

use crate::{entities::employee, error::AppError, router::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/{cpf}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

#[derive(Deserialize)]
pub struct CreateEmployee {
    pub cpf: String,
    pub user_id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateEmployee {
    pub hotel_id: Option<i32>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<employee::Model>>, AppError> {
    Ok(Json(
        employee::Entity::find()
            .order_by_asc(employee::Column::Cpf)
            .all(&state.db)
            .await?,
    ))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<employee::Model>, AppError> {
    employee::Entity::find_by_id(cpf)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("employee"))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<CreateEmployee>,
) -> Result<(StatusCode, Json<employee::Model>), AppError> {
    let employee = employee::ActiveModel {
        cpf: Set(payload.cpf),
        user_id: Set(payload.user_id),
        hotel_id: Set(payload.hotel_id),
        name: Set(payload.name),
        phone: Set(payload.phone),
        address: Set(payload.address),
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
    Json(payload): Json<UpdateEmployee>,
) -> Result<Json<employee::Model>, AppError> {
    let employee = employee::Entity::find_by_id(cpf)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("employee"))?;

    let mut employee = employee.into_active_model();
    if let Some(hotel_id) = payload.hotel_id {
        employee.hotel_id = Set(hotel_id);
    }
    if let Some(name) = payload.name {
        employee.name = Set(name);
    }
    if let Some(phone) = payload.phone {
        employee.phone = Set(phone);
    }
    if let Some(address) = payload.address {
        employee.address = Set(Some(address));
    }

    Ok(Json(employee.update(&state.db).await?))
}

/// Removing an employee nulls `employee_id` on their tasks; the task
/// history itself is kept.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<StatusCode, AppError> {
    let result = employee::Entity::delete_by_id(cpf).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("employee"));
    }

    Ok(StatusCode::NO_CONTENT)
}
