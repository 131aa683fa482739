use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    EntityTrait, IntoActiveModel, QueryOrder,
};
use serde::Deserialize;

use crate::{entities::expense, error::AppError, router::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route(
            "/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}

#[derive(Deserialize)]
pub struct CreateExpense {
    pub hotel_id: i32,
    pub description: String,
    pub value: f64,
    pub date: Option<chrono::NaiveDateTime>,
}

#[derive(Deserialize)]
pub struct UpdateExpense {
    pub description: Option<String>,
    pub value: Option<f64>,
    pub date: Option<chrono::NaiveDateTime>,
}

pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<expense::Model>>, AppError> {
    Ok(Json(
        expense::Entity::find()
            .order_by_asc(expense::Column::Id)
            .all(&state.db)
            .await?,
    ))
}

pub async fn get_expense(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<expense::Model>, AppError> {
    expense::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("expense"))
}

pub async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<CreateExpense>,
) -> Result<(StatusCode, Json<expense::Model>), AppError> {
    let expense = expense::ActiveModel {
        hotel_id: Set(payload.hotel_id),
        description: Set(payload.description),
        value: Set(payload.value),
        // an omitted date is stamped by the column default
        date: payload.date.map_or(NotSet, Set),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(expense)))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateExpense>,
) -> Result<Json<expense::Model>, AppError> {
    let expense = expense::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("expense"))?;

    let mut expense = expense.into_active_model();
    if let Some(description) = payload.description {
        expense.description = Set(description);
    }
    if let Some(value) = payload.value {
        expense.value = Set(value);
    }
    if let Some(date) = payload.date {
        expense.date = Set(date);
    }

    Ok(Json(expense.update(&state.db).await?))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = expense::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("expense"));
    }

    Ok(StatusCode::NO_CONTENT)
}
