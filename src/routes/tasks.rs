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

use crate::{entities::task, error::AppError, router::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/{id}", get(get_task).put(update_task).delete(delete_task))
}

#[derive(Deserialize)]
pub struct CreateTask {
    pub employee_id: Option<i32>,
    pub description: String,
    pub start: Option<chrono::NaiveDateTime>,
    pub end: Option<chrono::NaiveDateTime>,
}

#[derive(Deserialize)]
pub struct UpdateTask {
    pub employee_id: Option<i32>,
    pub description: Option<String>,
    pub start: Option<chrono::NaiveDateTime>,
    pub end: Option<chrono::NaiveDateTime>,
}

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<task::Model>>, AppError> {
    Ok(Json(
        task::Entity::find()
            .order_by_asc(task::Column::Id)
            .all(&state.db)
            .await?,
    ))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<task::Model>, AppError> {
    task::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("task"))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTask>,
) -> Result<(StatusCode, Json<task::Model>), AppError> {
    let task = task::ActiveModel {
        employee_id: Set(payload.employee_id),
        description: Set(payload.description),
        start: Set(payload.start),
        end: Set(payload.end),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTask>,
) -> Result<Json<task::Model>, AppError> {
    let task = task::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("task"))?;

    let mut task = task.into_active_model();
    if let Some(employee_id) = payload.employee_id {
        task.employee_id = Set(Some(employee_id));
    }
    if let Some(description) = payload.description {
        task.description = Set(description);
    }
    if let Some(start) = payload.start {
        task.start = Set(Some(start));
    }
    if let Some(end) = payload.end {
        task.end = Set(Some(end));
    }

    Ok(Json(task.update(&state.db).await?))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = task::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("task"));
    }

    Ok(StatusCode::NO_CONTENT)
}
