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

use crate::{entities::room_service, error::AppError, router::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_room_services).post(create_room_service))
        .route(
            "/{task_id}",
            get(get_room_service)
                .put(update_room_service)
                .delete(delete_room_service),
        )
}

#[derive(Deserialize)]
pub struct CreateRoomService {
    pub task_id: i32,
    pub reservation_number: i32,
    pub price: f64,
}

#[derive(Deserialize)]
pub struct UpdateRoomService {
    pub price: Option<f64>,
}

pub async fn list_room_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<room_service::Model>>, AppError> {
    Ok(Json(
        room_service::Entity::find()
            .order_by_asc(room_service::Column::TaskId)
            .all(&state.db)
            .await?,
    ))
}

pub async fn get_room_service(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> Result<Json<room_service::Model>, AppError> {
    room_service::Entity::find_by_id(task_id)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("room service"))
}

/// Keyed by the task it extends; both referenced rows must exist.
pub async fn create_room_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoomService>,
) -> Result<(StatusCode, Json<room_service::Model>), AppError> {
    let room_service = room_service::ActiveModel {
        task_id: Set(payload.task_id),
        reservation_number: Set(payload.reservation_number),
        price: Set(payload.price),
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(room_service)))
}

pub async fn update_room_service(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
    Json(payload): Json<UpdateRoomService>,
) -> Result<Json<room_service::Model>, AppError> {
    let room_service = room_service::Entity::find_by_id(task_id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("room service"))?;

    let mut room_service = room_service.into_active_model();
    if let Some(price) = payload.price {
        room_service.price = Set(price);
    }

    Ok(Json(room_service.update(&state.db).await?))
}

pub async fn delete_room_service(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = room_service::Entity::delete_by_id(task_id)
        .exec(&state.db)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("room service"));
    }

    Ok(StatusCode::NO_CONTENT)
}
