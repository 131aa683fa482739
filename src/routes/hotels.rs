use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder,
};
use serde::Deserialize;

use crate::{entities::hotel, error::AppError, router::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_hotels).post(create_hotel))
        .route(
            "/{id}",
            get(get_hotel).put(update_hotel).delete(delete_hotel),
        )
}

#[derive(Deserialize)]
pub struct CreateHotel {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateHotel {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ListHotelsParams {
    #[serde(default)]
    pub include_deleted: bool,
}

#[derive(Deserialize, Default)]
pub struct DeleteHotelParams {
    #[serde(default)]
    pub purge: bool,
}

pub async fn list_hotels(
    State(state): State<AppState>,
    Query(params): Query<ListHotelsParams>,
) -> Result<Json<Vec<hotel::Model>>, AppError> {
    let mut query = hotel::Entity::find().order_by_asc(hotel::Column::Id);
    if !params.include_deleted {
        query = query.filter(hotel::Column::Deleted.eq(false));
    }

    Ok(Json(query.all(&state.db).await?))
}

pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<hotel::Model>, AppError> {
    hotel::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("hotel"))
}

pub async fn create_hotel(
    State(state): State<AppState>,
    Json(payload): Json<CreateHotel>,
) -> Result<(StatusCode, Json<hotel::Model>), AppError> {
    let hotel = hotel::ActiveModel {
        name: Set(payload.name),
        address: Set(payload.address),
        phone: Set(payload.phone),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(hotel)))
}

pub async fn update_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateHotel>,
) -> Result<Json<hotel::Model>, AppError> {
    let hotel = hotel::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("hotel"))?;

    let mut hotel = hotel.into_active_model();
    if let Some(name) = payload.name {
        hotel.name = Set(name);
    }
    if let Some(address) = payload.address {
        hotel.address = Set(Some(address));
    }
    if let Some(phone) = payload.phone {
        hotel.phone = Set(Some(phone));
    }

    Ok(Json(hotel.update(&state.db).await?))
}

/// Soft-deletes by default; `?purge=true` removes the row and lets the
/// database cascade over rooms, employees and expenses.
pub async fn delete_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DeleteHotelParams>,
) -> Result<StatusCode, AppError> {
    let hotel = hotel::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("hotel"))?;

    if params.purge {
        hotel.delete(&state.db).await?;
    } else {
        let mut hotel = hotel.into_active_model();
        hotel.deleted = Set(true);
        hotel.update(&state.db).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}
