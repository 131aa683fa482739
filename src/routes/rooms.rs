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

use crate::{entities::room, error::AppError, router::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rooms).post(create_room))
        .route(
            "/{number}",
            get(get_room).put(update_room).delete(delete_room),
        )
}

#[derive(Deserialize)]
pub struct CreateRoom {
    pub number: i32,
    pub hotel_id: i32,
    pub floor: i32,
    pub available: Option<bool>,
    pub beds: i32,
    pub description: Option<String>,
    pub daily_rate: f64,
}

#[derive(Deserialize)]
pub struct UpdateRoom {
    pub floor: Option<i32>,
    pub available: Option<bool>,
    pub beds: Option<i32>,
    pub description: Option<String>,
    pub daily_rate: Option<f64>,
}

pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<Vec<room::Model>>, AppError> {
    Ok(Json(
        room::Entity::find()
            .order_by_asc(room::Column::Number)
            .all(&state.db)
            .await?,
    ))
}

pub async fn get_room(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<Json<room::Model>, AppError> {
    room::Entity::find_by_id(number)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("room"))
}

/// Room numbers are chosen by the hotel; a dangling `hotel_id` surfaces as
/// a foreign-key violation from the engine.
pub async fn create_room(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoom>,
) -> Result<(StatusCode, Json<room::Model>), AppError> {
    let room = room::ActiveModel {
        number: Set(payload.number),
        hotel_id: Set(payload.hotel_id),
        floor: Set(payload.floor),
        available: payload.available.map_or(NotSet, Set),
        beds: Set(payload.beds),
        description: payload.description.map_or(NotSet, Set),
        daily_rate: Set(payload.daily_rate),
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn update_room(
    State(state): State<AppState>,
    Path(number): Path<i32>,
    Json(payload): Json<UpdateRoom>,
) -> Result<Json<room::Model>, AppError> {
    let room = room::Entity::find_by_id(number)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("room"))?;

    let mut room = room.into_active_model();
    if let Some(floor) = payload.floor {
        room.floor = Set(floor);
    }
    if let Some(available) = payload.available {
        room.available = Set(available);
    }
    if let Some(beds) = payload.beds {
        room.beds = Set(beds);
    }
    if let Some(description) = payload.description {
        room.description = Set(description);
    }
    if let Some(daily_rate) = payload.daily_rate {
        room.daily_rate = Set(daily_rate);
    }

    Ok(Json(room.update(&state.db).await?))
}

pub async fn delete_room(
    State(state): State<AppState>,
    Path(number): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = room::Entity::delete_by_id(number).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("room"));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn create_keeps_the_client_chosen_number() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![room::Model {
                number: 101,
                hotel_id: 1,
                floor: 1,
                available: true,
                beds: 2,
                description: String::new(),
                daily_rate: 150.0,
            }]])
            .into_connection();
        let state = AppState { db: db.clone() };

        let (status, room) = create_room(
            State(state),
            Json(CreateRoom {
                number: 101,
                hotel_id: 1,
                floor: 1,
                available: None,
                beds: 2,
                description: None,
                daily_rate: 150.0,
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(room.0.number, 101);
        assert!(room.0.available);
        // availability and description are left to their column defaults
        let log = format!("{:?}", db.into_transaction_log()).replace("\\\"", "\"");
        assert!(log.contains(
            r#"INSERT INTO "rooms" ("number", "hotel_id", "floor", "beds", "daily_rate")"#
        ));
    }
}
