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

use crate::{entities::post, error::AppError, router::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", get(get_post).put(update_post).delete(delete_post))
}

#[derive(Deserialize)]
pub struct PostPayload {
    pub name: Option<String>,
}

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<post::Model>>, AppError> {
    Ok(Json(
        post::Entity::find()
            .order_by_asc(post::Column::Id)
            .all(&state.db)
            .await?,
    ))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<post::Model>, AppError> {
    post::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("post"))
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<PostPayload>,
) -> Result<(StatusCode, Json<post::Model>), AppError> {
    let post = post::ActiveModel {
        name: Set(payload.name),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<post::Model>, AppError> {
    let post = post::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("post"))?;

    let mut post = post.into_active_model();
    post.name = Set(payload.name);

    Ok(Json(post.update(&state.db).await?))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = post::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("post"));
    }

    Ok(StatusCode::NO_CONTENT)
}
