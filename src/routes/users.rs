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

use crate::{entities::user, error::AppError, router::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub role: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Vec<String>>,
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<user::Model>>, AppError> {
    Ok(Json(
        user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&state.db)
            .await?,
    ))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<user::Model>, AppError> {
    user::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("user"))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> Result<(StatusCode, Json<user::Model>), AppError> {
    let hashed = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;

    let user = user::ActiveModel {
        email: Set(payload.email),
        password: Set(hashed),
        // omitted roles fall back to the column default (empty list)
        role: payload.role.map_or(NotSet, Set),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUser>,
) -> Result<Json<user::Model>, AppError> {
    let user = user::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    let mut user = user.into_active_model();
    if let Some(email) = payload.email {
        user.email = Set(email);
    }
    if let Some(password) = payload.password {
        user.password = Set(bcrypt::hash(&password, bcrypt::DEFAULT_COST)?);
    }
    if let Some(role) = payload.role {
        user.role = Set(role);
    }

    Ok(Json(user.update(&state.db).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let result = user::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("user"));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn receptionist() -> user::Model {
        user::Model {
            id: 1,
            email: "front@grand.example".to_string(),
            password: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            role: vec!["receptionist".to_string()],
        }
    }

    #[tokio::test]
    async fn create_never_sends_the_plaintext_password() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![receptionist()]])
            .into_connection();
        let state = AppState { db: db.clone() };

        let (status, _) = create_user(
            State(state),
            Json(CreateUser {
                email: "front@grand.example".to_string(),
                password: "hunter2".to_string(),
                role: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        let log = format!("{:?}", db.into_transaction_log()).replace("\\\"", "\"");
        assert!(!log.contains("hunter2"));
        // omitted role column lets the '{}' default apply
        assert!(log.contains(r#"INSERT INTO "users" ("email", "password")"#));
    }

    #[test]
    fn responses_omit_the_password_hash() {
        let body = serde_json::to_value(receptionist()).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["email"], "front@grand.example");
    }
}
