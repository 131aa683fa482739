use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::routes;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub fn create_router(db: DatabaseConnection) -> Router {
    let state = AppState { db };

    Router::new()
        .nest("/api/posts", routes::posts::routes())
        .nest("/api/hotels", routes::hotels::routes())
        .nest("/api/users", routes::users::routes())
        .nest("/api/rooms", routes::rooms::routes())
        .nest("/api/employees", routes::employees::routes())
        .nest("/api/tasks", routes::tasks::routes())
        .nest("/api/customers", routes::customers::routes())
        .nest("/api/reservations", routes::reservations::routes())
        .nest("/api/room-services", routes::room_services::routes())
        .nest("/api/expenses", routes::expenses::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
