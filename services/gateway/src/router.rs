use crate::handlers::{chirp, meta, token, user, webhook};
use crate::metrics;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState, public_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route("/healthz", get(meta::healthz))
        .route("/reset", post(meta::reset_metrics))
        .route("/chirps", post(chirp::create_chirp).get(chirp::list_chirps))
        .route(
            "/chirps/{id}",
            get(chirp::get_chirp).delete(chirp::delete_chirp),
        )
        .route("/users", post(user::register).put(user::update_user))
        .route("/login", post(user::login))
        .route("/refresh", post(token::refresh))
        .route("/revoke", post(token::revoke))
        .route("/webhooks/premium", post(webhook::premium_event));

    let admin_routes = Router::new().route("/metrics", get(meta::metrics_page));

    // Static site, with every hit counted for the admin page.
    let app_files = Router::new()
        .nest_service("/app", ServeDir::new(public_dir))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            metrics::track_hits,
        ));

    Router::new()
        .nest("/api", api_routes)
        .nest("/admin", admin_routes)
        .merge(app_files)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
