use axum::Router;

pub mod health;
pub mod projects;
pub mod showcase;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Takes a reference to AppState and initializes all services; returns a
/// stateless Router (sub-routers have their state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/projects", projects::router(state))
        .nest("/showcase", showcase::router(state))
}

/// Creates a router with the `/ready` endpoint performing real dependency
/// checks. Merged with the stateless app router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
