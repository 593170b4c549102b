use axum::Router;
use domain_showcase::{handlers, PgProjectRepository, ProjectService};

/// Public reel listing at /api/showcase
pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgProjectRepository::new(state.db.clone());
    let service = ProjectService::new(repository);
    handlers::public_router(service)
}
