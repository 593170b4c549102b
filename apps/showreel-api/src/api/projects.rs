use axum::Router;
use domain_showcase::{handlers, PgProjectRepository, ProjectService};

/// Admin project management routes at /api/projects
pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgProjectRepository::new(state.db.clone());
    let service = ProjectService::new(repository);
    handlers::router(service)
}
