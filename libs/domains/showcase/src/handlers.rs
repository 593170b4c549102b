use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    extract_ip_from_headers, extract_user_agent, AuditEvent, AuditOutcome, UuidPath,
    ValidatedJson,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::error::ProjectResult;
use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject, Visibility};
use crate::ordering::MoveDirection;
use crate::repository::ProjectRepository;
use crate::service::ProjectService;

const ADMIN_TAG: &str = "projects";
const PUBLIC_TAG: &str = "showcase";

/// Full set of project identifiers in the desired display order
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReorderRequest {
    #[validate(length(min = 1))]
    pub ids: Vec<Uuid>,
}

/// Single-step move in the admin list
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MoveRequest {
    pub direction: MoveDirection,
}

/// Direct visibility assignment
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetVisibilityRequest {
    pub visibility: Visibility,
}

/// OpenAPI documentation for the admin project API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_projects,
        create_project,
        get_project,
        update_project,
        delete_project,
        reorder_projects,
        move_project,
        set_visibility,
        toggle_visibility,
    ),
    components(
        schemas(
            Project,
            CreateProject,
            UpdateProject,
            Visibility,
            MoveDirection,
            ReorderRequest,
            MoveRequest,
            SetVisibilityRequest
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = ADMIN_TAG, description = "Showcase project management endpoints")
    )
)]
pub struct AdminApiDoc;

/// OpenAPI documentation for the public showcase API
#[derive(OpenApi)]
#[openapi(
    paths(published_projects),
    components(
        schemas(Project, Visibility),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = PUBLIC_TAG, description = "Public portfolio reel")
    )
)]
pub struct PublicApiDoc;

/// Create the admin project router with all management endpoints
pub fn router<R: ProjectRepository + 'static>(service: ProjectService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/reorder", post(reorder_projects))
        .route(
            "/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/{id}/move", post(move_project))
        .route("/{id}/visibility", post(set_visibility))
        .route("/{id}/visibility/toggle", post(toggle_visibility))
        .with_state(shared_service)
}

/// Create the public router serving the published reel
pub fn public_router<R: ProjectRepository + 'static>(service: ProjectService<R>) -> Router {
    Router::new()
        .route("/", get(published_projects))
        .with_state(Arc::new(service))
}

/// List projects in display order
#[utoipa::path(
    get,
    path = "",
    tag = ADMIN_TAG,
    params(ProjectFilter),
    responses(
        (status = 200, description = "Projects in display order", body = Vec<Project>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_projects<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    Query(filter): Query<ProjectFilter>,
) -> ProjectResult<Json<Vec<Project>>> {
    let projects = service.list_projects(filter).await?;
    Ok(Json(projects))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "",
    tag = ADMIN_TAG,
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created successfully", body = Project),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> ProjectResult<impl IntoResponse> {
    let project = service.create_project(input).await?;

    AuditEvent::new(
        None,
        "project.create",
        Some(format!("project:{}", project.id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .with_details(json!({
        "title": project.title,
        "visibility": project.visibility.to_string(),
        "sort_index": project.sort_index,
    }))
    .log();

    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
) -> ProjectResult<Json<Project>> {
    let project = service.get_project(id).await?;
    Ok(Json(project))
}

/// Update a project
#[utoipa::path(
    put,
    path = "/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Project updated successfully", body = Project),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> ProjectResult<Json<Project>> {
    let project = service.update_project(id, input).await?;
    Ok(Json(project))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    headers: HeaderMap,
    UuidPath(id): UuidPath,
) -> ProjectResult<impl IntoResponse> {
    service.delete_project(id).await?;

    AuditEvent::new(
        None,
        "project.delete",
        Some(format!("project:{}", id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok(StatusCode::NO_CONTENT)
}

/// Reorder all projects to the submitted identifier order.
///
/// The per-record rank updates are dispatched concurrently; a partial failure
/// surfaces as a single error while already-applied ranks stay committed.
#[utoipa::path(
    post,
    path = "/reorder",
    tag = ADMIN_TAG,
    request_body = ReorderRequest,
    responses(
        (status = 204, description = "Projects reordered successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn reorder_projects<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    ValidatedJson(request): ValidatedJson<ReorderRequest>,
) -> ProjectResult<StatusCode> {
    service.reorder_projects(&request.ids).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Move a project one slot up or down in the display order
#[utoipa::path(
    post,
    path = "/{id}/move",
    tag = ADMIN_TAG,
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    request_body = MoveRequest,
    responses(
        (status = 204, description = "Project moved (or already at the boundary)"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn move_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(request): ValidatedJson<MoveRequest>,
) -> ProjectResult<StatusCode> {
    service.move_project(id, request.direction).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Set a project's visibility
#[utoipa::path(
    post,
    path = "/{id}/visibility",
    tag = ADMIN_TAG,
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    request_body = SetVisibilityRequest,
    responses(
        (status = 200, description = "Visibility updated", body = Project),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn set_visibility<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(request): ValidatedJson<SetVisibilityRequest>,
) -> ProjectResult<Json<Project>> {
    let project = service.set_visibility(id, request.visibility).await?;
    Ok(Json(project))
}

/// Toggle between published and draft.
///
/// Published projects go back to draft; draft and unlisted projects go
/// straight to published.
#[utoipa::path(
    post,
    path = "/{id}/visibility/toggle",
    tag = ADMIN_TAG,
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Visibility toggled", body = Project),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_visibility<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
) -> ProjectResult<Json<Project>> {
    let project = service.toggle_visibility(id).await?;
    Ok(Json(project))
}

/// Published projects in display order (the public portfolio reel)
#[utoipa::path(
    get,
    path = "",
    tag = PUBLIC_TAG,
    responses(
        (status = 200, description = "Published projects in display order", body = Vec<Project>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn published_projects<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
) -> ProjectResult<Json<Vec<Project>>> {
    let projects = service.published_projects().await?;
    Ok(Json(projects))
}
