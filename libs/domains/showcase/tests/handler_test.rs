//! Handler tests for the showcase domain
//!
//! These verify the HTTP layer end to end against the in-memory repository:
//! request deserialization, response serialization, status codes, and error
//! responses. The thumbnail probe is never reached because every request
//! either carries a bare video ID or supplies its own thumbnail.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_showcase::*;
use http_body_util::BodyExt;
use serde_json::json;
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

fn admin_app() -> (Router, ProjectService<InMemoryProjectRepository>) {
    let service = ProjectService::new(InMemoryProjectRepository::new());
    (handlers::router(service.clone()), service)
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn create_via_service(
    service: &ProjectService<InMemoryProjectRepository>,
    title: &str,
) -> Project {
    service
        .create_project(CreateProject {
            title: title.to_string(),
            youtube_id: None,
            thumbnail_url: None,
            description: None,
            format: None,
            duration_seconds: None,
            tools: vec![],
            categories: vec![],
            role: None,
            visibility: Visibility::Draft,
            sort_index: None,
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_project_handler_returns_201() {
    let (app, _service) = admin_app();
    let builder = TestDataBuilder::from_test_name("handler_create_201");

    let response = app
        .oneshot(post_json(
            "/",
            json!({
                "title": builder.name("project", "main"),
                "youtube_id": builder.youtube_id(),
                "format": "16:9",
                "tools": ["Premiere", "After Effects"],
                "categories": ["commercial"]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let project: Project = json_body(response.into_body()).await;
    assert_eq!(project.title, builder.name("project", "main"));
    assert_eq!(project.youtube_id, Some(builder.youtube_id()));
    assert_eq!(project.visibility, Visibility::Draft);
    assert_eq!(project.sort_index, 0);
}

#[tokio::test]
async fn test_create_project_handler_validates_input() {
    let (app, _service) = admin_app();

    // Empty title is rejected before it reaches the service
    let response = app
        .oneshot(post_json("/", json!({ "title": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["title"].is_array());
}

#[tokio::test]
async fn test_create_normalizes_url_form_reference() {
    let (app, _service) = admin_app();

    // Supplying a thumbnail keeps the existence probe out of the path
    let response = app
        .oneshot(post_json(
            "/",
            json!({
                "title": "Music video",
                "youtube_id": "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL1",
                "thumbnail_url": "https://cdn.example.com/custom.jpg"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let project: Project = json_body(response.into_body()).await;
    assert_eq!(project.youtube_id.as_deref(), Some("dQw4w9WgXcQ"));
    assert_eq!(
        project.thumbnail_url.as_deref(),
        Some("https://cdn.example.com/custom.jpg")
    );
}

#[tokio::test]
async fn test_get_project_handler_returns_200() {
    let (app, service) = admin_app();
    let created = create_via_service(&service, "Get me").await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let project: Project = json_body(response.into_body()).await;
    assert_eq!(project.id, created.id);
}

#[tokio::test]
async fn test_get_project_handler_returns_404_for_missing() {
    let (app, _service) = admin_app();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", uuid::Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_project_handler_rejects_invalid_uuid() {
    let (app, _service) = admin_app();

    let request = Request::builder()
        .method("GET")
        .uri("/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_project_handler_returns_200() {
    let (app, service) = admin_app();
    let created = create_via_service(&service, "Before").await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "title": "After", "role": "Lead editor" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let project: Project = json_body(response.into_body()).await;
    assert_eq!(project.title, "After");
    assert_eq!(project.role.as_deref(), Some("Lead editor"));
}

#[tokio::test]
async fn test_delete_project_handler_returns_204_then_404() {
    let (app, service) = admin_app();
    let created = create_via_service(&service, "Doomed").await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_projects_in_display_order() {
    let (app, service) = admin_app();

    let a = create_via_service(&service, "A").await;
    let b = create_via_service(&service, "B").await;
    let c = create_via_service(&service, "C").await;
    assert_eq!((a.sort_index, b.sort_index, c.sort_index), (0, 1, 2));

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let projects: Vec<Project> = json_body(response.into_body()).await;
    let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_reorder_handler_assigns_submitted_order() {
    let (app, service) = admin_app();

    let a = create_via_service(&service, "A").await;
    let b = create_via_service(&service, "B").await;
    let c = create_via_service(&service, "C").await;

    let response = app
        .clone()
        .oneshot(post_json("/reorder", json!({ "ids": [a.id, c.id, b.id] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let projects: Vec<Project> = json_body(response.into_body()).await;
    let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C", "B"]);
    let ranks: Vec<_> = projects.iter().map(|p| p.sort_index).collect();
    assert_eq!(ranks, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_reorder_handler_rejects_empty_id_list() {
    let (app, _service) = admin_app();

    let response = app
        .oneshot(post_json("/reorder", json!({ "ids": [] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_move_handler_swaps_one_step() {
    let (app, service) = admin_app();

    create_via_service(&service, "A").await;
    create_via_service(&service, "B").await;
    let c = create_via_service(&service, "C").await;

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/{}/move", c.id),
            json!({ "direction": "up" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let projects: Vec<Project> = json_body(response.into_body()).await;
    let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C", "B"]);
}

#[tokio::test]
async fn test_set_visibility_handler() {
    let (app, service) = admin_app();
    let created = create_via_service(&service, "Reel").await;

    let response = app
        .oneshot(post_json(
            &format!("/{}/visibility", created.id),
            json!({ "visibility": "unlisted" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let project: Project = json_body(response.into_body()).await;
    assert_eq!(project.visibility, Visibility::Unlisted);
}

#[tokio::test]
async fn test_toggle_visibility_handler_publishes_draft() {
    let (app, service) = admin_app();
    let created = create_via_service(&service, "Reel").await;

    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}/visibility/toggle", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let project: Project = json_body(response.into_body()).await;
    assert_eq!(project.visibility, Visibility::Published);
}

#[tokio::test]
async fn test_public_router_lists_only_published_in_order() {
    let repository = InMemoryProjectRepository::new();
    let service = ProjectService::new(repository.clone());
    let public = handlers::public_router(ProjectService::new(repository));

    let first = create_via_service(&service, "First").await;
    let second = create_via_service(&service, "Second").await;
    create_via_service(&service, "Draft only").await;

    // Publish in reverse creation order; listing still follows sort_index
    service
        .set_visibility(second.id, Visibility::Published)
        .await
        .unwrap();
    service
        .set_visibility(first.id, Visibility::Published)
        .await
        .unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = public.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let projects: Vec<Project> = json_body(response.into_body()).await;
    let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}
