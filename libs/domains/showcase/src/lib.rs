//! Showcase Domain
//!
//! Domain implementation for the portfolio's project showcase entries: the
//! records behind the public reel and the admin panel that curates it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (admin + public)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Mutation façade: validation, YouTube
//! └──────┬──────┘    normalization, ordering, visibility
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_showcase::{
//!     handlers,
//!     repository::InMemoryProjectRepository,
//!     service::ProjectService,
//! };
//!
//! let repository = InMemoryProjectRepository::new();
//! let service = ProjectService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod ordering;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod youtube;

// Re-export commonly used types
pub use error::{ProjectError, ProjectResult};
pub use models::{CreateProject, Project, ProjectFilter, UpdateProject, Visibility};
pub use ordering::MoveDirection;
pub use postgres::PgProjectRepository;
pub use repository::{InMemoryProjectRepository, ProjectRepository};
pub use service::ProjectService;
pub use youtube::{HttpThumbnailProbe, ThumbnailProbe};
