use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProjectError, ProjectResult};
use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject, Visibility};

/// Repository trait for showcase project persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Create a new project
    async fn create(&self, input: CreateProject) -> ProjectResult<Project>;

    /// Get a project by ID
    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>>;

    /// List projects ordered by ascending sort index, creation time as the
    /// stable tiebreak
    async fn list(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>>;

    /// Apply a partial update to an existing project
    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Project>;

    /// Delete a project by ID, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> ProjectResult<bool>;

    /// Highest sort index currently stored, `None` when the table is empty
    async fn max_sort_index(&self) -> ProjectResult<Option<i32>>;

    /// Single-column rank update used by reorder
    async fn set_sort_index(&self, id: Uuid, sort_index: i32) -> ProjectResult<()>;

    /// Single-column visibility update
    async fn set_visibility(&self, id: Uuid, visibility: Visibility) -> ProjectResult<Project>;
}

/// In-memory implementation of ProjectRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<Uuid, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project> {
        let mut projects = self.projects.write().await;

        let project = Project::new(input);
        projects.insert(project.id, project.clone());

        tracing::info!(project_id = %project.id, "Created project");
        Ok(project)
    }

    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn list(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>> {
        let projects = self.projects.read().await;

        let mut result: Vec<Project> = projects
            .values()
            .filter(|p| {
                if let Some(visibility) = filter.visibility {
                    if p.visibility != visibility {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        result.sort_by(|a, b| {
            a.sort_index
                .cmp(&b.sort_index)
                .then(a.created_at.cmp(&b.created_at))
        });

        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Project> {
        let mut projects = self.projects.write().await;

        let project = projects.get_mut(&id).ok_or(ProjectError::NotFound(id))?;
        project.apply_update(input);
        let updated = project.clone();

        tracing::info!(project_id = %id, "Updated project");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> ProjectResult<bool> {
        let mut projects = self.projects.write().await;

        if projects.remove(&id).is_some() {
            tracing::info!(project_id = %id, "Deleted project");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn max_sort_index(&self) -> ProjectResult<Option<i32>> {
        let projects = self.projects.read().await;
        Ok(projects.values().map(|p| p.sort_index).max())
    }

    async fn set_sort_index(&self, id: Uuid, sort_index: i32) -> ProjectResult<()> {
        let mut projects = self.projects.write().await;

        let project = projects.get_mut(&id).ok_or(ProjectError::NotFound(id))?;
        project.sort_index = sort_index;
        project.updated_at = chrono::Utc::now();

        Ok(())
    }

    async fn set_visibility(&self, id: Uuid, visibility: Visibility) -> ProjectResult<Project> {
        let mut projects = self.projects.write().await;

        let project = projects.get_mut(&id).ok_or(ProjectError::NotFound(id))?;
        project.visibility = visibility;
        project.updated_at = chrono::Utc::now();

        tracing::info!(project_id = %id, visibility = %visibility, "Set project visibility");
        Ok(project.clone())
    }
}
