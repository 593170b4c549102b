use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProjectError, ProjectResult},
    models::{CreateProject, Project, ProjectFilter, UpdateProject, Visibility},
    repository::ProjectRepository,
};

pub struct PgProjectRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn db_err(e: sea_orm::DbErr) -> ProjectError {
        ProjectError::Internal(format!("Database error: {}", e))
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project> {
        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await.map_err(Self::db_err)?;

        tracing::info!(project_id = %model.id, "Created project");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>> {
        let model = self.base.find_by_id(id).await.map_err(Self::db_err)?;
        Ok(model.map(|m| m.into()))
    }

    async fn list(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>> {
        let mut query = entity::Entity::find();

        if let Some(visibility) = filter.visibility {
            query = query.filter(entity::Column::Visibility.eq(visibility));
        }

        let models = query
            .order_by_asc(entity::Column::SortIndex)
            .order_by_asc(entity::Column::CreatedAt)
            .all(self.base.db())
            .await
            .map_err(Self::db_err)?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: Uuid, input: UpdateProject) -> ProjectResult<Project> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(Self::db_err)?
            .ok_or(ProjectError::NotFound(id))?;

        let mut project: Project = model.into();
        project.apply_update(input);

        let tools = serde_json::to_value(&project.tools).expect("Failed to serialize tools");
        let categories =
            serde_json::to_value(&project.categories).expect("Failed to serialize categories");

        let active_model = entity::ActiveModel {
            id: Set(project.id),
            title: Set(project.title.clone()),
            youtube_id: Set(project.youtube_id.clone()),
            thumbnail_url: Set(project.thumbnail_url.clone()),
            description: Set(project.description.clone()),
            format: Set(project.format.clone()),
            duration_seconds: Set(project.duration_seconds),
            tools: Set(tools),
            categories: Set(categories),
            role: Set(project.role.clone()),
            visibility: Set(project.visibility),
            sort_index: Set(project.sort_index),
            created_at: Set(project.created_at.into()),
            updated_at: Set(project.updated_at.into()),
        };

        let updated_model = self.base.update(active_model).await.map_err(Self::db_err)?;

        tracing::info!(project_id = %id, "Updated project");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: Uuid) -> ProjectResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await.map_err(Self::db_err)?;

        if rows_affected > 0 {
            tracing::info!(project_id = %id, "Deleted project");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn max_sort_index(&self) -> ProjectResult<Option<i32>> {
        let top = entity::Entity::find()
            .order_by_desc(entity::Column::SortIndex)
            .one(self.base.db())
            .await
            .map_err(Self::db_err)?;

        Ok(top.map(|model| model.sort_index))
    }

    async fn set_sort_index(&self, id: Uuid, sort_index: i32) -> ProjectResult<()> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::SortIndex, Expr::value(sort_index))
            .col_expr(entity::Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(entity::Column::Id.eq(id))
            .exec(self.base.db())
            .await
            .map_err(Self::db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectError::NotFound(id));
        }

        Ok(())
    }

    async fn set_visibility(&self, id: Uuid, visibility: Visibility) -> ProjectResult<Project> {
        // Partial update: only the visibility column (and the touch timestamp)
        let active_model = entity::ActiveModel {
            id: Set(id),
            visibility: Set(visibility),
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let model = self.base.update(active_model).await.map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => ProjectError::NotFound(id),
            other => Self::db_err(other),
        })?;

        tracing::info!(project_id = %id, visibility = %visibility, "Set project visibility");
        Ok(model.into())
    }
}
