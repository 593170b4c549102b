use crate::models::Visibility;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the projects table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub youtube_id: Option<String>,
    pub thumbnail_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub format: Option<String>,
    pub duration_seconds: Option<i32>,
    pub tools: Json, // JSONB field
    pub categories: Json, // JSONB field
    pub role: Option<String>,
    pub visibility: Visibility,
    pub sort_index: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from SeaORM Model to domain Project
impl From<Model> for crate::models::Project {
    fn from(model: Model) -> Self {
        // String lists are stored as JSONB
        let tools: Vec<String> = serde_json::from_value(model.tools).unwrap_or_default();
        let categories: Vec<String> =
            serde_json::from_value(model.categories).unwrap_or_default();

        Self {
            id: model.id,
            title: model.title,
            youtube_id: model.youtube_id,
            thumbnail_url: model.thumbnail_url,
            description: model.description,
            format: model.format,
            duration_seconds: model.duration_seconds,
            tools,
            categories,
            role: model.role,
            visibility: model.visibility,
            sort_index: model.sort_index,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Conversion from domain CreateProject to SeaORM ActiveModel
impl From<crate::models::CreateProject> for ActiveModel {
    fn from(input: crate::models::CreateProject) -> Self {
        let tools = serde_json::to_value(&input.tools).expect("Failed to serialize tools");
        let categories =
            serde_json::to_value(&input.categories).expect("Failed to serialize categories");

        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(input.title),
            youtube_id: Set(input.youtube_id),
            thumbnail_url: Set(input.thumbnail_url),
            description: Set(input.description),
            format: Set(input.format),
            duration_seconds: Set(input.duration_seconds),
            tools: Set(tools),
            categories: Set(categories),
            role: Set(input.role),
            visibility: Set(input.visibility),
            // Resolved by the service before persistence
            sort_index: Set(input.sort_index.unwrap_or(0)),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(chrono::Utc::now().into()),
        }
    }
}
