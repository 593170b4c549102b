use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Publication state of a showcase project
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "visibility")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    /// Only visible in the admin panel
    #[default]
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Shown on the public portfolio reel
    #[sea_orm(string_value = "published")]
    Published,
    /// Reachable by direct link, hidden from the public listing
    #[sea_orm(string_value = "unlisted")]
    Unlisted,
}

impl Visibility {
    /// Publish/unpublish toggle used by the admin panel.
    ///
    /// Published goes back to draft; draft and unlisted go straight to
    /// published. Unlisted is never cycled through draft.
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Published => Visibility::Draft,
            Visibility::Draft | Visibility::Unlisted => Visibility::Published,
        }
    }
}

/// A showcase entry on the portfolio reel
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Unique identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Canonical 11-character YouTube video reference
    pub youtube_id: Option<String>,
    /// Thumbnail image URL; derived from `youtube_id` when not supplied
    pub thumbnail_url: Option<String>,
    /// Longer description shown in the project modal
    pub description: Option<String>,
    /// Aspect ratio / delivery format (e.g. "16:9", "9:16")
    pub format: Option<String>,
    /// Video duration in seconds
    pub duration_seconds: Option<i32>,
    /// Editing tools used (ordered)
    pub tools: Vec<String>,
    /// Categories the project is filed under (ordered)
    pub categories: Vec<String>,
    /// The editor's role on the project
    pub role: Option<String>,
    /// Publication state
    pub visibility: Visibility,
    /// Display rank, lower sorts first
    pub sort_index: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new showcase project
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Bare 11-character ID or any recognized YouTube URL form; URL input is
    /// normalized before persistence
    pub youtube_id: Option<String>,
    #[validate(url)]
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub format: Option<String>,
    #[validate(range(min = 0))]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    /// Display rank; defaults to one past the current maximum
    pub sort_index: Option<i32>,
}

/// DTO for partially updating an existing showcase project
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub youtube_id: Option<String>,
    #[validate(url)]
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub format: Option<String>,
    #[validate(range(min = 0))]
    pub duration_seconds: Option<i32>,
    pub tools: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub role: Option<String>,
    pub visibility: Option<Visibility>,
    pub sort_index: Option<i32>,
}

/// Query filters for listing projects
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProjectFilter {
    pub visibility: Option<Visibility>,
}

impl Project {
    /// Create a new project from a CreateProject DTO.
    ///
    /// The caller (service layer) is expected to have resolved `sort_index`
    /// before this point; an unresolved rank falls back to 0.
    pub fn new(input: CreateProject) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            youtube_id: input.youtube_id,
            thumbnail_url: input.thumbnail_url,
            description: input.description,
            format: input.format,
            duration_seconds: input.duration_seconds,
            tools: input.tools,
            categories: input.categories,
            role: input.role,
            visibility: input.visibility,
            sort_index: input.sort_index.unwrap_or(0),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, touching `updated_at`.
    pub fn apply_update(&mut self, update: UpdateProject) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(youtube_id) = update.youtube_id {
            self.youtube_id = Some(youtube_id);
        }
        if let Some(thumbnail_url) = update.thumbnail_url {
            self.thumbnail_url = Some(thumbnail_url);
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(format) = update.format {
            self.format = Some(format);
        }
        if let Some(duration_seconds) = update.duration_seconds {
            self.duration_seconds = Some(duration_seconds);
        }
        if let Some(tools) = update.tools {
            self.tools = tools;
        }
        if let Some(categories) = update.categories {
            self.categories = categories;
        }
        if let Some(role) = update.role {
            self.role = Some(role);
        }
        if let Some(visibility) = update.visibility {
            self.visibility = visibility;
        }
        if let Some(sort_index) = update.sort_index {
            self.sort_index = sort_index;
        }
        self.updated_at = Utc::now();
    }
}
