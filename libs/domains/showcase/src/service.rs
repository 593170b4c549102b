use futures::future::join_all;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProjectError, ProjectResult};
use crate::models::{CreateProject, Project, ProjectFilter, UpdateProject, Visibility};
use crate::ordering::{self, MoveDirection};
use crate::repository::ProjectRepository;
use crate::youtube::{self, HttpThumbnailProbe, ThumbnailProbe};

/// Admin mutation façade over the showcase repository.
///
/// Each operation translates to one logical store call (reorder: N) and
/// returns `Result`; store failures surface as-is, nothing retries.
#[derive(Clone)]
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
    probe: Arc<dyn ThumbnailProbe>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_probe(repository, HttpThumbnailProbe::default())
    }

    pub fn with_probe(repository: R, probe: impl ThumbnailProbe + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
            probe: Arc::new(probe),
        }
    }

    /// Create a new project.
    ///
    /// URL-form YouTube references are normalized, and the rank defaults to
    /// one past the current maximum when not supplied.
    pub async fn create_project(&self, mut input: CreateProject) -> ProjectResult<Project> {
        input
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        let (youtube_id, thumbnail_url) = self
            .normalize_video_reference(input.youtube_id.take(), input.thumbnail_url.take())
            .await;
        input.youtube_id = youtube_id;
        input.thumbnail_url = thumbnail_url;

        if input.sort_index.is_none() {
            let max = self.repository.max_sort_index().await?;
            input.sort_index = Some(ordering::append_default(max));
        }

        self.repository.create(input).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: Uuid) -> ProjectResult<Project> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))
    }

    /// List projects in display order, optionally filtered by visibility
    pub async fn list_projects(&self, filter: ProjectFilter) -> ProjectResult<Vec<Project>> {
        self.repository.list(filter).await
    }

    /// Published projects in display order, backing the public reel
    pub async fn published_projects(&self) -> ProjectResult<Vec<Project>> {
        self.repository
            .list(ProjectFilter {
                visibility: Some(Visibility::Published),
            })
            .await
    }

    /// Apply a partial update to a project.
    ///
    /// A patch touching `youtube_id` goes through the same normalization as
    /// creation.
    pub async fn update_project(&self, id: Uuid, mut patch: UpdateProject) -> ProjectResult<Project> {
        patch
            .validate()
            .map_err(|e| ProjectError::Validation(e.to_string()))?;

        if patch.youtube_id.is_some() {
            let (youtube_id, thumbnail_url) = self
                .normalize_video_reference(patch.youtube_id.take(), patch.thumbnail_url.take())
                .await;
            patch.youtube_id = youtube_id;
            patch.thumbnail_url = thumbnail_url;
        }

        self.repository.update(id, patch).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: Uuid) -> ProjectResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProjectError::NotFound(id));
        }

        Ok(())
    }

    /// Assign dense ranks `0..N-1` following the submitted order.
    ///
    /// The per-record updates run concurrently and are not atomic as a group:
    /// when a subset fails, the successful updates stay committed and the
    /// whole operation reports a single generic failure.
    pub async fn reorder_projects(&self, ordered_ids: &[Uuid]) -> ProjectResult<()> {
        let updates = ordered_ids.iter().enumerate().map(|(position, id)| {
            let repository = Arc::clone(&self.repository);
            let id = *id;
            async move { repository.set_sort_index(id, position as i32).await }
        });

        let results = join_all(updates).await;

        let failed = results.iter().filter(|result| result.is_err()).count();
        if failed > 0 {
            tracing::warn!(
                failed,
                total = ordered_ids.len(),
                "Reorder left the collection partially renumbered"
            );
            return Err(ProjectError::Reorder);
        }

        tracing::info!(total = ordered_ids.len(), "Reordered projects");
        Ok(())
    }

    /// Move a project one slot up or down in the display order.
    ///
    /// A move at the boundary is a no-op and skips persistence entirely.
    pub async fn move_project(&self, id: Uuid, direction: MoveDirection) -> ProjectResult<()> {
        let projects = self.repository.list(ProjectFilter::default()).await?;
        let order: Vec<Uuid> = projects.iter().map(|p| p.id).collect();

        if !order.contains(&id) {
            return Err(ProjectError::NotFound(id));
        }

        let reordered = ordering::move_one_step(&order, id, direction);
        if reordered == order {
            return Ok(());
        }

        self.reorder_projects(&reordered).await
    }

    /// Set a project's visibility directly
    pub async fn set_visibility(&self, id: Uuid, visibility: Visibility) -> ProjectResult<Project> {
        self.repository.set_visibility(id, visibility).await
    }

    /// Publish/unpublish toggle: published goes to draft, anything else goes
    /// to published
    pub async fn toggle_visibility(&self, id: Uuid) -> ProjectResult<Project> {
        let project = self.get_project(id).await?;
        self.repository
            .set_visibility(id, project.visibility.toggled())
            .await
    }

    /// Normalize a URL-form YouTube reference to the canonical 11-char ID.
    ///
    /// Input that does not look like a URL, or that fails extraction, passes
    /// through verbatim. When extraction succeeds and no thumbnail is set,
    /// the derived thumbnail is committed only if the probe confirms the
    /// image resource is reachable.
    async fn normalize_video_reference(
        &self,
        youtube_id: Option<String>,
        mut thumbnail_url: Option<String>,
    ) -> (Option<String>, Option<String>) {
        let Some(raw) = youtube_id else {
            return (None, thumbnail_url);
        };

        if !raw.contains("http") {
            return (Some(raw), thumbnail_url);
        }

        let Some(canonical) = youtube::extract_id(&raw) else {
            // Unextractable input is stored as typed; rejecting it is a
            // product decision, not the resolver's
            return (Some(raw), thumbnail_url);
        };

        if thumbnail_url.is_none() && self.probe.exists(&canonical).await {
            thumbnail_url = Some(youtube::thumbnail_url(&canonical));
        }

        (Some(canonical), thumbnail_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProjectRepository, MockProjectRepository};
    use crate::youtube::MockThumbnailProbe;

    const WATCH_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    fn create_input(title: &str) -> CreateProject {
        CreateProject {
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
        }
    }

    fn denied_probe() -> MockThumbnailProbe {
        let mut probe = MockThumbnailProbe::new();
        probe.expect_exists().returning(|_| false);
        probe
    }

    #[tokio::test]
    async fn test_create_defaults_sort_index_to_zero_on_empty_store() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let project = service.create_project(create_input("First")).await.unwrap();
        assert_eq!(project.sort_index, 0);
    }

    #[tokio::test]
    async fn test_create_defaults_sort_index_to_one_past_max() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let mut seeded = create_input("Seeded");
        seeded.sort_index = Some(4);
        service.create_project(seeded).await.unwrap();

        let appended = service.create_project(create_input("Appended")).await.unwrap();
        assert_eq!(appended.sort_index, 5);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let result = service.create_project(create_input("")).await;
        assert!(matches!(result, Err(ProjectError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_normalizes_url_youtube_reference() {
        let mut probe = MockThumbnailProbe::new();
        probe
            .expect_exists()
            .withf(|id| id == "dQw4w9WgXcQ")
            .returning(|_| false);
        let service = ProjectService::with_probe(InMemoryProjectRepository::new(), probe);

        let mut input = create_input("Music video");
        input.youtube_id = Some(WATCH_URL.to_string());

        let project = service.create_project(input).await.unwrap();
        assert_eq!(project.youtube_id.as_deref(), Some("dQw4w9WgXcQ"));
        // Probe denied the thumbnail, so none is set
        assert_eq!(project.thumbnail_url, None);
    }

    #[tokio::test]
    async fn test_create_commits_thumbnail_when_probe_confirms() {
        let mut probe = MockThumbnailProbe::new();
        probe.expect_exists().returning(|_| true);
        let service = ProjectService::with_probe(InMemoryProjectRepository::new(), probe);

        let mut input = create_input("Music video");
        input.youtube_id = Some(WATCH_URL.to_string());

        let project = service.create_project(input).await.unwrap();
        assert_eq!(
            project.thumbnail_url.as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }

    #[tokio::test]
    async fn test_create_keeps_supplied_thumbnail_without_probing() {
        // No expectation set: any probe call would panic the test
        let probe = MockThumbnailProbe::new();
        let service = ProjectService::with_probe(InMemoryProjectRepository::new(), probe);

        let mut input = create_input("Music video");
        input.youtube_id = Some(WATCH_URL.to_string());
        input.thumbnail_url = Some("https://cdn.example.com/custom.jpg".to_string());

        let project = service.create_project(input).await.unwrap();
        assert_eq!(project.youtube_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(
            project.thumbnail_url.as_deref(),
            Some("https://cdn.example.com/custom.jpg")
        );
    }

    #[tokio::test]
    async fn test_create_passes_bare_id_through_without_probing() {
        let probe = MockThumbnailProbe::new();
        let service = ProjectService::with_probe(InMemoryProjectRepository::new(), probe);

        let mut input = create_input("Music video");
        input.youtube_id = Some("dQw4w9WgXcQ".to_string());

        let project = service.create_project(input).await.unwrap();
        assert_eq!(project.youtube_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(project.thumbnail_url, None);
    }

    #[tokio::test]
    async fn test_create_stores_unextractable_url_verbatim() {
        let probe = MockThumbnailProbe::new();
        let service = ProjectService::with_probe(InMemoryProjectRepository::new(), probe);

        let mut input = create_input("Broken link");
        input.youtube_id = Some("https://vimeo.com/123456789".to_string());

        let project = service.create_project(input).await.unwrap();
        assert_eq!(
            project.youtube_id.as_deref(),
            Some("https://vimeo.com/123456789")
        );
    }

    #[tokio::test]
    async fn test_update_normalizes_youtube_patch() {
        let mut probe = MockThumbnailProbe::new();
        probe.expect_exists().returning(|_| false);
        let service = ProjectService::with_probe(InMemoryProjectRepository::new(), probe);

        let created = service.create_project(create_input("Reel")).await.unwrap();

        let updated = service
            .update_project(
                created.id,
                UpdateProject {
                    youtube_id: Some("https://youtu.be/dQw4w9WgXcQ?t=5".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.youtube_id.as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[tokio::test]
    async fn test_reorder_assigns_dense_ranks() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let a = service.create_project(create_input("A")).await.unwrap();
        let b = service.create_project(create_input("B")).await.unwrap();
        let c = service.create_project(create_input("C")).await.unwrap();

        service.reorder_projects(&[c.id, a.id, b.id]).await.unwrap();

        let listed = service.list_projects(ProjectFilter::default()).await.unwrap();
        let titles: Vec<_> = listed.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
        let ranks: Vec<_> = listed.iter().map(|p| p.sort_index).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_reorder_is_idempotent() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let a = service.create_project(create_input("A")).await.unwrap();
        let b = service.create_project(create_input("B")).await.unwrap();

        service.reorder_projects(&[b.id, a.id]).await.unwrap();
        let first_pass: Vec<_> = service
            .list_projects(ProjectFilter::default())
            .await
            .unwrap()
            .iter()
            .map(|p| (p.id, p.sort_index))
            .collect();

        service.reorder_projects(&[b.id, a.id]).await.unwrap();
        let second_pass: Vec<_> = service
            .list_projects(ProjectFilter::default())
            .await
            .unwrap()
            .iter()
            .map(|p| (p.id, p.sort_index))
            .collect();

        assert_eq!(first_pass, second_pass);
    }

    #[tokio::test]
    async fn test_reorder_partial_failure_reports_generic_error() {
        let good = Uuid::new_v4();
        let bad = Uuid::new_v4();

        let mut repo = MockProjectRepository::new();
        repo.expect_set_sort_index().returning(move |id, _| {
            if id == bad {
                Err(ProjectError::Internal("connection reset".to_string()))
            } else {
                Ok(())
            }
        });

        let service = ProjectService::with_probe(repo, MockThumbnailProbe::new());

        let result = service.reorder_projects(&[good, bad]).await;
        assert!(matches!(result, Err(ProjectError::Reorder)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Failed to reorder projects"
        );
    }

    #[tokio::test]
    async fn test_move_last_up_one_step() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let a = service.create_project(create_input("A")).await.unwrap();
        let b = service.create_project(create_input("B")).await.unwrap();
        let c = service.create_project(create_input("C")).await.unwrap();
        assert_eq!((a.sort_index, b.sort_index, c.sort_index), (0, 1, 2));

        service.move_project(c.id, MoveDirection::Up).await.unwrap();

        let listed = service.list_projects(ProjectFilter::default()).await.unwrap();
        let titles: Vec<_> = listed.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "B"]);
        let ranks: Vec<_> = listed.iter().map(|p| p.sort_index).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_move_first_up_is_noop() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let a = service.create_project(create_input("A")).await.unwrap();
        service.create_project(create_input("B")).await.unwrap();

        service.move_project(a.id, MoveDirection::Up).await.unwrap();

        let listed = service.list_projects(ProjectFilter::default()).await.unwrap();
        assert_eq!(listed[0].id, a.id);
        assert_eq!(listed[0].sort_index, 0);
    }

    #[tokio::test]
    async fn test_move_unknown_project_is_not_found() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let result = service.move_project(Uuid::new_v4(), MoveDirection::Down).await;
        assert!(matches!(result, Err(ProjectError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_toggle_visibility_roundtrip() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let created = service.create_project(create_input("Reel")).await.unwrap();
        assert_eq!(created.visibility, Visibility::Draft);

        let published = service.toggle_visibility(created.id).await.unwrap();
        assert_eq!(published.visibility, Visibility::Published);

        let unpublished = service.toggle_visibility(created.id).await.unwrap();
        assert_eq!(unpublished.visibility, Visibility::Draft);
    }

    #[tokio::test]
    async fn test_toggle_unlisted_goes_straight_to_published() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let created = service.create_project(create_input("Reel")).await.unwrap();
        service
            .set_visibility(created.id, Visibility::Unlisted)
            .await
            .unwrap();

        let toggled = service.toggle_visibility(created.id).await.unwrap();
        assert_eq!(toggled.visibility, Visibility::Published);
    }

    #[tokio::test]
    async fn test_published_projects_excludes_drafts() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let shown = service.create_project(create_input("Shown")).await.unwrap();
        service.create_project(create_input("Hidden")).await.unwrap();
        service
            .set_visibility(shown.id, Visibility::Published)
            .await
            .unwrap();

        let reel = service.published_projects().await.unwrap();
        assert_eq!(reel.len(), 1);
        assert_eq!(reel[0].id, shown.id);
    }

    #[tokio::test]
    async fn test_delete_missing_project_is_not_found() {
        let service =
            ProjectService::with_probe(InMemoryProjectRepository::new(), denied_probe());

        let result = service.delete_project(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ProjectError::NotFound(_))));
    }
}
