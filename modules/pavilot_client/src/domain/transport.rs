//! Transport capability
//!
//! One method per remote endpoint. The service only ever talks to the remote
//! through this trait; `infra::http` provides the real implementation.

use crate::contract::{
    Animation, Asset, ExportRequest, FileUpload, Hook, HookRequest, PavilotError, Project, Video,
};
use super::validation::ValidSettings;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote Pavilot endpoints
#[async_trait]
pub trait PavilotTransport: Send + Sync {
    /// GET /v1/projects
    async fn list_projects(&self) -> Result<Vec<Project>, PavilotError>;

    /// GET /v1/projects/{projectId}/animations
    async fn list_animations(&self, project_id: &str) -> Result<Vec<Animation>, PavilotError>;

    /// GET /v1/projects/{projectId}/animations/{animationId}/videos?page={page}
    async fn list_videos(
        &self,
        project_id: &str,
        animation_id: &str,
        page: u32,
    ) -> Result<Vec<Video>, PavilotError>;

    /// GET /v1/projects/{projectId}/animations/{animationId}/videos/{videoId}
    async fn get_video(
        &self,
        project_id: &str,
        animation_id: &str,
        video_id: &str,
    ) -> Result<Video, PavilotError>;

    /// DELETE /v1/projects/{projectId}/animations/{animationId}/videos/{videoId}
    async fn delete_video(
        &self,
        project_id: &str,
        animation_id: &str,
        video_id: &str,
    ) -> Result<bool, PavilotError>;

    /// POST /v1/projects/{projectId}/animations/{animationId}/videos
    async fn export_video(
        &self,
        project_id: &str,
        animation_id: &str,
        request: &ExportRequest,
    ) -> Result<Video, PavilotError>;

    /// GET /v1/projects/{projectId}/animations/{animationId}/images
    async fn list_images(
        &self,
        project_id: &str,
        animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError>;

    /// POST (multipart) /v1/projects/{projectId}/animations/{animationId}/images
    async fn upload_image(
        &self,
        project_id: &str,
        animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError>;

    /// GET /v1/projects/{projectId}/animations/{animationId}/fonts
    async fn list_fonts(
        &self,
        project_id: &str,
        animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError>;

    /// POST (multipart) /v1/projects/{projectId}/animations/{animationId}/fonts
    async fn upload_font(
        &self,
        project_id: &str,
        animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError>;

    /// POST /v1/projects/{projectId}/hooks
    async fn subscribe_hook(
        &self,
        project_id: &str,
        request: &HookRequest,
    ) -> Result<Hook, PavilotError>;

    /// DELETE /v1/projects/{projectId}/hooks/{hookId}
    async fn unsubscribe_hook(&self, project_id: &str, hook_id: i64)
        -> Result<Hook, PavilotError>;
}

/// Builds a transport bound to a base address and authenticated with a key
pub trait TransportFactory: Send + Sync {
    fn build(&self, settings: ValidSettings<'_>) -> Result<Arc<dyn PavilotTransport>, PavilotError>;
}
