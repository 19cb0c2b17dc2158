//! Public client trait
//!
//! This is the surface host applications depend on. Every method checks the
//! settings before anything is sent to the remote.

use super::{
    error::PavilotError,
    model::{Animation, Asset, ExportRequest, FileUpload, Hook, HookRequest, Project, Video},
};
use async_trait::async_trait;

/// Pavilot API for host applications
#[async_trait]
pub trait PavilotApi: Send + Sync {
    /// Validate settings; fails with `MissingConfiguration` or `InvalidConfiguration`
    fn is_valid(&self) -> Result<bool, PavilotError>;

    // ===== Projects & Animations =====

    /// Retrieve all projects (cached after the first successful fetch)
    async fn get_projects(&self) -> Result<Vec<Project>, PavilotError>;

    /// Retrieve animations of a project
    async fn get_animations(&self, project_id: &str) -> Result<Vec<Animation>, PavilotError>;

    // ===== Videos =====

    /// Retrieve videos of an animation, newest first. Page 0 is the latest.
    async fn get_videos(
        &self,
        project_id: &str,
        animation_id: &str,
        page: u32,
    ) -> Result<Vec<Video>, PavilotError>;

    /// Retrieve a video to read its status details
    async fn get_video(
        &self,
        project_id: &str,
        animation_id: &str,
        video_id: &str,
    ) -> Result<Video, PavilotError>;

    /// Delete a video
    async fn delete_video(
        &self,
        project_id: &str,
        animation_id: &str,
        video_id: &str,
    ) -> Result<bool, PavilotError>;

    /// Export a new video with updated data
    async fn export(
        &self,
        project_id: &str,
        animation_id: &str,
        request: ExportRequest,
    ) -> Result<Video, PavilotError>;

    // ===== Assets =====

    async fn get_images(
        &self,
        project_id: &str,
        animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError>;

    async fn upload_image(
        &self,
        project_id: &str,
        animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError>;

    async fn get_fonts(
        &self,
        project_id: &str,
        animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError>;

    async fn upload_font(
        &self,
        project_id: &str,
        animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError>;

    // ===== Hooks =====

    /// Subscribe a rest hook to receive updates
    async fn hook_subscribe(
        &self,
        project_id: &str,
        request: HookRequest,
    ) -> Result<Hook, PavilotError>;

    /// Unsubscribe a rest hook
    async fn hook_unsubscribe(&self, project_id: &str, hook_id: i64) -> Result<Hook, PavilotError>;
}
