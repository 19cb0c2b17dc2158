//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{
    Animation, Asset, ExportRequest, FileUpload, Hook, HookRequest, PavilotApi, PavilotError,
    Project, Video,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// `PavilotApi` implementation that calls the domain service directly.
///
/// Cloning is cheap; clones share the same service, so the transport and
/// the project cache are shared too.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PavilotApi for NativeClient {
    fn is_valid(&self) -> Result<bool, PavilotError> {
        self.service.is_valid()
    }

    async fn get_projects(&self) -> Result<Vec<Project>, PavilotError> {
        self.service.get_projects().await
    }

    async fn get_animations(&self, project_id: &str) -> Result<Vec<Animation>, PavilotError> {
        self.service.get_animations(project_id).await
    }

    async fn get_videos(
        &self,
        project_id: &str,
        animation_id: &str,
        page: u32,
    ) -> Result<Vec<Video>, PavilotError> {
        self.service.get_videos(project_id, animation_id, page).await
    }

    async fn get_video(
        &self,
        project_id: &str,
        animation_id: &str,
        video_id: &str,
    ) -> Result<Video, PavilotError> {
        self.service
            .get_video(project_id, animation_id, video_id)
            .await
    }

    async fn delete_video(
        &self,
        project_id: &str,
        animation_id: &str,
        video_id: &str,
    ) -> Result<bool, PavilotError> {
        self.service
            .delete_video(project_id, animation_id, video_id)
            .await
    }

    async fn export(
        &self,
        project_id: &str,
        animation_id: &str,
        request: ExportRequest,
    ) -> Result<Video, PavilotError> {
        self.service.export(project_id, animation_id, request).await
    }

    async fn get_images(
        &self,
        project_id: &str,
        animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError> {
        self.service.get_images(project_id, animation_id).await
    }

    async fn upload_image(
        &self,
        project_id: &str,
        animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError> {
        self.service
            .upload_image(project_id, animation_id, file)
            .await
    }

    async fn get_fonts(
        &self,
        project_id: &str,
        animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError> {
        self.service.get_fonts(project_id, animation_id).await
    }

    async fn upload_font(
        &self,
        project_id: &str,
        animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError> {
        self.service
            .upload_font(project_id, animation_id, file)
            .await
    }

    async fn hook_subscribe(
        &self,
        project_id: &str,
        request: HookRequest,
    ) -> Result<Hook, PavilotError> {
        self.service.hook_subscribe(project_id, request).await
    }

    async fn hook_unsubscribe(&self, project_id: &str, hook_id: i64) -> Result<Hook, PavilotError> {
        self.service.hook_unsubscribe(project_id, hook_id).await
    }
}
