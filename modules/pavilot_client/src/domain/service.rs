//! Domain service - settings gate, client lifecycle and delegation

use super::transport::{PavilotTransport, TransportFactory};
use super::validation::{check_settings, validate_settings};
use crate::config::PavilotSettings;
use crate::contract::{
    Animation, Asset, ExportRequest, FileUpload, Hook, HookRequest, PavilotError, Project, Video,
};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// Domain service for the Pavilot API
///
/// Every operation re-validates the settings before touching the transport.
/// The transport is built once, on the first call that passes validation,
/// and reused afterwards. The project list is cached after the first
/// successful fetch; there is no invalidation.
pub struct Service {
    settings: Option<PavilotSettings>,
    factory: Arc<dyn TransportFactory>,
    client: RwLock<Option<Arc<dyn PavilotTransport>>>,
    projects: RwLock<Option<Vec<Project>>>,
}

impl Service {
    /// Create a new service instance; `None` settings fail on first use
    pub fn new(settings: Option<PavilotSettings>, factory: Arc<dyn TransportFactory>) -> Self {
        Self {
            settings,
            factory,
            client: RwLock::new(None),
            projects: RwLock::new(None),
        }
    }

    pub fn settings(&self) -> Option<&PavilotSettings> {
        self.settings.as_ref()
    }

    /// Validate Pavilot communication settings
    pub fn is_valid(&self) -> Result<bool, PavilotError> {
        validate_settings(self.settings.as_ref())
    }

    /// Verify settings and initialize the transport client
    pub fn verify_and_setup_client(&self) -> Result<Arc<dyn PavilotTransport>, PavilotError> {
        let valid = check_settings(self.settings.as_ref())?;

        if let Some(client) = self.client.read().as_ref() {
            return Ok(client.clone());
        }

        let mut slot = self.client.write();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = self.factory.build(valid)?;
        info!(endpoint = valid.endpoint, "Pavilot client initialized");
        *slot = Some(client.clone());
        Ok(client)
    }

    // ===== Projects & Animations =====

    /// Retrieve all projects
    pub async fn get_projects(&self) -> Result<Vec<Project>, PavilotError> {
        let client = self.verify_and_setup_client()?;

        let cached = self.projects.read().clone();
        if let Some(projects) = cached {
            debug!(count = projects.len(), "Returning cached projects");
            return Ok(projects);
        }

        debug!("Fetching projects");
        let projects = client.list_projects().await?;
        *self.projects.write() = Some(projects.clone());
        Ok(projects)
    }

    /// Retrieve animations of a project
    pub async fn get_animations(&self, project_id: &str) -> Result<Vec<Animation>, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(project_id, "Fetching animations");
        client.list_animations(project_id).await
    }

    // ===== Videos =====

    /// Retrieve videos of an animation. Order is reversed, page 0 retrieves
    /// the latest generated videos.
    pub async fn get_videos(
        &self,
        project_id: &str,
        animation_id: &str,
        page: u32,
    ) -> Result<Vec<Video>, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(project_id, animation_id, page, "Fetching videos");
        client.list_videos(project_id, animation_id, page).await
    }

    /// Retrieve a video to get its status details
    pub async fn get_video(
        &self,
        project_id: &str,
        animation_id: &str,
        video_id: &str,
    ) -> Result<Video, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(project_id, animation_id, video_id, "Fetching video");
        client.get_video(project_id, animation_id, video_id).await
    }

    pub async fn delete_video(
        &self,
        project_id: &str,
        animation_id: &str,
        video_id: &str,
    ) -> Result<bool, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(project_id, animation_id, video_id, "Deleting video");
        client.delete_video(project_id, animation_id, video_id).await
    }

    /// Export a new video with updated data
    pub async fn export(
        &self,
        project_id: &str,
        animation_id: &str,
        request: ExportRequest,
    ) -> Result<Video, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(
            project_id,
            animation_id,
            mappings = request.data.len(),
            distributions = request.distributions.len(),
            "Exporting video"
        );
        client.export_video(project_id, animation_id, &request).await
    }

    // ===== Assets =====

    pub async fn get_images(
        &self,
        project_id: &str,
        animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(project_id, animation_id, "Fetching images");
        client.list_images(project_id, animation_id).await
    }

    pub async fn upload_image(
        &self,
        project_id: &str,
        animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(project_id, animation_id, file_name = %file.file_name, "Uploading image");
        client.upload_image(project_id, animation_id, file).await
    }

    pub async fn get_fonts(
        &self,
        project_id: &str,
        animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(project_id, animation_id, "Fetching fonts");
        client.list_fonts(project_id, animation_id).await
    }

    pub async fn upload_font(
        &self,
        project_id: &str,
        animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(project_id, animation_id, file_name = %file.file_name, "Uploading font");
        client.upload_font(project_id, animation_id, file).await
    }

    // ===== Hooks =====

    /// Subscribe a rest hook to receive updates
    pub async fn hook_subscribe(
        &self,
        project_id: &str,
        request: HookRequest,
    ) -> Result<Hook, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(project_id, event = ?request.event, "Subscribing hook");
        client.subscribe_hook(project_id, &request).await
    }

    /// Unsubscribe a rest hook to stop receiving updates
    pub async fn hook_unsubscribe(
        &self,
        project_id: &str,
        hook_id: i64,
    ) -> Result<Hook, PavilotError> {
        let client = self.verify_and_setup_client()?;
        debug!(project_id, hook_id, "Unsubscribing hook");
        client.unsubscribe_hook(project_id, hook_id).await
    }
}
