//! Common test utilities: an in-memory Pavilot transport with call counters

#![allow(dead_code)]

use async_trait::async_trait;
use pavilot_client::contract::*;
use pavilot_client::domain::{PavilotTransport, TransportFactory, ValidSettings};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Videos per page served by the stub
pub const PAGE_SIZE: usize = 2;

/// Stub transport with canned data and per-operation call counts
#[derive(Default)]
pub struct StubTransport {
    calls: RwLock<HashMap<&'static str, usize>>,
    /// Remaining `list_projects` calls that should fail
    project_failures: AtomicUsize,
    pub projects: Vec<Project>,
    /// Newest first
    pub videos: Vec<Video>,
    pub exports: Mutex<Vec<ExportRequest>>,
    pub uploads: Mutex<Vec<FileUpload>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            projects: vec![project("p1", "Launch"), project("p2", "Promo")],
            videos: (1..=5).rev().map(|n| video(&format!("v{}", n))).collect(),
            ..Self::default()
        }
    }

    pub fn failing_projects(self, times: usize) -> Self {
        self.project_failures.store(times, Ordering::SeqCst);
        self
    }

    pub fn calls(&self, op: &str) -> usize {
        self.calls.read().get(op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.read().values().sum()
    }

    fn record(&self, op: &'static str) {
        *self.calls.write().entry(op).or_insert(0) += 1;
    }
}

pub fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: Some(name.to_string()),
    }
}

pub fn video(id: &str) -> Video {
    Video {
        id: id.to_string(),
        name: Some(format!("video {}", id)),
        status: VideoStatus::Completed,
        url: None,
        created: None,
    }
}

fn asset(id: &str, name: &str, kind: &str) -> Asset {
    Asset {
        id: id.to_string(),
        name: Some(name.to_string()),
        url: None,
        kind: Some(kind.to_string()),
    }
}

#[async_trait]
impl PavilotTransport for StubTransport {
    async fn list_projects(&self) -> Result<Vec<Project>, PavilotError> {
        self.record("list_projects");
        let failing = self
            .project_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(PavilotError::Api {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(self.projects.clone())
    }

    async fn list_animations(&self, project_id: &str) -> Result<Vec<Animation>, PavilotError> {
        self.record("list_animations");
        Ok(vec![Animation {
            id: "a1".to_string(),
            name: Some("Intro".to_string()),
            project_id: Some(project_id.to_string()),
        }])
    }

    async fn list_videos(
        &self,
        _project_id: &str,
        _animation_id: &str,
        page: u32,
    ) -> Result<Vec<Video>, PavilotError> {
        self.record("list_videos");
        Ok(self
            .videos
            .chunks(PAGE_SIZE)
            .nth(page as usize)
            .map(<[Video]>::to_vec)
            .unwrap_or_default())
    }

    async fn get_video(
        &self,
        _project_id: &str,
        _animation_id: &str,
        video_id: &str,
    ) -> Result<Video, PavilotError> {
        self.record("get_video");
        self.videos
            .iter()
            .find(|v| v.id == video_id)
            .cloned()
            .ok_or_else(|| PavilotError::Api {
                status: 404,
                body: format!("video {} not found", video_id),
            })
    }

    async fn delete_video(
        &self,
        _project_id: &str,
        _animation_id: &str,
        video_id: &str,
    ) -> Result<bool, PavilotError> {
        self.record("delete_video");
        Ok(self.videos.iter().any(|v| v.id == video_id))
    }

    async fn export_video(
        &self,
        _project_id: &str,
        _animation_id: &str,
        request: &ExportRequest,
    ) -> Result<Video, PavilotError> {
        self.record("export_video");
        self.exports.lock().push(request.clone());
        let mut exported = video("v6");
        exported.name = request.name.clone();
        exported.status = VideoStatus::Queued;
        Ok(exported)
    }

    async fn list_images(
        &self,
        _project_id: &str,
        _animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError> {
        self.record("list_images");
        Ok(vec![asset("i1", "logo.png", "image")])
    }

    async fn upload_image(
        &self,
        _project_id: &str,
        _animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError> {
        self.record("upload_image");
        let created = asset("i2", &file.file_name, "image");
        self.uploads.lock().push(file);
        Ok(created)
    }

    async fn list_fonts(
        &self,
        _project_id: &str,
        _animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError> {
        self.record("list_fonts");
        Ok(vec![asset("f1", "Inter.ttf", "font")])
    }

    async fn upload_font(
        &self,
        _project_id: &str,
        _animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError> {
        self.record("upload_font");
        let created = asset("f2", &file.file_name, "font");
        self.uploads.lock().push(file);
        Ok(created)
    }

    async fn subscribe_hook(
        &self,
        project_id: &str,
        request: &HookRequest,
    ) -> Result<Hook, PavilotError> {
        self.record("subscribe_hook");
        Ok(Hook {
            id: 42,
            project_id: Some(project_id.to_string()),
            event: request.event.clone(),
            target_url: request.target_url.clone(),
        })
    }

    async fn unsubscribe_hook(
        &self,
        project_id: &str,
        hook_id: i64,
    ) -> Result<Hook, PavilotError> {
        self.record("unsubscribe_hook");
        Ok(Hook {
            id: hook_id,
            project_id: Some(project_id.to_string()),
            event: None,
            target_url: None,
        })
    }
}

/// Factory handing out one shared stub and counting builds
pub struct StubFactory {
    pub transport: Arc<StubTransport>,
    builds: AtomicUsize,
    last_key: Mutex<Option<String>>,
}

impl StubFactory {
    pub fn new(transport: StubTransport) -> Arc<Self> {
        Arc::new(Self {
            transport: Arc::new(transport),
            builds: AtomicUsize::new(0),
            last_key: Mutex::new(None),
        })
    }

    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn last_key(&self) -> Option<String> {
        self.last_key.lock().clone()
    }
}

impl TransportFactory for StubFactory {
    fn build(
        &self,
        settings: ValidSettings<'_>,
    ) -> Result<Arc<dyn PavilotTransport>, PavilotError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        *self.last_key.lock() = Some(settings.api_key.to_string());
        Ok(self.transport.clone())
    }
}
