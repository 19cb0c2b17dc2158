//! HTTP transport: base address, key header, JSON and multipart bodies

use super::response::{self, transport_error};
use crate::contract::{
    Animation, Asset, ExportRequest, FileUpload, Hook, HookRequest, PavilotError, Project, Video,
};
use crate::domain::transport::{PavilotTransport, TransportFactory};
use crate::domain::validation::{validate_endpoint, ValidSettings};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use std::sync::Arc;

/// Authentication header carrying the subscription key
pub const API_KEY_HEADER: &str = "X-Pavilot-Key";

/// Pavilot REST transport over a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base: String,
}

impl HttpTransport {
    pub fn new(settings: ValidSettings<'_>) -> Result<Self, PavilotError> {
        let base = validate_endpoint(settings.endpoint)?;

        let name = HeaderName::from_bytes(API_KEY_HEADER.as_bytes())
            .map_err(|e| PavilotError::Transport(e.to_string()))?;
        let mut value = HeaderValue::from_str(settings.api_key)
            .map_err(|e| PavilotError::invalid("ApiKey", e.to_string()))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(name, value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(settings.transport.connect_timeout)
            .timeout(settings.transport.request_timeout)
            .user_agent(settings.transport.user_agent.as_str())
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            http,
            base: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Base address plus percent-encoded path segments
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    fn animation_url(&self, project_id: &str, animation_id: &str, tail: &[&str]) -> String {
        let mut segments = vec!["v1", "projects", project_id, "animations", animation_id];
        segments.extend_from_slice(tail);
        self.url(&segments)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, PavilotError> {
        request.send().await.map_err(transport_error)
    }

    async fn upload(&self, url: String, file: FileUpload) -> Result<Asset, PavilotError> {
        let content_type = file
            .content_type
            .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name)
            .mime_str(&content_type)
            .map_err(|e| PavilotError::Transport(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self.send(self.http.post(url).multipart(form)).await?;
        response::json(response).await
    }
}

#[async_trait]
impl PavilotTransport for HttpTransport {
    async fn list_projects(&self) -> Result<Vec<Project>, PavilotError> {
        let response = self.send(self.http.get(self.url(&["v1", "projects"]))).await?;
        response::json(response).await
    }

    async fn list_animations(&self, project_id: &str) -> Result<Vec<Animation>, PavilotError> {
        let url = self.url(&["v1", "projects", project_id, "animations"]);
        let response = self.send(self.http.get(url)).await?;
        response::json(response).await
    }

    async fn list_videos(
        &self,
        project_id: &str,
        animation_id: &str,
        page: u32,
    ) -> Result<Vec<Video>, PavilotError> {
        let url = self.animation_url(project_id, animation_id, &["videos"]);
        let response = self
            .send(self.http.get(url).query(&[("page", page)]))
            .await?;
        response::json(response).await
    }

    async fn get_video(
        &self,
        project_id: &str,
        animation_id: &str,
        video_id: &str,
    ) -> Result<Video, PavilotError> {
        let url = self.animation_url(project_id, animation_id, &["videos", video_id]);
        let response = self.send(self.http.get(url)).await?;
        response::json(response).await
    }

    async fn delete_video(
        &self,
        project_id: &str,
        animation_id: &str,
        video_id: &str,
    ) -> Result<bool, PavilotError> {
        let url = self.animation_url(project_id, animation_id, &["videos", video_id]);
        let response = self.send(self.http.delete(url)).await?;
        response::flag(response).await
    }

    async fn export_video(
        &self,
        project_id: &str,
        animation_id: &str,
        request: &ExportRequest,
    ) -> Result<Video, PavilotError> {
        let url = self.animation_url(project_id, animation_id, &["videos"]);
        let response = self.send(self.http.post(url).json(request)).await?;
        response::json(response).await
    }

    async fn list_images(
        &self,
        project_id: &str,
        animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError> {
        let url = self.animation_url(project_id, animation_id, &["images"]);
        let response = self.send(self.http.get(url)).await?;
        response::json(response).await
    }

    async fn upload_image(
        &self,
        project_id: &str,
        animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError> {
        let url = self.animation_url(project_id, animation_id, &["images"]);
        self.upload(url, file).await
    }

    async fn list_fonts(
        &self,
        project_id: &str,
        animation_id: &str,
    ) -> Result<Vec<Asset>, PavilotError> {
        let url = self.animation_url(project_id, animation_id, &["fonts"]);
        let response = self.send(self.http.get(url)).await?;
        response::json(response).await
    }

    async fn upload_font(
        &self,
        project_id: &str,
        animation_id: &str,
        file: FileUpload,
    ) -> Result<Asset, PavilotError> {
        let url = self.animation_url(project_id, animation_id, &["fonts"]);
        self.upload(url, file).await
    }

    async fn subscribe_hook(
        &self,
        project_id: &str,
        request: &HookRequest,
    ) -> Result<Hook, PavilotError> {
        let url = self.url(&["v1", "projects", project_id, "hooks"]);
        let response = self.send(self.http.post(url).json(request)).await?;
        response::json(response).await
    }

    async fn unsubscribe_hook(
        &self,
        project_id: &str,
        hook_id: i64,
    ) -> Result<Hook, PavilotError> {
        let hook_id = hook_id.to_string();
        let url = self.url(&["v1", "projects", project_id, "hooks", &hook_id]);
        let response = self.send(self.http.delete(url)).await?;
        response::json(response).await
    }
}

/// Builds an [`HttpTransport`] from validated settings
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransportFactory;

impl TransportFactory for HttpTransportFactory {
    fn build(
        &self,
        settings: ValidSettings<'_>,
    ) -> Result<Arc<dyn PavilotTransport>, PavilotError> {
        Ok(Arc::new(HttpTransport::new(settings)?))
    }
}
