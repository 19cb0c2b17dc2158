//! Contract models for the Pavilot API
//!
//! Records mirror the remote API's JSON shapes (camelCase on the wire).
//! The client forwards them as-is; nothing here interprets their fields.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Top-level container for animations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Template definition that can be exported into videos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

/// Rendering state of an exported video
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoStatus {
    Queued,
    Processing,
    Completed,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Rendered export of an animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: VideoStatus,
    #[serde(default)]
    pub url: Option<String>,
    /// Creation timestamp as sent by the remote (RFC 3339)
    #[serde(default)]
    pub created: Option<String>,
}

/// Uploaded image or font attached to an animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
}

/// Webhook subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hook {
    pub id: i64,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub target_url: Option<String>,
}

/// Hook filter sent when subscribing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookRequest {
    pub event: Option<String>,
    pub target_url: Option<String>,
}

/// Key/value pair replacing animation text during export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    pub key: String,
    pub value: String,
}

impl Mapping {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Social platform a video can be published to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    LinkedIn,
    Youtube,
}

/// Publishing instruction attached to an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    #[serde(default)]
    pub message: Option<String>,
    pub platform: Platform,
}

/// Export request: mappings and distribution details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub data: Vec<Mapping>,
    #[serde(default)]
    pub distributions: Vec<Distribution>,
}

impl ExportRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_mapping(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push(Mapping::new(key, value));
        self
    }

    pub fn with_distribution(mut self, platform: Platform, message: impl Into<String>) -> Self {
        self.distributions.push(Distribution {
            message: Some(message.into()),
            platform,
        });
        self
    }
}

/// File content for image and font uploads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    /// MIME type; `application/octet-stream` when absent
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
