//! Pavilot Client Module
//!
//! Client for the Pavilot video animation API (projects, animations, videos,
//! assets, webhooks). Settings are validated on every call, the transport is
//! built lazily, and the project list is cached per client.

// Public exports
pub mod contract;
pub use contract::{
    Animation, Asset, Distribution, ExportRequest, FileUpload, Hook, HookRequest, Mapping,
    PavilotApi, PavilotError, Platform, Project, Video, VideoStatus,
};

pub mod config;
pub use config::{PavilotSettings, TransportConfig};

pub mod module;
pub use module::PavilotModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
