//! Contract layer - public API of the Pavilot client
//!
//! Transport-agnostic records, the error type and the client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::PavilotApi;
pub use error::PavilotError;
pub use model::{
    Animation, Asset, Distribution, ExportRequest, FileUpload, Hook, HookRequest, Mapping,
    Platform, Project, Video, VideoStatus,
};
