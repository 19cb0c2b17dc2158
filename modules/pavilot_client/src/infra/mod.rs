//! Infrastructure layer - remote transport implementations

pub mod http;
