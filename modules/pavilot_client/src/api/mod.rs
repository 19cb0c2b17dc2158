//! API layer - in-process client handed out to host applications

pub mod native;
