//! Domain layer - validation, transport capability and the service

pub mod service;
pub mod transport;
pub mod validation;

pub use service::Service;
pub use transport::{PavilotTransport, TransportFactory};
pub use validation::{check_settings, validate_settings, ValidSettings};
