//! Module wiring - builds the service once at startup and hands out the client

use crate::api::native::NativeClient;
use crate::config::PavilotSettings;
use crate::contract::PavilotApi;
use crate::domain::{Service, TransportFactory};
use crate::infra::http::HttpTransportFactory;
use anyhow::{Context, Result};
use figment::Figment;
use std::path::Path;
use std::sync::Arc;

/// Pavilot client module
///
/// The host constructs one module at startup and shares `client()` wherever
/// the API is needed. Dropping the module (and every client clone) is the
/// only way to reset the transport and the project cache.
pub struct PavilotModule {
    service: Arc<Service>,
    client: Arc<dyn PavilotApi>,
}

impl PavilotModule {
    /// Build from the `PavilotSettings` section of a configuration source.
    ///
    /// A missing section is not an error here: the client is still created
    /// and every call reports `MissingConfiguration`.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let settings =
            PavilotSettings::from_figment(figment).context("Failed to read Pavilot settings")?;
        if settings.is_none() {
            tracing::warn!("Pavilot settings section missing, API calls will fail");
        }
        Ok(Self::with_transport_factory(settings, Arc::new(HttpTransportFactory)))
    }

    /// Build from a YAML file overlaid with `PAVILOT_*` environment variables
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_figment(&PavilotSettings::figment(path))
    }

    /// Build with pre-supplied settings
    pub fn with_settings(settings: PavilotSettings) -> Self {
        Self::with_transport_factory(Some(settings), Arc::new(HttpTransportFactory))
    }

    /// Build with a custom transport factory
    pub fn with_transport_factory(
        settings: Option<PavilotSettings>,
        factory: Arc<dyn TransportFactory>,
    ) -> Self {
        let service = Arc::new(Service::new(settings, factory));
        let client: Arc<dyn PavilotApi> = Arc::new(NativeClient::new(service.clone()));

        tracing::info!("Pavilot client module initialized");
        Self { service, client }
    }

    /// Shared client for the lifetime of this module
    pub fn client(&self) -> Arc<dyn PavilotApi> {
        self.client.clone()
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }
}
