//! Settings validation

use crate::config::{PavilotSettings, TransportConfig};
use crate::contract::PavilotError;
use url::Url;

/// Settings that passed validation, borrowed from `PavilotSettings`
#[derive(Debug, Clone, Copy)]
pub struct ValidSettings<'a> {
    pub endpoint: &'a str,
    pub api_key: &'a str,
    pub transport: &'a TransportConfig,
}

/// Validate Pavilot communication settings.
///
/// Absent or blank values fail with `MissingConfiguration`; an endpoint that
/// is not a well-formed absolute URL fails with `InvalidConfiguration`.
pub fn validate_settings(settings: Option<&PavilotSettings>) -> Result<bool, PavilotError> {
    check_settings(settings).map(|_| true)
}

/// Same checks as [`validate_settings`], handing back the validated values
pub fn check_settings(
    settings: Option<&PavilotSettings>,
) -> Result<ValidSettings<'_>, PavilotError> {
    let settings = settings.ok_or_else(|| PavilotError::missing("Settings"))?;

    let endpoint = non_blank(settings.api_endpoint.as_deref())
        .ok_or_else(|| PavilotError::missing("ApiEndpoint setting"))?;
    validate_endpoint(endpoint)?;

    let api_key = non_blank(settings.api_key.as_deref())
        .ok_or_else(|| PavilotError::missing("ApiKey setting"))?;

    Ok(ValidSettings {
        endpoint,
        api_key,
        transport: &settings.transport,
    })
}

/// Check that the endpoint is an absolute URL with a host
pub fn validate_endpoint(endpoint: &str) -> Result<Url, PavilotError> {
    if endpoint.contains(char::is_whitespace) {
        return Err(PavilotError::invalid(
            "ApiEndpoint",
            format!("'{}' contains whitespace", endpoint),
        ));
    }

    let url = Url::parse(endpoint)
        .map_err(|e| PavilotError::invalid("ApiEndpoint", format!("'{}': {}", endpoint, e)))?;

    if url.cannot_be_a_base() || url.host_str().map_or(true, str::is_empty) {
        return Err(PavilotError::invalid(
            "ApiEndpoint",
            format!("'{}' is not an absolute url with a host", endpoint),
        ));
    }

    // Request paths are appended to the base, so it must end at the path
    if url.query().is_some() || url.fragment().is_some() {
        return Err(PavilotError::invalid(
            "ApiEndpoint",
            format!("'{}' must not carry a query or fragment", endpoint),
        ));
    }

    Ok(url)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
