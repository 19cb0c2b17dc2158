//! Response handling shared by all endpoints

use crate::contract::PavilotError;
use serde::de::DeserializeOwned;
use tracing::warn;

pub(super) fn transport_error(err: reqwest::Error) -> PavilotError {
    PavilotError::Transport(err.to_string())
}

/// Read the body, turning non-success statuses into `PavilotError::Api`
async fn read_body(response: reqwest::Response) -> Result<String, PavilotError> {
    let status = response.status();
    let url = response.url().path().to_string();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        warn!(status = status.as_u16(), path = %url, "Pavilot API request failed");
        return Err(PavilotError::Api {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

pub(super) async fn json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, PavilotError> {
    let body = read_body(response).await?;
    serde_json::from_str(&body).map_err(|e| PavilotError::Decode(e.to_string()))
}

/// Boolean result; an empty success body counts as `true`
pub(super) async fn flag(response: reqwest::Response) -> Result<bool, PavilotError> {
    let body = read_body(response).await?;
    if body.trim().is_empty() {
        return Ok(true);
    }
    serde_json::from_str(&body).map_err(|e| PavilotError::Decode(e.to_string()))
}
