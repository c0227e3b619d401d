use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::foundation::error::{ServiceError, SlidecastResult};

/// Blocking client with a fixed overall timeout.
pub(crate) fn build_client(timeout: Duration) -> SlidecastResult<Client> {
    use anyhow::Context as _;
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build HTTP client")?;
    Ok(client)
}

/// Send once and return the body of a 2xx response.
pub(crate) fn send(url: &str, request: RequestBuilder) -> Result<Vec<u8>, ServiceError> {
    let response = request.send().map_err(|e| ServiceError::Request {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = response.status();
    let body = response.bytes().map_err(|e| ServiceError::Request {
        url: url.to_string(),
        message: format!("failed to read response body: {e}"),
    })?;

    if !status.is_success() {
        return Err(ServiceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).trim().to_string(),
        });
    }
    Ok(body.to_vec())
}

/// Decode a JSON body into `T`, reporting shape mismatches as malformed responses.
pub(crate) fn decode_json<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, ServiceError> {
    serde_json::from_slice(body).map_err(|e| ServiceError::MalformedResponse {
        url: url.to_string(),
        message: e.to_string(),
    })
}
