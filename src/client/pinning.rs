use std::path::Path;

use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};

use crate::client::http::{build_client, decode_json, send};
use crate::foundation::config::{Config, PINNING_TIMEOUT};
use crate::foundation::error::{ServiceError, SlidecastError, SlidecastResult};

/// Locator record for a file pinned to IPFS.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedFile {
    /// Content hash (CID) reported by the pinning service.
    pub ipfs_hash: String,
    /// `ipfs://<hash>`.
    pub ipfs_url: String,
    /// HTTP URL of the file on the configured gateway.
    pub gateway_url: String,
    /// Full service response.
    pub pinata: serde_json::Value,
}

#[derive(serde::Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash", default)]
    ipfs_hash: Option<String>,
}

/// Uploads files to Pinata.
pub struct PinningClient {
    http: Client,
    api_url: String,
    gateway: String,
    jwt: Option<String>,
}

impl PinningClient {
    /// Construction never fails on a missing credential; [`PinningClient::upload_file`] does.
    pub fn new(cfg: &Config) -> SlidecastResult<Self> {
        Ok(Self {
            http: build_client(PINNING_TIMEOUT)?,
            api_url: cfg.pinata_api_url.clone(),
            gateway: cfg.pinata_gateway.clone(),
            jwt: cfg.pinata_jwt.clone(),
        })
    }

    /// Upload `path` as a multipart `file` field, named `name` or the path's file name.
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub fn upload_file(&self, path: &Path, name: Option<&str>) -> SlidecastResult<PinnedFile> {
        let jwt = self
            .jwt
            .as_deref()
            .ok_or_else(|| SlidecastError::configuration("PINATA_JWT is not set"))?;

        let file_name = match name {
            Some(n) => n.to_string(),
            None => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string()),
        };

        let part = {
            use anyhow::Context as _;
            Part::file(path)
                .with_context(|| format!("failed to open '{}' for upload", path.display()))?
                .file_name(file_name)
        };
        let form = Form::new().part("file", part);

        let request = self.http.post(&self.api_url).bearer_auth(jwt).multipart(form);
        let body = match send(&self.api_url, request) {
            Ok(body) => body,
            Err(ServiceError::Status { body, .. }) => return Err(SlidecastError::pinning(body)),
            Err(e) => return Err(e.into()),
        };

        let pinned = pinned_from_response(&self.api_url, &body, &self.gateway)?;
        tracing::info!(hash = %pinned.ipfs_hash, gateway = %pinned.gateway_url, "pinned file");
        Ok(pinned)
    }
}

/// Turn a raw pinning response into a locator record.
pub fn pinned_from_response(url: &str, body: &[u8], gateway: &str) -> SlidecastResult<PinnedFile> {
    let raw: serde_json::Value = decode_json(url, body)?;
    let parsed: PinResponse = serde_json::from_value(raw.clone())
        .map_err(|e| SlidecastError::pinning(format!("unexpected Pinata response: {e}")))?;
    let hash = parsed
        .ipfs_hash
        .filter(|h| !h.is_empty())
        .ok_or_else(|| SlidecastError::pinning("Pinata response missing IpfsHash"))?;

    Ok(PinnedFile {
        ipfs_url: format!("ipfs://{hash}"),
        gateway_url: format!("{}/{hash}", gateway.trim_end_matches('/')),
        ipfs_hash: hash,
        pinata: raw,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/client/pinning.rs"]
mod tests;
