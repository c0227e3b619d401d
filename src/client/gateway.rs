use reqwest::blocking::Client;

use crate::client::http::{build_client, send};
use crate::foundation::config::{Config, PINNING_TIMEOUT};
use crate::foundation::error::SlidecastResult;
use crate::model::audio::locator_url;

/// Anything that can turn a media locator into bytes.
pub trait MediaFetcher {
    fn fetch(&self, locator: &str) -> SlidecastResult<Vec<u8>>;
}

/// Downloads media referenced by `ipfs://` or HTTP(S) locators.
pub struct GatewayClient {
    http: Client,
    gateway: String,
}

impl GatewayClient {
    pub fn new(cfg: &Config) -> SlidecastResult<Self> {
        Ok(Self {
            http: build_client(PINNING_TIMEOUT)?,
            gateway: cfg.pinata_gateway.clone(),
        })
    }

    /// URL a locator resolves to.
    pub fn resolve(&self, locator: &str) -> String {
        locator_url(locator, &self.gateway)
    }
}

impl MediaFetcher for GatewayClient {
    fn fetch(&self, locator: &str) -> SlidecastResult<Vec<u8>> {
        let url = self.resolve(locator);
        tracing::debug!(%url, "downloading media");
        Ok(send(&url, self.http.get(&url))?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/client/gateway.rs"]
mod tests;
