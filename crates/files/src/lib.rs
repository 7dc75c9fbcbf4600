//! File fetcher adapter: plain HTTPS GET of a catalog URL.

use std::time::Duration;

use {async_trait::async_trait, reqwest::Client, tracing::debug};

use remessa_channels::{Error, FileFetcher, Result};

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// [`FileFetcher`] that downloads the package file over HTTP.
#[derive(Default)]
pub struct HttpFileFetcher {
    http: Client,
}

impl HttpFileFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileFetcher for HttpFileFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "downloading package file");
        let resp = self
            .http
            .get(url)
            .timeout(DOWNLOAD_TIMEOUT)
            .send()
            .await
            .map_err(Error::download)?;

        if !resp.status().is_success() {
            return Err(Error::download(format!("HTTP {}", resp.status())));
        }
        let bytes = resp.bytes().await.map_err(Error::download)?;
        debug!(url, size = bytes.len(), "download complete");
        Ok(bytes.to_vec())
    }
}
