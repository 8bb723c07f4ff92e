//! Best-effort check that an account has a public profile page.

use anyhow::Result;
use std::time::Duration;

/// Reports whether a profile URL is reachable.
pub trait AccountProbe {
    fn check(&self, url: &str) -> Result<()>;
}

/// Fetches the profile page over HTTP; any error or non-2xx status fails.
pub struct HttpProbe {
    client: reqwest::blocking::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gh-token/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    #[cfg(test)]
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl AccountProbe for HttpProbe {
    fn check(&self, url: &str) -> Result<()> {
        tracing::debug!("Probing {}", url);
        let response = self.client.get(url).send()?;
        response.error_for_status()?;
        Ok(())
    }
}
