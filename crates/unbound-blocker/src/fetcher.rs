use std::time::Duration;

use anyhow::Context as _;
use reqwest::Client;
use unbound_blocker_lib::{parse_blocklist, Blocklist};

/// Default per-source request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloads the blocklist sources one by one
pub struct BlocklistFetcher {
    client: Client,
}

impl BlocklistFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("failed to build an HTTP client")?;

        Ok(BlocklistFetcher { client })
    }

    pub fn with_client(client: Client) -> Self {
        BlocklistFetcher { client }
    }

    /// Retrieves and parses every source.
    ///
    /// A source that can't be retrieved is logged and skipped.
    pub async fn retrieve_blocklist(&self, sources: &[String]) -> Blocklist {
        tracing::info!("Retrieving blocklist");
        let mut blocklist = Blocklist::new();

        for source in sources {
            let Some(text) = self.fetch_source(source).await else {
                continue;
            };

            tracing::info!("Parsing source '{}'", source);
            blocklist.extend(parse_blocklist(&text));
        }

        tracing::info!(
            "Retrieved {} unique domains from {} source(s)",
            blocklist.len(),
            sources.len()
        );
        blocklist
    }

    async fn fetch_source(&self, source: &str) -> Option<String> {
        let response = match self.client.get(source).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::error!("Timeout when retrieving source '{}'", source);
                return None;
            }
            Err(e) => {
                tracing::error!("Failed to retrieve source '{}': {}", source, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Got status code {} from source '{}'", status.as_u16(), source);
            return None;
        }

        match response.text().await {
            Ok(text) => Some(text),
            Err(e) if e.is_timeout() => {
                tracing::error!("Timeout when retrieving source '{}'", source);
                None
            }
            Err(e) => {
                tracing::error!("Failed to read the body of source '{}': {}", source, e);
                None
            }
        }
    }
}
