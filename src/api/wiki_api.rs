use crate::config::Config;
use crate::error::RegistryError;
use crate::types::wiki::parse_query_bytes;
use backon::{ExponentialBuilder, Retryable};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Stored in place of a biography that does not mention [`SWIMMER_KEYWORD`].
pub const NO_SWIMMERS_FOUND: &str = "No swimmers found";
pub const SWIMMER_KEYWORD: &str = "swimmer";

/// Client for the encyclopedia `action=query` endpoint.
#[derive(Clone)]
pub struct WikiApi {
    client: reqwest::Client,
    api_url: Url,
    retry_policy: ExponentialBuilder,
}

impl WikiApi {
    pub fn new(cfg: &Config) -> Result<Self, RegistryError> {
        let api_url = Url::parse(&cfg.wiki_api_url)?;
        let mut builder = reqwest::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .connect_timeout(cfg.connect_timeout())
            .timeout(cfg.request_timeout());
        if let Some(proxy_url) = cfg.proxy.as_deref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }
        let client = builder.build()?;
        let retry_policy = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(200))
            .with_max_delay(Duration::from_secs(2))
            .with_max_times(cfg.fetch_retries)
            .with_jitter();
        Ok(Self {
            client,
            api_url,
            retry_policy,
        })
    }

    /// Fetch the plain-text intro for `subject` and keep it only if it reads like a swimmer's.
    pub async fn fetch_summary(&self, subject: &str) -> Result<String, RegistryError> {
        let extract = (|| async { self.fetch_extract(subject).await })
            .retry(self.retry_policy.clone())
            .when(|e: &RegistryError| e.is_retryable())
            .notify(|err, dur: Duration| {
                warn!(subject, error = %err, "summary fetch retrying after {:?}", dur);
            })
            .await?;
        let summary = filter_summary(extract);
        info!(subject, matched = (summary != NO_SWIMMERS_FOUND), "summary fetched");
        Ok(summary)
    }

    async fn fetch_extract(&self, subject: &str) -> Result<String, RegistryError> {
        let resp = self
            .client
            .get(self.api_url.clone())
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("titles", subject),
                ("prop", "extracts"),
                ("exintro", ""),
                ("explaintext", ""),
            ])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RegistryError::UpstreamStatus(status));
        }
        let body = resp.bytes().await?;
        debug!(subject, bytes = body.len(), "summary response received");
        parse_query_bytes(&body)?.into_single_page()?.into_extract()
    }
}

/// Case-sensitive keyword check; anything else collapses to [`NO_SWIMMERS_FOUND`].
pub fn filter_summary(extract: String) -> String {
    if extract.contains(SWIMMER_KEYWORD) {
        extract
    } else {
        NO_SWIMMERS_FOUND.to_string()
    }
}
