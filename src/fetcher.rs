use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request error: {0}")]
    Request(#[from] ureq::Error),
    #[error("unreadable response body: {0}")]
    Body(#[from] std::io::Error),
    #[error("fetch task aborted")]
    Aborted,
}

/// A fetched document: the raw HTML body together with its source url.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub html: String,
}

/// Fetch interface
///
/// The runner goes through this seam, so fetching can be swapped out without
/// touching extraction or orchestration.
#[async_trait]
pub trait Fetch {
    async fn get(&mut self, url: &str) -> Result<Page, FetchError>;
}

/// Sequential page fetcher.
///
/// Issues one blocking GET at a time and waits `download_delay` between
/// consecutive requests. The blocking call runs on the tokio blocking pool so
/// the caller stays async.
pub struct Fetcher {
    agent: ureq::Agent,
    download_delay: Duration,
    last_fetch: Option<Instant>,
}

impl Fetcher {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&config.bot_name)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            agent,
            download_delay: Duration::from_secs_f32(config.download_delay),
            last_fetch: None,
        }
    }
}

#[async_trait]
impl Fetch for Fetcher {
    async fn get(&mut self, url: &str) -> Result<Page, FetchError> {
        if let Some(last) = self.last_fetch {
            let elapsed = last.elapsed();
            if elapsed < self.download_delay {
                tokio::time::sleep(self.download_delay - elapsed).await;
            }
        }

        let agent = self.agent.clone();
        let url_ = url.to_owned();
        let html = tokio::task::spawn_blocking(move || -> Result<String, FetchError> {
            let response = agent.get(&url_).call()?;
            Ok(response.into_string()?)
        })
        .await
        .map_err(|_| FetchError::Aborted)??;
        self.last_fetch = Some(Instant::now());

        Ok(Page {
            url: url.to_owned(),
            html,
        })
    }
}
