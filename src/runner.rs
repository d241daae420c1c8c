use crate::config::Config;
use crate::fetcher::{Fetch, Fetcher};
use crate::sink::{Sink, SinkError};
use crate::spider::Spider;
use crate::stats::Stats;

/// Single-pass crawl runner.
///
/// Fetches a spider's start urls in order, hands each page to the spider, and
/// forwards the resulting records to the sink. No frontier, no retries, no
/// dedup: each url is fetched exactly once and the run ends.
pub struct Runner<F: Fetch = Fetcher> {
    fetcher: F,
    stats: Stats,
}

impl Runner<Fetcher> {
    pub fn new(config: Config) -> Self {
        config.sanity_check();
        Self::with_fetcher(Fetcher::new(&config))
    }
}

impl<F: Fetch> Runner<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher,
            stats: Stats::new(),
        }
    }

    pub async fn run<S, K>(&mut self, spider: &S, sink: &mut K) -> Result<(), SinkError>
    where
        S: Spider,
        K: Sink,
    {
        let name = spider.name();
        for url in spider.start_urls() {
            if !valid_http_url(&url) {
                log::error!("[{}] invalid start url: {}", name, url);
                continue;
            }
            log::info!("[{}] {}", name, url);

            let page = match self.fetcher.get(&url).await {
                Ok(page) => page,
                Err(e) => {
                    // Fetch failures skip the page; extraction never sees them.
                    log::error!("[{}] {}: {}", name, url, e);
                    continue;
                }
            };
            self.stats.incr_pages_fetched();

            let records = spider.parse(page).await;
            self.stats.add_records_emitted(records.len() as u64);
            for record in &records {
                sink.write(record)?;
            }
        }
        sink.flush()?;

        log::info!(
            "{} pages fetched, {} records emitted in {}s",
            self.stats.pages_fetched(),
            self.stats.records_emitted(),
            self.stats.elapsed_time(),
        );
        Ok(())
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

fn valid_http_url(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(u) => u.scheme() == "http" || u.scheme() == "https",
        Err(_) => false,
    }
}
