mod config;
mod extract;
mod fetcher;
mod record;
mod runner;
mod sink;
mod spider;
mod stats;

// (Re) Exports
pub use config::Config;
pub use extract::Extractor;
pub use fetcher::{Fetch, FetchError, Fetcher, Page};
pub use record::QuoteRecord;
pub use runner::Runner;
pub use sink::{JsonLinesSink, Sink, SinkError};
pub use spider::{QuotesSpider, Spider};

/// Build a runner with the default config.
pub fn runner() -> Runner {
    Runner::new(Config::default())
}

/// Build a runner with a custom config.
pub fn runner_with_config(config: Config) -> Runner {
    Runner::new(config)
}
