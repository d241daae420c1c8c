use gleaner::{JsonLinesSink, QuotesSpider};

#[tokio::main]
async fn main() {
    env_logger::init();

    let spider = QuotesSpider::new();
    let mut sink = JsonLinesSink::stdout();
    let mut runner = gleaner::runner();
    if let Err(e) = runner.run(&spider, &mut sink).await {
        log::error!("run failed: {}", e);
        std::process::exit(1);
    }

    let stats = runner.stats();
    eprintln!(
        "done: {} pages, {} quotes",
        stats.pages_fetched(),
        stats.records_emitted()
    );
}
