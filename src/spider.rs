use async_trait::async_trait;
use scraper::Html;

use crate::extract::Extractor;
use crate::fetcher::Page;
use crate::record::QuoteRecord;

/// Spider interface
#[async_trait]
pub trait Spider {
    /// Get spider name.
    fn name(&self) -> String;

    /// Returns the urls the runner fetches, in order.
    fn start_urls(&self) -> Vec<String>;

    /// Parse one fetched page into records.
    async fn parse(&self, page: Page) -> Vec<QuoteRecord>;
}

/// Spider for the quotes.toscrape.com demo site.
pub struct QuotesSpider {
    extractor: Extractor,
}

impl QuotesSpider {
    pub fn new() -> Self {
        Self {
            extractor: Extractor::new(),
        }
    }
}

impl Default for QuotesSpider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Spider for QuotesSpider {
    fn name(&self) -> String {
        "toscrape-xpath".to_owned()
    }

    fn start_urls(&self) -> Vec<String> {
        vec![
            "http://quotes.toscrape.com/page/1".to_owned(),
            "http://quotes.toscrape.com/page/2".to_owned(),
        ]
    }

    async fn parse(&self, page: Page) -> Vec<QuoteRecord> {
        let document = Html::parse_document(&page.html);
        self.extractor.extract(&document).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parses_a_fetched_page() {
        let page = Page {
            url: "http://quotes.toscrape.com/page/1".to_owned(),
            html: r#"<div class="quote"><span class="text">“A”</span><small class="author">B</small><div class="tags"><a class="tag">x</a></div></div>"#.to_owned(),
        };
        let spider = QuotesSpider::new();
        let records = spider.parse(page).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author.as_deref(), Some("B"));
        assert_eq!(records[0].tags, vec!["x"]);
    }

    #[tokio::test]
    async fn page_with_no_quote_blocks_yields_nothing() {
        let page = Page {
            url: "http://quotes.toscrape.com/page/1".to_owned(),
            html: "<html><body><p>nothing here</p></body></html>".to_owned(),
        };
        let spider = QuotesSpider::new();
        assert!(spider.parse(page).await.is_empty());
    }

    #[test]
    fn fixed_seed_urls() {
        let spider = QuotesSpider::new();
        assert_eq!(spider.name(), "toscrape-xpath");
        assert_eq!(
            spider.start_urls(),
            vec![
                "http://quotes.toscrape.com/page/1",
                "http://quotes.toscrape.com/page/2",
            ]
        );
    }
}
