use scraper::{ElementRef, Html, Node, Selector};

use crate::record::QuoteRecord;

/// Pure extractor for quote blocks.
///
/// Holds the compiled selectors; `extract` walks a parsed document and yields
/// one `QuoteRecord` per `div.quote`, in document order. No state is kept
/// across calls, so extracting the same document twice gives identical
/// results.
pub struct Extractor {
    quote: Selector,
    text: Selector,
    author: Selector,
    tag: Selector,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            quote: Selector::parse("div.quote").unwrap(),
            text: Selector::parse("span.text").unwrap(),
            author: Selector::parse("small.author").unwrap(),
            tag: Selector::parse("div.tags > a.tag").unwrap(),
        }
    }

    /// Lazily yield one record per quote block, in document order.
    ///
    /// Malformed or non-HTML input parses to a best-effort tree with no
    /// matching blocks, so it yields nothing rather than failing.
    pub fn extract<'a>(
        &'a self,
        document: &'a Html,
    ) -> impl Iterator<Item = QuoteRecord> + 'a {
        document
            .select(&self.quote)
            .map(move |block| self.build_record(block))
    }

    fn build_record(&self, block: ElementRef) -> QuoteRecord {
        // A matching element without a direct text node falls through to the
        // next match, so the first text node over all matches wins.
        let text = block.select(&self.text).find_map(first_text_node);
        let author = block.select(&self.author).find_map(first_text_node);
        let mut tags = vec![];
        for anchor in block.select(&self.tag) {
            // An anchor with no text node contributes nothing.
            tags.extend(first_text_node(anchor));
        }
        QuoteRecord { text, author, tags }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

// First direct child text node only, matching an xpath `text()` step. Nested
// markup inside the element is not flattened into the result.
fn first_text_node(element: ElementRef) -> Option<String> {
    element.children().find_map(|node| match node.value() {
        Node::Text(text) => Some(text.to_string()),
        _ => None,
    })
}
