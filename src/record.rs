use serde::{Deserialize, Serialize};

/// One scraped quote.
///
/// Produced once per quote block, in document order. `text` and `author` are
/// `None` when the block lacks the corresponding element; `tags` keeps the
/// document order of the tag anchors, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub text: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
}
