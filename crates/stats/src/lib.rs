//! Aggregate statistics over the start tags of one document.

mod rank;

use html::tokenize;

pub use crate::rank::{FrequencyTable, RankedList, RankedTag, top_k, total_count};

/// The two numbers a report is made of.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSummary {
    pub total: usize,
    pub top: RankedList,
}

/// Tokenizes `input` and ranks its `k` most frequent start tags.
pub fn summarize(input: &str, k: usize) -> TagSummary {
    let stream = tokenize(input);
    let table = FrequencyTable::from_stream(&stream);
    let summary = TagSummary {
        total: total_count(&stream),
        top: table.top_k(k),
    };
    log::debug!(
        target: "stats",
        "{} start tags, {} distinct, kept top {} of {k} requested",
        summary.total,
        table.len(),
        summary.top.len()
    );
    summary
}
