use crate::index::{DocId, Index};
use crate::tokenizer::{tokenize, unique_words};
use std::collections::{BTreeMap, HashMap};

/// Result of running one query against the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Matching document ids, best first.
    Found(Vec<DocId>),
    /// Nothing matched: empty query, an unindexed word, or an empty
    /// intersection. All three share one presentation.
    NotFound,
}

/// Intersect the posting lists of every query word (AND semantics),
/// accumulate per-document weights, and rank matches by descending total.
///
/// A query matches only documents present in the posting list of every
/// word; a single unindexed word makes the whole query a miss, with no
/// partial-match fallback.
pub fn search(index: &Index, query: &str) -> SearchOutcome {
    let tokens = tokenize(query);
    let words = unique_words(&tokens);
    if words.is_empty() {
        return SearchOutcome::NotFound;
    }

    // Every word must be indexed before any intersection work happens.
    let mut lists = Vec::with_capacity(words.len());
    for &word in &words {
        match index.postings(word) {
            Some(list) => lists.push(list),
            None => {
                tracing::debug!(word, "query word not indexed");
                return SearchOutcome::NotFound;
            }
        }
    }

    // The first word seeds the candidates; each later word rebuilds the
    // candidate list from its own postings, keeping only documents already
    // present and summing their weights. Candidate order after each round is
    // that word's posting-list order.
    let mut candidates: Vec<(DocId, u64)> = lists[0]
        .iter()
        .map(|p| (p.doc_id, u64::from(p.weight)))
        .collect();
    for list in &lists[1..] {
        let retained: HashMap<DocId, u64> = candidates.iter().copied().collect();
        candidates = list
            .iter()
            .filter_map(|p| {
                retained
                    .get(&p.doc_id)
                    .map(|acc| (p.doc_id, acc + u64::from(p.weight)))
            })
            .collect();
        if candidates.is_empty() {
            return SearchOutcome::NotFound;
        }
    }

    // Bucket ids by accumulated weight and emit buckets best-first. Ids
    // inside one bucket keep the order they were bucketed in.
    let mut buckets: BTreeMap<u64, Vec<DocId>> = BTreeMap::new();
    for (doc_id, weight) in candidates {
        buckets.entry(weight).or_default().push(doc_id);
    }
    let ranked: Vec<DocId> = buckets.into_iter().rev().flat_map(|(_, ids)| ids).collect();
    SearchOutcome::Found(ranked)
}
