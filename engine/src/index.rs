use crate::artifact::Artifact;
use anyhow::{bail, Result};
use std::collections::HashMap;

pub type DocId = u32;
pub type Weight = u32;

/// One entry of a word's posting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: DocId,
    /// Non-negative relevance of the word within the document.
    pub weight: Weight,
}

/// In-memory search index: word -> posting list, doc id -> article fragment.
/// Immutable once constructed; shared behind an `Arc` for the session lifetime.
#[derive(Debug, Default)]
pub struct Index {
    postings: HashMap<String, Vec<Posting>>,
    articles: HashMap<DocId, String>,
}

impl Index {
    /// Build an index from its wire form. Fails if any posting references a
    /// document id with no article entry, so a successful load always yields
    /// a fully consistent index.
    pub fn from_artifact(artifact: Artifact) -> Result<Self> {
        let Artifact { words, articles } = artifact;
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::with_capacity(words.len());
        for (word, pairs) in words {
            let list: Vec<Posting> = pairs
                .into_iter()
                .map(|(doc_id, weight)| Posting { doc_id, weight })
                .collect();
            if let Some(p) = list.iter().find(|p| !articles.contains_key(&p.doc_id)) {
                bail!("posting list for {word:?} references unknown article {}", p.doc_id);
            }
            postings.insert(word, list);
        }
        Ok(Self { postings, articles })
    }

    /// Posting list for a word, if the word is indexed.
    pub fn postings(&self, word: &str) -> Option<&[Posting]> {
        self.postings.get(word).map(Vec::as_slice)
    }

    /// Rendered article fragment for a document id.
    pub fn article(&self, doc_id: DocId) -> Option<&str> {
        self.articles.get(&doc_id).map(String::as_str)
    }

    pub fn num_words(&self) -> usize {
        self.postings.len()
    }

    pub fn num_articles(&self) -> usize {
        self.articles.len()
    }
}
