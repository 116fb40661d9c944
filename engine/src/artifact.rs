use crate::index::{DocId, Weight};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Wire form of the search index, a single JSON object.
///
/// Posting lists are serialized as ordered `[doc_id, weight]` pairs; article
/// fragments are pre-rendered HTML keyed by document id. The artifact is
/// produced by an external build step and consumed read-only here.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Artifact {
    pub words: HashMap<String, Vec<(DocId, Weight)>>,
    pub articles: HashMap<DocId, String>,
}

/// Read and parse an artifact file.
pub fn load_artifact<P: AsRef<Path>>(path: P) -> Result<Artifact> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("opening index artifact {}", path.display()))?;
    let artifact = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing index artifact {}", path.display()))?;
    Ok(artifact)
}
