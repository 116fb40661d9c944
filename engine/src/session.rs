use crate::artifact;
use crate::index::Index;
use crate::query::{self, SearchOutcome};
use crate::sink::RenderSink;
use anyhow::{anyhow, Result};
use parking_lot::{Condvar, Mutex};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Load callback producing a fully built index.
pub trait IndexSource: Send + Sync {
    fn load(&self) -> Result<Index>;
}

/// Loads the JSON index artifact from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl IndexSource for FileSource {
    fn load(&self) -> Result<Index> {
        let artifact = artifact::load_artifact(&self.path)?;
        Index::from_artifact(artifact)
    }
}

enum LoadState {
    Unloaded,
    Loading,
    Ready(Arc<Index>),
    Failed(String),
}

/// Lazy-once holder for the index.
///
/// The first caller runs the load; callers arriving while a load is in
/// flight block until it settles, so a burst of first queries triggers
/// exactly one fetch. A failed load is terminal for the session: every
/// later call reports the index unavailable without retrying.
struct IndexCell {
    state: Mutex<LoadState>,
    settled: Condvar,
}

impl IndexCell {
    fn new() -> Self {
        Self {
            state: Mutex::new(LoadState::Unloaded),
            settled: Condvar::new(),
        }
    }

    fn get_or_load(&self, source: &dyn IndexSource) -> Result<Arc<Index>> {
        {
            let mut state = self.state.lock();
            loop {
                match &*state {
                    LoadState::Ready(index) => return Ok(index.clone()),
                    LoadState::Failed(reason) => {
                        return Err(anyhow!("index unavailable: {reason}"))
                    }
                    LoadState::Unloaded => break,
                    LoadState::Loading => {}
                }
                self.settled.wait(&mut state);
            }
            *state = LoadState::Loading;
        }

        // Run the load without holding the lock; waiters park on the condvar.
        let started = Instant::now();
        let loaded = source.load();

        let mut state = self.state.lock();
        let result = match loaded {
            Ok(index) => {
                let index = Arc::new(index);
                tracing::info!(
                    words = index.num_words(),
                    articles = index.num_articles(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "search index loaded"
                );
                *state = LoadState::Ready(index.clone());
                Ok(index)
            }
            Err(err) => {
                tracing::error!(error = %err, "search index failed to load");
                *state = LoadState::Failed(err.to_string());
                Err(anyhow!("index unavailable: {err}"))
            }
        };
        self.settled.notify_all();
        result
    }
}

/// One search surface: owns the artifact source and the lazily loaded index.
pub struct SearchSession<S> {
    source: S,
    cell: IndexCell,
}

impl<S: IndexSource> SearchSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cell: IndexCell::new(),
        }
    }

    /// Shared index handle, loading it on first use.
    pub fn index(&self) -> Result<Arc<Index>> {
        self.cell.get_or_load(&self.source)
    }

    /// Run a query against the (lazily loaded) index.
    pub fn search(&self, query: &str) -> Result<SearchOutcome> {
        Ok(query::search(&self.index()?, query))
    }

    /// Run a query and render its outcome into the sink. A load failure
    /// propagates as an error so the hosting layer can disable search; it is
    /// never folded into the not-found rendering.
    pub fn dispatch(&self, query: &str, sink: &mut dyn RenderSink) -> Result<()> {
        let index = self.index()?;
        sink.update_title(query);
        match query::search(&index, query) {
            SearchOutcome::Found(ids) => {
                tracing::debug!(query, hits = ids.len(), "query matched");
                let articles: Vec<&str> =
                    ids.iter().filter_map(|id| index.article(*id)).collect();
                sink.results(query, &articles);
            }
            SearchOutcome::NotFound => {
                tracing::debug!(query, "query matched nothing");
                sink.not_found(query);
            }
        }
        Ok(())
    }
}
