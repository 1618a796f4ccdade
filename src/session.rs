//! A loaded index plus a small cache of recent query results.

use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::extractor::extract;
use crate::index::{load_index, IndexEntry};
use crate::indexer::build_index;

pub struct QuerySession {
    config: Config,
    index: Vec<IndexEntry>,
    cache: LruCache<String, Vec<String>>,
}

impl QuerySession {
    /// Builds the index if its file is absent, then loads it.
    pub fn open(config: Config) -> Result<Self> {
        if !config.index_file.exists() {
            info!(index = %config.index_file.display(), "index missing, building");
            build_index(&config)?;
        }
        let index = load_index(&config.index_file)?;
        Ok(Self::with_index(config, index))
    }

    pub fn with_index(config: Config, index: Vec<IndexEntry>) -> Self {
        let capacity = NonZeroUsize::new(config.search_cache_capacity).unwrap_or(NonZeroUsize::MIN);
        QuerySession {
            config,
            index,
            cache: LruCache::new(capacity),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> &[IndexEntry] {
        &self.index
    }

    /// Lines logged on `date`. Empty results are cached too.
    pub fn query(&mut self, date: &str) -> Result<Vec<String>> {
        if let Some(hit) = self.cache.get(date) {
            debug!(date, "cache hit");
            return Ok(hit.clone());
        }

        let lines = extract(
            &self.config.log_file,
            &self.index,
            date,
            self.config.buffer_capacity(),
        )?;
        self.cache.put(date.to_string(), lines.clone());
        Ok(lines)
    }

    pub fn is_cached(&self, date: &str) -> bool {
        self.cache.contains(date)
    }
}
