use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::data::loader;
use crate::error::Result;
use crate::state::reading::Dataset;

/// Identifies the exact bytes a dataset was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSignature {
    len: u64,
    hash: u64,
}

impl ContentSignature {
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        Self { len: bytes.len() as u64, hash: hasher.finish() }
    }
}

struct CachedDataset {
    signature: ContentSignature,
    dataset: Arc<Dataset>,
}

/// Read-through cache of parsed datasets keyed by path and content signature.
///
/// The file is read on every lookup; only parsing is skipped when the bytes are
/// unchanged, so a cached dataset is never stale.
pub struct DatasetCache {
    enabled: bool,
    entries: HashMap<PathBuf, CachedDataset>,
}

impl DatasetCache {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, entries: HashMap::new() }
    }

    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<Dataset>> {
        let bytes = match loader::read_file(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.entries.remove(path);
                return Err(e);
            }
        };
        let signature = ContentSignature::of(&bytes);

        if let Some(entry) = self.entries.get(path) {
            if entry.signature == signature {
                tracing::debug!("Dataset cache hit for {:?}", path);
                return Ok(Arc::clone(&entry.dataset));
            }
        }

        tracing::debug!("Dataset cache miss for {:?}", path);
        let dataset = Arc::new(loader::parse_readings(bytes.as_slice())?);
        if self.enabled {
            self.entries.insert(
                path.to_path_buf(),
                CachedDataset { signature, dataset: Arc::clone(&dataset) },
            );
        }
        Ok(dataset)
    }

    /// Drop the cached dataset for `path` so the next lookup re-parses it.
    pub fn invalidate(&mut self, path: &Path) {
        self.entries.remove(path);
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(true)
    }
}
