//! Persisted favorites set.
//!
//! A set of store identifiers serialized as a JSON array. The file is read
//! once at startup and rewritten in full on every toggle; the in-memory set
//! is updated first, then persisted with a temp-file rename so a crash
//! never leaves a half-written file.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Process-wide set of favorited store ids.
#[derive(Debug)]
pub struct Favorites {
    path: PathBuf,
    ids: BTreeSet<u64>,
}

impl Favorites {
    /// Load the persisted set from `path`.
    ///
    /// An absent or corrupted file initializes to the empty set rather
    /// than failing.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<Vec<u64>>(&bytes) {
                Ok(list) => list.into_iter().collect(),
                Err(e) => {
                    log::debug!(
                        "ignoring corrupted favorites file {}: {}",
                        path.display(),
                        e
                    );
                    BTreeSet::new()
                }
            },
            Err(_) => BTreeSet::new(),
        };

        Self { path, ids }
    }

    /// Whether a store is favorited.
    pub fn is_favorite(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// All favorited ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }

    /// Number of favorited stores.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no store is favorited.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership and persist the full set synchronously.
    /// Returns the new membership state.
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        let now_favorite = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };
        self.persist()?;
        Ok(now_favorite)
    }

    /// Write the set atomically: temp file, then rename.
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let ids: Vec<u64> = self.ids.iter().copied().collect();
        let bytes = serde_json::to_vec(&ids)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
