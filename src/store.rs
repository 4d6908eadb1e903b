use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use tracing::warn;

use crate::parser::text::normalize_link;

/// Set of dedup keys already notified, persisted as a JSON string array.
#[derive(Debug)]
pub struct NotifiedStore {
    path: PathBuf,
    keys: HashSet<String>,
    added: usize,
}

impl NotifiedStore {
    /// Load the store. A missing or unparsable file yields an empty set;
    /// loaded keys are normalized the same way fresh keys are.
    pub fn load(path: &Path) -> Self {
        let keys = match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => list.iter().map(|key| normalize_link(key)).collect(),
                Err(e) => {
                    warn!("Ignoring unparsable store {}: {}", path.display(), e);
                    HashSet::new()
                }
            },
            Err(_) => HashSet::new(),
        };
        NotifiedStore {
            path: path.to_path_buf(),
            keys,
            added: 0,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn insert(&mut self, key: String) {
        if self.keys.insert(key) {
            self.added += 1;
        }
    }

    /// Keys added since load.
    pub fn added(&self) -> usize {
        self.added
    }

    /// Write the set back as a sorted JSON array, but only when this run
    /// added keys.
    pub fn save_if_changed(&self) -> Result<()> {
        if self.added == 0 {
            return Ok(());
        }
        let sorted: Vec<&String> = self.keys.iter().sorted().collect();
        let json = serde_json::to_string_pretty(&sorted)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
