use rustc_hash::FxHashSet;
use std::{io::BufRead, path::Path};

use crate::error::{PruneError, Result};

/// Ordered variant IDs to keep, as read from a pruning list (e.g. plink's `.prune.in`).
/// The order here is the order of the output records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeepList(Vec<String>);

impl KeepList {
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = crate::io::open_input(path)?;
        Self::from_reader(reader, path)
    }

    /// One ID per line. Surrounding whitespace is trimmed and blank lines are skipped;
    /// repeated IDs are kept.
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self> {
        let mut ids = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| PruneError::InputNotFound {
                path: source.to_path_buf(),
                source: e,
            })?;
            let id = line.trim();
            if !id.is_empty() {
                ids.push(id.to_string());
            }
        }
        Ok(KeepList(ids))
    }

    /// Drop every repeat of an ID after its first occurrence.
    pub fn dedup(self) -> Self {
        let mut seen = FxHashSet::default();
        KeepList(self.0.into_iter().filter(|id| seen.insert(id.clone())).collect())
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeepList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeepList(iter.into_iter().map(Into::into).collect())
    }
}
