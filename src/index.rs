use rustc_hash::FxHashMap;
use std::{io::BufRead, path::Path};

use crate::error::{PruneError, Result};

/// Column of the variant ID in a VCF data line (`CHROM POS ID REF ALT ...`).
pub const ID_COLUMN: usize = 2;

/// Header lines of a VCF plus every data line keyed by its ID column.
/// Lines are kept as raw bytes so they can be written back byte for byte,
/// whatever their encoding.
#[derive(Debug, Default)]
pub struct VcfIndex {
    header: Vec<Vec<u8>>,
    records: FxHashMap<Vec<u8>, Vec<u8>>,
    /// data lines whose ID replaced an earlier line with the same ID
    duplicates: usize,
}

impl VcfIndex {
    /// Scan the VCF at `path` once, collecting the header and indexing data lines.
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = crate::io::open_input(path)?;
        Self::from_reader(reader, path)
    }

    /// Same as `from_path`, for an already open reader. `source` is only used in errors.
    pub fn from_reader<R: BufRead>(mut reader: R, source: &Path) -> Result<Self> {
        let mut index = VcfIndex::default();
        let mut buf = Vec::new();
        let mut lineno = 0;
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| PruneError::InputNotFound {
                    path: source.to_path_buf(),
                    source: e,
                })?;
            if n == 0 {
                break;
            }
            lineno += 1;
            let line = buf.trim_ascii_end();
            if line.is_empty() {
                continue;
            }
            if line[0] == b'#' {
                index.header.push(line.to_vec());
                continue;
            }
            let id = match line.split(|&b| b == b'\t').nth(ID_COLUMN) {
                Some(id) => id,
                None => {
                    return Err(PruneError::MalformedRecord {
                        path: source.to_path_buf(),
                        line: lineno,
                        fields: line.split(|&b| b == b'\t').count(),
                    })
                }
            };
            if index.records.insert(id.to_vec(), line.to_vec()).is_some() {
                log::debug!(
                    "ID {} seen again at line {}, keeping the later record",
                    String::from_utf8_lossy(id),
                    lineno
                );
                index.duplicates += 1;
            }
        }
        if index.duplicates > 0 {
            log::warn!(
                "{}: {} data lines reused an earlier ID; the last occurrence of each ID is kept",
                source.display(),
                index.duplicates
            );
        }
        Ok(index)
    }

    /// Header and meta lines in file order.
    pub fn header(&self) -> &[Vec<u8>] {
        &self.header
    }

    /// The full data line for `id`.
    pub fn get(&self, id: &str) -> Option<&[u8]> {
        self.records.get(id.as_bytes()).map(Vec::as_slice)
    }

    /// Number of distinct IDs indexed.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}
