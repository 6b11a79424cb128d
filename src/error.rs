//! Error types for pruning a VCF down to a list of variant IDs.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for vcfprune operations
pub type Result<T> = std::result::Result<T, PruneError>;

/// Error type for vcfprune operations
#[derive(Error, Debug)]
pub enum PruneError {
    /// An input (VCF or pruning list) could not be opened or read.
    #[error("cannot read '{path}': {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A requested variant ID has no data line in the source VCF.
    #[error("variant ID '{id}' not found in the source VCF")]
    MissingId { id: String },

    /// A data line without an ID column.
    #[error("malformed record at {path}:{line}: expected at least 3 tab-separated fields, found {fields}")]
    MalformedRecord {
        path: PathBuf,
        /// 1-based line number in the source
        line: usize,
        fields: usize,
    },

    /// A combination of arguments that cannot work together.
    #[error("invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },

    /// The output file could not be created or written.
    #[error("cannot write '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_id_message() {
        let error = PruneError::MissingId { id: "rs42".to_string() };
        let msg = format!("{error}");
        assert!(msg.contains("'rs42'"));
    }

    #[test]
    fn test_malformed_record_message() {
        let error = PruneError::MalformedRecord {
            path: PathBuf::from("in.vcf"),
            line: 7,
            fields: 2,
        };
        let msg = format!("{error}");
        assert!(msg.contains("in.vcf:7"));
        assert!(msg.contains("found 2"));
    }

    #[test]
    fn test_invalid_parameter_message() {
        let error = PruneError::InvalidParameter {
            parameter: "prune_list".to_string(),
            reason: "both inputs on stdin".to_string(),
        };
        let msg = format!("{error}");
        assert!(msg.contains("'prune_list'"));
        assert!(msg.contains("both inputs on stdin"));
    }

    #[test]
    fn test_input_not_found_keeps_source() {
        let error = PruneError::InputNotFound {
            path: PathBuf::from("nope.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(format!("{error}").contains("nope.txt"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
