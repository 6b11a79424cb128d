use rust_htslib::bgzf;
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::{PruneError, Result};

/// `EitherWriter` wraps the two kinds of output we produce: plain text VCF,
/// or a BGZF-compressed VCF that tabix/bcftools can read.
pub enum EitherWriter {
    File(BufWriter<File>),
    Bgzf(BufWriter<bgzf::Writer>),
}

impl EitherWriter {
    /// Create the output file. BGZF is used when `bgzip` is set.
    pub fn create(path: &Path, bgzip: bool) -> Result<Self> {
        if bgzip {
            let wtr = bgzf::Writer::from_path(path).map_err(|e| PruneError::Output {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::Other, e),
            })?;
            Ok(EitherWriter::Bgzf(BufWriter::new(wtr)))
        } else {
            let file = File::create(path).map_err(|source| PruneError::Output {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(EitherWriter::File(BufWriter::new(file)))
        }
    }

    /// Write `line` followed by a newline.
    pub fn write_line(&mut self, line: &[u8]) -> std::io::Result<()> {
        let f: &mut dyn Write = match self {
            EitherWriter::File(ref mut f) => f,
            EitherWriter::Bgzf(ref mut f) => f,
        };
        f.write_all(line)?;
        f.write_all(b"\n")
    }

    /// Flush buffered data. For BGZF the underlying writer is dropped here,
    /// which writes the EOF block.
    pub fn finish(self) -> std::io::Result<()> {
        match self {
            EitherWriter::File(mut f) => f.flush(),
            EitherWriter::Bgzf(f) => {
                let mut inner = f.into_inner().map_err(|e| e.into_error())?;
                inner.flush()
            }
        }
    }
}

/// Inputs ending in `.gz` or `.bgz` are read through htslib's BGZF reader,
/// which also handles plain gzip.
pub fn is_compressed(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("gz") | Some("bgz")
    )
}

/// `-` and `stdin` read from standard input.
pub fn is_stdin(path: &Path) -> bool {
    matches!(path.to_str(), Some("-") | Some("stdin"))
}

/// Open a line-oriented input, transparently decompressing if needed.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let not_found = |source: std::io::Error| PruneError::InputNotFound {
        path: path.to_path_buf(),
        source,
    };
    if is_stdin(path) {
        // htslib sniffs the stream, so piped plain text and BGZF both work.
        let rdr = bgzf::Reader::from_stdin()
            .map_err(|e| not_found(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        return Ok(Box::new(BufReader::new(rdr)));
    }
    if is_compressed(path) {
        // htslib doesn't report a useful error for a missing file, check first.
        if !path.exists() {
            return Err(not_found(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file",
            )));
        }
        let rdr = bgzf::Reader::from_path(path)
            .map_err(|e| not_found(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        Ok(Box::new(BufReader::new(rdr)))
    } else {
        let file = File::open(path).map_err(not_found)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Output path for a prefix: `<prefix>.vcf`, or `<prefix>.vcf.gz` when compressed.
pub fn output_path(prefix: &str, bgzip: bool) -> PathBuf {
    if bgzip {
        PathBuf::from(format!("{}.vcf.gz", prefix))
    } else {
        PathBuf::from(format!("{}.vcf", prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("out/ld", false), PathBuf::from("out/ld.vcf"));
        assert_eq!(output_path("out/ld", true), PathBuf::from("out/ld.vcf.gz"));
    }

    #[test]
    fn test_is_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(is_stdin(Path::new("stdin")));
        assert!(!is_stdin(Path::new("./-.vcf")));
    }

    #[test]
    fn test_is_compressed() {
        assert!(is_compressed(Path::new("a.vcf.gz")));
        assert!(is_compressed(Path::new("a.vcf.bgz")));
        assert!(!is_compressed(Path::new("a.vcf")));
        assert!(!is_compressed(Path::new("prune.in")));
    }

    #[test]
    fn test_open_missing_input() {
        let dir = tempfile::TempDir::new().unwrap();
        for name in ["missing.vcf", "missing.vcf.gz"] {
            let path = dir.path().join(name);
            match open_input(&path) {
                Err(PruneError::InputNotFound { path: p, .. }) => assert_eq!(p, path),
                Err(e) => panic!("unexpected error: {e}"),
                Ok(_) => panic!("expected an error for {}", name),
            }
        }
    }

    #[test]
    fn test_bgzf_writer_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("x.vcf.gz");
        let mut wtr = EitherWriter::create(&path, true).unwrap();
        wtr.write_line(b"##fileformat=VCFv4.2").unwrap();
        wtr.write_line(b"1\t100\trs1\tA\tG").unwrap();
        wtr.finish().unwrap();

        let mut text = String::new();
        open_input(&path).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "##fileformat=VCFv4.2\n1\t100\trs1\tA\tG\n");
    }
}
