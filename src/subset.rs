use std::path::PathBuf;

use crate::error::{PruneError, Result};
use crate::index::VcfIndex;
use crate::io::EitherWriter;
use crate::keep_list::KeepList;

/// What to do with a requested ID that has no record in the VCF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Fail the run before any output is written.
    #[default]
    Abort,
    /// Log a warning and leave the ID out.
    Skip,
}

/// Inputs and switches for a single run.
#[derive(Debug, Clone)]
pub struct SubsetOptions {
    pub keep_list: PathBuf,
    pub vcf: PathBuf,
    pub output_prefix: String,
    pub missing: MissingPolicy,
    /// write each requested ID at most once
    pub unique: bool,
    pub bgzip: bool,
}

/// Counters reported after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsetSummary {
    pub output: PathBuf,
    pub header_lines: usize,
    pub indexed_records: usize,
    pub duplicate_source_ids: usize,
    pub requested: usize,
    pub written: usize,
    pub skipped: usize,
}

/// Look up every ID of `keep` in `index`, in keep-list order.
/// Returns the matched lines and the number of IDs skipped under `MissingPolicy::Skip`.
pub fn resolve<'a>(
    index: &'a VcfIndex,
    keep: &KeepList,
    policy: MissingPolicy,
) -> Result<(Vec<&'a [u8]>, usize)> {
    let mut records = Vec::with_capacity(keep.len());
    let mut skipped = 0;
    for id in keep.ids() {
        match (index.get(id), policy) {
            (Some(line), _) => records.push(line),
            (None, MissingPolicy::Abort) => return Err(PruneError::MissingId { id: id.clone() }),
            (None, MissingPolicy::Skip) => {
                log::warn!("variant ID '{}' not found in the source VCF, skipping", id);
                skipped += 1;
            }
        }
    }
    Ok((records, skipped))
}

/// Write the header of `index` followed by `records`.
pub fn write_subset(
    writer: &mut EitherWriter,
    index: &VcfIndex,
    records: &[&[u8]],
) -> std::io::Result<()> {
    for line in index.header() {
        writer.write_line(line)?;
    }
    for line in records {
        writer.write_line(line)?;
    }
    Ok(())
}

/// Index the VCF, read the keep list, and write `<prefix>.vcf` (or `.vcf.gz`).
/// All lookups happen before the output file is created, so an aborted run leaves no output.
pub fn run(opts: &SubsetOptions) -> Result<SubsetSummary> {
    if crate::io::is_stdin(&opts.keep_list) && crate::io::is_stdin(&opts.vcf) {
        return Err(PruneError::InvalidParameter {
            parameter: "prune_list".to_string(),
            reason: "the pruning list and the VCF cannot both be read from stdin".to_string(),
        });
    }
    let index = VcfIndex::from_path(&opts.vcf)?;
    log::info!(
        "indexed {} records and {} header lines from {}",
        index.len(),
        index.header().len(),
        opts.vcf.display()
    );

    let mut keep = KeepList::from_path(&opts.keep_list)?;
    let requested = keep.len();
    if opts.unique {
        keep = keep.dedup();
        if keep.len() < requested {
            log::info!("dropped {} repeated IDs from the keep list", requested - keep.len());
        }
    }

    let (records, skipped) = resolve(&index, &keep, opts.missing)?;

    let output = crate::io::output_path(&opts.output_prefix, opts.bgzip);
    let out_err = |source: std::io::Error| PruneError::Output {
        path: output.clone(),
        source,
    };
    let mut writer = EitherWriter::create(&output, opts.bgzip)?;
    write_subset(&mut writer, &index, &records).map_err(out_err)?;
    writer.finish().map_err(out_err)?;

    Ok(SubsetSummary {
        header_lines: index.header().len(),
        indexed_records: index.len(),
        duplicate_source_ids: index.duplicates(),
        requested,
        written: records.len(),
        skipped,
        output,
    })
}
