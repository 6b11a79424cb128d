use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use vcfprune::{MissingPolicy, SubsetOptions};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Subset a VCF to the variant IDs listed in a pruning list.
/// Header lines are kept and records are written in pruning-list order.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File with one variant ID per line (e.g. plink .prune.in)
    prune_list: PathBuf,

    /// Source VCF (plain or bgzipped; "-" for stdin)
    vcf: PathBuf,

    /// Output prefix; records are written to <OUTPUT_PREFIX>.vcf
    output_prefix: String,

    /// Warn about and skip IDs that are not in the VCF instead of failing
    #[arg(long)]
    skip_missing: bool,

    /// Write each requested ID at most once
    #[arg(long)]
    unique: bool,

    /// Write BGZF-compressed output to <OUTPUT_PREFIX>.vcf.gz
    #[arg(long)]
    bgzip: bool,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> SubsetOptions {
        SubsetOptions {
            keep_list: self.prune_list.clone(),
            vcf: self.vcf.clone(),
            output_prefix: self.output_prefix.clone(),
            missing: if self.skip_missing {
                MissingPolicy::Skip
            } else {
                MissingPolicy::Abort
            },
            unique: self.unique,
            bgzip: self.bgzip,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match vcfprune::subset::run(&cli.options()) {
        Ok(summary) => {
            log::info!(
                "wrote {} of {} requested records to {} ({} skipped)",
                summary.written,
                summary.requested,
                summary.output.display(),
                summary.skipped
            );
        }
        Err(e) => {
            // not routed through the logger so RUST_LOG=off can't hide it
            eprintln!("vcfprune: error: {}", e);
            std::process::exit(1);
        }
    }
}
