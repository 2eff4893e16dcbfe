use bio::io::fasta;
use rayon::prelude::*;
use std::io::Write;
use tracing::info;

use crate::args::SitesArgs;
use crate::cache::DigestCache;
use crate::common::{build_thread_pool, open_file_or_stdout, read_fasta};
use crate::constants::WINDOW_P_SIDE;
use crate::digest::Digester;
use crate::errors::*;
use crate::progress;
use crate::window::PaddedSequence;

/// Formats the window of a bond as `P4P3P2P1|P1'P2'P3'P4'`
pub fn format_site(sequence: &PaddedSequence, bond: usize) -> String {
    let window = sequence.bond_window(bond);
    let (p_side, q_side) = window.split_at(WINDOW_P_SIDE.min(window.len()));

    format!(
        "{}|{}",
        String::from_utf8_lossy(p_side),
        String::from_utf8_lossy(q_side)
    )
}

pub fn write_sites(
    out: &mut dyn Write,
    records: &[fasta::Record],
    sites: &[Vec<usize>],
) -> Result<()> {
    writeln!(out, "Record\tBond\tSite").chain_err(|| "failed to write output header")?;

    for (record, sites) in records.iter().zip(sites) {
        let sequence = PaddedSequence::new(record.seq());

        for &bond in sites {
            writeln!(
                out,
                "{}\t{}\t{}",
                record.id(),
                bond,
                format_site(&sequence, bond)
            )
            .chain_err(|| "failed to write output row")?;
        }
    }

    out.flush().chain_err(|| "failed to flush output")
}

pub fn main(args: &SitesArgs, show_progress: bool) -> Result<()> {
    build_thread_pool(args.threads)?;

    info!("Finding cleavage sites in {:?} using {}", args.fasta, args.specificity);
    let records = read_fasta(&args.fasta)?;
    let digester = Digester::new(args.specificity.clone()).with_cache(DigestCache::default());

    let progress = progress::with_prefix(records.len(), "Scanning: ", show_progress);
    let sites: Vec<Vec<usize>> = records
        .par_iter()
        .map(|record| {
            let sites = digester.cleavage_sites(record.seq());

            progress.inc(1);
            sites
        })
        .collect();
    progress.finish_and_clear();

    info!("  found {} sites", sites.iter().map(Vec::len).sum::<usize>());

    let mut out = open_file_or_stdout(&args.output)?;
    write_sites(&mut out, &records, &sites)
}
