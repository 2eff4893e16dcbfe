use bio::io::fasta;
use rayon::prelude::*;
use std::io::Write;
use tracing::info;

use crate::args::DigestArgs;
use crate::cache::DigestCache;
use crate::common::{build_thread_pool, open_file_or_stdout, read_fasta};
use crate::digest::{Digester, Peptide};
use crate::errors::*;
use crate::progress;

fn accepts(args: &DigestArgs, peptide: &Peptide) -> bool {
    peptide.len() >= args.min_length && args.max_length.map_or(true, |max| peptide.len() <= max)
}

fn collect_peptides(
    args: &DigestArgs,
    digester: &Digester,
    records: &[fasta::Record],
    show_progress: bool,
) -> Vec<Vec<Peptide>> {
    let progress = progress::with_prefix(records.len(), "Digesting: ", show_progress);

    let peptides = records
        .par_iter()
        .map(|record| {
            let peptides: Vec<Peptide> = digester
                .peptides(record.seq(), args.missed_cleavages)
                .into_iter()
                .filter(|peptide| accepts(args, peptide))
                .collect();

            progress.inc(1);
            peptides
        })
        .collect();

    progress.finish_and_clear();

    peptides
}

pub fn write_peptides(
    out: &mut dyn Write,
    records: &[fasta::Record],
    peptides: &[Vec<Peptide>],
) -> Result<()> {
    writeln!(out, "Record\tStart\tEnd\tMissed\tSequence")
        .chain_err(|| "failed to write output header")?;

    for (record, peptides) in records.iter().zip(peptides) {
        for peptide in peptides {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                record.id(),
                peptide.start,
                peptide.end,
                peptide.missed_cleavages,
                String::from_utf8_lossy(&peptide.sequence),
            )
            .chain_err(|| "failed to write output row")?;
        }
    }

    out.flush().chain_err(|| "failed to flush output")
}

pub fn main(args: &DigestArgs, show_progress: bool) -> Result<()> {
    build_thread_pool(args.threads)?;

    info!("Digesting {:?} using {}", args.fasta, args.specificity);
    let records = read_fasta(&args.fasta)?;
    let digester = Digester::new(args.specificity.clone()).with_cache(DigestCache::default());

    let peptides = collect_peptides(args, &digester, &records, show_progress);
    info!(
        "  found {} peptides",
        peptides.iter().map(Vec::len).sum::<usize>()
    );

    let mut out = open_file_or_stdout(&args.output)?;
    write_peptides(&mut out, &records, &peptides)
}
