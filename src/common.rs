use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use bio::io::fasta;
use tracing::info;

use crate::errors::*;

pub fn open_file_or_stdout(file: &Option<String>) -> Result<Box<dyn Write>> {
    if let Some(path) = file {
        let handle =
            File::create(path).chain_err(|| format!("could not create output file {:?}", path))?;
        let writer = io::BufWriter::new(handle);

        Ok(Box::new(writer))
    } else {
        Ok(Box::new(io::stdout()))
    }
}

/// Reads every record from a FASTA file, validating IDs and sequences
pub fn read_fasta<P: AsRef<Path> + Debug>(filename: &P) -> Result<Vec<fasta::Record>> {
    info!("Reading sequences from {:?}", filename);
    let reader = fasta::Reader::from_file(filename)
        .chain_err(|| format!("failed to open FASTA file {:?}", filename))?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.chain_err(|| "failed to read FASTA sequence")?;
        record.check().map_err(|v| ErrorKind::Msg(v.into()))?;

        records.push(record);
    }

    info!("  read {} sequences", records.len());

    Ok(records)
}

pub fn build_thread_pool(threads: usize) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")
}
