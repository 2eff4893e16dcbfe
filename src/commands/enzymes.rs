use std::io::Write;

use crate::enzyme::Enzyme;
use crate::errors::*;

pub fn write_enzymes(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Name\tPatterns").chain_err(|| "failed to write output header")?;

    for enzyme in Enzyme::all() {
        writeln!(out, "{}\t{}", enzyme.name, enzyme.patterns.join(" & "))
            .chain_err(|| "failed to write output row")?;
    }

    Ok(())
}

pub fn main() -> Result<()> {
    write_enzymes(&mut ::std::io::stdout())
}
