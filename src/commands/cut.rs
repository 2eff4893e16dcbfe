use std::io::Write;

use crate::args::CutArgs;
use crate::digest::{Cleavage, Digester};
use crate::errors::*;

pub fn write_cleavage(out: &mut dyn Write, cleavage: &Cleavage) -> Result<()> {
    let result = match cleavage {
        Cleavage::Products {
            n_terminal,
            c_terminal,
        } => writeln!(
            out,
            "{}\t{}",
            String::from_utf8_lossy(n_terminal),
            String::from_utf8_lossy(c_terminal)
        ),
        Cleavage::Uncleaved => writeln!(out, "no cut"),
    };

    result.chain_err(|| "failed to write output")
}

pub fn main(args: &CutArgs) -> Result<()> {
    let digester = Digester::new(args.specificity.clone());
    let cleavage = digester
        .cut(args.sequence.as_bytes(), args.position)
        .chain_err(|| format!("failed to cut {:?}", args.sequence))?;

    write_cleavage(&mut ::std::io::stdout(), &cleavage)
}
