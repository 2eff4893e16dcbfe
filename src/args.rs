use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use crate::errors::*;
use crate::specificity::Specificity;

#[derive(Debug)]
pub struct DigestArgs {
    pub fasta: String,
    pub output: Option<String>,
    pub specificity: Specificity,
    pub missed_cleavages: usize,
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub threads: usize,
}

#[derive(Debug)]
pub struct SitesArgs {
    pub fasta: String,
    pub output: Option<String>,
    pub specificity: Specificity,
    pub threads: usize,
}

#[derive(Debug)]
pub struct CutArgs {
    pub sequence: String,
    pub position: isize,
    pub specificity: Specificity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogArgs {
    pub verbosity: u64,
    pub quiet: bool,
}

#[derive(Debug)]
pub enum Args {
    Digest(DigestArgs),
    Sites(SitesArgs),
    Cut(CutArgs),
    Enzymes,
    None,
}

fn specificity_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("enzyme")
            .long("enzyme")
            .short("e")
            .takes_value(true)
            .help("Named specificity from the built-in table (default: Trypsin)."),
        Arg::with_name("pattern")
            .long("pattern")
            .short("p")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .help(
                "Custom positional pattern anchored at P4, e.g. '...[KR][^P]'; may be given \
                 multiple times, in which case all patterns must match. Overrides --enzyme.",
            ),
    ]
}

fn threads_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("threads")
        .long("threads")
        .takes_value(true)
        .allow_hyphen_values(true)
        .number_of_values(1)
        .default_value("0")
        .help("Number of threads used for computation (0 for automatic).")
}

fn digest_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("digest")
        .about("Digest protein sequences in FASTA format into peptides")
        .arg(
            Arg::with_name("fasta")
                .help("FASTA file containing one or more protein sequences.")
                .required(true),
        )
        .arg(Arg::with_name("output").help("Output table; defaults to STDOUT."))
        .args(&specificity_args())
        .arg(
            Arg::with_name("missed")
                .long("missed")
                .takes_value(true)
                .default_value("0")
                .help("Maximum number of missed cleavages per peptide."),
        )
        .arg(
            Arg::with_name("min-length")
                .long("min-length")
                .takes_value(true)
                .default_value("1")
                .help("Minimum peptide length."),
        )
        .arg(
            Arg::with_name("max-length")
                .long("max-length")
                .takes_value(true)
                .help("Maximum peptide length."),
        )
        .arg(threads_arg())
}

fn sites_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("sites")
        .about("List cleavable bonds in protein sequences in FASTA format")
        .arg(
            Arg::with_name("fasta")
                .help("FASTA file containing one or more protein sequences.")
                .required(true),
        )
        .arg(Arg::with_name("output").help("Output table; defaults to STDOUT."))
        .args(&specificity_args())
        .arg(threads_arg())
}

fn cut_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("cut")
        .about("Probe a single bond in a protein sequence")
        .arg(
            Arg::with_name("sequence")
                .help("Protein sequence.")
                .required(true),
        )
        .arg(
            Arg::with_name("position")
                .help("1-based position of the residue preceding the bond.")
                .allow_hyphen_values(true)
                .required(true),
        )
        .args(&specificity_args())
}

fn enzymes_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("enzymes").about("List built-in specificities")
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn parse_usize(matches: &ArgMatches, key: &str) -> Result<usize> {
    let s = get_str(matches, key)?;

    match s.parse::<usize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --{} ({:?}) value: {}", key, s, err).into()),
    }
}

fn parse_specificity(matches: &ArgMatches) -> Result<Specificity> {
    if let Some(patterns) = matches.values_of("pattern") {
        Specificity::patterns(patterns)
    } else {
        Specificity::named(matches.value_of("enzyme").unwrap_or("Trypsin"))
    }
}

fn parse_digest(matches: &ArgMatches) -> Result<DigestArgs> {
    let max_length = if matches.is_present("max-length") {
        Some(parse_usize(matches, "max-length")?)
    } else {
        None
    };

    Ok(DigestArgs {
        fasta: get_string(matches, "fasta")?,
        output: matches.value_of("output").map(|s| s.to_string()),
        specificity: parse_specificity(matches)?,
        missed_cleavages: parse_usize(matches, "missed")?,
        min_length: parse_usize(matches, "min-length")?,
        max_length,
        threads: parse_usize(matches, "threads")?,
    })
}

fn parse_cut(matches: &ArgMatches) -> Result<CutArgs> {
    let position = get_str(matches, "position")?;
    let position = match position.parse::<isize>() {
        Ok(v) => v,
        Err(err) => return Err(format!("Invalid position ({:?}): {}", position, err).into()),
    };

    Ok(CutArgs {
        sequence: get_string(matches, "sequence")?,
        position,
        specificity: parse_specificity(matches)?,
    })
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("cleavr")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Mikkel Schubert")
        .about("Predicts proteolytic cleavage sites in protein sequences")
        .global_setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .multiple(true)
                .global(true)
                .help("Increase logging verbosity; may be repeated."),
        )
        .arg(
            Arg::with_name("quiet")
                .long("quiet")
                .short("q")
                .global(true)
                .help("Disable logging."),
        )
        .subcommand(digest_command())
        .subcommand(sites_command())
        .subcommand(cut_command())
        .subcommand(enzymes_command())
}

fn parse_log_args(matches: &ArgMatches) -> LogArgs {
    let (_, sub_matches) = matches.subcommand();
    let sub_matches = sub_matches.unwrap_or(matches);

    LogArgs {
        verbosity: sub_matches.occurrences_of("verbose"),
        quiet: sub_matches.is_present("quiet"),
    }
}

pub fn parse_args_from<I, T>(argv: I) -> Result<(LogArgs, Args)>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = match app().get_matches_from_safe(argv) {
        Ok(matches) => matches,
        Err(err) if err.use_stderr() => return Err(err.message.into()),
        Err(err) => err.exit(),
    };

    let log_args = parse_log_args(&matches);
    let args = if let Some(matches) = matches.subcommand_matches("digest") {
        Args::Digest(parse_digest(matches)?)
    } else if let Some(matches) = matches.subcommand_matches("sites") {
        Args::Sites(SitesArgs {
            fasta: get_string(matches, "fasta")?,
            output: matches.value_of("output").map(|s| s.to_string()),
            specificity: parse_specificity(matches)?,
            threads: parse_usize(matches, "threads")?,
        })
    } else if let Some(matches) = matches.subcommand_matches("cut") {
        Args::Cut(parse_cut(matches)?)
    } else if matches.subcommand_matches("enzymes").is_some() {
        Args::Enzymes
    } else {
        eprintln!("{}", matches.usage());

        Args::None
    };

    Ok((log_args, args))
}

pub fn parse_args() -> Result<(LogArgs, Args)> {
    parse_args_from(std::env::args_os())
}
