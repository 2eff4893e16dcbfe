use cleavr::{args, commands, errors, logging};

fn print_err(e: &errors::Error) {
    use error_chain::ChainedError;
    use std::io::Write;
    let stderr = &mut ::std::io::stderr();
    let errmsg = "Error writing to stderr";

    writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
}

fn inner_main() -> errors::Result<()> {
    let (log_args, args) = args::parse_args()?;
    logging::setup_logging(log_args)?;

    let show_progress = !log_args.quiet;
    match args {
        args::Args::Digest(args) => commands::digest::main(&args, show_progress),
        args::Args::Sites(args) => commands::sites::main(&args, show_progress),
        args::Args::Cut(args) => commands::cut::main(&args),
        args::Args::Enzymes => commands::enzymes::main(),
        args::Args::None => Ok(()),
    }
}

fn main() {
    if let Err(e) = inner_main() {
        print_err(&e);

        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}
