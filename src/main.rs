use std::io::BufReader;

use clap::{Arg, ArgAction, Command};
use flate2::read::GzDecoder;

use wren_sat::{config::Config, context::Context, reports::Report, types::err::BuildError};

fn cli() -> Command {
    Command::new("wren_sat")
        .about("Determines whether a formula in DIMACS CNF form is satisfiable")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Trace propagations, decisions, conflicts, backjumps, reductions, and restarts (on stderr)."),
        )
        .arg(
            Arg::new("path")
                .required(false)
                .num_args(1)
                .help("A DIMACS CNF file to read, decompressed if the extension is .gz. Standard input is read when no file is given."),
        )
}

fn main() {
    let matches = cli().get_matches();

    match matches.get_flag("verbose") {
        true => env_logger::Builder::new()
            .filter_level(log::LevelFilter::Trace)
            .init(),
        false => env_logger::init(),
    }

    let mut the_context = Context::from_config(Config::default());

    let build = match matches.get_one::<String>("path") {
        Some(path) => read_path(&mut the_context, path),
        None => {
            let stdin = std::io::stdin();
            the_context.read_dimacs(stdin.lock())
        }
    };

    match build {
        Ok(()) => {}
        // A conflict among the unit clauses of the formula settles
        // things without a solve, as does an empty clause.
        Err(BuildError::Unsatisfiable) | Err(BuildError::EmptyClause) => {
            println!("{}", Report::Unsatisfiable);
            return;
        }
        Err(issue) => {
            eprintln!("c Error reading the formula: {issue:?}");
            std::process::exit(1);
        }
    }

    match the_context.solve() {
        Ok(report) => println!("{report}"),
        Err(issue) => {
            eprintln!("c Error during the solve: {issue:?}");
            std::process::exit(1);
        }
    }
}

fn read_path(context: &mut Context, path: &str) -> Result<(), BuildError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(issue) => {
            eprintln!("c Could not open {path}: {issue}");
            std::process::exit(1);
        }
    };
    match path.ends_with(".gz") {
        true => context.read_dimacs(BufReader::new(GzDecoder::new(file))),
        false => context.read_dimacs(BufReader::new(file)),
    }
}
