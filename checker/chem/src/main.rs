use std::ffi::OsString;

use clap::Parser;
use log::LevelFilter;

use chem::check_formula;

#[derive(Debug, Parser)]
#[command(
    name = "chem",
    version,
    about = "Syntax checker for chemical-formula notation",
    long_about = "chem checks whether each argument is a syntactically well-formed\n\
        chemical formula. Grammar only: element symbols are one uppercase letter\n\
        plus up to two lowercase letters and are never checked against the\n\
        periodic table, counts are 2-9 or 10 and up with no leading zero, and\n\
        parenthesized groups must carry a count.\n\n\
        EXAMPLES:\n\
        \n  chem H2O '(NaCl)2'        Check two formulas\n\
        \n  chem '((OH2)3Pr)4'        Nested groups are fine\n\
        \n  chem --json '(H2O)'       Emit JSON reports instead of text lines"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit JSON reports (stats and parsed tree included) instead of text
    #[arg(long)]
    json: bool,

    /// Formulas to check
    #[arg(value_name = "FORMULA", required = true)]
    formulas: Vec<OsString>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

// Exit codes follow the checker's contract: 1 for an argument that is not
// decodable text, 2 for usage errors (clap's own convention), 3 for input
// the guard refuses (empty or whitespace-bearing). A merely ungrammatical
// formula is a normal result, not an error.
fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut reports = Vec::new();
    for raw in &cli.formulas {
        let formula = match raw.to_str() {
            Some(formula) => formula,
            None => {
                eprintln!("Error: argument {raw:?} is not valid text");
                return 1;
            }
        };

        let report = check_formula(Some(formula));
        if let Some(error) = &report.error {
            eprintln!("Error: {error}");
            return 3;
        }

        if !cli.json {
            println!(
                "{} : {}",
                report.formula,
                if report.valid { "valid" } else { "invalid" }
            );
            if let Some(diagnostic) = &report.diagnostic {
                log::info!("\n{diagnostic}");
            }
        }
        reports.push(report);
    }

    if cli.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: could not serialize reports: {err}");
                return 1;
            }
        }
    }

    0
}

fn main() {
    std::process::exit(run_cli());
}
