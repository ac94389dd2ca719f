//! `annotated` - check and canonicalize annotation tags from the command line.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "annotated")]
#[command(about = "Parse, canonicalize and lint unit, currency and other annotation tags")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
pub struct ParseFlags {
    /// Reject `a/b/c`; require `a/(b⋅c)`
    #[arg(long)]
    pub strict_division: bool,

    /// Maximum parenthesis nesting
    #[arg(long, default_value_t = annotated_units::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum number of unit literals in one payload
    #[arg(long, default_value_t = annotated_units::DEFAULT_MAX_FACTORS)]
    pub max_factors: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the expression tree of a unit payload
    Parse {
        /// Unit payload (the text after `unit:`)
        unit: String,
        #[command(flatten)]
        flags: ParseFlags,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical form of one or more unit payloads
    Canon {
        #[arg(required = true)]
        units: Vec<String>,
        #[command(flatten)]
        flags: ParseFlags,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Exit 0 if two unit payloads are equivalent, 1 otherwise
    Equiv {
        lhs: String,
        rhs: String,
        #[command(flatten)]
        flags: ParseFlags,
    },
    /// Check annotation tags, one per line
    Lint {
        /// File to read (stdin if not provided)
        input: Option<PathBuf>,
        /// JSON array of active ISO 4217 codes
        #[arg(long)]
        currencies: Option<PathBuf>,
        #[command(flatten)]
        flags: ParseFlags,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Error: failed to initialize logging: {e}");
        return ExitCode::from(2);
    }

    let result = match cli.command {
        Commands::Parse { unit, flags, json } => commands::parse(&unit, flags, json),
        Commands::Canon { units, flags, json } => commands::canon(&units, flags, json),
        Commands::Equiv { lhs, rhs, flags } => commands::equiv(&lhs, &rhs, flags),
        Commands::Lint {
            input,
            currencies,
            flags,
            json,
        } => commands::lint(input, currencies, flags, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
