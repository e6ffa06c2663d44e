use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use apriori::{io::read_transactions, report, MiningConfig, Result, RuleSearch};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Search {
    /// Consequents drawn from previously found frequent itemsets
    Pool,
    /// Every antecedent/consequent split
    Exhaustive,
}

impl From<Search> for RuleSearch {
    fn from(search: Search) -> Self {
        match search {
            Search::Pool => RuleSearch::ConsequentPool,
            Search::Exhaustive => RuleSearch::Exhaustive,
        }
    }
}

/// Mine frequent itemsets and association rules from a delimited file.
#[derive(Debug, Parser)]
#[command(name = "apriori", version)]
struct Args {
    /// One transaction per line
    path: PathBuf,

    #[arg(short = 's', long, default_value_t = 0.23)]
    min_support: f64,

    #[arg(short = 'c', long, default_value_t = 0.7)]
    min_confidence: f64,

    /// Largest itemset size; defaults to the width of the first transaction
    #[arg(short = 'k', long)]
    max_len: Option<usize>,

    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    #[arg(long, value_enum, default_value_t = Search::Pool)]
    search: Search,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> MiningConfig {
        MiningConfig {
            min_support: self.min_support,
            min_confidence: self.min_confidence,
            max_len: self.max_len,
            search: self.search.into(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let transactions = read_transactions(&args.path, args.delimiter)?;
    let mined = apriori::apriori(&transactions, &config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.format {
        Format::Text => report::write_text(&mut out, &mined),
        Format::Json => report::write_json(&mut out, &mined),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let start = Instant::now();
    let outcome = run(&args);
    info!(
        "Processing time is {:.3} seconds",
        start.elapsed().as_secs_f64()
    );

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
