//! Print an arithmetic practice worksheet.
//!
//! With no arguments this prints 5 addition, 5 subtraction, 10 multiplication
//! and 10 division problems from a fresh random seed.

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use arith_drill_gen::{generate_worksheet, worksheet, ProblemKind, RetryLimit, WorksheetConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "arith-drill-gen")]
#[command(about = "Generate randomised arithmetic practice problems")]
struct Args {
    /// Seed for a reproducible worksheet.
    #[arg(long)]
    seed: Option<u64>,

    /// Distinct addition problems to request.
    #[arg(long, default_value_t = 5)]
    addition: usize,

    /// Distinct subtraction problems to request.
    #[arg(long, default_value_t = 5)]
    subtraction: usize,

    /// Distinct multiplication problems to request.
    #[arg(long, default_value_t = 10)]
    multiplication: usize,

    /// Distinct division problems to request.
    #[arg(long, default_value_t = 10)]
    division: usize,

    /// Only print these sections (`+`, `-`, `x`, `/` or the full name).
    #[arg(long, num_args = 1..)]
    only: Vec<ProblemKind>,

    /// Give up after this many attempts in any regeneration loop.
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Append an answer key (text output).
    #[arg(long)]
    answers: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log to stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> WorksheetConfig {
        let pick = |kind: ProblemKind, n: usize| {
            if self.only.is_empty() || self.only.contains(&kind) { n } else { 0 }
        };
        WorksheetConfig {
            addition: pick(ProblemKind::Addition, self.addition),
            subtraction: pick(ProblemKind::Subtraction, self.subtraction),
            multiplication: pick(ProblemKind::Multiplication, self.multiplication),
            division: pick(ProblemKind::Division, self.division),
            rng_seed: self.seed,
            retry_limit: self.max_attempts.map_or(RetryLimit::Unbounded, RetryLimit::Capped),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config();
    tracing::info!(?config, "generating worksheet");

    let sheet = generate_worksheet(&config).context("failed to generate worksheet")?;
    match args.format {
        Format::Text => print!("{}", worksheet::render_text(&sheet, args.answers)),
        Format::Json => println!("{}", worksheet::render_json(&sheet)?),
    }
    Ok(())
}
