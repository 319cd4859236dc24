// knightword CLI
// Finds the longest corpus word traceable by knight moves on a grid

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use itertools::Itertools;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use knightword::corpus::{load_words, load_words_from_file};
use knightword::{find_longest_word_with, Grid, SearchOptions};

/// Built-in grid, used when no `--grid` file is given.
const DEFAULT_GRID: &str = "\
q w e r t n u i
o p a a d f g h
t k l z x c v b
n m r w f r t y
u i o p a s d f
g h j o l z x c
v b a m q w e r
t y u i o p a s
";

/// Built-in word list, used when no `--words` file is given.
const DEFAULT_WORDS: &str = "algol fortran simula";

/// Longest word on a grid, spelled by chess-knight moves
#[derive(Parser, Debug)]
#[command(name = "knightword")]
#[command(about = "Find the longest dictionary word traceable by knight moves on a letter grid", long_about = None)]
#[command(version)]
struct Args {
    /// Corpus file: lines of whitespace-separated words
    #[arg(short, long, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Grid file: one row per line, cells as letters with or without spaces
    #[arg(short, long, value_name = "FILE")]
    grid: Option<PathBuf>,

    /// Give up after this many milliseconds
    #[arg(short, long, value_name = "MS")]
    time_limit_ms: Option<u64>,

    /// Search starting cells in parallel (needs the `parallel` feature)
    #[arg(short, long)]
    parallel: bool,

    /// Print the route and search counters; repeat for debug logs
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let grid = match &args.grid {
        Some(path) => Grid::parse(&std::fs::read_to_string(path)?)?,
        None => Grid::parse(DEFAULT_GRID)?,
    };
    let words = match &args.words {
        Some(path) => load_words_from_file(path)?,
        None => load_words(DEFAULT_WORDS.as_bytes())?,
    };

    let mut options = SearchOptions::default().with_parallel(args.parallel);
    if let Some(ms) = args.time_limit_ms {
        options = options.with_time_limit(Duration::from_millis(ms));
    }

    if args.verbose > 0 {
        println!("Grid ({} x {}):", grid.rows(), grid.cols());
        print!("{grid}");
        println!("Words: {}", words.len());
    }

    let started = Instant::now();
    let report = find_longest_word_with(&grid.to_rows(), &words, &options)?;
    let elapsed = started.elapsed();

    if report.is_match() {
        println!("Longest word is: {}", report.word);
    } else {
        println!("No word can be traced on this grid.");
    }

    if args.verbose > 0 {
        if report.is_match() {
            println!("Route: {}", report.route.iter().join(" -> "));
        }
        println!(
            "Cells entered: {}, pruned: {}, words seen: {}, deepest path: {}",
            report.stats.entered, report.stats.pruned, report.stats.words_seen, report.stats.deepest
        );
    }
    println!("Execution time: {} ns", elapsed.as_nanos());

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 | 1 => "warn",
        2 => "knightword=debug",
        _ => "knightword=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
