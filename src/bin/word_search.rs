// Word Search CLI Tool
// Finds the most frequent stream words in a character grid

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_search::{Puzzle, RankedWord, MAX_RESULTS};

/// Word Search Tool - Rank words by how many grid rows and columns contain them
#[derive(Parser, Debug)]
#[command(name = "word-search")]
#[command(about = "Find the most repeated words from a word stream in a character grid", long_about = None)]
#[command(version)]
struct Args {
    /// Puzzle file (JSON with "grid" and "words"); the demo puzzle is used when omitted
    #[arg(short, long, value_name = "FILE")]
    puzzle: Option<PathBuf>,

    /// Word to search for, replacing the puzzle's word stream (repeatable)
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// Maximum number of results to display
    #[arg(short, long, default_value_t = MAX_RESULTS)]
    limit: usize,

    /// Show how many lines contain each word
    #[arg(short, long)]
    counts: bool,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut puzzle = match &args.puzzle {
        Some(path) => Puzzle::load(path)?,
        None => Puzzle::demo()?,
    };
    if !args.words.is_empty() {
        puzzle.words = args.words.clone();
    }

    let finder = puzzle.finder()?;

    if args.verbose {
        println!(
            "Grid {} with {} distinct lines, {} words in stream\n",
            finder.dimensions(),
            finder.lines().len(),
            puzzle.words.len()
        );
    }

    println!("Find the top {} most repeated words from the word stream.", args.limit);
    println!("---------------------");

    let mut ranked = finder.rank(&puzzle.words);
    ranked.truncate(args.limit);

    if ranked.is_empty() {
        println!("No words found.");
        return Ok(());
    }

    println!("Found words:");
    for entry in &ranked {
        println!("{}", format_entry(entry, args.counts));
    }

    Ok(())
}

/// Install the log subscriber, honouring RUST_LOG when set
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "word_search=debug"
    } else {
        "word_search=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Render one result line
fn format_entry(entry: &RankedWord, counts: bool) -> String {
    if counts {
        format!("- {} ({})", entry.word, entry.count)
    } else {
        format!("- {}", entry.word)
    }
}
