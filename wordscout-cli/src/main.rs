use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::io::BufRead;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use wordscout::{
    find_compound_words, CliOverrides, FinderConfig, PartitionStrategy, Tally, WordIndex,
};

#[derive(Parser)]
#[command(
    name = "wordscout",
    author,
    version,
    about = "Finds every compound word in a word list and the longest one(s)"
)]
struct Cli {
    /// Path to the word list, one word per line ('-' reads stdin)
    word_list: PathBuf,

    /// Number of worker threads (default: CPU cores)
    #[arg(short = 'j', long = "threads")]
    threads: Option<NonZeroUsize>,

    /// How the word list is split across workers (range|step)
    #[arg(long, value_parser = PartitionStrategy::from_str)]
    strategy: Option<PartitionStrategy>,

    /// Upper bound on how long to wait for workers (e.g. 30s, 1h)
    #[arg(long, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Path to a config file (default: .wordscout.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = FinderConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?
        .merge_with_cli(CliOverrides {
            thread_count: cli.threads,
            strategy: cli.strategy,
            worker_timeout: cli.timeout,
            log_level: match cli.verbose {
                0 => None,
                1 => Some("debug".to_string()),
                _ => Some("trace".to_string()),
            },
        });

    init_tracing(&config.log_level);
    tracing::debug!("effective configuration: {:?}", config);

    let lines = read_word_list(&cli.word_list)?;
    let index = Arc::new(WordIndex::build(lines)?);

    let started = Instant::now();
    let tally = find_compound_words(index, &config)?;
    let elapsed = started.elapsed();

    match cli.format {
        OutputFormat::Text => print_text_report(&tally, elapsed),
        OutputFormat::Json => print_json_report(&tally, elapsed)?,
    }
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the word list into memory; the core library only ever sees lines.
fn read_word_list(path: &PathBuf) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        let stdin = std::io::stdin();
        return stdin
            .lock()
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .context("failed to read word list from stdin");
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list '{}'", path.display()))?;
    Ok(contents.lines().map(str::to_string).collect())
}

fn print_text_report(tally: &Tally, elapsed: Duration) {
    if tally.longest_words.is_empty() {
        println!(
            "{}",
            "No compound words were found, therefore there is no longest compound word".yellow()
        );
    } else {
        let mut words: Vec<&String> = tally.longest_words.iter().collect();
        words.sort();
        println!(
            "Longest compound word(s) ({} letters): {}",
            tally.longest_len(),
            words
                .iter()
                .map(|w| w.as_str().green().bold().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    println!(
        "Found a total of {} compound words in {}",
        tally.compound_word_count.to_string().cyan(),
        humantime::format_duration(Duration::from_millis(elapsed.as_millis() as u64))
    );
}

fn print_json_report(tally: &Tally, elapsed: Duration) -> Result<()> {
    let mut doc = serde_json::to_value(tally)?;
    doc["elapsed_ms"] = serde_json::json!(elapsed.as_millis() as u64);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
