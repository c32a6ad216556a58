//! Command line front end for the chat-log analyzer.
//!
//! Reads an exported transcript, parses it into a record table, and prints
//! the analysis report for one sender or the whole chat. Optionally writes
//! the word-cloud image next to it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, info, warn};

use chatlog_analyzer::config::AnalyzerConfig;
use chatlog_analyzer::parser::TranscriptParser;
use chatlog_analyzer::report::AnalysisReport;
use chatlog_analyzer::stats::types::OVERALL;
use chatlog_analyzer::stats::{StatsEngine, Stopwords, UserSelection};

/// Command line analyzer for exported chat transcripts
#[derive(Parser, Debug)]
#[command(name = "chatlog-analyzer")]
#[command(about = "Parses an exported chat transcript and prints activity statistics")]
struct Cli {
    /// Path to the exported transcript text file
    transcript: PathBuf,

    /// Sender to analyze, or "Overall" for the whole chat
    #[arg(short, long, default_value = OVERALL)]
    user: String,

    /// Path to a TOML config file overriding the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a stopword file replacing the built-in list
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// List the senders found in the transcript and exit
    #[arg(long)]
    list_users: bool,

    /// Print the report as pretty JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write the word-cloud PNG to this path
    #[arg(long, value_name = "PATH")]
    wordcloud: Option<PathBuf>,
}

fn main() {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("chatlog_analyzer"), LevelFilter::Debug)
        .init();

    info!("Starting up");

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    let stopwords = if let Some(path) = &cli.stopwords {
        Stopwords::load(path)?
    } else if let Some(file) = &config.stats.stopword_file {
        Stopwords::load(Path::new(file))?
    } else {
        Stopwords::builtin()
    };

    let raw_text = fs::read_to_string(&cli.transcript).with_context(|| format!("Failed to read transcript {}", cli.transcript.display()))?;

    let parsed = TranscriptParser::with_date_order(config.parser.date_order).parse(&raw_text);
    info!("Parsed {} messages, skipped {} malformed entries", parsed.messages.len(), parsed.skipped);
    if parsed.messages.is_empty() {
        warn!("No messages found in {}", cli.transcript.display());
    }

    let engine = StatsEngine::with_limits(stopwords, config.stats.top_users, config.stats.top_words);

    if cli.list_users {
        println!("{}", OVERALL);
        for user in engine.participants(&parsed.messages) {
            println!("{}", user);
        }
        return Ok(());
    }

    let selection = UserSelection::from_name(&cli.user);
    if let UserSelection::User(name) = &selection {
        if !engine.participants(&parsed.messages).iter().any(|u| u == name) {
            warn!("Sender '{}' does not appear in the transcript, the report will be empty", name);
        }
    }

    if let Some(path) = &cli.wordcloud {
        let image = engine.create_wordcloud(&selection, &parsed.messages, &config.wordcloud);
        image.save(path).with_context(|| format!("Failed to write word cloud {}", path.display()))?;
        info!("Word cloud written to {}", path.display());
    }

    let report = AnalysisReport::build(&engine, &selection, &parsed.messages);
    if cli.json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
