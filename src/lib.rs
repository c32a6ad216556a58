//! Core library for chat transcript analytics.
//!
//! Provides functionality for:
//! - Parsing an exported chat transcript into an ordered table of timestamped messages
//! - Computing the aggregates a dashboard renders: volume statistics, timelines,
//!   activity maps, sender rankings, word frequencies
//! - Rendering a word-frequency-weighted image from message bodies
//!
//! Parsing works on decoded text, never on files. A front end reads and decodes
//! the transcript file, hands the text to [`TranscriptParser`], and feeds the
//! resulting table into [`StatsEngine`] queries.

pub mod config;
pub mod parser;
pub mod report;
pub mod stats;
pub mod wordcloud;

/// Sentinel sender assigned to system events (joins, leaves, subject changes)
/// that carry no real sender.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Sentinel message body written by the exporter when an attachment is not
/// included as text.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

pub use parser::{DateOrder, Message, ParsedChat, TranscriptParser};
pub use report::AnalysisReport;
pub use stats::{StatsEngine, Stopwords, UserSelection};
