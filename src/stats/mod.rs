//! Aggregation layer over the parsed record table.
//!
//! This module contains the following components:
//!
//! - engine: the query engine computing timelines, activity maps, rankings,
//!   and word frequencies for a user selection
//! - stopwords: the exclusion list applied to word-level queries
//! - types: the selection enum and the aggregate result records
//! - words: shared tokenization behind the word-level queries

pub mod engine;
pub mod stopwords;
pub mod types;

mod words;

pub use engine::StatsEngine;
pub use stopwords::Stopwords;
pub use types::{
    ActivityHeatmap, BusyUsers, ChatStats, DailyCount, MonthCount, MonthlyCount, UserCount, UserSelection, UserShare, WeekdayCount, WordCount,
};
