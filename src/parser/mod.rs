//! Transcript parser module.
//!
//! Provides functionality for:
//! - Locating entries in raw transcript text by their opening timestamp
//! - Parsing stamps in the fixed export formats (12/24-hour, 2/4-digit year)
//! - Building timestamped records with their calendar breakdown
//!
//! Parsing is a pure transform of text to a record table; malformed entries
//! are skipped and counted, never fatal.

pub mod timestamp;
pub mod transcript;
pub mod types;

pub use timestamp::parse_stamp;
pub use transcript::TranscriptParser;
pub use types::{DateOrder, Message, ParsedChat};
