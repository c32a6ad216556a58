//! Split raw transcript text into timestamped records.
//!
//! Entries are located by the stamp that opens each one rather than by line
//! breaks, so a message body containing newlines stays attached to the entry
//! that started it. Text ahead of the first stamp is ignored.

use regex::Regex;

use crate::GROUP_NOTIFICATION;

use super::timestamp::parse_stamp;
use super::types::{DateOrder, Message, ParsedChat};

/// Matches the stamp opening an entry, capturing it without the ` - ` separator.
fn build_anchor_regex() -> Regex {
    Regex::new(r"(\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}(?:\s?[AaPp][Mm])?)\s-\s").unwrap()
}

/// Converts exported transcript text into an ordered table of [`Message`] records.
pub struct TranscriptParser {
    anchor: Regex,
    date_order: DateOrder,
}

impl TranscriptParser {
    /// Parser for the default day-first export locale.
    pub fn new() -> Self {
        Self::with_date_order(DateOrder::DayFirst)
    }

    /// Parser for an explicit date component order.
    pub fn with_date_order(date_order: DateOrder) -> Self {
        Self {
            anchor: build_anchor_regex(),
            date_order,
        }
    }

    /// Parse the full text of an exported transcript.
    ///
    /// # Parameters
    ///
    /// * `raw_text` - Decoded transcript text, one stamped entry per message or system event
    ///
    /// # Returns
    ///
    /// The record table in original order plus the count of entries dropped for
    /// malformed stamps. Parsing never fails: unrecognized text yields an empty
    /// table, and parsing the same text twice yields identical results.
    ///
    /// Entries without a `": "` sender separator are system events and get the
    /// group-notification sentinel as their user.
    pub fn parse(&self, raw_text: &str) -> ParsedChat {
        let mut messages = Vec::new();
        let mut skipped = 0usize;

        // Each anchor marks the start of one entry; the entry body runs to the next anchor.
        let anchors: Vec<(usize, usize, &str)> = self
            .anchor
            .captures_iter(raw_text)
            .filter_map(|captures| {
                let whole = captures.get(0)?;
                let stamp = captures.get(1)?;
                Some((whole.start(), whole.end(), stamp.as_str()))
            })
            .collect();

        for (index, (_, body_start, stamp)) in anchors.iter().enumerate() {
            let body_end = anchors.get(index + 1).map(|(next_start, _, _)| *next_start).unwrap_or(raw_text.len());
            let entry = raw_text[*body_start..body_end].trim_end_matches(|c| c == '\r' || c == '\n');

            let timestamp = match parse_stamp(stamp, self.date_order) {
                Some(parsed) => parsed,
                None => {
                    log::debug!("Skipping entry with malformed stamp: {}", stamp);
                    skipped += 1;
                    continue;
                }
            };

            let (user, body) = match entry.split_once(": ") {
                Some((sender, body)) if !sender.is_empty() => (sender.to_string(), body.to_string()),
                _ => (GROUP_NOTIFICATION.to_string(), entry.to_string()),
            };

            messages.push(Message::new(timestamp, user, body));
        }

        ParsedChat { messages, skipped }
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}
