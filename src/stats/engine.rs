//! Statistics engine computing the dashboard aggregates.
//!
//! Every query applies the caller's selection filter first, then reduces the
//! remaining rows. Queries are pure reads over the table: an empty table, or
//! a selection matching nothing, produces zero-valued output rather than an
//! error, since a front end calls every query once a selection is made.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use image::RgbaImage;
use regex::Regex;

use crate::parser::Message;
use crate::parser::types::{WEEKDAY_NAMES, month_name};
use crate::wordcloud::{self, WordcloudConfig};
use crate::{GROUP_NOTIFICATION, MEDIA_OMITTED};

use super::stopwords::Stopwords;
use super::types::{
    ActivityHeatmap, BusyUsers, ChatStats, DailyCount, MonthCount, MonthlyCount, UserCount, UserSelection, UserShare, WeekdayCount, WordCount,
};
use super::words;

/// Default number of ranked senders in the busy-users output.
pub(crate) const DEFAULT_TOP_USERS: usize = 5;
/// Default number of entries in the common-words output.
pub(crate) const DEFAULT_TOP_WORDS: usize = 20;

/// Matches URL occurrences inside message bodies.
fn build_url_regex() -> Regex {
    Regex::new(r#"(?i)(?:https?://|www\.)[^\s<>"']+"#).unwrap()
}

/// Computes the aggregates a dashboard renders from a parsed record table.
///
/// Constructed with its stopword list and result-size limits; holds no other
/// state, and no query mutates it.
pub struct StatsEngine {
    stopwords: Stopwords,
    url_pattern: Regex,
    top_users: usize,
    top_words: usize,
}

impl StatsEngine {
    /// Engine with the default result-size limits.
    pub fn new(stopwords: Stopwords) -> Self {
        Self::with_limits(stopwords, DEFAULT_TOP_USERS, DEFAULT_TOP_WORDS)
    }

    /// Engine with explicit result-size limits.
    pub fn with_limits(stopwords: Stopwords, top_users: usize, top_words: usize) -> Self {
        Self {
            stopwords,
            url_pattern: build_url_regex(),
            top_users,
            top_words,
        }
    }

    /// Headline counters for a selection.
    ///
    /// # Returns
    ///
    /// Row count, whitespace-token count over all bodies, media-placeholder
    /// count, and URL occurrence count (a single body may contribute several).
    pub fn fetch_stats(&self, selection: &UserSelection, messages: &[Message]) -> ChatStats {
        let mut stats = ChatStats::default();

        for message in self.filtered(selection, messages) {
            stats.messages += 1;
            stats.words += message.message.split_whitespace().count();
            if message.message == MEDIA_OMITTED {
                stats.media += 1;
            }
            stats.links += self.url_pattern.find_iter(&message.message).count();
        }

        stats
    }

    /// Message volume grouped by (year, month), in chronological order.
    pub fn monthly_timeline(&self, selection: &UserSelection, messages: &[Message]) -> Vec<MonthlyCount> {
        let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
        for message in self.filtered(selection, messages) {
            *counts.entry((message.year, message.month_num)).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|((year, month_num), count)| {
                let month = month_name(month_num);
                MonthlyCount {
                    year,
                    month_num,
                    month,
                    label: format!("{}-{}", month, year),
                    messages: count,
                }
            })
            .collect()
    }

    /// Message volume grouped by calendar date, in chronological order.
    pub fn daily_timeline(&self, selection: &UserSelection, messages: &[Message]) -> Vec<DailyCount> {
        let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for message in self.filtered(selection, messages) {
            *counts.entry(message.date).or_insert(0) += 1;
        }

        counts.into_iter().map(|(date, count)| DailyCount { date, messages: count }).collect()
    }

    /// Message volume per weekday. All seven rows are present even when
    /// zero, in calendar order Monday first.
    pub fn week_activity_map(&self, selection: &UserSelection, messages: &[Message]) -> Vec<WeekdayCount> {
        let mut counts = [0usize; 7];
        for message in self.filtered(selection, messages) {
            counts[message.timestamp.weekday().num_days_from_monday() as usize] += 1;
        }

        WEEKDAY_NAMES
            .iter()
            .copied()
            .zip(counts)
            .map(|(day_name, count)| WeekdayCount { day_name, messages: count })
            .collect()
    }

    /// Message volume per month name across all years combined. Only months
    /// with activity appear, in calendar order.
    pub fn month_activity_map(&self, selection: &UserSelection, messages: &[Message]) -> Vec<MonthCount> {
        let mut counts = [0usize; 12];
        for message in self.filtered(selection, messages) {
            counts[message.month_num as usize - 1] += 1;
        }

        counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(index, &count)| MonthCount {
                month: month_name(index as u32 + 1),
                messages: count,
            })
            .collect()
    }

    /// Weekday by hour-bucket matrix of message counts, zero-filled.
    pub fn activity_heatmap(&self, selection: &UserSelection, messages: &[Message]) -> ActivityHeatmap {
        let mut heatmap = ActivityHeatmap::new();
        for message in self.filtered(selection, messages) {
            let day = message.timestamp.weekday().num_days_from_monday() as usize;
            heatmap.counts[day][message.hour as usize] += 1;
        }

        heatmap
    }

    /// Rank senders by message volume over the whole table.
    ///
    /// The notification sentinel never appears in the output. `top` holds the
    /// configured number of leading senders; `shares` lists every real sender
    /// with its percentage of all table rows, rounded to two decimals. Ties
    /// keep first-encounter order.
    pub fn most_busy_users(&self, messages: &[Message]) -> BusyUsers {
        let total = messages.len();
        // (count, first-encounter rank) per sender
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

        for message in messages {
            if message.user == GROUP_NOTIFICATION {
                continue;
            }
            let rank = counts.len();
            let entry = counts.entry(message.user.as_str()).or_insert((0, rank));
            entry.0 += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> = counts.into_iter().map(|(user, (count, rank))| (user, count, rank)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        let top = ranked
            .iter()
            .take(self.top_users)
            .map(|(user, count, _)| UserCount {
                user: (*user).to_string(),
                messages: *count,
            })
            .collect();

        let shares = ranked
            .iter()
            .map(|(user, count, _)| UserShare {
                user: (*user).to_string(),
                percent: round_percent(*count as f64 / total as f64 * 100.0),
            })
            .collect();

        BusyUsers { top, shares }
    }

    /// Render the word-frequency-weighted image for a selection.
    pub fn create_wordcloud(&self, selection: &UserSelection, messages: &[Message], config: &WordcloudConfig) -> RgbaImage {
        let frequencies = self.word_frequencies(selection, messages);
        wordcloud::render(&frequencies, config)
    }

    /// Full word-frequency list backing the word cloud: notification rows,
    /// media placeholders, and stopwords excluded; tokens lowercased.
    pub fn word_frequencies(&self, selection: &UserSelection, messages: &[Message]) -> Vec<WordCount> {
        words::word_frequencies(selection, messages, &self.stopwords)
    }

    /// Leading words by count, with the same exclusions as the word cloud.
    pub fn most_common_words(&self, selection: &UserSelection, messages: &[Message]) -> Vec<WordCount> {
        let mut frequencies = self.word_frequencies(selection, messages);
        frequencies.truncate(self.top_words);
        frequencies
    }

    /// Sorted, deduplicated sender list, the notification sentinel excluded.
    pub fn participants(&self, messages: &[Message]) -> Vec<String> {
        let unique: HashSet<&str> = messages
            .iter()
            .map(|m| m.user.as_str())
            .filter(|user| *user != GROUP_NOTIFICATION)
            .collect();

        let mut participants: Vec<String> = unique.into_iter().map(str::to_string).collect();
        participants.sort();
        participants
    }

    /// The filter step every query starts with.
    fn filtered<'a>(&self, selection: &'a UserSelection, messages: &'a [Message]) -> impl Iterator<Item = &'a Message> {
        messages.iter().filter(move |message| selection.includes(&message.user))
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new(Stopwords::builtin())
    }
}

fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
