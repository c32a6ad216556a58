//! Report assembly and export.
//!
//! Bundles every engine query for one selection into a single record that can
//! be exported as plain text or pretty-printed JSON. The text layout follows
//! the dashboard section order so the two views stay comparable.

use std::fmt::Write as FmtWrite;

use serde::Serialize;

use crate::parser::Message;
use crate::stats::{ActivityHeatmap, BusyUsers, ChatStats, DailyCount, MonthCount, MonthlyCount, StatsEngine, UserSelection, WeekdayCount, WordCount};

/// Every aggregate for one selection, computed in a single pass.
///
/// `busy_users` is only present for the overall selection; the ranking is a
/// whole-table comparison and means nothing for a single sender.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub selection: String,
    pub stats: ChatStats,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: Vec<WeekdayCount>,
    pub month_activity: Vec<MonthCount>,
    pub heatmap: ActivityHeatmap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub common_words: Vec<WordCount>,
}

impl AnalysisReport {
    /// Run every query for the selection and collect the results.
    pub fn build(engine: &StatsEngine, selection: &UserSelection, messages: &[Message]) -> Self {
        let busy_users = match selection {
            UserSelection::Overall => Some(engine.most_busy_users(messages)),
            UserSelection::User(_) => None,
        };

        AnalysisReport {
            selection: selection.label().to_string(),
            stats: engine.fetch_stats(selection, messages),
            monthly_timeline: engine.monthly_timeline(selection, messages),
            daily_timeline: engine.daily_timeline(selection, messages),
            week_activity: engine.week_activity_map(selection, messages),
            month_activity: engine.month_activity_map(selection, messages),
            heatmap: engine.activity_heatmap(selection, messages),
            busy_users,
            common_words: engine.most_common_words(selection, messages),
        }
    }

    /// Export as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Export as plain text, one section per dashboard panel.
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "Analysis for {}", self.selection);
        let _ = writeln!(output);

        let _ = writeln!(output, "Top Statistics");
        let _ = writeln!(output, "  Messages:     {}", self.stats.messages);
        let _ = writeln!(output, "  Words:        {}", self.stats.words);
        let _ = writeln!(output, "  Media shared: {}", self.stats.media);
        let _ = writeln!(output, "  Links shared: {}", self.stats.links);
        let _ = writeln!(output);

        let _ = writeln!(output, "Monthly Timeline");
        for month in &self.monthly_timeline {
            let _ = writeln!(output, "  {}: {}", month.label, month.messages);
        }
        let _ = writeln!(output);

        let _ = writeln!(output, "Daily Timeline");
        for day in &self.daily_timeline {
            let _ = writeln!(output, "  {}: {}", day.date, day.messages);
        }
        let _ = writeln!(output);

        let _ = writeln!(output, "Activity Map");
        if let Some(day) = busiest(&self.week_activity, |d: &WeekdayCount| d.messages) {
            let _ = writeln!(output, "  Most busy day:   {} ({} messages)", day.day_name, day.messages);
        }
        if let Some(month) = busiest(&self.month_activity, |m: &MonthCount| m.messages) {
            let _ = writeln!(output, "  Most busy month: {} ({} messages)", month.month, month.messages);
        }
        for day in &self.week_activity {
            let _ = writeln!(output, "  {:<9} {}", day.day_name, day.messages);
        }
        let _ = writeln!(output);

        let _ = writeln!(output, "Weekly Activity Map");
        for (day, row) in ActivityHeatmap::day_names().iter().zip(self.heatmap.counts.iter()) {
            let cells: Vec<String> = row.iter().map(|count| count.to_string()).collect();
            let _ = writeln!(output, "  {:<9} {}", day, cells.join(" "));
        }
        let _ = writeln!(output);

        if let Some(ref busy) = self.busy_users {
            let _ = writeln!(output, "Most Busy Users");
            for user in &busy.top {
                let _ = writeln!(output, "  {}: {}", user.user, user.messages);
            }
            let _ = writeln!(output, "  Share of all messages:");
            for share in &busy.shares {
                let _ = writeln!(output, "    {}: {:.2}%", share.user, share.percent);
            }
            let _ = writeln!(output);
        }

        let _ = writeln!(output, "Most Common Words");
        for word in &self.common_words {
            let _ = writeln!(output, "  {}: {}", word.word, word.count);
        }

        output
    }
}

/// First entry with the highest count, so tied reports stay stable.
fn busiest<T>(rows: &[T], count: fn(&T) -> usize) -> Option<&T> {
    let mut best: Option<&T> = None;
    for row in rows {
        match best {
            Some(current) if count(current) >= count(row) => {}
            _ => best = Some(row),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TranscriptParser;
    use crate::stats::Stopwords;

    const SAMPLE: &str = concat!(
        "01/01/24, 10:00 am - Alice: hello hello world\n",
        "01/01/24, 10:05 am - Bob: <Media omitted>\n",
        "02/01/24, 9:15 pm - Alice: see https://example.com\n",
    );

    fn report_for(selection: UserSelection) -> AnalysisReport {
        let parsed = TranscriptParser::new().parse(SAMPLE);
        let engine = StatsEngine::new(Stopwords::from_source("the\n"));
        AnalysisReport::build(&engine, &selection, &parsed.messages)
    }

    #[test]
    fn test_text_report_has_all_sections() {
        let text = report_for(UserSelection::Overall).to_text();

        assert!(text.contains("Analysis for Overall"));
        assert!(text.contains("Top Statistics"));
        assert!(text.contains("Messages:     3"));
        assert!(text.contains("Media shared: 1"));
        assert!(text.contains("Links shared: 1"));
        assert!(text.contains("Monthly Timeline"));
        assert!(text.contains("January-2024: 3"));
        assert!(text.contains("Daily Timeline"));
        assert!(text.contains("2024-01-01: 2"));
        assert!(text.contains("Most busy day:   Monday (2 messages)"));
        assert!(text.contains("Most busy month: January (3 messages)"));
        assert!(text.contains("Weekly Activity Map"));
        assert!(text.contains("Most Busy Users"));
        assert!(text.contains("Alice: 2"));
        assert!(text.contains("Most Common Words"));
        assert!(text.contains("hello: 2"));
    }

    #[test]
    fn test_single_user_report_omits_busy_users() {
        let report = report_for(UserSelection::User("Alice".to_string()));

        assert!(report.busy_users.is_none());
        assert!(!report.to_text().contains("Most Busy Users"));
        assert!(report.to_text().contains("Analysis for Alice"));
    }

    #[test]
    fn test_json_report_parses_back() {
        let json = report_for(UserSelection::Overall).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["selection"], "Overall");
        assert_eq!(value["stats"]["messages"], 3);
        assert!(value["busy_users"].is_object());
    }

    #[test]
    fn test_json_report_drops_absent_busy_users() {
        let json = report_for(UserSelection::User("Alice".to_string())).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("busy_users").is_none());
    }

    #[test]
    fn test_empty_table_report_renders() {
        let engine = StatsEngine::new(Stopwords::from_source("the\n"));
        let report = AnalysisReport::build(&engine, &UserSelection::Overall, &[]);
        let text = report.to_text();

        assert!(text.contains("Messages:     0"));
        assert!(text.contains("Most Common Words"));
    }
}
