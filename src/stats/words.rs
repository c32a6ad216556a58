//! Tokenization and word counting shared by the word-frequency queries.

use std::collections::HashMap;

use crate::parser::Message;
use crate::{GROUP_NOTIFICATION, MEDIA_OMITTED};

use super::stopwords::Stopwords;
use super::types::{UserSelection, WordCount};

/// Whether a record's body participates in word-frequency queries.
/// System notifications and media placeholders carry no real words.
pub(crate) fn has_countable_words(message: &Message) -> bool {
    message.user != GROUP_NOTIFICATION && message.message != MEDIA_OMITTED
}

/// Count lowercased words over the selected rows, excluding stopwords.
///
/// Ordered by count descending; ties keep first-occurrence order, so repeated
/// runs over the same table yield the same sequence.
pub(crate) fn word_frequencies(selection: &UserSelection, messages: &[Message], stopwords: &Stopwords) -> Vec<WordCount> {
    // (count, first-occurrence rank) per word
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for message in messages.iter().filter(|m| selection.includes(&m.user) && has_countable_words(m)) {
        for token in message.message.split_whitespace() {
            let word = token.to_lowercase();
            if stopwords.contains(&word) {
                continue;
            }

            let rank = counts.len();
            let entry = counts.entry(word).or_insert((0, rank));
            entry.0 += 1;
        }
    }

    let mut frequencies: Vec<(String, usize, usize)> = counts.into_iter().map(|(word, (count, rank))| (word, count, rank)).collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    frequencies.into_iter().map(|(word, count, _)| WordCount { word, count }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(user: &str, body: &str) -> Message {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
        Message::new(timestamp, user.to_string(), body.to_string())
    }

    fn test_stopwords() -> Stopwords {
        Stopwords::from_source("the\nand\n")
    }

    #[test]
    fn test_excludes_sentinels_and_stopwords() {
        let messages = vec![
            record("Alice", "the quick fox"),
            record("Bob", MEDIA_OMITTED),
            record(GROUP_NOTIFICATION, "Bob joined"),
        ];

        let frequencies = word_frequencies(&UserSelection::Overall, &messages, &test_stopwords());
        let words: Vec<&str> = frequencies.iter().map(|f| f.word.as_str()).collect();

        assert_eq!(words, vec!["quick", "fox"]);
    }

    #[test]
    fn test_lowercases_tokens() {
        let messages = vec![record("Alice", "Hello hello HELLO")];

        let frequencies = word_frequencies(&UserSelection::Overall, &messages, &test_stopwords());

        assert_eq!(frequencies.len(), 1);
        assert_eq!(frequencies[0].word, "hello");
        assert_eq!(frequencies[0].count, 3);
    }

    #[test]
    fn test_counts_order_and_tie_break() {
        let messages = vec![record("Alice", "bravo alpha bravo"), record("Bob", "alpha charlie")];

        let frequencies = word_frequencies(&UserSelection::Overall, &messages, &test_stopwords());

        // bravo and alpha both appear twice; bravo was seen first.
        assert_eq!(frequencies[0].word, "bravo");
        assert_eq!(frequencies[0].count, 2);
        assert_eq!(frequencies[1].word, "alpha");
        assert_eq!(frequencies[1].count, 2);
        assert_eq!(frequencies[2].word, "charlie");
        assert_eq!(frequencies[2].count, 1);
    }

    #[test]
    fn test_selection_restricts_rows() {
        let messages = vec![record("Alice", "apples"), record("Bob", "oranges")];

        let selection = UserSelection::User("Bob".to_string());
        let frequencies = word_frequencies(&selection, &messages, &test_stopwords());

        assert_eq!(frequencies.len(), 1);
        assert_eq!(frequencies[0].word, "oranges");
    }

    #[test]
    fn test_empty_table_yields_empty_list() {
        let frequencies = word_frequencies(&UserSelection::Overall, &[], &test_stopwords());
        assert!(frequencies.is_empty());
    }
}
