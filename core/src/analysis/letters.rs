//! Dictionary-level statistics used by the analyzer screen and content
//! tooling: letter frequencies, shared-letter word connections, score ranking.

use hashbrown::{HashMap, HashSet};

use crate::*;

/// How many times each letter occurs across all dictionary words.
pub fn letter_stats(dict: &Dictionary) -> HashMap<char, u32> {
    let mut stats = HashMap::new();
    for word in dict.iter() {
        for letter in word.chars() {
            *stats.entry(letter).or_insert(0) += 1;
        }
    }
    stats
}

/// For each word, the other dictionary words sharing at least one letter with
/// it, in dictionary order.
pub fn word_connections(dict: &Dictionary) -> HashMap<String, Vec<String>> {
    let mut connections = HashMap::with_capacity(dict.len());
    for word in dict.iter() {
        let letters: HashSet<char> = word.chars().collect();
        let connected: Vec<String> = dict
            .iter()
            .filter(|&other| other != word)
            .filter(|other| other.chars().any(|letter| letters.contains(&letter)))
            .map(str::to_owned)
            .collect();
        connections.insert(word.to_owned(), connected);
    }
    connections
}

/// Words paired with their intrinsic score, highest first. Ties keep the
/// input order.
pub fn ranked_by_score(words: &[String], scores: &LetterScores) -> Vec<(String, u32)> {
    let mut ranked: Vec<(String, u32)> = words
        .iter()
        .map(|word| (word.clone(), scores.word_score(word)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_stats_count_occurrences() {
        let dict = Dictionary::from_words(["ДОМ", "МОДА"]);
        let stats = letter_stats(&dict);
        assert_eq!(stats[&'О'], 2);
        assert_eq!(stats[&'М'], 2);
        assert_eq!(stats[&'А'], 1);
        assert!(!stats.contains_key(&'Я'));
    }

    #[test]
    fn connections_require_a_shared_letter() {
        let dict = Dictionary::from_words(["ДОМ", "МАК", "ЕЛЬ"]);
        let connections = word_connections(&dict);
        assert_eq!(connections["ДОМ"], ["МАК"]);
        assert_eq!(connections["МАК"], ["ДОМ"]);
        assert!(connections["ЕЛЬ"].is_empty());
    }

    #[test]
    fn ranking_is_by_score_descending() {
        let scores = LetterScores::from_json_str(r#"{"А": 1, "Ф": 10, "М": 2, "К": 2, "Д": 2, "О": 1}"#)
            .unwrap();
        let words = vec!["ДОМ".to_string(), "ФА".to_string(), "МАК".to_string()];
        let ranked = ranked_by_score(&words, &scores);
        assert_eq!(ranked[0], ("ФА".to_string(), 11));
        assert_eq!(ranked[1], ("ДОМ".to_string(), 5));
        assert_eq!(ranked[2], ("МАК".to_string(), 5));
    }
}
