use std::collections::BTreeMap;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::*;

/// Default dictionary shipped with the game: category key (starting letter)
/// to an ordered list of uppercase words.
pub const BUILTIN_DICTIONARY: &str = include_str!("../assets/dictionary.json");

/// Default per-letter point values.
pub const BUILTIN_LETTER_SCORES: &str = include_str!("../assets/letter-scores.json");

pub(crate) fn uppercase(word: &str) -> String {
    word.chars().flat_map(char::to_uppercase).collect()
}

/// Themed word list usable as a letter source instead of a dictionary sample.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub reward: String,
    pub words: Vec<String>,
}

/// The full game dictionary: uppercase words, deduplicated at load,
/// iteration order stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for word in words {
            let word = uppercase(word.as_ref().trim());
            if word.is_empty() {
                continue;
            }
            if dict.index.insert(word.clone()) {
                dict.words.push(word);
            }
        }
        dict
    }

    /// Flattens a category-key map (the `dictionary.json` shape) into one set.
    pub fn from_categories(categories: &BTreeMap<String, Vec<String>>) -> Self {
        Self::from_words(categories.values().flatten())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let categories: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_categories(&categories))
    }

    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_DICTIONARY).expect("builtin dictionary is valid JSON")
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&uppercase(word))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Letter → point value table. Unknown letters score zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterScores {
    scores: HashMap<char, u32>,
}

impl LetterScores {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, u32> = serde_json::from_str(json)?;
        let mut scores = HashMap::with_capacity(raw.len());
        for (key, value) in raw {
            let upper = uppercase(&key);
            let mut chars = upper.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => {
                    scores.insert(letter, value);
                }
                _ => log::warn!("ignoring non-letter score key {key:?}"),
            }
        }
        Ok(Self { scores })
    }

    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_LETTER_SCORES).expect("builtin letter scores are valid JSON")
    }

    pub fn score(&self, letter: char) -> u32 {
        letter
            .to_uppercase()
            .find_map(|upper| self.scores.get(&upper))
            .copied()
            .unwrap_or(0)
    }

    /// Intrinsic score of a word's text, independent of any board.
    pub fn word_score(&self, word: &str) -> u32 {
        word.chars().map(|letter| self.score(letter)).sum()
    }

    /// Score of a path as played: each visited cell contributes the value of
    /// the letter actually on it.
    pub fn path_score(&self, board: &Board, path: &[Coord2]) -> u32 {
        path.iter()
            .map(|&coords| self.score(board.letter_at(coords)))
            .sum()
    }
}
