use crate::*;
pub use pool::*;

mod pool;

/// Where the letters for a generated board come from: a themed word list, or
/// the full game dictionary as fallback.
#[derive(Copy, Clone, Debug)]
pub enum LetterSource<'a> {
    Themed(&'a [String]),
    Dictionary(&'a Dictionary),
}

impl LetterSource<'_> {
    /// Every character of every source word, uppercased, in source order.
    pub(crate) fn pooled_letters(&self) -> Vec<char> {
        let words: Box<dyn Iterator<Item = &str> + '_> = match self {
            Self::Themed(words) => Box::new(words.iter().map(String::as_str)),
            Self::Dictionary(dict) => Box::new(dict.iter()),
        };
        words
            .flat_map(|word| word.chars())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub trait BoardGenerator {
    fn generate(self, source: LetterSource<'_>, size: Coord) -> Board;
}
