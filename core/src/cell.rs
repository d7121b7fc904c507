use serde::{Deserialize, Serialize};

/// Legacy per-cell bonus tag. The original game shipped the field but never
/// assigned anything except `None`; it is kept for compatibility and carries
/// no gameplay effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bonus {
    None,
    DoubleLetter,
    RareBonus,
}

impl Default for Bonus {
    fn default() -> Self {
        Self::None
    }
}

/// One board cell. Position is derived from grid indices, so the letter is
/// the only generated content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub letter: char,
    pub bonus: Bonus,
}

impl Cell {
    pub const fn new(letter: char) -> Self {
        Self {
            letter,
            bonus: Bonus::None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ')
    }
}

impl From<char> for Cell {
    fn from(letter: char) -> Self {
        Self::new(letter)
    }
}
