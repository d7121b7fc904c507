use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use cell::*;
pub use dict::*;
pub use error::*;
pub use finder::*;
pub use generator::*;
pub use round::*;
pub use scores::*;
pub use session::*;
pub use types::*;

mod analysis;
mod cell;
mod dict;
mod error;
mod finder;
mod generator;
mod round;
mod scores;
mod session;
mod types;

/// Uppercase alphabet used for board letters and random padding.
/// 32 letters, А..Я without Ё, same as the original game.
pub const ALPHABET: [char; 32] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С', 'Т',
    'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Shortest word that counts during board scans and submissions.
pub const MIN_WORD_LEN: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square play board.
    pub board_size: Coord,
    /// How many dictionary words seed the letter pool each round.
    pub sample_words: usize,
    /// Minimum word length, in chars, for traceable words and submissions.
    pub min_word_len: usize,
}

impl GameConfig {
    pub const fn new_unchecked(board_size: Coord, sample_words: usize, min_word_len: usize) -> Self {
        Self {
            board_size,
            sample_words,
            min_word_len,
        }
    }

    pub fn new(board_size: Coord, sample_words: usize, min_word_len: usize) -> Self {
        Self::new_unchecked(
            board_size.clamp(1, Coord::MAX),
            sample_words.max(1),
            min_word_len.max(1),
        )
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.board_size, self.board_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(4, 6, MIN_WORD_LEN)
    }
}

/// The letter grid for a round. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Builds a board from rows of letters, all rows equally long.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |row| row.chars().count());
        if row_count == 0 || col_count == 0 {
            return Err(GameError::InvalidBoardShape);
        }

        let mut letters = Vec::with_capacity(row_count * col_count);
        for row in rows {
            if row.chars().count() != col_count {
                return Err(GameError::InvalidBoardShape);
            }
            letters.extend(row.chars().map(Cell::new));
        }

        let cells = Array2::from_shape_vec((row_count, col_count), letters)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    /// 1×k strip used by swipe-word widgets (start / help tiles).
    pub fn single_row(word: &str) -> Self {
        let letters: Vec<Cell> = word.chars().map(Cell::new).collect();
        let len = letters.len();
        Self {
            cells: Array2::from_shape_vec((1, len), letters).expect("1xk strip is always valid"),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.validate_coords(coords).is_ok()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn letter_at(&self, coords: Coord2) -> char {
        self.cell_at(coords).letter
    }

    /// The word a path spells, in board letter case.
    pub fn spell(&self, path: &[Coord2]) -> String {
        path.iter().map(|&coords| self.letter_at(coords)).collect()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}
