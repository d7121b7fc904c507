use ndarray::Array2;

use super::*;

/// Generation strategy of the original game: pour the source words into one
/// letter pool, shuffle it, and fill the board row-major. Uses a proper
/// Fisher–Yates shuffle instead of the comparator hack the original had.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffledPoolGenerator {
    seed: u64,
}

impl ShuffledPoolGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for ShuffledPoolGenerator {
    fn generate(self, source: LetterSource<'_>, size: Coord) -> Board {
        use rand::prelude::*;

        let size = size.max(1);
        let total = mult(size, size) as usize;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut pool = source.pooled_letters();
        pool.shuffle(&mut rng);

        // Pool exhaustion is a normal degeneracy, padded silently.
        if pool.len() < total {
            log::debug!(
                "letter pool holds {} letters for {} cells, padding with random letters",
                pool.len(),
                total
            );
        }
        pool.truncate(total);
        while pool.len() < total {
            pool.push(ALPHABET[rng.random_range(0..ALPHABET.len())]);
        }

        let cells: Vec<Cell> = pool.into_iter().map(Cell::new).collect();
        let cells = Array2::from_shape_vec((size as usize, size as usize), cells)
            .expect("pool is sized to the board");
        Board::from_cells(cells)
    }
}
