//! Board word finder: depth-first search with backtracking over 8-adjacent
//! cells, each cell used at most once per word.

use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// Ordered sequence of distinct, pairwise-adjacent cell coordinates.
pub type Path = SmallVec<[Coord2; 16]>;

fn upper(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}

/// Finds one path spelling `word` on the board, if any exists.
///
/// Matching is case-insensitive. The returned path is an arbitrary valid one,
/// not necessarily the shortest or lexicographically first. Works for any
/// word length ≥ 1; the length-≥-3 rule is applied by the dictionary filter,
/// not here.
pub fn find_path(word: &str, board: &Board) -> Option<Path> {
    let target: Vec<char> = word.chars().map(upper).collect();
    if target.is_empty() {
        return None;
    }

    let (rows, cols) = board.size();
    let mut visited: Array2<bool> = Array2::default((rows as usize, cols as usize));
    let mut path = Path::new();

    for row in 0..rows {
        for col in 0..cols {
            if extend(board, &target, 0, (row, col), &mut visited, &mut path) {
                return Some(path);
            }
        }
    }
    None
}

/// Whether `word` can be traced on the board. Same search as [`find_path`],
/// path discarded.
pub fn can_trace(word: &str, board: &Board) -> bool {
    find_path(word, board).is_some()
}

/// Tries to place `target[idx..]` starting at `coords`, extending `path`.
/// On failure the visited marks and path are restored before returning, so
/// stale state can never cause false negatives on other branches.
fn extend(
    board: &Board,
    target: &[char],
    idx: usize,
    coords: Coord2,
    visited: &mut Array2<bool>,
    path: &mut Path,
) -> bool {
    let nd = coords.to_nd_index();
    if visited[nd] || upper(board.letter_at(coords)) != target[idx] {
        return false;
    }

    visited[nd] = true;
    path.push(coords);

    if idx + 1 == target.len() {
        return true;
    }

    for next in board.iter_neighbors(coords) {
        if extend(board, target, idx + 1, next, visited, path) {
            return true;
        }
    }

    visited[nd] = false;
    path.pop();
    false
}

/// Filters the dictionary down to the words (length ≥ `min_len`) actually
/// traceable on this board, preserving dictionary order.
pub fn find_all_traceable(dict: &Dictionary, board: &Board, min_len: usize) -> Vec<String> {
    dict.iter()
        .filter(|word| word.chars().count() >= min_len)
        .filter(|word| can_trace(word, board))
        .map(str::to_owned)
        .collect()
}

/// Like [`find_all_traceable`], but also recovers one concrete route per word.
pub fn find_all_routes(dict: &Dictionary, board: &Board, min_len: usize) -> Vec<(String, Path)> {
    dict.iter()
        .filter(|word| word.chars().count() >= min_len)
        .filter_map(|word| find_path(word, board).map(|path| (word.to_owned(), path)))
        .collect()
}
