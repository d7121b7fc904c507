use serde::{Deserialize, Serialize};

use crate::dict::uppercase;
use crate::*;

/// Why a submitted path was not accepted. All of these are ordinary gameplay
/// feedback, not errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Fewer than three cells.
    TooShort,
    /// Out-of-bounds, repeated, or non-adjacent cells.
    NotAPath,
    /// The word was already found this round.
    Duplicate,
    /// Not in the round's traceable list or not in the dictionary.
    NotAWord,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Accepted { word: String, score_delta: u32 },
    Rejected(RejectReason),
}

impl SubmitOutcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn score_delta(&self) -> u32 {
        match self {
            Self::Accepted { score_delta, .. } => *score_delta,
            Self::Rejected(_) => 0,
        }
    }
}

/// One play cycle: a board, the words traceable on it, and the player's
/// accumulating progress. Replaced wholesale when the next round starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    traceable: Vec<String>,
    found_words: Vec<String>,
    score: u32,
    phase: Phase,
    time_left: u32,
}

impl Round {
    pub fn new(board: Board, traceable: Vec<String>, timings: &PhaseTimings) -> Self {
        Self {
            board,
            traceable,
            found_words: Vec::new(),
            score: 0,
            phase: Phase::Analyzer,
            time_left: timings.analyzer_secs,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Dictionary words actually traceable on this board, recomputed at round
    /// start and never cached across boards.
    pub fn traceable_words(&self) -> &[String] {
        &self.traceable
    }

    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub(crate) fn begin_phase(&mut self, phase: Phase, secs: u32) {
        log::debug!("phase {:?} -> {:?} ({secs}s)", self.phase, phase);
        if matches!(phase, Phase::Playing) {
            self.found_words.clear();
        }
        self.phase = phase;
        self.time_left = secs;
    }

    /// One coarse countdown step; returns the remaining seconds.
    pub(crate) fn tick_second(&mut self) -> u32 {
        self.time_left = self.time_left.saturating_sub(1);
        self.time_left
    }

    /// Validates a player-submitted path and applies it on acceptance.
    /// Pure with respect to everything but this round's found list and score.
    pub fn submit(
        &mut self,
        path: &[Coord2],
        dict: &Dictionary,
        letter_scores: &LetterScores,
    ) -> SubmitOutcome {
        use RejectReason::*;

        if path.len() < MIN_WORD_LEN {
            return SubmitOutcome::Rejected(TooShort);
        }
        if !self.is_chain(path) {
            return SubmitOutcome::Rejected(NotAPath);
        }

        let word = self.board.spell(path);
        let key = uppercase(&word);
        if self.found_words.iter().any(|found| uppercase(found) == key) {
            return SubmitOutcome::Rejected(Duplicate);
        }
        // Both checks on purpose: the traceable list guards the board, the
        // dictionary guards against the list's word source diverging from it.
        if !self.traceable.contains(&key) || !dict.contains(&key) {
            return SubmitOutcome::Rejected(NotAWord);
        }

        let score_delta = letter_scores.path_score(&self.board, path);
        self.score += score_delta;
        self.found_words.push(word.clone());
        log::debug!("accepted {word:?} for {score_delta} points");
        SubmitOutcome::Accepted { word, score_delta }
    }

    /// The same adjacency rule the word finder searches with, re-checked on
    /// the submitted path independently of the UI.
    fn is_chain(&self, path: &[Coord2]) -> bool {
        if path.iter().any(|&coords| !self.board.contains(coords)) {
            return false;
        }
        if path.windows(2).any(|pair| !is_adjacent(pair[0], pair[1])) {
            return false;
        }
        // Paths hold at most total_cells entries, quadratic scan is fine.
        !path
            .iter()
            .enumerate()
            .any(|(i, coords)| path[..i].contains(coords))
    }
}

/// Starts a round the default way: a random dictionary sample seeds the
/// letters, but traceability is computed against the full dictionary.
pub fn start_round(
    dict: &Dictionary,
    config: &GameConfig,
    timings: &PhaseTimings,
    seed: u64,
) -> Round {
    use rand::prelude::*;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..dict.len()).collect();
    let amount = config.sample_words.min(indices.len());
    let (chosen, _) = indices.partial_shuffle(&mut rng, amount);
    let sampled: Vec<String> = chosen.iter().map(|&i| dict.words()[i].clone()).collect();

    assemble_round(LetterSource::Themed(&sampled), dict, config, timings, rng.random())
}

/// Starts a round whose letters come from an explicit theme word list.
pub fn start_themed_round(
    theme: &Theme,
    dict: &Dictionary,
    config: &GameConfig,
    timings: &PhaseTimings,
    seed: u64,
) -> Round {
    assemble_round(LetterSource::Themed(&theme.words), dict, config, timings, seed)
}

fn assemble_round(
    source: LetterSource<'_>,
    dict: &Dictionary,
    config: &GameConfig,
    timings: &PhaseTimings,
    seed: u64,
) -> Round {
    let board = ShuffledPoolGenerator::new(seed).generate(source, config.board_size);
    let traceable = find_all_traceable(dict, &board, config.min_word_len);
    log::debug!(
        "assembled {}x{} board with {} traceable words",
        config.board_size,
        config.board_size,
        traceable.len()
    );
    Round::new(board, traceable, timings)
}
