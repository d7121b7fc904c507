use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// External state driving which actions are accepted.
///
/// Valid transitions: Analyzer -> Playing -> Results -> Analyzer (next round).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Preview pause between rounds, all traceable words shown.
    Analyzer,
    /// Active play, submissions accepted.
    Playing,
    /// Short results screen after play ends.
    Results,
}

impl Phase {
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Seconds per phase. Coarse second-granularity countdowns by contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTimings {
    pub analyzer_secs: u32,
    pub playing_secs: u32,
    pub results_secs: u32,
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            analyzer_secs: 15,
            playing_secs: 30,
            results_secs: 10,
        }
    }
}

/// What one countdown step did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No round is running.
    Idle,
    Counting { time_left: u32 },
    PhaseChanged(Phase),
    /// The finished round's score, to be banked by the driver; a fresh round
    /// is already in place, back in the analyzer phase.
    RoundFinished { score: u32 },
}

/// Owns the dictionary, score table, and current round; replaces the
/// original's process-wide "current game" singleton. The caller drives it
/// with one `tick()` per elapsed second; no timers live in the core.
#[derive(Debug)]
pub struct GameSession {
    dict: Dictionary,
    letter_scores: LetterScores,
    config: GameConfig,
    timings: PhaseTimings,
    rng: rand::rngs::SmallRng,
    round: Option<Round>,
    started_at: Option<Instant>,
}

impl GameSession {
    pub fn new(
        dict: Dictionary,
        letter_scores: LetterScores,
        config: GameConfig,
        timings: PhaseTimings,
        seed: u64,
    ) -> Result<Self> {
        use rand::prelude::*;

        if dict.is_empty() {
            return Err(GameError::EmptyDictionary);
        }
        Ok(Self {
            dict,
            letter_scores,
            config,
            timings,
            rng: SmallRng::seed_from_u64(seed),
            round: None,
            started_at: None,
        })
    }

    /// Session over the builtin dictionary and score table.
    pub fn builtin(seed: u64) -> Self {
        Self::new(
            Dictionary::builtin(),
            LetterScores::builtin(),
            GameConfig::default(),
            PhaseTimings::default(),
            seed,
        )
        .expect("builtin dictionary is not empty")
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    pub fn letter_scores(&self) -> &LetterScores {
        &self.letter_scores
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.round.as_ref().map(Round::phase)
    }

    /// Seconds since the session was started, 0 before that.
    pub fn elapsed_secs(&self) -> u64 {
        self.started_at
            .map(|started_at| started_at.elapsed().as_secs())
            .unwrap_or(0)
    }

    /// Begins the first round, in the analyzer phase.
    pub fn start(&mut self) -> &Round {
        use rand::prelude::*;

        self.started_at.get_or_insert_with(Instant::now);
        let round = start_round(&self.dict, &self.config, &self.timings, self.rng.random());
        self.round.insert(round)
    }

    /// One countdown step, roughly one wall-clock second apart.
    pub fn tick(&mut self) -> TickOutcome {
        use rand::prelude::*;

        let Some(round) = self.round.as_mut() else {
            return TickOutcome::Idle;
        };

        let time_left = round.tick_second();
        if time_left > 0 {
            return TickOutcome::Counting { time_left };
        }

        match round.phase() {
            Phase::Analyzer => {
                round.begin_phase(Phase::Playing, self.timings.playing_secs);
                TickOutcome::PhaseChanged(Phase::Playing)
            }
            Phase::Playing => {
                round.begin_phase(Phase::Results, self.timings.results_secs);
                TickOutcome::PhaseChanged(Phase::Results)
            }
            Phase::Results => {
                let score = round.score();
                let seed = self.rng.random();
                self.round = Some(start_round(&self.dict, &self.config, &self.timings, seed));
                TickOutcome::RoundFinished { score }
            }
        }
    }

    /// Submits a player path to the current round. Only legal while playing.
    pub fn submit(&mut self, path: &[Coord2]) -> Result<SubmitOutcome> {
        let Some(round) = self.round.as_mut() else {
            return Err(GameError::RoundNotActive);
        };
        if !round.phase().accepts_input() {
            return Err(GameError::RoundNotActive);
        }
        Ok(round.submit(path, &self.dict, &self.letter_scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_session() -> GameSession {
        let timings = PhaseTimings {
            analyzer_secs: 2,
            playing_secs: 2,
            results_secs: 2,
        };
        GameSession::new(
            Dictionary::builtin(),
            LetterScores::builtin(),
            GameConfig::default(),
            timings,
            17,
        )
        .unwrap()
    }

    #[test]
    fn empty_dictionary_is_rejected_up_front() {
        let result = GameSession::new(
            Dictionary::default(),
            LetterScores::builtin(),
            GameConfig::default(),
            PhaseTimings::default(),
            0,
        );
        assert!(matches!(result, Err(GameError::EmptyDictionary)));
    }

    #[test]
    fn ticks_walk_through_the_phase_cycle() {
        let mut session = quick_session();
        assert_eq!(session.tick(), TickOutcome::Idle);

        session.start();
        assert_eq!(session.phase(), Some(Phase::Analyzer));

        assert_eq!(session.tick(), TickOutcome::Counting { time_left: 1 });
        assert_eq!(session.tick(), TickOutcome::PhaseChanged(Phase::Playing));
        assert_eq!(session.phase(), Some(Phase::Playing));

        assert_eq!(session.tick(), TickOutcome::Counting { time_left: 1 });
        assert_eq!(session.tick(), TickOutcome::PhaseChanged(Phase::Results));

        session.tick();
        assert_eq!(session.tick(), TickOutcome::RoundFinished { score: 0 });
        // A fresh round is already in place.
        assert_eq!(session.phase(), Some(Phase::Analyzer));
        assert_eq!(session.round().unwrap().score(), 0);
    }

    #[test]
    fn submissions_are_gated_to_the_playing_phase() {
        let mut session = quick_session();
        assert!(matches!(
            session.submit(&[(0, 0), (0, 1), (0, 2)]),
            Err(GameError::RoundNotActive)
        ));

        session.start();
        assert!(matches!(
            session.submit(&[(0, 0), (0, 1), (0, 2)]),
            Err(GameError::RoundNotActive)
        ));

        session.tick();
        session.tick();
        assert_eq!(session.phase(), Some(Phase::Playing));
        // Playing now, an arbitrary path is at least judged on its merits.
        assert!(session.submit(&[(0, 0), (0, 1), (0, 2)]).is_ok());
    }

    #[test]
    fn playing_a_traceable_word_banks_its_score_at_round_end() {
        let mut session = quick_session();
        session.start();
        session.tick();
        session.tick();
        assert_eq!(session.phase(), Some(Phase::Playing));

        let (path, expected) = {
            let round = session.round().unwrap();
            let word = round.traceable_words().first().cloned();
            match word {
                Some(word) => {
                    let path = find_path(&word, round.board()).unwrap();
                    let expected = session.letter_scores().path_score(round.board(), &path);
                    (Some(path), expected)
                }
                // An empty traceable list is a valid round; nothing to play.
                None => (None, 0),
            }
        };

        if let Some(path) = path {
            let outcome = session.submit(&path).unwrap();
            assert!(outcome.is_accepted());
            assert_eq!(outcome.score_delta(), expected);
        }

        session.tick();
        session.tick(); // playing -> results
        session.tick();
        let finished = session.tick();
        assert_eq!(finished, TickOutcome::RoundFinished { score: expected });
    }
}
