//! Full session flow over the builtin content: start a round, play a
//! traceable word, let the phases run out, and bank the score.

use slovito_core::*;

fn session() -> GameSession {
    let timings = PhaseTimings {
        analyzer_secs: 1,
        playing_secs: 3,
        results_secs: 1,
    };
    GameSession::new(
        Dictionary::builtin(),
        LetterScores::builtin(),
        GameConfig::default(),
        timings,
        2024,
    )
    .unwrap()
}

#[test]
fn play_one_round_and_bank_the_score() {
    let mut game = session();
    let mut sync = ScoreSync::new(MemoryUserStore::new());
    let player = "иван";

    game.start();
    assert_eq!(game.phase(), Some(Phase::Analyzer));

    // Analyzer runs out, play begins.
    assert_eq!(game.tick(), TickOutcome::PhaseChanged(Phase::Playing));

    let Some(word) = game
        .round()
        .unwrap()
        .traceable_words()
        .first()
        .cloned()
    else {
        // Extremely letter-poor board; a valid round, nothing to play.
        return;
    };

    let path = find_path(&word, game.round().unwrap().board()).unwrap();
    let outcome = game.submit(&path).unwrap();
    let delta = outcome.score_delta();
    assert!(outcome.is_accepted());
    assert!(delta > 0);
    assert_eq!(game.round().unwrap().found_words(), [word.clone()]);

    // Same word again is a duplicate and leaves the score alone.
    let again = game.submit(&path).unwrap();
    assert_eq!(again, SubmitOutcome::Rejected(RejectReason::Duplicate));
    assert_eq!(game.round().unwrap().score(), delta);

    // Run out the playing and results phases.
    game.tick();
    game.tick();
    assert_eq!(game.tick(), TickOutcome::PhaseChanged(Phase::Results));
    assert_eq!(game.tick(), TickOutcome::RoundFinished { score: delta });

    // Driver banks the delta; the new round starts clean.
    let total = sync.add_score(player, delta as u64);
    assert_eq!(total, delta as u64);
    assert_eq!(sync.total_score(player), delta as u64);

    let fresh = game.round().unwrap();
    assert_eq!(fresh.phase(), Phase::Analyzer);
    assert_eq!(fresh.score(), 0);
    assert!(fresh.found_words().is_empty());

    // Traceable invariant holds on the fresh board too.
    for word in fresh.traceable_words() {
        assert!(can_trace(word, fresh.board()));
        assert!(game.dictionary().contains(word));
    }
}

#[test]
fn submissions_outside_playing_are_refused() {
    let mut game = session();
    game.start();

    assert!(matches!(
        game.submit(&[(0, 0), (0, 1), (0, 2)]),
        Err(GameError::RoundNotActive)
    ));
}
