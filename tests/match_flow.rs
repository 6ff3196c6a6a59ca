//! End-to-end flow: run a match to completion, then submit the winner's
//! score to a leaderboard store.

use arcade_pong::sim::{InputSnapshot, MatchController, MatchEvent, Phase, Side};
use arcade_pong::{FieldConfig, NewScore, ScoreStore};
use rand::SeedableRng;
use rand_pcg::Pcg32;

#[test]
fn match_result_feeds_the_leaderboard() {
    let mut ctl = MatchController::new(FieldConfig::default());
    let mut rng = Pcg32::seed_from_u64(77);
    ctl.start();

    // Unattended match: the opponent AI defends, the player paddle holds.
    let mut saw_score_event = false;
    while ctl.phase() == Phase::Running {
        ctl.frame(InputSnapshot::default(), &mut rng);
        saw_score_event |= ctl
            .drain_events()
            .any(|e| matches!(e, MatchEvent::Score(_)));
    }
    assert!(saw_score_event);

    let result = ctl.result().expect("finished match has a result");
    let player_score = result.left_score;

    // Submission happens outside the core, against the store trait.
    let mut store = arcade_pong::leaderboard::MemoryStore::seeded();
    let entry = store
        .submit(NewScore {
            initials: "pvb".into(),
            score: i64::from(player_score),
        })
        .expect("well-formed submission is accepted");
    assert_eq!(entry.initials, "PVB");
    assert_eq!(entry.score, player_score);

    let top = store.top_scores().unwrap();
    assert!(top.iter().any(|e| e.id == entry.id));

    // A failed submission never disturbs the finished match.
    let err = store.submit(NewScore { initials: "".into(), score: 1 });
    assert!(err.is_err());
    assert_eq!(ctl.phase(), Phase::Finished);
    assert_eq!(ctl.result(), Some(result));
}

#[test]
fn replay_restarts_cleanly_after_finish() {
    let mut ctl = MatchController::new(FieldConfig::default());
    let mut rng = Pcg32::seed_from_u64(3);
    ctl.start();
    while ctl.phase() == Phase::Running {
        ctl.frame(InputSnapshot::default(), &mut rng);
    }
    let first_winner = ctl.result().unwrap().winner;
    assert!(matches!(first_winner, Side::Left | Side::Right));

    ctl.start();
    assert_eq!(ctl.phase(), Phase::Running);
    assert_eq!(ctl.state().left_score, 0);
    assert_eq!(ctl.state().right_score, 0);
    assert!(ctl.result().is_none());
}
