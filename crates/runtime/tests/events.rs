mod common;

use common::*;
use duel_core::DuelKind;
use duel_runtime::{DuelEvent, Event, MatchmakingEvent, Topic};

#[tokio::test]
async fn friendly_duel_publishes_its_lifecycle() {
    let h = harness();
    h.enroll(A);
    h.enroll(B);
    let mut matchmaking = h.engine.subscribe(Topic::Matchmaking);
    let mut duel = h.engine.subscribe(Topic::Duel);

    h.friendly(A, B);
    h.engine.act(A, SLOT_FINISHER).unwrap();

    assert_eq!(
        matchmaking.recv().await.unwrap(),
        Event::Matchmaking(MatchmakingEvent::ChallengeIssued {
            challenger: A,
            target: B
        })
    );

    let Event::Duel(DuelEvent::SessionStarted {
        session,
        kind,
        players,
    }) = duel.recv().await.unwrap()
    else {
        panic!("expected SessionStarted");
    };
    assert_eq!(kind, DuelKind::Friendly);
    assert_eq!(players, [A, B]);

    match duel.recv().await.unwrap() {
        Event::Duel(DuelEvent::ActionResolved { session: s, report }) => {
            assert_eq!(s, session);
            assert_eq!(report.actor, A);
            assert_eq!(report.winner, Some(A));
        }
        other => panic!("expected ActionResolved, got {other:?}"),
    }

    assert_eq!(
        duel.recv().await.unwrap(),
        Event::Duel(DuelEvent::DuelFinished {
            session,
            kind: DuelKind::Friendly,
            winner: Some(A),
            forfeit: false,
            rewards: None,
        })
    );
}

#[tokio::test]
async fn ranked_search_and_cancellation_events() {
    let h = harness();
    h.enroll(A);
    h.enroll(B);
    let mut matchmaking = h.engine.subscribe(Topic::Matchmaking);
    let mut duel = h.engine.subscribe(Topic::Duel);

    h.engine.enqueue_for_match(A).unwrap();
    let session = h.engine.enqueue_for_match(B).unwrap().unwrap();
    h.engine.reject_session(session).unwrap();

    assert_eq!(
        matchmaking.recv().await.unwrap(),
        Event::Matchmaking(MatchmakingEvent::SearchStarted { player: A })
    );
    assert_eq!(
        matchmaking.recv().await.unwrap(),
        Event::Matchmaking(MatchmakingEvent::MatchFound {
            session,
            initiator: B,
            opponent: A
        })
    );
    assert_eq!(
        duel.recv().await.unwrap(),
        Event::Duel(DuelEvent::SessionCancelled { session })
    );
}

#[tokio::test]
async fn publishing_without_subscribers_is_fine() {
    let h = harness();
    h.enroll(A);
    h.engine.enqueue_for_match(A).unwrap();
    assert!(h.engine.cancel_search(A).unwrap());
}
