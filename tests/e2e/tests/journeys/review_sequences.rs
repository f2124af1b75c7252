//! Journey: a single card reviewed over months
//!
//! Replays fixed rating scripts against pinned weights and checks the
//! interval history, state transitions and memory state at each step.

use chrono::Duration;
use mnemos_core::{FSRSScheduler, Rating, State};
use mnemos_e2e_tests::harness::ReviewSession;
use mnemos_e2e_tests::init_tracing;
use mnemos_e2e_tests::mocks::{
    LONG_HISTORY_INTERVALS, LONG_HISTORY_RATINGS, MEMO_DAY_OFFSETS, MEMO_FINAL_DIFFICULTY,
    MEMO_FINAL_STABILITY, MEMO_INTERVALS, MEMO_RATINGS, fixed_start, round4, test_scheduler,
};

#[test]
fn long_history_reproduces_known_intervals() {
    init_tracing();
    let mut session = ReviewSession::new(test_scheduler(), fixed_start());

    for rating in LONG_HISTORY_RATINGS {
        session.review_and_wait(rating);
    }

    assert_eq!(session.intervals(), LONG_HISTORY_INTERVALS.to_vec());
    assert_eq!(session.card().reps, 13);
    assert_eq!(session.card().lapses, 1, "second Again is in Relearning");
    assert_eq!(session.card().state, State::Review);
}

#[test]
fn long_history_walks_the_state_machine() {
    init_tracing();
    let mut session = ReviewSession::new(test_scheduler(), fixed_start());

    for rating in LONG_HISTORY_RATINGS {
        session.review_and_wait(rating);
    }

    let states: Vec<State> = session.history().iter().map(|log| log.state).collect();
    assert_eq!(states[0], State::New);
    assert_eq!(states[1], State::Learning);
    assert!(states[2..6].iter().all(|s| *s == State::Review));
    assert_eq!(states[6], State::Review);
    assert_eq!(states[7], State::Relearning);
    assert_eq!(states[8], State::Relearning);
    assert!(states[9..].iter().all(|s| *s == State::Review));
}

#[test]
fn memory_state_after_mixed_history() {
    init_tracing();
    let scheduler = test_scheduler();
    let mut now = fixed_start();
    let mut outcomes = scheduler.schedule_all(&mnemos_core::Card::new(now), now);
    let mut chosen = Vec::new();

    for (rating, offset) in MEMO_RATINGS.into_iter().zip(MEMO_DAY_OFFSETS) {
        let card = outcomes[rating].card.clone();
        chosen.push(card.scheduled_days);
        now += Duration::days(offset);
        outcomes = scheduler.schedule_all(&card, now);
    }

    assert_eq!(chosen, MEMO_INTERVALS.to_vec());

    let good = &outcomes.good.card;
    tracing::info!(
        stability = good.stability,
        difficulty = good.difficulty,
        "Final good branch"
    );
    assert!((good.stability - MEMO_FINAL_STABILITY).abs() < 5e-5);
    assert!((good.difficulty - MEMO_FINAL_DIFFICULTY).abs() < 5e-5);
    assert_eq!(round4(good.stability), MEMO_FINAL_STABILITY);
}

#[test]
fn default_weights_first_reviews() {
    init_tracing();
    let mut session = ReviewSession::new(FSRSScheduler::default(), fixed_start());

    let first = session.preview();
    assert_eq!(first.intervals(), [0, 0, 0, 15]);
    assert!((first.good.card.stability - 3.1262).abs() < 1e-9);
    assert!((first.good.card.difficulty - 5.314_577_829_570_867).abs() < 1e-9);

    let card = session.review_and_wait(Rating::Good).clone();
    assert_eq!(card.scheduled_days, 0);
    assert_eq!(card.state, State::Learning);
    assert_eq!(card.due, fixed_start() + Duration::minutes(10));

    assert_eq!(session.preview().intervals(), [0, 0, 4, 7]);
    session.review_and_wait(Rating::Good);
    session.review_and_wait(Rating::Good);

    assert_eq!(session.intervals(), vec![0, 4, 15]);
    assert_eq!(session.card().state, State::Review);
}

#[test]
fn lapse_and_relearn() {
    init_tracing();
    let mut session = ReviewSession::new(FSRSScheduler::default(), fixed_start());
    session.review_and_wait(Rating::Good);
    session.review_and_wait(Rating::Good);
    assert_eq!(session.card().state, State::Review);

    let before = session.card().stability;
    let review_time = session.now();
    let lapsed = session.review(Rating::Again).clone();

    assert_eq!(lapsed.state, State::Relearning);
    assert_eq!(lapsed.lapses, 1);
    assert_eq!(lapsed.scheduled_days, 0);
    assert_eq!(lapsed.due, review_time + Duration::minutes(5));
    assert!(lapsed.stability < before);

    session.jump_to_due();
    let relearned = session.review(Rating::Good).clone();
    assert_eq!(relearned.state, State::Review);
    assert!(relearned.scheduled_days >= 1);
    assert_eq!(relearned.lapses, 1);
    assert_eq!(session.history().len(), 4);
}

#[test]
fn hard_in_learning_repeats_the_step() {
    init_tracing();
    let mut session = ReviewSession::new(FSRSScheduler::default(), fixed_start());
    session.review_and_wait(Rating::Hard);
    assert_eq!(session.card().state, State::Learning);

    let step_start = session.now();
    let card = session.review(Rating::Hard).clone();
    assert_eq!(card.state, State::Learning);
    assert_eq!(card.scheduled_days, 0);
    assert_eq!(card.due, step_start + Duration::minutes(10));
}

#[test]
fn easy_on_new_card_graduates_immediately() {
    init_tracing();
    let mut session = ReviewSession::new(FSRSScheduler::default(), fixed_start());
    let card = session.review(Rating::Easy).clone();

    assert_eq!(card.state, State::Review);
    assert_eq!(card.scheduled_days, 15);
    assert_eq!(card.due, fixed_start() + Duration::days(15));
    assert_eq!(session.history()[0].scheduled_days, 15);
}
