#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- RotationSession ---

#[test]
fn yaw_at_start_is_normalized_start_yaw() {
    let session = RotationSession::begin(-35.0, 1_000.0, 90_000.0);
    assert!(approx_eq(session.yaw_at(1_000.0), 325.0));
}

#[test]
fn quarter_period_advances_ninety_degrees() {
    let session = RotationSession::begin(10.0, 0.0, 80_000.0);
    assert!(approx_eq(session.yaw_at(20_000.0), 100.0));
}

#[test]
fn full_period_returns_to_start() {
    let session = RotationSession::begin(123.4, 5_000.0, 90_000.0);
    assert!(approx_eq(session.yaw_at(5_000.0 + 90_000.0), 123.4));
}

#[test]
fn multiple_periods_return_to_start() {
    let session = RotationSession::begin(42.0, 0.0, 60_000.0);
    assert!(approx_eq(session.yaw_at(3.0 * 60_000.0), 42.0));
}

#[test]
fn yaw_stays_in_range_over_long_runs() {
    let session = RotationSession::begin(-170.0, 0.0, 30_000.0);
    let mut t = 0.0;
    while t < 500_000.0 {
        let yaw = session.yaw_at(t);
        assert!((0.0..360.0).contains(&yaw), "t={t} yaw={yaw}");
        t += 1_234.5;
    }
}

#[test]
fn clock_before_start_holds_start_yaw() {
    // Clamped elapsed: a clock hiccup must not spin the camera backwards.
    let session = RotationSession::begin(50.0, 10_000.0, 90_000.0);
    assert!(approx_eq(session.yaw_at(9_000.0), 50.0));
}

#[test]
fn zero_duration_is_inert() {
    let session = RotationSession::begin(400.0, 0.0, 0.0);
    assert!(approx_eq(session.yaw_at(12_345.0), 40.0));
}

#[test]
fn rotation_speed_independent_of_sampling() {
    // Same instant, same yaw, however many frames were sampled before it.
    let session = RotationSession::begin(0.0, 0.0, 90_000.0);
    let direct = session.yaw_at(45_000.0);
    for t in [16.0, 112.0, 30_000.0] {
        let _ = session.yaw_at(t);
    }
    assert!(approx_eq(direct, session.yaw_at(45_000.0)));
    assert!(approx_eq(direct, 180.0));
}

// --- SchedulerState ---

#[test]
fn begin_issues_a_live_token() {
    let mut state = SchedulerState::new();
    let token = state.begin().unwrap();
    assert!(state.is_running());
    assert!(!token.is_cancelled());
}

#[test]
fn second_begin_without_stop_is_a_no_op() {
    let mut state = SchedulerState::new();
    let first = state.begin().unwrap();
    assert!(state.begin().is_none());
    // The running session was not disturbed.
    assert!(state.is_running());
    assert!(!first.is_cancelled());
}

#[test]
fn stop_before_any_begin_is_safe() {
    let mut state = SchedulerState::new();
    state.stop();
    state.stop();
    assert!(!state.is_running());
    assert!(state.begin().is_some());
}

#[test]
fn stop_cancels_the_active_session() {
    let mut state = SchedulerState::new();
    let token = state.begin().unwrap();
    state.stop();
    assert!(!state.is_running());
    assert!(token.is_cancelled());
}

#[test]
fn restart_after_stop_gets_a_fresh_token() {
    let mut state = SchedulerState::new();
    let first = state.begin().unwrap();
    state.stop();
    let second = state.begin().unwrap();
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
}

// --- CancelToken ---

#[test]
fn token_starts_live() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn cancel_is_sticky_and_idempotent() {
    let token = CancelToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn clones_share_the_flag() {
    let token = CancelToken::new();
    let observer = token.clone();
    token.cancel();
    assert!(observer.is_cancelled());
}

#[test]
fn fresh_token_is_independent_of_cancelled_one() {
    let old = CancelToken::new();
    old.cancel();
    let new = CancelToken::new();
    assert!(!new.is_cancelled());
    assert!(old.is_cancelled());
}
