// Host-side integration tests for the trajectory generator.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod coin {
    include!("../src/core/coin.rs");
}

use coin::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

const EPS: f32 = 1e-4;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn flight_curves_vanish_at_endpoints() {
    // Jump/wobble arc: zero at both ends, peak 1 at mid-flight.
    assert_eq!(arc(0.0), 0.0);
    assert!(arc(1.0).abs() < 1e-6);
    assert!((arc(0.5) - 1.0).abs() < 1e-6);

    // Tilt decay: full at launch, gone at landing.
    assert!((wobble_decay(0.0) - 1.0).abs() < 1e-6);
    assert!(wobble_decay(1.0).abs() < 1e-6);

    // Ease-out reaches exactly 1 so the target terms land dead on.
    assert_eq!(ease_out_quartic(1.0), 1.0);
    assert_eq!(ease_out_quartic(0.0), 0.0);
}

#[test]
fn ease_out_is_monotonic_and_front_loaded() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let p = i as f32 / 100.0;
        let e = ease_out_quartic(p);
        assert!(e >= prev);
        assert!((0.0..=1.0).contains(&e));
        prev = e;
    }
    // Front-loaded: halfway through the flight most of the spin is done.
    assert!(ease_out_quartic(0.5) > 0.9);
}

#[test]
fn arc_is_symmetric() {
    for i in 0..=50 {
        let p = i as f32 / 100.0;
        assert!((arc(p) - arc(1.0 - p)).abs() < 1e-5);
    }
}

#[test]
fn landing_rotation_is_exact_for_both_outcomes() {
    // Whatever wobble parameters are drawn, the coin must land showing the
    // chosen face: X at TOTAL_SPINS revolutions plus the face offset, Z at
    // the face offset, Y back at zero.
    for seed in 0..25 {
        for outcome in [FlipOutcome::Heads, FlipOutcome::Tails] {
            let mut r = rng(seed);
            let mut animator = CoinAnimator::new();
            animator.begin_flip(outcome, 0.0, &mut r);
            animator.update(FLIP_DURATION, &mut r);

            let expected_x = TOTAL_SPINS * TAU + outcome.face_up_angle();
            let expected_z = outcome.face_up_angle();
            assert!((animator.pose.rotation.x - expected_x).abs() < EPS);
            assert!((animator.pose.rotation.z - expected_z).abs() < EPS);
            assert!(animator.pose.rotation.y.abs() < EPS);
            assert!(matches!(animator.phase, Phase::Settled { .. }));
        }
    }
}

#[test]
fn landing_arms_camera_shake() {
    let mut r = rng(7);
    let mut animator = CoinAnimator::new();
    animator.begin_flip(FlipOutcome::Heads, 0.0, &mut r);
    animator.update(FLIP_DURATION, &mut r);
    assert_eq!(animator.camera.shake, SHAKE_IMPULSE);

    // The shake decays below the cutoff and snaps to zero.
    for i in 1..200 {
        animator.update(FLIP_DURATION + i as f32 * 0.016, &mut r);
    }
    assert_eq!(animator.camera.shake, 0.0);
}

#[test]
fn jump_peaks_mid_flight_and_returns_to_base() {
    let mut r = rng(3);
    let mut animator = CoinAnimator::new();
    animator.begin_flip(FlipOutcome::Tails, 0.0, &mut r);

    animator.update(FLIP_DURATION / 2.0, &mut r);
    assert!((animator.pose.position.y - (BASE_Y + JUMP_HEIGHT)).abs() < 1e-3);
    // Camera pulls back with the jump and tracks the coin.
    assert!((animator.camera.eye.z - CAMERA_FAR_Z).abs() < 1e-3);
    assert!(animator.camera.target.y > 0.0);

    let mut r2 = rng(3);
    let mut landed = CoinAnimator::new();
    landed.begin_flip(FlipOutcome::Tails, 0.0, &mut r2);
    landed.update(FLIP_DURATION, &mut r2);
    assert!((landed.pose.position.y - BASE_Y).abs() < 1e-3);
}

#[test]
fn begin_flip_restarts_an_inflight_flip() {
    // A request that arrives just before the previous flight finishes must
    // win: the animation restarts rather than silently dropping the flip.
    let mut r = rng(11);
    let mut animator = CoinAnimator::new();
    animator.begin_flip(FlipOutcome::Heads, 0.0, &mut r);
    animator.update(FLIP_DURATION * 0.99, &mut r);
    animator.begin_flip(FlipOutcome::Tails, FLIP_DURATION, &mut r);

    match animator.phase {
        Phase::Flipping { start, outcome, .. } => {
            assert_eq!(start, FLIP_DURATION);
            assert_eq!(outcome, FlipOutcome::Tails);
        }
        _ => panic!("expected the new flip to be in flight"),
    }

    // And the restarted flight lands on its own outcome's face.
    animator.update(FLIP_DURATION * 2.0, &mut r);
    let expected_x = TOTAL_SPINS * TAU + FlipOutcome::Tails.face_up_angle();
    assert!((animator.pose.rotation.x - expected_x).abs() < EPS);
    assert!(matches!(
        animator.phase,
        Phase::Settled {
            outcome: FlipOutcome::Tails
        }
    ));
}

#[test]
fn settled_relocks_onto_final_orientation() {
    let mut r = rng(19);
    let mut animator = CoinAnimator::new();
    animator.begin_flip(FlipOutcome::Tails, 0.0, &mut r);
    animator.update(FLIP_DURATION, &mut r);

    for i in 1..300 {
        animator.update(FLIP_DURATION + i as f32 * 0.016, &mut r);
    }
    let expected_x = TOTAL_SPINS * TAU + FlipOutcome::Tails.face_up_angle();
    assert!((animator.pose.rotation.x - expected_x).abs() < 1e-3);
    assert!(animator.pose.rotation.y.abs() < 1e-3);
    assert!((animator.pose.rotation.z - FlipOutcome::Tails.face_up_angle()).abs() < 1e-3);
    // Camera back home after the shake runs out.
    assert!(animator.camera.eye.x.abs() < 1e-2);
    assert!(animator.camera.eye.y.abs() < 1e-2);
    assert!((animator.camera.eye.z - CAMERA_NEAR_Z).abs() < 0.05);
}

#[test]
fn idle_bobs_gently_and_keeps_spinning() {
    let mut r = rng(5);
    let mut animator = CoinAnimator::new();
    let mut prev_spin = animator.pose.rotation.y;
    for i in 0..240 {
        let t = i as f32 * 0.016;
        animator.update(t, &mut r);
        assert!((animator.pose.position.y - BASE_Y).abs() <= 0.15 + 1e-5);
        assert!(animator.pose.rotation.y > prev_spin);
        prev_spin = animator.pose.rotation.y;
    }
    assert!(matches!(animator.phase, Phase::Idle));
}

#[test]
fn flip_params_stay_inside_their_ranges() {
    use std::f32::consts::PI;
    for seed in 0..50 {
        let params = FlipParams::draw(&mut rng(seed));
        assert!(params.tilt.x.abs() <= 1.5);
        assert!(params.tilt.y.abs() <= 2.0);
        assert!(params.tilt.z.abs() <= 1.0);
        assert!(params.spin_y.abs() <= 3.0 * PI);
        assert!(params.spin_z.abs() <= TAU);
    }
}
