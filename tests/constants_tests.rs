// Sanity checks over the tuning constants: presentation values in
// `src/constants.rs` and trajectory timing in `src/core/coin.rs`.

#![allow(dead_code)]
mod coin {
    include!("../src/core/coin.rs");
}
mod scene {
    include!("../src/constants.rs");
}

#[test]
fn flight_timing_is_sane() {
    assert!(coin::FLIP_DURATION > 0.0);
    assert!(coin::JUMP_HEIGHT > 0.0);
    // Whole revolutions, so the landing face depends only on the offset.
    assert_eq!(coin::TOTAL_SPINS.fract(), 0.0);
    assert!(coin::TOTAL_SPINS >= 1.0);
}

#[test]
fn smoothing_factors_are_fractional() {
    for f in [
        coin::IDLE_RELOCK,
        coin::SETTLE_ROT_FACTOR,
        coin::SETTLE_BOB_FACTOR,
        coin::CAMERA_XY_RELAX,
        coin::CAMERA_Z_RELAX,
        coin::SHAKE_DECAY,
    ] {
        assert!(f > 0.0 && f < 1.0);
    }
    assert!(coin::SHAKE_CUTOFF > 0.0 && coin::SHAKE_CUTOFF < coin::SHAKE_IMPULSE);
}

#[test]
fn camera_pulls_back_during_flight() {
    assert!(coin::CAMERA_FAR_Z > coin::CAMERA_NEAR_Z);
    // Both dolly positions stay inside the projection frustum.
    assert!(scene::CAMERA_Z_NEAR < coin::CAMERA_NEAR_Z);
    assert!(scene::CAMERA_Z_FAR > coin::CAMERA_FAR_Z + coin::JUMP_HEIGHT);
}

#[test]
fn coin_proportions_look_like_a_coin() {
    assert!(scene::COIN_DEPTH < scene::COIN_RADIUS);
    assert!(scene::COIN_SEGMENTS >= 16);
}

#[test]
fn face_raster_fits_the_texture() {
    let size = scene::TEXTURE_SIZE as f64;
    assert!(scene::FACE_TEXT_MAX_WIDTH < size);
    assert!(scene::FACE_RING_RADIUS + scene::FACE_RING_WIDTH / 2.0 < size / 2.0);
    assert!(scene::FACE_RING_ALPHA > 0.0 && scene::FACE_RING_ALPHA < 1.0);
}

#[test]
fn lighting_is_normalized_enough() {
    assert!(scene::AMBIENT_LIGHT > 0.0 && scene::AMBIENT_LIGHT < 1.0);
    let [x, y, z] = scene::LIGHT_DIR;
    assert!((x * x + y * y + z * z).sqrt() > 0.5);
}
