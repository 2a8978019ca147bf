use glam::Vec3;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

// Flight tuning. The completion timer in lib.rs derives its delay from
// FLIP_DURATION so the visual landing and the state transition agree.
pub const FLIP_DURATION: f32 = 2.5;
pub const JUMP_HEIGHT: f32 = 4.5;
pub const TOTAL_SPINS: f32 = 8.0;
pub const BASE_Y: f32 = 0.0;

pub const CAMERA_NEAR_Z: f32 = 8.0;
pub const CAMERA_FAR_Z: f32 = 12.0;

// Per-frame smoothing factors (applied once per rendered frame).
pub const IDLE_RELOCK: f32 = 0.05;
pub const IDLE_SPIN_STEP: f32 = 0.006;
pub const SETTLE_ROT_FACTOR: f32 = 0.15;
pub const SETTLE_BOB_FACTOR: f32 = 0.2;
pub const CAMERA_XY_RELAX: f32 = 0.1;
pub const CAMERA_Z_RELAX: f32 = 0.05;

// Landing-impact camera shake.
pub const SHAKE_IMPULSE: f32 = 1.0;
pub const SHAKE_DECAY: f32 = 0.9;
pub const SHAKE_CUTOFF: f32 = 0.01;
pub const SHAKE_JITTER: f32 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Heads,
    Tails,
}

impl FlipOutcome {
    /// Uniform coin flip from an injected RNG.
    pub fn draw(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            FlipOutcome::Heads
        } else {
            FlipOutcome::Tails
        }
    }

    /// Final X/Z rotation offset that leaves this face pointing up.
    #[inline]
    pub fn face_up_angle(self) -> f32 {
        match self {
            FlipOutcome::Heads => 0.0,
            FlipOutcome::Tails => PI,
        }
    }
}

/// Randomized per-flip perturbations, drawn once when a flip starts and
/// held in the `Flipping` phase for its whole duration.
#[derive(Clone, Copy, Debug)]
pub struct FlipParams {
    pub tilt: Vec3,
    pub spin_y: f32,
    pub spin_z: f32,
}

impl FlipParams {
    pub fn draw(rng: &mut impl Rng) -> Self {
        Self {
            tilt: Vec3::new(
                rng.gen_range(-1.5..=1.5),
                rng.gen_range(-2.0..=2.0),
                rng.gen_range(-1.0..=1.0),
            ),
            spin_y: rng.gen_range(-3.0 * PI..=3.0 * PI),
            spin_z: rng.gen_range(-TAU..=TAU),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Phase {
    /// No flip has completed yet; gentle ambient float.
    Idle,
    /// Mid-flight. `start` is the app-clock time the flip began.
    Flipping {
        start: f32,
        outcome: FlipOutcome,
        params: FlipParams,
    },
    /// At least one flip has landed; float while holding the result face up.
    Settled { outcome: FlipOutcome },
}

#[derive(Clone, Copy, Debug)]
pub struct CoinPose {
    pub position: Vec3,
    /// Euler angles in radians, applied XYZ.
    pub rotation: Vec3,
}

#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub shake: f32,
}

/// Quartic ease-out: front-loads the spin, reaches exactly 1 at p = 1.
#[inline]
pub fn ease_out_quartic(p: f32) -> f32 {
    1.0 - (1.0 - p).powi(4)
}

/// Single symmetric arc: 0 at both endpoints, peak 1 at p = 0.5. Shapes the
/// jump height and the mid-flight wobble.
#[inline]
pub fn arc(p: f32) -> f32 {
    (p * PI).sin()
}

/// 1 at launch, 0 at landing; scales the per-flip tilt so the chaotic early
/// tumble vanishes before touchdown.
#[inline]
pub fn wobble_decay(p: f32) -> f32 {
    ((1.0 - p) * FRAC_PI_2).sin()
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Frame-driven animation state: phase, coin pose, and camera rig are all
/// explicit so `update` is a function of (time, phase-with-parameters).
pub struct CoinAnimator {
    pub phase: Phase,
    pub pose: CoinPose,
    pub camera: CameraRig,
}

impl Default for CoinAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinAnimator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            pose: CoinPose {
                position: Vec3::new(0.0, BASE_Y, 0.0),
                rotation: Vec3::ZERO,
            },
            camera: CameraRig {
                eye: Vec3::new(0.0, 0.0, CAMERA_NEAR_Z),
                target: Vec3::ZERO,
                shake: 0.0,
            },
        }
    }

    /// Start a flip toward `outcome` at app-clock time `now`. An in-flight
    /// flip restarts with the new outcome and fresh wobble params, so the
    /// animation can never lag behind the session's bookkeeping.
    pub fn begin_flip(&mut self, outcome: FlipOutcome, now: f32, rng: &mut impl Rng) {
        self.phase = Phase::Flipping {
            start: now,
            outcome,
            params: FlipParams::draw(rng),
        };
    }

    /// Advance to app-clock time `t`. The RNG is only consulted for the
    /// post-landing camera jitter.
    pub fn update(&mut self, t: f32, rng: &mut impl Rng) {
        match self.phase {
            Phase::Flipping {
                start,
                outcome,
                params,
            } => {
                let progress = ((t - start) / FLIP_DURATION).clamp(0.0, 1.0);
                self.step_flight(progress, outcome, params);
                if progress >= 1.0 {
                    self.phase = Phase::Settled { outcome };
                    self.camera.shake = SHAKE_IMPULSE;
                }
            }
            Phase::Idle => {
                self.step_idle(t);
                self.relax_camera(rng);
            }
            Phase::Settled { outcome } => {
                self.step_settled(t, outcome);
                self.relax_camera(rng);
            }
        }
    }

    fn step_flight(&mut self, progress: f32, outcome: FlipOutcome, params: FlipParams) {
        let ease = ease_out_quartic(progress);
        let jump = arc(progress);
        let decay = wobble_decay(progress);

        self.pose.position.y = jump * JUMP_HEIGHT + BASE_Y;

        // The target terms are scaled by `ease` (exactly 1 at landing) and
        // every random term by `jump`/`decay` (exactly 0 there), so the coin
        // lands dead on the outcome's face regardless of the drawn params.
        let target = outcome.face_up_angle();
        self.pose.rotation.x = TOTAL_SPINS * TAU * ease + target * ease + decay * params.tilt.x;
        self.pose.rotation.y = params.spin_y * jump + decay * params.tilt.y;
        self.pose.rotation.z = target * ease + params.spin_z * jump + decay * params.tilt.z;

        self.camera.eye.z = lerp(CAMERA_NEAR_Z, CAMERA_FAR_Z, jump);
        self.camera.target = Vec3::new(0.0, self.pose.position.y * 0.4, 0.0);
    }

    fn step_idle(&mut self, t: f32) {
        self.pose.position.y = BASE_Y + (t * 1.5).sin() * 0.15;
        self.pose.rotation.y += IDLE_SPIN_STEP;
        self.pose.rotation.x = lerp(self.pose.rotation.x, 0.0, IDLE_RELOCK);
        self.pose.rotation.z = lerp(self.pose.rotation.z, 0.0, IDLE_RELOCK);
        self.camera.target = Vec3::ZERO;
    }

    fn step_settled(&mut self, t: f32, outcome: FlipOutcome) {
        let final_x = TOTAL_SPINS * TAU + outcome.face_up_angle();
        let final_z = outcome.face_up_angle();
        self.pose.rotation.x = lerp(self.pose.rotation.x, final_x, SETTLE_ROT_FACTOR);
        self.pose.rotation.y = lerp(self.pose.rotation.y, 0.0, SETTLE_ROT_FACTOR);
        self.pose.rotation.z = lerp(self.pose.rotation.z, final_z, SETTLE_ROT_FACTOR);

        let float_y = BASE_Y + (t * 1.2).sin() * 0.12;
        self.pose.position.y = lerp(self.pose.position.y, float_y, SETTLE_BOB_FACTOR);
        self.camera.target = Vec3::ZERO;
    }

    // Landing shake jitters the eye, then everything eases back home.
    fn relax_camera(&mut self, rng: &mut impl Rng) {
        if self.camera.shake > 0.0 {
            let s = self.camera.shake;
            self.camera.eye.x = (rng.gen::<f32>() - 0.5) * SHAKE_JITTER * s;
            self.camera.eye.y = (rng.gen::<f32>() - 0.5) * SHAKE_JITTER * s;
            self.camera.shake *= SHAKE_DECAY;
            if self.camera.shake < SHAKE_CUTOFF {
                self.camera.shake = 0.0;
            }
        } else {
            self.camera.eye.x = lerp(self.camera.eye.x, 0.0, CAMERA_XY_RELAX);
            self.camera.eye.y = lerp(self.camera.eye.y, 0.0, CAMERA_XY_RELAX);
        }
        self.camera.eye.z = lerp(self.camera.eye.z, CAMERA_NEAR_Z, CAMERA_Z_RELAX);
    }
}
