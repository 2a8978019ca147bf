use web_sys as web;

// Tone scheduling parameters: an optional exponential frequency sweep plus
// a linear-attack / exponential-release gain envelope. Envelope numbers for
// the two cues live in `play_flip_sound` / `play_land_sound`.
struct ToneSpec {
    waveform: web::OscillatorType,
    start_hz: f32,
    sweep: Option<(f32, f64)>, // (end hz, sweep seconds)
    peak: f32,
    attack_sec: f64,
    release_end_sec: f64,
}

/// Create the shared output context. Browsers may refuse until a user
/// gesture; failure here just means the app runs silent.
pub fn create_context() -> Option<web::AudioContext> {
    match web::AudioContext::new() {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            log::warn!("AudioContext unavailable, running silent: {:?}", e);
            None
        }
    }
}

/// Unlock the output device in response to a user gesture. Fire-and-forget;
/// a rejected promise leaves the app silent rather than broken.
pub fn resume(ctx: &web::AudioContext) {
    if ctx.state() == web::AudioContextState::Suspended {
        _ = ctx.resume();
    }
}

fn schedule_tone(ctx: &web::AudioContext, spec: &ToneSpec) {
    let src = match web::OscillatorNode::new(ctx) {
        Ok(s) => s,
        Err(e) => {
            log::error!("OscillatorNode error: {:?}", e);
            return;
        }
    };
    src.set_type(spec.waveform);
    let now = ctx.current_time();
    _ = src.frequency().set_value_at_time(spec.start_hz, now);
    if let Some((end_hz, sweep_sec)) = spec.sweep {
        _ = src
            .frequency()
            .exponential_ramp_to_value_at_time(end_hz, now + sweep_sec);
    }

    let gain = match web::GainNode::new(ctx) {
        Ok(g) => g,
        Err(e) => {
            log::error!("GainNode error: {:?}", e);
            return;
        }
    };
    if spec.attack_sec > 0.0 {
        _ = gain.gain().set_value_at_time(0.0, now);
        _ = gain
            .gain()
            .linear_ramp_to_value_at_time(spec.peak, now + spec.attack_sec);
    } else {
        _ = gain.gain().set_value_at_time(spec.peak, now);
    }
    // Exponential release cannot hit zero; 0.001 is inaudible.
    _ = gain
        .gain()
        .exponential_ramp_to_value_at_time(0.001, now + spec.release_end_sec);

    _ = src.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&ctx.destination());
    _ = src.start();
    _ = src.stop_with_when(now + spec.release_end_sec + 0.05);
}

/// Launch cue: a rising sine sweep layered with a short percussive click.
pub fn play_flip_sound(ctx: &web::AudioContext) {
    schedule_tone(
        ctx,
        &ToneSpec {
            waveform: web::OscillatorType::Sine,
            start_hz: 400.0,
            sweep: Some((1600.0, 0.3)),
            peak: 0.15,
            attack_sec: 0.05,
            release_end_sec: 0.4,
        },
    );
    schedule_tone(
        ctx,
        &ToneSpec {
            waveform: web::OscillatorType::Square,
            start_hz: 2000.0,
            sweep: None,
            peak: 0.05,
            attack_sec: 0.0,
            release_end_sec: 0.02,
        },
    );
}

/// Landing cue: a low impact thud layered with a high confirmation chirp.
pub fn play_land_sound(ctx: &web::AudioContext) {
    schedule_tone(
        ctx,
        &ToneSpec {
            waveform: web::OscillatorType::Triangle,
            start_hz: 150.0,
            sweep: Some((60.0, 0.15)),
            peak: 0.3,
            attack_sec: 0.0,
            release_end_sec: 0.2,
        },
    );
    schedule_tone(
        ctx,
        &ToneSpec {
            waveform: web::OscillatorType::Sine,
            start_hz: 1200.0,
            sweep: Some((800.0, 0.05)),
            peak: 0.08,
            attack_sec: 0.0,
            release_end_sec: 0.08,
        },
    );
}
