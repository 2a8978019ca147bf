#![cfg(target_arch = "wasm32")]
use crate::core::{coin, CoinAnimator, FaceLabels, Session};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod frame;
mod render;
mod texture;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

struct FlipWiring {
    document: web::Document,
    session: Rc<RefCell<Session>>,
    animator: Rc<RefCell<CoinAnimator>>,
    rng: Rc<RefCell<StdRng>>,
    clock: Rc<Instant>,
    audio_ctx: Option<web::AudioContext>,
    strings: &'static core::Strings,
}

fn wire_flip_button(wiring: FlipWiring) {
    let FlipWiring {
        document,
        session,
        animator,
        rng,
        clock,
        audio_ctx,
        strings,
    } = wiring;
    let doc = document.clone();
    dom::add_click_listener(&document, "flip-btn", move || {
        // Re-entrant requests while a flip is in flight are no-ops.
        let outcome = match session.borrow_mut().request_flip() {
            Some(o) => o,
            None => return,
        };
        // The flip gesture doubles as the audio unlock gesture.
        if let Some(ctx) = &audio_ctx {
            audio::resume(ctx);
            audio::play_flip_sound(ctx);
        }
        let now = clock.elapsed().as_secs_f32();
        animator
            .borrow_mut()
            .begin_flip(outcome, now, &mut *rng.borrow_mut());
        ui::set_flip_enabled(&doc, false);
        log::info!("flip started: {:?}", outcome);

        // One-shot landing transition, timed from the same duration constant
        // the per-frame progress clamp uses.
        let session_done = session.clone();
        let audio_done = audio_ctx.clone();
        let doc_done = doc.clone();
        dom::set_timeout(
            move || {
                if let Some(ctx) = &audio_done {
                    audio::play_land_sound(ctx);
                }
                let mut s = session_done.borrow_mut();
                if let Some(record) = s.complete_flip(js_sys::Date::now()) {
                    log::info!("flip landed: {:?} \"{}\"", record.outcome, record.label);
                }
                ui::render_history(&doc_done, &s, strings);
                drop(s);
                ui::set_flip_enabled(&doc_done, true);
            },
            (coin::FLIP_DURATION * 1000.0) as i32,
        );
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("coinflip-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    // Pick the UI language once from the browser tag.
    let lang = core::detect(&window.navigator().language().unwrap_or_default());
    let strings = core::strings(lang);
    ui::apply_strings(&document, strings);
    let (heads_default, tails_default) = core::default_labels(lang);
    ui::set_input_value(&document, "heads-input", heads_default);
    ui::set_input_value(&document, "tails-input", tails_default);

    let seed = js_sys::Date::now() as u64;
    let session = Rc::new(RefCell::new(Session::new(
        FaceLabels::new(heads_default, tails_default),
        seed,
    )));
    let animator = Rc::new(RefCell::new(CoinAnimator::new()));
    let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(
        seed.rotate_left(17) ^ 0x9E37_79B9_7F4A_7C15,
    )));
    let clock = Rc::new(Instant::now());
    let audio_ctx = audio::create_context();

    ui::render_history(&document, &session.borrow(), strings);

    // Label edits take effect on the next flip and retexture the coin.
    {
        let session_heads = session.clone();
        dom::add_input_listener(&document, "heads-input", move |value| {
            session_heads.borrow_mut().labels_mut().set_heads(&value);
        });
        let session_tails = session.clone();
        dom::add_input_listener(&document, "tails-input", move |value| {
            session_tails.borrow_mut().labels_mut().set_tails(&value);
        });
    }

    wire_flip_button(FlipWiring {
        document: document.clone(),
        session: session.clone(),
        animator: animator.clone(),
        rng: rng.clone(),
        clock: clock.clone(),
        audio_ctx,
        strings,
    });

    // Renderer loop driven by requestAnimationFrame; the app stays usable
    // (history, sounds) even if WebGPU is unavailable.
    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        animator,
        rng,
        canvas,
        document,
        gpu,
        face_cache: Default::default(),
        clock,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
