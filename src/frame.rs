use crate::core::CoinAnimator;
use crate::core::Session;
use crate::render;
use crate::texture::{self, CoinFace, FaceTextureCache};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<Session>>,
    pub animator: Rc<RefCell<CoinAnimator>>,
    pub rng: Rc<RefCell<StdRng>>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub face_cache: FaceTextureCache,

    /// App clock shared with the flip handler so flight start times and
    /// per-frame times come from the same origin.
    pub clock: Rc<Instant>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let t = self.clock.elapsed().as_secs_f32();
        {
            let mut rng = self.rng.borrow_mut();
            self.animator.borrow_mut().update(t, &mut *rng);
        }

        self.refresh_face_textures();

        if let Some(g) = &mut self.gpu {
            let animator = self.animator.borrow();
            g.set_camera(animator.camera.eye, animator.camera.target);
            g.set_coin(animator.pose.position, animator.pose.rotation);
            drop(animator);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }

    // Re-rasterize a face only when its label text changed.
    fn refresh_face_textures(&mut self) {
        let (heads, tails) = {
            let session = self.session.borrow();
            (
                session.labels().heads().to_string(),
                session.labels().tails().to_string(),
            )
        };
        for (face, label) in [(CoinFace::Heads, heads), (CoinFace::Tails, tails)] {
            if self.face_cache.refresh(face, &label) {
                if let Some(g) = &mut self.gpu {
                    if let Some(pixels) = texture::render_face(&self.document, face, &label) {
                        g.upload_face(face, &pixels);
                    }
                }
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
