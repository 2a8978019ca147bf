use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach an `input` handler to a text field; the handler receives the
/// field's current value.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Ok(input) = el.clone().dyn_into::<web::HtmlInputElement>() {
            let closure = Closure::wrap(Box::new(move || {
                handler(input.value());
            }) as Box<dyn FnMut()>);
            let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Schedule a one-shot callback after `delay_ms`. Used for the flip
/// completion transition; the closure leaks, which is fine for a handful
/// of flips per session.
pub fn set_timeout(handler: impl FnOnce() + 'static, delay_ms: i32) {
    let closure = Closure::once(handler);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
    }
    closure.forget();
}
