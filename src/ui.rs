use crate::core::session::{FlipRecord, Session};
use crate::core::{FlipOutcome, Strings, LABEL_MAX_CHARS};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Apply the chosen language's strings to the static panel text.
pub fn apply_strings(document: &web::Document, strings: &Strings) {
    let set_text = |id: &str, text: &str| {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    };
    set_text("app-title", strings.app_title);
    set_text("settings-title", strings.settings);
    set_text("heads-field-label", strings.heads_text);
    set_text("tails-field-label", strings.tails_text);
    set_text("history-title", strings.recent_tosses);
    set_text("flip-btn", strings.flip);
}

pub fn set_flip_enabled(document: &web::Document, enabled: bool) {
    if let Some(el) = document.get_element_by_id("flip-btn") {
        if let Some(btn) = el.dyn_ref::<web::HtmlButtonElement>() {
            btn.set_disabled(!enabled);
        }
    }
}

pub fn set_input_value(document: &web::Document, element_id: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_max_length(LABEL_MAX_CHARS as i32);
            input.set_value(value);
        }
    }
}

fn time_of_day(timestamp_ms: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(timestamp_ms));
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

fn history_row(record: &FlipRecord, strings: &Strings) -> String {
    let (class, outcome_text) = match record.outcome {
        FlipOutcome::Heads => ("heads", strings.heads),
        FlipOutcome::Tails => ("tails", strings.tails),
    };
    format!(
        "<li class='history-row {}'><span class='outcome'>{}</span>\
         <span class='label'>{}</span><span class='time'>{}</span></li>",
        class,
        outcome_text.to_uppercase(),
        escape_html(&record.label),
        time_of_day(record.timestamp_ms)
    )
}

/// Rebuild the history list, newest entry first.
pub fn render_history(document: &web::Document, session: &Session, strings: &Strings) {
    if let Some(el) = document.get_element_by_id("history-list") {
        if session.history().is_empty() {
            el.set_inner_html(&format!(
                "<li class='history-empty'>{}</li>",
                strings.no_history
            ));
            return;
        }
        let rows: String = session
            .history()
            .iter()
            .map(|r| history_row(r, strings))
            .collect();
        el.set_inner_html(&rows);
    }
}

// Labels are arbitrary user text going into innerHTML.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
