//! Debounced search-as-you-type.
//!
//! Every search input owns its debounce state and pending timer inside its
//! listener, so two search boxes on one page never cancel each other.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Event, HtmlInputElement};

use crate::config::SearchConfig;
use crate::counter::text_length;
use crate::dom;
use crate::error::Result;
use crate::search::SearchDebounce;

pub const SELECTOR: &str = r#"input[name="search"]"#;

pub fn bind(doc: &Document, config: &SearchConfig) -> Result<()> {
    for input in dom::query_all(doc, SELECTOR)? {
        let input = dom::cast::<HtmlInputElement>(input, "input")?;
        let field = input.clone();
        let state = Rc::new(RefCell::new(SearchDebounce::new(config.debounce_ms, config.min_chars)));
        let mut pending: Option<Timeout> = None;

        dom::listen(&input, "input", move |_: Event| {
            if let Some(previous) = pending.take() {
                previous.cancel();
            }

            let ticket = state.borrow_mut().input(js_sys::Date::now());
            let quiet_ms = state.borrow().quiet_ms();
            let field = field.clone();
            let state = Rc::clone(&state);
            pending = Some(Timeout::new(quiet_ms, move || {
                let length = text_length(&field.value());
                if !state.borrow_mut().fire(&ticket, length) {
                    return;
                }
                if let Some(form) = field.form() {
                    log::debug!("submitting search ({} chars)", length);
                    if let Err(e) = form.submit() {
                        log::warn!("search submit failed: {:?}", e);
                    }
                }
            }));
        })?;
    }
    Ok(())
}
