//! Submit buttons show a busy label while their form is in flight.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlButtonElement, SubmitEvent};

use crate::config::SubmitConfig;
use crate::dom;
use crate::error::Result;

pub const BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;

pub fn bind(doc: &Document, config: &SubmitConfig) -> Result<()> {
    let config = Rc::new(config.clone());

    for form in dom::query_all(doc, "form")? {
        let config = Rc::clone(&config);
        let owner = form.clone();
        dom::listen(&form, "submit", move |ev: SubmitEvent| {
            // Held back for confirmation; not in flight yet.
            if ev.default_prevented() {
                return;
            }
            let Ok(Some(button)) = dom::query(&owner, BUTTON_SELECTOR) else {
                return;
            };
            let Ok(button) = dom::cast::<HtmlButtonElement>(button, "button") else {
                return;
            };
            mark_busy(button, &config);
        })?;
    }
    Ok(())
}

/// Swap in the busy label and disable. If the page is still here after
/// `revert_after_ms` (e.g. the server rejected the form), undo both.
fn mark_busy(button: HtmlButtonElement, config: &SubmitConfig) {
    let original = button.inner_html();
    button.set_inner_html(&config.busy_label);
    button.set_disabled(true);

    Timeout::new(config.revert_after_ms, move || {
        if button.disabled() {
            button.set_inner_html(&original);
            button.set_disabled(false);
            log::debug!("submit button restored");
        }
    })
    .forget();
}
