//! Links and forms marked `data-confirm` wait for the confirm dialog.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlFormElement, MouseEvent, SubmitEvent};

use crate::components::Confirmer;
use crate::dom;
use crate::error::Result;

pub const ATTRIBUTE: &str = "data-confirm";
pub const LINK_SELECTOR: &str = "a[data-confirm]";
pub const FORM_SELECTOR: &str = "form[data-confirm]";

pub fn bind(doc: &Document, confirmer: &Confirmer) -> Result<()> {
    for link in dom::query_all(doc, LINK_SELECTOR)? {
        let confirmer = confirmer.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let message = anchor.get_attribute(ATTRIBUTE);
            let confirmer = confirmer.clone();
            spawn_local(async move {
                if !confirmer.ask(message).await {
                    return;
                }
                if let Err(e) = dom::window().and_then(|w| Ok(w.location().set_href(&href)?)) {
                    log::warn!("navigation to {} failed: {}", href, e);
                }
            });
        })?;
    }

    for form in dom::query_all(doc, FORM_SELECTOR)? {
        let form = dom::cast::<HtmlFormElement>(form, "form")?;
        let confirmer = confirmer.clone();
        let owner = form.clone();
        // Set once the user agreed, so the resubmission goes through.
        let confirmed = Rc::new(Cell::new(false));

        dom::listen(&form, "submit", move |ev: SubmitEvent| {
            if confirmed.replace(false) {
                return;
            }
            ev.prevent_default();

            let message = owner.get_attribute(ATTRIBUTE);
            let confirmer = confirmer.clone();
            let owner = owner.clone();
            let confirmed = Rc::clone(&confirmed);
            spawn_local(async move {
                if !confirmer.ask(message).await {
                    return;
                }
                confirmed.set(true);
                if let Err(e) = owner.request_submit() {
                    confirmed.set(false);
                    log::warn!("confirmed form resubmit failed: {:?}", e);
                }
            });
        })?;
    }
    Ok(())
}
