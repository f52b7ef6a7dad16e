//! Live character counter for the item description.

use web_sys::{Document, Element, Event, HtmlTextAreaElement};

use crate::config::CounterConfig;
use crate::counter::{self, CounterReading};
use crate::dom;
use crate::error::Result;
use crate::models::CounterTier;

pub const TEXTAREA_ID: &str = "description";
pub const COUNTER_SELECTOR: &str = ".char-count";

pub fn bind(doc: &Document, config: &CounterConfig) -> Result<()> {
    let Some(textarea) = doc.get_element_by_id(TEXTAREA_ID) else {
        return Ok(());
    };
    let Some(display) = dom::query(doc, COUNTER_SELECTOR)? else {
        return Ok(());
    };
    let textarea = dom::cast::<HtmlTextAreaElement>(textarea, "textarea")?;
    let limits = config.clone();

    render(&display, &counter::read(counter::text_length(&textarea.value()), &limits))?;

    let source = textarea.clone();
    dom::listen(&textarea, "input", move |_: Event| {
        let reading = counter::read(counter::text_length(&source.value()), &limits);
        if let Err(e) = render(&display, &reading) {
            log::warn!("counter update failed: {}", e);
        }
    })
}

fn render(display: &Element, reading: &CounterReading) -> Result<()> {
    display.set_text_content(Some(&reading.text));
    for tier in CounterTier::ALL {
        if let Some(class) = tier.class() {
            dom::set_class(display, class, tier == reading.tier)?;
        }
    }
    Ok(())
}
