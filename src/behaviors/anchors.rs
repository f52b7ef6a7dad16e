//! Smooth scrolling for in-page anchor links.

use web_sys::{Document, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;
use crate::error::Result;

pub const SELECTOR: &str = r##"a[href^="#"]"##;

pub fn bind(doc: &Document) -> Result<()> {
    for anchor in dom::query_all(doc, SELECTOR)? {
        let link = anchor.clone();
        let page = doc.clone();
        dom::listen(&anchor, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; nothing to scroll to.
            if let Ok(Some(target)) = dom::query(&page, &href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}
