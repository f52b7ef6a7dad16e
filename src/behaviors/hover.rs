//! Card elevation on hover.

use web_sys::{Document, MouseEvent};

use crate::dom;
use crate::error::Result;

pub const SELECTOR: &str = ".item-card, .listing-card";
pub const ELEVATED_CLASS: &str = "is-elevated";

pub fn bind(doc: &Document) -> Result<()> {
    for card in dom::query_all(doc, SELECTOR)? {
        let entered = card.clone();
        dom::listen(&card, "mouseenter", move |_: MouseEvent| {
            if let Err(e) = dom::set_class(&entered, ELEVATED_CLASS, true) {
                log::warn!("card elevate failed: {}", e);
            }
        })?;

        let left = card.clone();
        dom::listen(&card, "mouseleave", move |_: MouseEvent| {
            if let Err(e) = dom::set_class(&left, ELEVATED_CLASS, false) {
                log::warn!("card reset failed: {}", e);
            }
        })?;
    }
    Ok(())
}
