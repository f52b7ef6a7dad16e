//! Favorite heart buttons. Local visual state only, nothing is saved.

use web_sys::{Document, Element, MouseEvent};

use crate::dom;
use crate::error::Result;
use crate::models::FavoriteState;

pub const SELECTOR: &str = "[data-favorite-toggle]";

/// Flip the button between favorited and unfavorited.
pub fn toggle(button: &Element) -> Result<FavoriteState> {
    let current = FavoriteState::from_favorited(button.class_list().contains(FavoriteState::CLASS));
    let state = current.toggled();
    dom::set_class(button, FavoriteState::CLASS, state.is_favorited())?;
    if let Some(icon) = dom::query(button, "i")? {
        icon.set_class_name(state.icon_class());
    }
    Ok(state)
}

pub fn bind(doc: &Document) -> Result<()> {
    for button in dom::query_all(doc, SELECTOR)? {
        let target = button.clone();
        dom::listen(&button, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            match toggle(&target) {
                Ok(state) => log::debug!("favorite -> {:?}", state),
                Err(e) => log::warn!("favorite toggle failed: {}", e),
            }
        })?;
    }
    Ok(())
}
