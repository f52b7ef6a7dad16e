//! Mobile navigation toggle.

use web_sys::{Document, Element, MouseEvent};

use crate::dom;
use crate::error::Result;
use crate::models::MenuState;

pub const TOGGLE_ID: &str = "navToggle";
pub const MENU_ID: &str = "navMenu";

/// Flip the menu and return its new state
pub fn toggle(menu: &Element) -> Result<MenuState> {
    let current = MenuState::from_open(menu.class_list().contains(MenuState::OPEN_CLASS));
    let next = current.toggled();
    dom::set_class(menu, MenuState::OPEN_CLASS, next.is_open())?;
    Ok(next)
}

pub fn bind(doc: &Document) -> Result<()> {
    let (Some(toggle_button), Some(menu)) = (doc.get_element_by_id(TOGGLE_ID), doc.get_element_by_id(MENU_ID)) else {
        return Ok(());
    };

    dom::listen(&toggle_button, "click", move |_: MouseEvent| match toggle(&menu) {
        Ok(state) => log::debug!("menu {:?}", state),
        Err(e) => log::warn!("menu toggle failed: {}", e),
    })
}
