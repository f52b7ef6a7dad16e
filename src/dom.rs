//! DOM Helpers
//!
//! Thin wrappers over web-sys for lookups and listener registration.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, Window};

use crate::error::{BehaviorError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(BehaviorError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(BehaviorError::NoDocument)
}

/// First element matching `selector` under `root`
pub fn query(root: &impl AsRef<web_sys::Node>, selector: &str) -> Result<Option<Element>> {
    let node = root.as_ref();
    let found = if let Some(doc) = node.dyn_ref::<Document>() {
        doc.query_selector(selector)
    } else if let Some(el) = node.dyn_ref::<Element>() {
        el.query_selector(selector)
    } else {
        return Ok(None);
    };
    found.map_err(|_| BehaviorError::InvalidSelector(selector.to_string()))
}

/// All elements matching `selector` under `root`, as a snapshot
pub fn query_all(root: &impl AsRef<web_sys::Node>, selector: &str) -> Result<Vec<Element>> {
    let node = root.as_ref();
    let list = if let Some(doc) = node.dyn_ref::<Document>() {
        doc.query_selector_all(selector)
    } else if let Some(el) = node.dyn_ref::<Element>() {
        el.query_selector_all(selector)
    } else {
        return Ok(Vec::new());
    };
    let list = list.map_err(|_| BehaviorError::InvalidSelector(selector.to_string()))?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Cast an element, failing with the expected type name
pub fn cast<T: JsCast>(element: Element, expected: &'static str) -> Result<T> {
    element.dyn_into::<T>().map_err(|_| BehaviorError::UnexpectedElement(expected))
}

/// Attach a listener for the lifetime of the page.
///
/// The closure is leaked on purpose: bindings live until navigation.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Add or remove `class` depending on `on`
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    if on {
        element.class_list().add_1(class)?;
    } else {
        element.class_list().remove_1(class)?;
    }
    Ok(())
}
