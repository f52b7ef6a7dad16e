//! Page Globals
//!
//! `sortItems`, `confirmAction` and `toggleFavorite` on `window`, for
//! inline handlers in the server templates.

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

use crate::behaviors::{favorite, sort_grid};
use crate::components::Confirmer;
use crate::dom;
use crate::error::Result;
use crate::models::SortMode;

fn set_global<T: ?Sized + WasmClosure>(window: &Window, name: &str, closure: Closure<T>) -> Result<()> {
    js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

pub fn install(window: &Window, confirmer: Confirmer) -> Result<()> {
    // sortItems(sortBy): reorder the grid, unknown modes sort newest first
    let sort_items = Closure::<dyn Fn(JsValue)>::new(|sort_by: JsValue| {
        let mode = SortMode::parse(&sort_by.as_string().unwrap_or_default());
        if let Err(e) = dom::document().and_then(|doc| sort_grid::sort_items(&doc, mode)) {
            log::warn!("sortItems failed: {}", e);
        }
    });
    set_global(window, "sortItems", sort_items)?;

    // confirmAction(message): Promise<boolean>
    let confirm_action = Closure::<dyn Fn(JsValue) -> js_sys::Promise>::new(move |message: JsValue| {
        confirmer.request(message.as_string())
    });
    set_global(window, "confirmAction", confirm_action)?;

    // toggleFavorite(button): new favorited state, undefined if not an element
    let toggle_favorite = Closure::<dyn Fn(JsValue) -> JsValue>::new(|button: JsValue| {
        let Ok(button) = button.dyn_into::<Element>() else {
            return JsValue::UNDEFINED;
        };
        match favorite::toggle(&button) {
            Ok(state) => JsValue::from_bool(state.is_favorited()),
            Err(e) => {
                log::warn!("toggleFavorite failed: {}", e);
                JsValue::UNDEFINED
            }
        }
    });
    set_global(window, "toggleFavorite", toggle_favorite)?;

    Ok(())
}
