//! Behavior Errors
//!
//! Failures of the DOM API while attaching or running a binding.
//! Missing page elements are not errors; bindings skip them.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("invalid selector `{0}`")]
    InvalidSelector(String),

    #[error("element is not a {0}")]
    UnexpectedElement(&'static str),

    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        BehaviorError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, BehaviorError>;
