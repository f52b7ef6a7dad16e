//! Page Configuration
//!
//! Timings, limits and labels for the page bindings. Every field has a
//! default, so a page only needs to supply what it overrides.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Global object checked first for configuration
pub const CONFIG_GLOBAL: &str = "pageBehaviorsConfig";
/// JSON script element checked second
pub const CONFIG_SCRIPT_ID: &str = "page-behaviors-config";

pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure you want to continue?";
pub const DEFAULT_BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Processing..."#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub flash: FlashConfig,
    pub submit: SubmitConfig,
    pub counter: CounterConfig,
    pub search: SearchConfig,
    pub confirm: ConfirmConfig,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlashConfig {
    /// Delay before a flash message starts fading out
    pub dismiss_after_ms: u32,
    /// Fade-out duration before the element is removed
    pub remove_after_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitConfig {
    /// Restore the submit button if the page is still here after this long
    pub revert_after_ms: u32,
    /// Markup shown in the submit button while the form is in flight
    pub busy_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    pub max_chars: usize,
    /// Warning tier once fewer than this many characters remain
    pub warning_below: usize,
    /// Danger tier once fewer than this many characters remain
    pub danger_below: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub debounce_ms: u32,
    /// Shortest non-empty query that triggers a submit
    pub min_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfirmConfig {
    pub default_message: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            flash: FlashConfig::default(),
            submit: SubmitConfig::default(),
            counter: CounterConfig::default(),
            search: SearchConfig::default(),
            confirm: ConfirmConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self { dismiss_after_ms: 5000, remove_after_ms: 300 }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            revert_after_ms: 5000,
            busy_label: DEFAULT_BUSY_LABEL.to_string(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { max_chars: 500, warning_below: 100, danger_below: 50 }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 500, min_chars: 3 }
    }
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self { default_message: DEFAULT_CONFIRM_MESSAGE.to_string() }
    }
}

impl PageConfig {
    /// Parse a JSON document, falling back to defaults for missing fields
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Decode a JS object such as `window.pageBehaviorsConfig`
    pub fn from_js(value: JsValue) -> Result<Self, serde_wasm_bindgen::Error> {
        serde_wasm_bindgen::from_value(value)
    }

    /// Unknown level names fall back to `info`
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Load from the page: global object, then JSON script, then defaults.
    pub fn load(window: &web_sys::Window, document: &web_sys::Document) -> Self {
        if let Ok(value) = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) {
            if value.is_object() {
                match Self::from_js(value) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("ignoring window.{}: {}", CONFIG_GLOBAL, e),
                }
            }
        }

        if let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) {
            let text = script.text_content().unwrap_or_default();
            match Self::from_json(&text) {
                Ok(config) => return config,
                Err(e) => log::warn!("ignoring #{}: {}", CONFIG_SCRIPT_ID, e),
            }
        }

        Self::default()
    }
}
