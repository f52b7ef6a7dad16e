//! Confirm Dialog Component
//!
//! Non-blocking yes/no modal. A request returns a promise that resolves
//! to `true` on Continue and `false` on Cancel, Escape or a click outside.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// A question waiting for an answer
#[derive(Clone)]
pub struct PendingConfirm {
    pub message: String,
    resolve: js_sys::Function,
}

impl PendingConfirm {
    fn settle(self, answer: bool) {
        let _ = self.resolve.call1(&JsValue::NULL, &JsValue::from_bool(answer));
    }
}

/// The single pending question, if any
pub type ConfirmSlot = RwSignal<Option<PendingConfirm>, LocalStorage>;

/// `message`, or `default` when it is missing or empty
pub fn resolve_message(message: Option<String>, default: &str) -> String {
    message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Handle used by page globals and bindings to ask the user
#[derive(Clone)]
pub struct Confirmer {
    slot: ConfirmSlot,
    default_message: Rc<str>,
}

impl Confirmer {
    pub fn new(default_message: &str) -> Self {
        Self {
            slot: RwSignal::new_local(None),
            default_message: Rc::from(default_message),
        }
    }

    /// Render the (hidden) dialog host at the end of `<body>`
    pub fn mount(&self) {
        let slot = self.slot;
        mount_to_body(move || view! { <ConfirmDialog pending=slot /> });
    }

    /// Ask and return a `Promise<boolean>`. An unanswered earlier
    /// question is answered `false` first.
    pub fn request(&self, message: Option<String>) -> js_sys::Promise {
        let message = resolve_message(message, &self.default_message);
        let slot = self.slot;
        js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(previous) = slot.get_untracked() {
                previous.settle(false);
            }
            slot.set(Some(PendingConfirm { message: message.clone(), resolve }));
        })
    }

    /// Ask and wait for the answer
    pub async fn ask(&self, message: Option<String>) -> bool {
        JsFuture::from(self.request(message))
            .await
            .ok()
            .and_then(|answer| answer.as_bool())
            .unwrap_or(false)
    }
}

/// Modal bound to a [`ConfirmSlot`]; shown while a question is pending.
///
/// The prop is not called `slot`: `view!` reserves that attribute name.
#[component]
pub fn ConfirmDialog(pending: ConfirmSlot) -> impl IntoView {
    let settle = move |answer: bool| {
        if let Some(question) = pending.get_untracked() {
            pending.set(None);
            question.settle(answer);
        }
    };

    let _ = window_event_listener(leptos::ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            settle(false);
        }
    });

    view! {
        <Show when=move || pending.with(Option::is_some)>
            <div class="confirm-overlay" on:click=move |_| settle(false)>
                <div
                    class="confirm-dialog"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <p class="confirm-message">
                        {move || pending.with(|p| p.as_ref().map(|p| p.message.clone()).unwrap_or_default())}
                    </p>
                    <div class="confirm-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| settle(false)>
                            "Cancel"
                        </button>
                        <button type="button" class="btn btn-danger" on:click=move |_| settle(true)>
                            "Continue"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIRM_MESSAGE;

    #[test]
    fn test_resolve_message() {
        assert_eq!(resolve_message(None, DEFAULT_CONFIRM_MESSAGE), "Are you sure you want to continue?");
        assert_eq!(resolve_message(Some(String::new()), DEFAULT_CONFIRM_MESSAGE), DEFAULT_CONFIRM_MESSAGE);
        assert_eq!(resolve_message(Some("Delete this item?".into()), DEFAULT_CONFIRM_MESSAGE), "Delete this item?");
    }
}
