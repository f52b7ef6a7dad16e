//! Two-decimal formatting of the price field on blur.

use web_sys::{Document, FocusEvent, HtmlInputElement};

use crate::dom;
use crate::error::Result;
use crate::price;

pub const SELECTOR: &str = r#"input[name="price"]"#;

pub fn bind(doc: &Document) -> Result<()> {
    let Some(input) = dom::query(doc, SELECTOR)? else {
        return Ok(());
    };
    let input = dom::cast::<HtmlInputElement>(input, "input")?;

    let field = input.clone();
    dom::listen(&input, "blur", move |_: FocusEvent| {
        let value = field.value();
        match price::normalize_price(&value) {
            Some(normalized) => field.set_value(&normalized),
            None if !value.is_empty() => log::debug!("leaving non-numeric price {:?}", value),
            None => {}
        }
    })
}
