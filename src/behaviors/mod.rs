//! Page Behaviors
//!
//! Independent bindings over the server-rendered marketplace markup.
//! A binding whose elements are absent does nothing; one that fails is
//! logged and the rest still attach.

pub mod anchors;
pub mod char_count;
pub mod confirm_links;
pub mod favorite;
pub mod flash;
pub mod hover;
pub mod nav;
pub mod price_input;
pub mod search;
pub mod sort_grid;
pub mod submit;

use web_sys::{Document, Event};

use crate::components::Confirmer;
use crate::config::PageConfig;
use crate::dom;
use crate::error::Result;

fn report(name: &str, result: Result<()>) {
    match result {
        Ok(()) => log::debug!("{} attached", name),
        Err(e) => log::warn!("{} not attached: {}", name, e),
    }
}

/// Attach every binding to the current document.
pub fn attach_all(doc: &Document, config: &PageConfig, confirmer: &Confirmer) {
    confirmer.mount();

    report("nav", nav::bind(doc));
    report("flash", flash::bind(doc, &config.flash));
    // Before `submit`, so held-back forms are not marked busy.
    report("confirm_links", confirm_links::bind(doc, confirmer));
    report("submit", submit::bind(doc, &config.submit));
    report("char_count", char_count::bind(doc, &config.counter));
    report("price_input", price_input::bind(doc));
    report("anchors", anchors::bind(doc));
    report("hover", hover::bind(doc));
    report("search", search::bind(doc, &config.search));
    report("sort_grid", sort_grid::bind(doc));
    report("favorite", favorite::bind(doc));

    log::info!("page behaviors ready");
}

/// `document.readyState` before `DOMContentLoaded` has fired
pub fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Attach now, or on `DOMContentLoaded` if the document is still parsing.
pub fn on_ready(doc: &Document, config: PageConfig, confirmer: Confirmer) -> Result<()> {
    if !still_parsing(&doc.ready_state()) {
        attach_all(doc, &config, &confirmer);
        return Ok(());
    }

    let page = doc.clone();
    let mut pending = Some((config, confirmer));
    dom::listen(doc, "DOMContentLoaded", move |_: Event| {
        if let Some((config, confirmer)) = pending.take() {
            attach_all(&page, &config, &confirmer);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still_parsing_only_while_loading() {
        assert!(still_parsing("loading"));
        assert!(!still_parsing("interactive"));
        assert!(!still_parsing("complete"));
    }
}
