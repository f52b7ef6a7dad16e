//! Client-side reordering of the marketplace grid.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlSelectElement};

use crate::dom;
use crate::error::Result;
use crate::models::{ListingKeys, SortMode};
use crate::price::parse_float;
use crate::sorting::sort_listings;

pub const GRID_ID: &str = "itemsGrid";
pub const ITEM_CLASS: &str = "marketplace-item";
pub const SELECT_SELECTOR: &str = r#"select[name="sort"], #sortSelect"#;

/// `data-price` / `data-date` of a listing; unreadable values are NaN.
fn listing_keys(item: &Element) -> ListingKeys {
    let read = |name: &str| {
        item.get_attribute(name)
            .and_then(|raw| parse_float(&raw))
            .unwrap_or(f64::NAN)
    };
    ListingKeys {
        price: read("data-price"),
        date: read("data-date"),
    }
}

/// Reorder `#itemsGrid` by `mode`. Returns how many items were placed;
/// zero when the grid is missing.
pub fn sort_items(doc: &Document, mode: SortMode) -> Result<usize> {
    let Some(grid) = doc.get_element_by_id(GRID_ID) else {
        return Ok(0);
    };

    let collection = grid.get_elements_by_class_name(ITEM_CLASS);
    let mut listings: Vec<(ListingKeys, Element)> = (0..collection.length())
        .filter_map(|i| collection.item(i))
        .map(|item| (listing_keys(&item), item))
        .collect();

    sort_listings(&mut listings, mode);

    grid.set_inner_html("");
    for (_, item) in &listings {
        grid.append_child(item)?;
    }
    log::debug!("sorted {} items by {}", listings.len(), mode.as_str());
    Ok(listings.len())
}

pub fn bind(doc: &Document) -> Result<()> {
    for select in dom::query_all(doc, SELECT_SELECTOR)? {
        let page = doc.clone();
        dom::listen(&select, "change", move |ev: Event| {
            let Some(select) = ev.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
                return;
            };
            if let Err(e) = sort_items(&page, SortMode::parse(&select.value())) {
                log::warn!("sort failed: {}", e);
            }
        })?;
    }
    Ok(())
}
