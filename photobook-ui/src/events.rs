//! Delegated click handling
//!
//! One listener on the container covers rows and icons added after page
//! load. Clicks outside the delegate selector are ignored.

use std::rc::Rc;

use photobook::dispatch::ClickTarget;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlTableRowElement};

use crate::PageRouter;

/// Bind the delegated listener. Called once per page load; never unbound.
pub fn attach(router: Rc<PageRouter>, document: &Document) -> Result<(), JsValue> {
    let config = router.config();
    let container = document
        .query_selector(&config.container_selector)?
        .ok_or_else(|| {
            js_sys::Error::new(&format!("container not found: {}", config.container_selector))
        })?;
    let delegate = config.delegate_selector.clone();

    let callback = Closure::<dyn Fn(Event)>::new(move |event: Event| {
        let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if !matches!(element.closest(&delegate), Ok(Some(_))) {
            return;
        }

        let target = click_target(&element);
        let router = Rc::clone(&router);
        spawn_local(async move {
            router.handle_click(&target).await;
        });
    });

    container.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Capture what the router needs from a clicked element
pub fn click_target(element: &Element) -> ClickTarget {
    ClickTarget {
        tag_name: element.tag_name(),
        text: element.text_content().unwrap_or_default(),
        row_id: row_id(element),
    }
}

// Row element id, or the row index when the row has none.
fn row_id(element: &Element) -> Option<String> {
    let row = element.closest("tr").ok()??;
    let id = row.id();
    if !id.is_empty() {
        return Some(id);
    }
    row.dyn_ref::<HtmlTableRowElement>()
        .map(|r| r.row_index().to_string())
}
