//! Photobook browser fragment
//!
//! Binds the Photobook click router to the page rendered by the server-side
//! templates. Built with trunk into WebAssembly and loaded by the admin and
//! user home pages.
//!
//! # Lifecycle
//!
//! On document ready: log "Loaded", attach one delegated click listener to
//! the configured container and, when enabled, request the menu items.

use std::rc::Rc;

use photobook::dispatch::EventRouter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, DocumentReadyState};

mod api;
mod config;
mod console;
mod dom;
mod events;

use api::client::GlooTransport;
use console::ConsoleSink;
use dom::WebDom;

/// Router as wired in the browser
pub type PageRouter = EventRouter<GlooTransport, WebDom, ConsoleSink>;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    if let Err(e) = start() {
        web_sys::console::error_1(&e);
    }
}

fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| js_sys::Error::new("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| js_sys::Error::new("no document on window"))?;

    if document.ready_state() == DocumentReadyState::Loading {
        let doc = document.clone();
        let on_ready = Closure::once(move || {
            if let Err(e) = init(&doc) {
                web_sys::console::error_1(&e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        init(&document)?;
    }

    Ok(())
}

fn init(document: &Document) -> Result<(), JsValue> {
    let config = config::load(document);
    let router: Rc<PageRouter> = Rc::new(EventRouter::new(
        config,
        GlooTransport::new(),
        WebDom::new(document.clone()),
        ConsoleSink,
    ));

    events::attach(Rc::clone(&router), document)?;
    router.logger().log("Loaded");

    if router.config().bootstrap_menus {
        let router = Rc::clone(&router);
        spawn_local(async move {
            router.bootstrap_menus().await;
        });
    }

    Ok(())
}
