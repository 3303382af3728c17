//! Page DOM
//!
//! `Dom` implementation over the live document.

use photobook::render::{Dom, DomError, ElementSpec};
use wasm_bindgen::JsValue;
use web_sys::Document;

pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

fn js_error(e: JsValue) -> DomError {
    DomError::Operation(format!("{:?}", e))
}

impl Dom for WebDom {
    fn append(&self, mount_id: &str, element: &ElementSpec) -> Result<(), DomError> {
        let mount = self
            .document
            .get_element_by_id(mount_id)
            .ok_or_else(|| DomError::MissingMount(mount_id.to_string()))?;

        let node = self
            .document
            .create_element(element.kind.tag())
            .map_err(js_error)?;
        node.set_class_name(&element.class);
        if let Some(href) = &element.href {
            node.set_attribute("href", href).map_err(js_error)?;
        }
        node.set_text_content(Some(&element.text));

        mount.append_child(&node).map_err(js_error)?;
        Ok(())
    }
}
