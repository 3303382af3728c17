//! Page-supplied configuration
//!
//! The page may embed the client section as JSON:
//!
//! ```html
//! <script type="application/json" id="photobook-config">
//!   {"binding": "icon", "bootstrap_menus": false}
//! </script>
//! ```

use photobook::config::ClientConfig;
use web_sys::Document;

/// Id of the element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "photobook-config";

pub fn parse(text: &str) -> Result<ClientConfig, serde_json::Error> {
    serde_json::from_str(text)
}

/// Embedded configuration, or the defaults when absent or invalid
pub fn load(document: &Document) -> ClientConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return ClientConfig::default();
    };

    parse(&text).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e).into());
        ClientConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use photobook::config::Binding;

    #[test]
    fn test_parse_partial() {
        let config = parse(r#"{"binding": "icon", "include_row_id": true}"#).unwrap();
        assert_eq!(config.binding, Binding::Icon);
        assert!(config.include_row_id);
        assert_eq!(config.endpoint, "/ajax");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse(r#"{"binding": "menu"}"#).is_err());
        assert!(parse("not json").is_err());
    }
}
