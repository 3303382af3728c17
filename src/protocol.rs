//! Reply contract of the `/ajax` endpoint
//!
//! Field names follow the server's JSON exactly; they are part of the
//! external contract.

use serde::{Deserialize, Deserializer, Serialize};

/// One menu entry.
///
/// The server sends `{"Items": "<label>", "Flag": false}` objects; bare
/// string labels are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuEntry {
    Label(String),
    Item {
        #[serde(rename = "Items")]
        items: String,
        #[serde(rename = "Flag", default)]
        flag: bool,
    },
}

impl MenuEntry {
    pub fn item(label: impl Into<String>) -> Self {
        MenuEntry::Item {
            items: label.into(),
            flag: false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Label(label) => label,
            MenuEntry::Item { items, .. } => items,
        }
    }
}

/// Menu bootstrap reply: two ordered label lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuResponse {
    #[serde(rename = "MenuItemsLeft", default, deserialize_with = "null_as_empty")]
    pub left: Vec<MenuEntry>,

    #[serde(rename = "MenuItemsRight", default, deserialize_with = "null_as_empty")]
    pub right: Vec<MenuEntry>,
}

impl MenuResponse {
    /// Build from plain labels
    pub fn from_labels<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            left: left.into_iter().map(|l| MenuEntry::Label(l.into())).collect(),
            right: right.into_iter().map(|l| MenuEntry::Label(l.into())).collect(),
        }
    }

    /// Interpret an already-decoded reply body
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    pub fn left_labels(&self) -> impl Iterator<Item = &str> {
        self.left.iter().map(MenuEntry::label)
    }

    pub fn right_labels(&self) -> impl Iterator<Item = &str> {
        self.right.iter().map(MenuEntry::label)
    }
}

// A nil slice on the server side arrives as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<MenuEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<MenuEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_shaped_entries() {
        let reply = json!({
            "Title": "PhotoBook",
            "MenuItemsLeft": [{"Items": "My Account", "Flag": false}, {"Items": "Quit", "Flag": false}],
            "MenuItemsRight": [{"Items": "Upload Image", "Flag": true}],
        });

        let menus = MenuResponse::from_value(&reply).unwrap();
        assert_eq!(menus.left_labels().collect::<Vec<_>>(), vec!["My Account", "Quit"]);
        assert_eq!(menus.right_labels().collect::<Vec<_>>(), vec!["Upload Image"]);
    }

    #[test]
    fn test_bare_labels_and_missing_fields() {
        let menus = MenuResponse::from_value(&json!({"MenuItemsLeft": ["Home", "Albums"]})).unwrap();
        assert_eq!(menus.left_labels().collect::<Vec<_>>(), vec!["Home", "Albums"]);
        assert!(menus.right.is_empty());
    }

    #[test]
    fn test_null_lists_are_empty() {
        let menus =
            MenuResponse::from_value(&json!({"MenuItemsLeft": null, "MenuItemsRight": null})).unwrap();
        assert_eq!(menus, MenuResponse::default());
    }

    #[test]
    fn test_malformed_reply_rejected() {
        assert!(MenuResponse::from_value(&json!("Success")).is_err());
        assert!(MenuResponse::from_value(&json!({"MenuItemsLeft": 5})).is_err());
        assert!(MenuResponse::from_value(&json!({"MenuItemsLeft": [{"Flag": true}]})).is_err());
    }

    #[test]
    fn test_from_labels_preserves_order() {
        let menus = MenuResponse::from_labels(["b", "a", "b"], Vec::<String>::new());
        assert_eq!(menus.left_labels().collect::<Vec<_>>(), vec!["b", "a", "b"]);
    }
}
