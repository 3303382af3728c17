//! Menu items
//!
//! Left-menu labels become anchors, right-menu labels become list items.

use crate::config::ClientConfig;
use crate::protocol::MenuResponse;

use super::dom::ElementSpec;

/// Which navigation menu an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSide {
    Left,
    Right,
}

/// Mount points and classes for both menus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    pub left_mount_id: String,
    pub right_mount_id: String,
    pub left_item_class: String,
    pub right_item_class: String,
}

impl MenuLayout {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            left_mount_id: config.left_mount_id.clone(),
            right_mount_id: config.right_mount_id.clone(),
            left_item_class: config.left_item_class.clone(),
            right_item_class: config.right_item_class.clone(),
        }
    }

    pub fn mount_id(&self, side: MenuSide) -> &str {
        match side {
            MenuSide::Left => &self.left_mount_id,
            MenuSide::Right => &self.right_mount_id,
        }
    }
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

/// One navigation entry waiting to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub side: MenuSide,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, side: MenuSide) -> Self {
        Self {
            label: label.into(),
            side,
        }
    }

    /// All items of a reply: left entries first, then right, each in
    /// received order
    pub fn from_response(menus: &MenuResponse) -> Vec<MenuItem> {
        menus
            .left_labels()
            .map(|l| MenuItem::new(l, MenuSide::Left))
            .chain(menus.right_labels().map(|l| MenuItem::new(l, MenuSide::Right)))
            .collect()
    }

    pub fn element(&self, layout: &MenuLayout) -> ElementSpec {
        match self.side {
            MenuSide::Left => ElementSpec::anchor(&layout.left_item_class, &self.label),
            MenuSide::Right => ElementSpec::list_item(&layout.right_item_class, &self.label),
        }
    }
}
