//! DOM abstraction
//!
//! The renderer only ever appends freshly created elements to mount points
//! identified by element id, so that is all the trait exposes. Methods take
//! `&self`: DOM handles are shared and mutated from interleaved callbacks.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

/// Element types the renderer creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Anchor,
    ListItem,
}

impl ElementKind {
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Anchor => "a",
            ElementKind::ListItem => "li",
        }
    }
}

/// Description of an element to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub kind: ElementKind,
    pub class: String,
    /// Only set for anchors
    pub href: Option<String>,
    pub text: String,
}

impl ElementSpec {
    pub fn anchor(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Anchor,
            class: class.into(),
            href: Some(String::new()),
            text: text.into(),
        }
    }

    pub fn list_item(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::ListItem,
            class: class.into(),
            href: None,
            text: text.into(),
        }
    }
}

impl fmt::Display for ElementSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.kind.tag();
        write!(f, "<{} class=\"{}\"", tag, escape(&self.class))?;
        if let Some(href) = &self.href {
            write!(f, " href=\"{}\"", escape(href))?;
        }
        write!(f, ">{}</{}>", escape(&self.text), tag)
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// DOM failures surfaced to the renderer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("mount point not found: #{0}")]
    MissingMount(String),

    #[error("DOM operation failed: {0}")]
    Operation(String),
}

/// Append-only view of a document
pub trait Dom {
    /// Create `element` and append it as the last child of `#mount_id`
    fn append(&self, mount_id: &str, element: &ElementSpec) -> Result<(), DomError>;
}

/// In-memory document with a fixed set of mount points.
///
/// Used by the command-line client and the tests.
#[derive(Debug, Default)]
pub struct VirtualDom {
    mounts: RefCell<BTreeMap<String, Vec<ElementSpec>>>,
}

impl VirtualDom {
    /// Document containing the given (empty) mount points
    pub fn with_mounts<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mounts = ids.into_iter().map(|id| (id.into(), Vec::new())).collect();
        Self {
            mounts: RefCell::new(mounts),
        }
    }

    /// Children of a mount point, in document order
    pub fn children(&self, mount_id: &str) -> Vec<ElementSpec> {
        self.mounts
            .borrow()
            .get(mount_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Text of every child of a mount point
    pub fn texts(&self, mount_id: &str) -> Vec<String> {
        self.children(mount_id).into_iter().map(|e| e.text).collect()
    }

    /// Total number of appended elements across all mounts
    pub fn node_count(&self) -> usize {
        self.mounts.borrow().values().map(Vec::len).sum()
    }

    /// Serialized children of a mount point, one element per line
    pub fn inner_html(&self, mount_id: &str) -> String {
        self.children(mount_id)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Dom for VirtualDom {
    fn append(&self, mount_id: &str, element: &ElementSpec) -> Result<(), DomError> {
        let mut mounts = self.mounts.borrow_mut();
        let children = mounts
            .get_mut(mount_id)
            .ok_or_else(|| DomError::MissingMount(mount_id.to_string()))?;
        children.push(element.clone());
        Ok(())
    }
}
