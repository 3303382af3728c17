//! Click targets
//!
//! The parts of a DOM click the router cares about, detached from any DOM
//! implementation.

/// Tag name of inline icon elements (`<i class="material-icons">edit</i>`)
pub const ICON_TAG: &str = "i";

/// A captured click
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickTarget {
    /// Tag name as reported by the DOM (browsers report upper case)
    pub tag_name: String,
    /// Text content of the element
    pub text: String,
    /// Identifier of the nearest enclosing table row, if any
    pub row_id: Option<String>,
}

impl ClickTarget {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_row(mut self, row_id: impl Into<String>) -> Self {
        self.row_id = Some(row_id.into());
        self
    }

    pub fn is_icon(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case(ICON_TAG)
    }
}
