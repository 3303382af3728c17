//! Command codes
//!
//! Closed mapping from the icon vocabulary used in the admin tables to the
//! command codes the server understands.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::target::ClickTarget;

/// Icons that carry a meaning of their own.
///
/// Any other icon name is not an error; it simply maps to the default
/// command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Person,
    Edit,
    Refresh,
    Delete,
}

impl Icon {
    pub const ALL: [Icon; 4] = [Icon::Person, Icon::Edit, Icon::Refresh, Icon::Delete];

    /// Ligature name as written inside the `<i>` element
    pub fn name(self) -> &'static str {
        match self {
            Icon::Person => "person",
            Icon::Edit => "edit",
            Icon::Refresh => "refresh",
            Icon::Delete => "delete",
        }
    }

    pub fn command(self) -> CommandCode {
        match self {
            Icon::Person => CommandCode::Person,
            Icon::Edit => CommandCode::Edit,
            Icon::Refresh => CommandCode::Refresh,
            Icon::Delete => CommandCode::Delete,
        }
    }
}

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s.trim())
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

/// Icon name outside the known vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon: {0:?}")]
pub struct UnknownIcon(pub String);

/// Server-side action selected by a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandCode {
    #[default]
    Person,
    Edit,
    Refresh,
    Delete,
}

impl CommandCode {
    /// Wire form sent as the `id` field
    pub fn as_str(self) -> &'static str {
        match self {
            CommandCode::Person => "02",
            CommandCode::Edit => "03",
            CommandCode::Refresh => "04",
            CommandCode::Delete => "05",
        }
    }

    /// Derive the command for a click target.
    ///
    /// Only icon elements are inspected; everything else gets the default.
    pub fn derive(target: &ClickTarget) -> CommandCode {
        if !target.is_icon() {
            return CommandCode::default();
        }

        match target.text.parse::<Icon>() {
            Ok(icon) => icon.command(),
            Err(_) => CommandCode::default(),
        }
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CommandCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(text: &str) -> ClickTarget {
        ClickTarget::new("I").with_text(text)
    }

    #[test]
    fn test_known_icons() {
        assert_eq!(CommandCode::derive(&icon("person")).as_str(), "02");
        assert_eq!(CommandCode::derive(&icon("edit")).as_str(), "03");
        assert_eq!(CommandCode::derive(&icon("refresh")).as_str(), "04");
        assert_eq!(CommandCode::derive(&icon("delete")).as_str(), "05");
    }

    #[test]
    fn test_unknown_icon_falls_back_to_default() {
        for text in ["photo_album", "", "Edit", "settings"] {
            assert_eq!(CommandCode::derive(&icon(text)), CommandCode::Person, "{:?}", text);
        }
    }

    #[test]
    fn test_non_icon_target_uses_default() {
        let cell = ClickTarget::new("TD").with_text("delete");
        assert_eq!(CommandCode::derive(&cell), CommandCode::Person);

        let span = ClickTarget::new("span").with_text("edit");
        assert_eq!(CommandCode::derive(&span).as_str(), "02");
    }

    #[test]
    fn test_icon_text_whitespace_ignored() {
        assert_eq!(CommandCode::derive(&icon("\n  refresh  ")), CommandCode::Refresh);
    }

    #[test]
    fn test_icon_round_trip_names() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>(), Ok(icon));
        }
        assert_eq!("folder".parse::<Icon>(), Err(UnknownIcon("folder".into())));
    }

    #[test]
    fn test_serialize_as_wire_code() {
        assert_eq!(serde_json::to_string(&CommandCode::Delete).unwrap(), "\"05\"");
    }
}
