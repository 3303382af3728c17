//! Application State
//!
//! Shared state accessible by all handlers. Wrapped in Arc for sharing
//! across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::api::dto::{AppData, AppUser, PageData};
use crate::config::{Role, ServerConfig};
use crate::protocol::MenuEntry;

/// Application title sent with every reply
pub const APP_TITLE: &str = "PhotoBook";

/// Role number the application uses for administrators
pub const ADMIN_ROLE_ID: i32 = -7;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Left and right menu entries for the configured role
    pub fn menus(&self) -> (Vec<MenuEntry>, Vec<MenuEntry>) {
        let left = ["My Account", "Quit"];
        let right: &[&str] = match self.config.role {
            Role::Admin => &["Create User", "Upload Image", "Create Album", "Download Album"],
            Role::User => &["Upload Image", "Create Album", "Download Album"],
        };

        (
            left.iter().copied().map(MenuEntry::item).collect(),
            right.iter().copied().map(MenuEntry::item).collect(),
        )
    }

    /// Full reply for the given page state
    pub fn app_data(&self, state: &str) -> AppData {
        let (menu_items_left, menu_items_right) = self.menus();
        let (role, page_title) = match self.config.role {
            Role::Admin => (ADMIN_ROLE_ID, "Administrator".to_string()),
            Role::User => (0, self.config.user_name.clone()),
        };

        AppData {
            title: APP_TITLE.to_string(),
            user: AppUser {
                name: self.config.user_name.clone(),
                role,
            },
            menu_items_left,
            menu_items_right,
            page: PageData {
                title: page_title,
                body: String::new(),
            },
            state: state.to_string(),
            command: None,
            row: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entries: &[MenuEntry]) -> Vec<&str> {
        entries.iter().map(MenuEntry::label).collect()
    }

    #[test]
    fn test_admin_menus() {
        let state = AppState::new(ServerConfig::default());
        let (left, right) = state.menus();

        assert_eq!(labels(&left), vec!["My Account", "Quit"]);
        assert_eq!(
            labels(&right),
            vec!["Create User", "Upload Image", "Create Album", "Download Album"]
        );
    }

    #[test]
    fn test_user_menus_and_title() {
        let state = AppState::new(ServerConfig {
            role: Role::User,
            user_name: "alice".into(),
            ..Default::default()
        });

        let data = state.app_data("home");
        assert_eq!(labels(&data.menu_items_right), vec!["Upload Image", "Create Album", "Download Album"]);
        assert_eq!(data.page.title, "alice");
        assert_eq!(data.user.role, 0);
        assert_eq!(data.state, "home");
    }

    #[test]
    fn test_admin_app_data() {
        let data = AppState::new(ServerConfig::default()).app_data("admin-home");
        assert_eq!(data.title, "PhotoBook");
        assert_eq!(data.user.role, ADMIN_ROLE_ID);
        assert_eq!(data.page.title, "Administrator");
    }
}
