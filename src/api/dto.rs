//! Data Transfer Objects
//!
//! Request and response types for the `/ajax` endpoint. Reply field names
//! are PascalCase; clients depend on them verbatim.

use serde::{Deserialize, Serialize};

use crate::protocol::MenuEntry;

// ============================================
// AJAX DTOs
// ============================================

/// Form body of `POST /ajax`. Which fields are present decides the reply.
#[derive(Debug, Default, Deserialize)]
pub struct AjaxForm {
    /// Page trigger: `state=admin-home`
    #[serde(default)]
    pub state: Option<String>,
    /// Icon action: `id=03`
    #[serde(default)]
    pub id: Option<String>,
    /// Menu bootstrap: `job=loadMenuItems`
    #[serde(default)]
    pub job: Option<String>,
    /// Placeholders sent along with the bootstrap job
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub y: Option<String>,
    /// Clicked row, when the client is configured to send it
    #[serde(default)]
    pub row: Option<String>,
}

/// Application data returned for every successful request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppData {
    pub title: String,
    pub user: AppUser,
    pub menu_items_left: Vec<MenuEntry>,
    pub menu_items_right: Vec<MenuEntry>,
    pub page: PageData,
    pub state: String,
    /// Command code echoed back for icon actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Row echoed back when one was sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<String>,
}

/// Signed-in user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppUser {
    pub name: String,
    /// -7 for administrators, 0 for regular users
    pub role: i32,
}

/// Title and body of the current page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageData {
    pub title: String,
    pub body: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Seconds since start
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
