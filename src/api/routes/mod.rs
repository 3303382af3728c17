//! API Routes
//!
//! Route handlers organized by functionality.

pub mod ajax;
pub mod health;
