//! Network access

pub mod client;
