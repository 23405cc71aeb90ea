//! Backend test support utilities
//!
//! Helpers shared by the backend's integration tests: unified logging
//! initialization and assertions over the JSON error body.

pub mod error_body;
pub mod logging;
