//! Configuration module for contact-book
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ContactPaths;
pub use settings::Settings;
