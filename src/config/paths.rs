//! Path management for contact-book
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACT_BOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/contact-book` or `~/.config/contact-book`
//! 3. Windows: `%APPDATA%\contact-book`

use std::path::PathBuf;

use crate::error::ContactError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CONTACT_BOOK_DATA_DIR";

/// Manages all paths used by contact-book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Base directory for all contact-book data
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Create a new ContactPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ContactError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ContactPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/contact-book/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/contact-book/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to addressbook.json
    pub fn contacts_file(&self) -> PathBuf {
        self.data_dir().join("addressbook.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ContactError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ContactError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| ContactError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("contact-book"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ContactError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ContactError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("contact-book"))
}
