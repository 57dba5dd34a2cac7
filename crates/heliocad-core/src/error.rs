//! Error handling for HelioCAD
//!
//! Provides the error types shared across the workspace:
//! - Codec errors (native `.hcad` records)
//! - Plugin errors (discovery, contract, loading)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Native file codec error type
///
/// Raised while turning persisted records back into a document. A codec
/// error always leaves the current document untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The payload is not valid JSON, or not a JSON array
    #[error("Invalid document: {reason}")]
    InvalidDocument {
        /// What the parser reported.
        reason: String,
    },

    /// A record is missing a field, has a bad coordinate pair or an unknown tool
    #[error("Malformed record #{index}: {reason}")]
    MalformedRecord {
        /// Zero-based position of the record in the file.
        index: usize,
        /// The reason the record was rejected.
        reason: String,
    },
}

impl CodecError {
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        CodecError::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::InvalidDocument {
            reason: err.to_string(),
        }
    }
}

/// Plugin error type
///
/// Every variant is caught at the registry boundary and logged; none of them
/// aborts the host session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    /// The path given to `load` is not an existing file
    #[error("Plugin not found: {}", path.display())]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The module does not export the registration entry point
    #[error("Plugin {name} missing {entry_point}() entry point")]
    Contract {
        /// Name derived from the module file.
        name: String,
        /// The symbol that could not be resolved.
        entry_point: String,
    },

    /// Opening the module or running its registration call failed
    #[error("Failed to load plugin {name}: {cause}")]
    Load {
        /// Name derived from the module file.
        name: String,
        /// What went wrong.
        cause: String,
    },

    /// The plugin directory does not exist
    #[error("Plugin folder not found: {}", path.display())]
    DirectoryNotFound {
        /// The directory that was scanned.
        path: PathBuf,
    },
}

impl PluginError {
    /// Plugin name the error refers to, when one could be derived
    pub fn plugin_name(&self) -> Option<&str> {
        match self {
            PluginError::Contract { name, .. } | PluginError::Load { name, .. } => Some(name),
            PluginError::NotFound { .. } | PluginError::DirectoryNotFound { .. } => None,
        }
    }
}

/// Main error type for HelioCAD
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Codec error
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Plugin error
    #[error(transparent)]
    Plugin(#[from] PluginError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is a codec error
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Error::Codec(_))
    }

    /// Check if this is a plugin error
    pub fn is_plugin_error(&self) -> bool {
        matches!(self, Error::Plugin(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
