//! Error types for layout construction and settings persistence.

use std::path::PathBuf;

use thiserror::Error;

use crate::splitter::PaneKind;

/// Failure while assembling the main window layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A child panel could not be constructed.
    // Only custom panel factories report this; the default one cannot fail.
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("failed to create {panel} panel: {reason}")]
    PanelConstruction { panel: PaneKind, reason: String },

    /// A splitter exposes fewer dividers than the layout needs.
    #[error("{splitter} has no divider at index {index}")]
    MissingDivider {
        splitter: &'static str,
        index: usize,
    },
}

/// Failure while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to parse settings as TOML document: {0}")]
    Document(#[from] toml_edit::TomlError),

    #[error("failed to write settings file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
