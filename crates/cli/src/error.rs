//! Unified error type for the CLI.

use std::path::PathBuf;

use context_demos_state::ContextError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A surface or event asked for a store the current demo does not provide.
    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    /// Script file could not be read.
    #[error("Failed to read script {path}: {source}")]
    ReadScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Script file is not valid YAML for the script format.
    #[error("Invalid script: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A view template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
