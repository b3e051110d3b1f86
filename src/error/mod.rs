// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for scopekit.
//!
//! Workspace failures are kept apart from configuration and rule errors so
//! the host lint tool can tell "the workspace is broken" from "the rules file
//! is broken".

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for scopekit operations.
#[derive(Error, Debug)]
pub enum ScopeKitError {
    // Project registry errors
    #[error("Workspace read error: {0}")]
    Workspace(#[from] WorkspaceReadError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Rule derivation errors
    #[error("Rules error: {0}")]
    Rules(#[from] RulesError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Raised when the project registry cannot enumerate projects.
#[derive(Error, Debug)]
pub enum WorkspaceReadError {
    #[error("Workspace root not found or not a directory: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Failed to read {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("Malformed manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Project '{project}' declares no root directory")]
    MissingRoot { project: String },

    #[error("Project '{project}' is declared twice: {first} and {second}")]
    DuplicateProject {
        project: String,
        first: String,
        second: String,
    },

    #[error("Invalid workspace glob '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised while deriving the rule set.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Invalid length bounds: min {min}, max {max} (need 0 < min < max)")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("Scope '{name}' shadows the reserved scope '{name}'")]
    ReservedScope { name: String },

    #[error("Scope description template failed: {message}")]
    Template { message: String },
}

impl From<handlebars::TemplateError> for RulesError {
    fn from(err: handlebars::TemplateError) -> Self {
        RulesError::Template {
            message: err.to_string(),
        }
    }
}

impl From<handlebars::RenderError> for RulesError {
    fn from(err: handlebars::RenderError) -> Self {
        RulesError::Template {
            message: err.to_string(),
        }
    }
}

/// Result type alias for scopekit operations.
pub type Result<T> = std::result::Result<T, ScopeKitError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ScopeKitError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_not_found_display() {
        let err = WorkspaceReadError::RootNotFound {
            path: PathBuf::from("/no/such/workspace"),
        };
        assert!(err.to_string().contains("/no/such/workspace"));
    }

    #[test]
    fn test_duplicate_project_display() {
        let err = WorkspaceReadError::DuplicateProject {
            project: "api".to_string(),
            first: "apps/api".to_string(),
            second: "libs/api".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("apps/api"));
        assert!(msg.contains("libs/api"));
    }

    #[test]
    fn test_scopekit_error_from_workspace_error() {
        let err: ScopeKitError = WorkspaceReadError::MissingRoot {
            project: "web".to_string(),
        }
        .into();
        assert!(matches!(err, ScopeKitError::Workspace(_)));
        assert!(err.to_string().contains("web"));
    }

    #[test]
    fn test_length_bounds_display() {
        let err = RulesError::InvalidLengthBounds { min: 100, max: 10 };
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));
        let err = res.context("init").unwrap_err();
        assert_eq!(err.to_string(), "init: disk on fire");
    }
}
