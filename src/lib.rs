// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! scopekit - commit lint rules for monorepos
//!
//! Produces the configuration a conventional-commits lint engine needs:
//! allowed commit types, allowed scopes and line length bounds. Scopes are
//! derived from the projects declared in the workspace, so they follow the
//! repository as projects are added or removed.
//!
//! # Features
//!
//! - **Rule Provider**: types, scopes and length bounds from a project registry
//! - **Exporter**: `type-enum`, `scope-enum` and length rules for the lint engine
//! - **Nx Workspaces**: projects from workspace.json, project.json and package.json workspaces
//!
//! # Example
//!
//! ```
//! use scopekit::rules::get_rules;
//! use scopekit::workspace::StaticRegistry;
//!
//! let registry = StaticRegistry::new().with_project("api", "apps/api");
//! let rules = get_rules(&registry).unwrap();
//!
//! assert_eq!(
//!     rules.scopes.get("api"),
//!     Some("for changes of project api within the directory apps/api")
//! );
//! assert!(rules.scopes.contains("deps"));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod rules;
pub mod workspace;

// Re-exports for convenience
pub use config::ScopeKitConfig;
pub use error::{Result, ScopeKitError, WorkspaceReadError};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of scopekit.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// The git SHA, unless vergen could not read the repository.
    pub fn git_sha() -> Option<&'static str> {
        known(GIT_SHA)
    }

    /// The git commit date, unless vergen could not read the repository.
    pub fn git_commit_date() -> Option<&'static str> {
        known(GIT_COMMIT_DATE)
    }

    /// vergen emits `VERGEN_IDEMPOTENT_OUTPUT` when git metadata is unavailable.
    fn known(value: Option<&'static str>) -> Option<&'static str> {
        value.filter(|v| !v.is_empty() && !v.starts_with("VERGEN_"))
    }

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (git_sha(), git_commit_date()) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
