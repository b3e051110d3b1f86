// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from scopekit.toml.

use crate::rules::LengthBounds;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default template for project scope descriptions.
pub const DEFAULT_SCOPE_TEMPLATE: &str =
    "for changes of project {{name}} within the directory {{root}}";

/// The main configuration structure for scopekit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScopeKitConfig {
    /// Length bounds and rule severity.
    pub rules: RulesConfig,

    /// Scope derivation settings.
    pub scopes: ScopesConfig,

    /// Workspace discovery settings.
    pub workspace: WorkspaceConfig,
}

impl ScopeKitConfig {
    /// Load configuration for the workspace rooted at `root`.
    pub fn load(root: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config(root)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    /// Minimum length of a header line.
    pub min_length: usize,

    /// Maximum length of header, body and footer lines.
    pub max_length: usize,

    /// Severity attached to every exported rule.
    pub level: RuleLevel,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_length: LengthBounds::DEFAULT_MIN,
            max_length: LengthBounds::DEFAULT_MAX,
            level: RuleLevel::Error,
        }
    }
}

/// Severity of an exported lint rule.
///
/// Serializes to the lint engine's numeric levels (0, 1, 2) in exported
/// rules; in scopekit.toml it is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Disabled,
    Warning,
    #[default]
    Error,
}

impl RuleLevel {
    /// Numeric level understood by the lint engine.
    pub fn as_u8(&self) -> u8 {
        match self {
            RuleLevel::Disabled => 0,
            RuleLevel::Warning => 1,
            RuleLevel::Error => 2,
        }
    }
}

/// Scope derivation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScopesConfig {
    /// Handlebars template for project scope descriptions.
    ///
    /// Available variables: `name`, `root`, `kind`.
    pub template: String,

    /// What to do when a project is named like a reserved scope.
    pub on_collision: CollisionPolicy,

    /// Additional fixed scopes, merged after project scopes.
    pub extra: BTreeMap<String, String>,
}

impl Default for ScopesConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_SCOPE_TEMPLATE.to_string(),
            on_collision: CollisionPolicy::Overwrite,
            extra: BTreeMap::new(),
        }
    }
}

/// Policy for project names that collide with reserved scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Last write wins: the reserved description replaces the project's.
    #[default]
    Overwrite,
    /// Fail the load.
    Reject,
}

/// Workspace discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Directory names never searched for project.json or package.json.
    pub ignore: Vec<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            ignore: vec![
                "node_modules".to_string(),
                "dist".to_string(),
                "tmp".to_string(),
                "target".to_string(),
            ],
        }
    }
}
