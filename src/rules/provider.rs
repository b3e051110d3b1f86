// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The scope/type rule provider.

use crate::config::{CollisionPolicy, ScopeKitConfig};
use crate::error::{Result, RulesError};
use crate::workspace::ProjectRegistry;
use serde::Serialize;
use std::collections::BTreeMap;

use super::bounds::LengthBounds;
use super::scopes::{is_reserved, ScopeMap, ScopeTemplate, RESERVED_SCOPES};
use super::types::type_rules;

/// The configuration object handed to the lint engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    /// Minimum header length.
    #[serde(rename = "MIN_LENGTH")]
    pub min_length: usize,

    /// Maximum header, body and footer line length.
    #[serde(rename = "MAX_LENGTH")]
    pub max_length: usize,

    /// Commit type to description.
    #[serde(rename = "TYPES")]
    pub types: BTreeMap<String, String>,

    /// Scope to description.
    #[serde(rename = "SCOPES")]
    pub scopes: ScopeMap,
}

/// Builds [`RuleSet`]s from a project registry.
#[derive(Debug)]
pub struct RuleProvider {
    bounds: LengthBounds,
    template: ScopeTemplate,
    extra: BTreeMap<String, String>,
    on_collision: CollisionPolicy,
}

impl RuleProvider {
    /// Create a provider from configuration.
    pub fn new(config: &ScopeKitConfig) -> Result<Self> {
        let bounds = LengthBounds::new(config.rules.min_length, config.rules.max_length)?;
        let template = ScopeTemplate::new(&config.scopes.template)?;

        Ok(Self {
            bounds,
            template,
            extra: config.scopes.extra.clone(),
            on_collision: config.scopes.on_collision,
        })
    }

    /// Query the registry once and build the rule set.
    ///
    /// Scopes are merged in order: projects, configured extras, then the
    /// reserved scopes. A later write replaces an earlier one with the same
    /// name, so a project called `deps` ends up with the reserved description
    /// unless the collision policy rejects it.
    pub fn get_rules(&self, registry: &dyn ProjectRegistry) -> Result<RuleSet> {
        let projects = registry.list_projects()?;
        tracing::debug!("Building rules for {} projects", projects.len());

        let mut scopes = ScopeMap::new();

        for project in projects.values() {
            if is_reserved(&project.name) {
                match self.on_collision {
                    CollisionPolicy::Reject => {
                        return Err(RulesError::ReservedScope {
                            name: project.name.clone(),
                        }
                        .into());
                    }
                    CollisionPolicy::Overwrite => {
                        tracing::warn!(
                            "Project '{}' at {} is shadowed by the reserved scope of the same name",
                            project.name,
                            project.root_display()
                        );
                    }
                }
            }
            scopes.insert(project.name.clone(), self.template.render(project)?);
        }

        for (name, description) in &self.extra {
            if is_reserved(name) {
                match self.on_collision {
                    CollisionPolicy::Reject => {
                        return Err(RulesError::ReservedScope { name: name.clone() }.into());
                    }
                    CollisionPolicy::Overwrite => {
                        tracing::warn!("Configured scope '{}' is reserved and will be replaced", name);
                    }
                }
            }
            if scopes.insert(name.clone(), description.clone()).is_some() {
                tracing::debug!("Configured scope '{}' replaces a project scope", name);
            }
        }

        for (name, description) in RESERVED_SCOPES {
            scopes.insert(name, description);
        }

        Ok(RuleSet {
            min_length: self.bounds.min(),
            max_length: self.bounds.max(),
            types: type_rules(),
            scopes,
        })
    }
}

/// Build the rule set with the default configuration.
pub fn get_rules(registry: &dyn ProjectRegistry) -> Result<RuleSet> {
    RuleProvider::new(&ScopeKitConfig::default())?.get_rules(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ScopeKitError, WorkspaceReadError};
    use crate::workspace::{ProjectMap, StaticRegistry};

    struct BrokenRegistry;

    impl ProjectRegistry for BrokenRegistry {
        fn list_projects(&self) -> std::result::Result<ProjectMap, WorkspaceReadError> {
            Err(WorkspaceReadError::ManifestParse {
                path: "workspace.json".into(),
                message: "expected value at line 1 column 1".to_string(),
            })
        }
    }

    #[test]
    fn test_types_always_fixed() {
        let rules = get_rules(&StaticRegistry::new()).unwrap();
        assert_eq!(rules.types.len(), 10);
        for name in [
            "feat", "fix", "docs", "refactor", "perf", "test", "build", "ci", "chore", "revert",
        ] {
            assert!(rules.types.contains_key(name), "missing type {}", name);
        }
    }

    #[test]
    fn test_default_bounds() {
        let rules = get_rules(&StaticRegistry::new()).unwrap();
        assert_eq!(rules.min_length, 10);
        assert_eq!(rules.max_length, 100);
        assert!(rules.min_length < rules.max_length);
    }

    #[test]
    fn test_empty_workspace_has_reserved_scopes_only() {
        let rules = get_rules(&StaticRegistry::new()).unwrap();
        let names: Vec<&str> = rules.scopes.names().collect();
        assert_eq!(names, vec!["", "deps", "dev-infra"]);
    }

    #[test]
    fn test_project_scopes() {
        let registry = StaticRegistry::new()
            .with_project("api", "apps/api")
            .with_project("lib", "libs/lib");
        let rules = get_rules(&registry).unwrap();

        assert_eq!(rules.scopes.len(), 5);
        assert_eq!(
            rules.scopes.get("api"),
            Some("for changes of project api within the directory apps/api")
        );
        assert_eq!(
            rules.scopes.get("lib"),
            Some("for changes of project lib within the directory libs/lib")
        );
    }

    #[test]
    fn test_scope_count_is_projects_plus_three() {
        for n in [0usize, 1, 7, 25] {
            let registry: StaticRegistry = (0..n)
                .map(|i| crate::workspace::Project::new(format!("p{}", i), format!("libs/p{}", i)))
                .collect();
            let rules = get_rules(&registry).unwrap();
            assert_eq!(rules.scopes.len(), n + 3);
        }
    }

    #[test]
    fn test_reserved_collision_last_write_wins() {
        let registry = StaticRegistry::new()
            .with_project("deps", "libs/deps")
            .with_project("api", "apps/api");
        let rules = get_rules(&registry).unwrap();

        assert_eq!(rules.scopes.len(), 4);
        assert_eq!(
            rules.scopes.get("deps"),
            Some("used for changes to the dependencies of the project")
        );
    }

    #[test]
    fn test_reserved_collision_rejected() {
        let mut config = ScopeKitConfig::default();
        config.scopes.on_collision = CollisionPolicy::Reject;
        let provider = RuleProvider::new(&config).unwrap();

        let registry = StaticRegistry::new().with_project("dev-infra", "tools/dev-infra");
        let err = provider.get_rules(&registry).unwrap_err();
        assert!(matches!(
            err,
            ScopeKitError::Rules(RulesError::ReservedScope { ref name }) if name == "dev-infra"
        ));
    }

    #[test]
    fn test_extra_scopes() {
        let mut config = ScopeKitConfig::default();
        config
            .scopes
            .extra
            .insert("release".to_string(), "used for release tooling".to_string());
        let provider = RuleProvider::new(&config).unwrap();

        let rules = provider
            .get_rules(&StaticRegistry::new().with_project("api", "apps/api"))
            .unwrap();
        assert_eq!(rules.scopes.len(), 5);
        assert_eq!(rules.scopes.get("release"), Some("used for release tooling"));
    }

    #[test]
    fn test_reserved_extra_scope_replaced() {
        let mut config = ScopeKitConfig::default();
        config
            .scopes
            .extra
            .insert("deps".to_string(), "bumps".to_string());
        let provider = RuleProvider::new(&config).unwrap();

        let rules = provider.get_rules(&StaticRegistry::new()).unwrap();
        assert_eq!(rules.scopes.len(), 3);
        assert_eq!(
            rules.scopes.get("deps"),
            Some("used for changes to the dependencies of the project")
        );
    }

    #[test]
    fn test_reserved_extra_scope_rejected() {
        let mut config = ScopeKitConfig::default();
        config.scopes.on_collision = CollisionPolicy::Reject;
        config.scopes.extra.insert(String::new(), "anything".to_string());
        let provider = RuleProvider::new(&config).unwrap();

        let err = provider.get_rules(&StaticRegistry::new()).unwrap_err();
        assert!(matches!(
            err,
            ScopeKitError::Rules(RulesError::ReservedScope { ref name }) if name.is_empty()
        ));
    }

    #[test]
    fn test_custom_template_and_bounds() {
        let mut config = ScopeKitConfig::default();
        config.rules.min_length = 5;
        config.rules.max_length = 72;
        config.scopes.template = "{{name}} ({{root}})".to_string();
        let provider = RuleProvider::new(&config).unwrap();

        let rules = provider
            .get_rules(&StaticRegistry::new().with_project("web", "apps/web"))
            .unwrap();
        assert_eq!(rules.min_length, 5);
        assert_eq!(rules.max_length, 72);
        assert_eq!(rules.scopes.get("web"), Some("web (apps/web)"));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let mut config = ScopeKitConfig::default();
        config.rules.min_length = 100;
        config.rules.max_length = 100;
        assert!(matches!(
            RuleProvider::new(&config),
            Err(ScopeKitError::Rules(RulesError::InvalidLengthBounds { .. }))
        ));
    }

    #[test]
    fn test_workspace_error_propagates() {
        let err = get_rules(&BrokenRegistry).unwrap_err();
        assert!(matches!(
            err,
            ScopeKitError::Workspace(WorkspaceReadError::ManifestParse { .. })
        ));
    }

    #[test]
    fn test_serialized_field_names() {
        let rules = get_rules(&StaticRegistry::new()).unwrap();
        let json = serde_json::to_value(&rules).unwrap();
        assert_eq!(json["MIN_LENGTH"], 10);
        assert_eq!(json["MAX_LENGTH"], 100);
        assert_eq!(json["TYPES"]["fix"], "A bug fix");
        assert!(json["SCOPES"].get("").is_some());
    }
}
