// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Scope mapping and project scope descriptions.

use crate::error::RulesError;
use crate::workspace::Project;
use handlebars::Handlebars;
use serde::Serialize;
use std::collections::BTreeMap;

/// Scope for dependency updates.
pub const DEPS_SCOPE: &str = "deps";

/// Scope for tooling under /tools and /scripts.
pub const DEV_INFRA_SCOPE: &str = "dev-infra";

/// The "no particular scope" marker.
pub const EMPTY_SCOPE: &str = "";

/// Scopes that exist in every rule set, with their descriptions.
pub const RESERVED_SCOPES: [(&str, &str); 3] = [
    (
        DEPS_SCOPE,
        "used for changes to the dependencies of the project",
    ),
    (
        DEV_INFRA_SCOPE,
        "used for dev-infra related changes within the directories /tools and /scripts",
    ),
    (
        EMPTY_SCOPE,
        "empty/none scope useful for `test` and `refactor` changes that are done across all \
         packages (e.g. `test: add missing unit tests`) and for docs changes that are not \
         related to a specific package (e.g. `docs: fix typo in tutorial`)",
    ),
];

/// Whether `name` is one of the reserved scopes.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_SCOPES.iter().any(|(reserved, _)| *reserved == name)
}

/// Scope name to description.
///
/// Keys are unique. Iteration is sorted by name for stable output, but the
/// order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScopeMap(BTreeMap<String, String>);

impl ScopeMap {
    /// Create an empty scope map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scope. Last write wins: an existing entry with the same name
    /// is replaced and its old description returned.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(name.into(), description.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scope names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Name and description pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

const TEMPLATE_NAME: &str = "scope";

/// Compiled description template for project scopes.
///
/// Rendered in strict mode without HTML escaping. Variables: `name`, `root`
/// and `kind` (empty when the project declares no type).
#[derive(Debug)]
pub struct ScopeTemplate {
    registry: Handlebars<'static>,
}

impl ScopeTemplate {
    /// Compile a template, failing on syntax errors or unknown variables.
    pub fn new(template: &str) -> Result<Self, RulesError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_template_string(TEMPLATE_NAME, template)?;

        let compiled = Self { registry };
        // strict mode only reports unknown variables at render time
        compiled.render_fields("name", "root", "kind")?;
        Ok(compiled)
    }

    /// Render the description for a project.
    pub fn render(&self, project: &Project) -> Result<String, RulesError> {
        let kind = project.kind.map(|k| k.as_str()).unwrap_or("");
        self.render_fields(&project.name, &project.root_display(), kind)
    }

    fn render_fields(&self, name: &str, root: &str, kind: &str) -> Result<String, RulesError> {
        let data = serde_json::json!({
            "name": name,
            "root": root,
            "kind": kind,
        });
        Ok(self.registry.render(TEMPLATE_NAME, &data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::ProjectKind;
    use std::path::PathBuf;

    fn project(name: &str, root: &str) -> Project {
        Project {
            name: name.to_string(),
            root: PathBuf::from(root),
            kind: None,
        }
    }

    #[test]
    fn test_scope_map_last_write_wins() {
        let mut scopes = ScopeMap::new();
        assert_eq!(scopes.insert("deps", "first"), None);
        assert_eq!(scopes.insert("deps", "second"), Some("first".to_string()));
        assert_eq!(scopes.len(), 1);
        assert_eq!(scopes.get("deps"), Some("second"));
    }

    #[test]
    fn test_scope_map_empty_key() {
        let mut scopes = ScopeMap::new();
        scopes.insert(EMPTY_SCOPE, "none");
        assert!(scopes.contains(""));
        assert_eq!(scopes.names().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("deps"));
        assert!(is_reserved("dev-infra"));
        assert!(is_reserved(""));
        assert!(!is_reserved("api"));
    }

    #[test]
    fn test_default_template_render() {
        let template = ScopeTemplate::new(crate::config::DEFAULT_SCOPE_TEMPLATE).unwrap();
        let rendered = template.render(&project("api", "apps/api")).unwrap();
        assert_eq!(
            rendered,
            "for changes of project api within the directory apps/api"
        );
    }

    #[test]
    fn test_template_does_not_escape() {
        let template = ScopeTemplate::new("{{name}} at {{root}}").unwrap();
        let rendered = template.render(&project("@org/ui", "libs/ui")).unwrap();
        assert_eq!(rendered, "@org/ui at libs/ui");
    }

    #[test]
    fn test_template_kind_variable() {
        let template = ScopeTemplate::new("{{kind}} {{name}}").unwrap();
        let mut lib = project("lib", "libs/lib");
        lib.kind = Some(ProjectKind::Library);
        assert_eq!(template.render(&lib).unwrap(), "library lib");
        assert_eq!(template.render(&project("x", "x")).unwrap(), " x");
    }

    #[test]
    fn test_template_rejects_unknown_variable() {
        let err = ScopeTemplate::new("{{owner}}").unwrap_err();
        assert!(matches!(err, RulesError::Template { .. }));
    }

    #[test]
    fn test_template_rejects_bad_syntax() {
        assert!(ScopeTemplate::new("{{#if name}}unterminated").is_err());
    }
}
