// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::ScopeKitConfig;

/// Get the default configuration.
pub fn default_config() -> ScopeKitConfig {
    ScopeKitConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# scopekit configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Length bounds for header, body and footer lines
[rules]
min_length = 10
max_length = 100
# Severity of every exported rule: disabled, warning or error
level = "error"

# Scope derivation
[scopes]
# Variables: name, root, kind
template = "for changes of project {{name}} within the directory {{root}}"
# overwrite: reserved scopes replace same-named projects
# reject: refuse to load when a project shadows a reserved scope
on_collision = "overwrite"

# Fixed scopes added next to the project scopes
[scopes.extra]
# release = "used for release tooling"

# Project discovery
[workspace]
ignore = ["node_modules", "dist", "tmp", "target"]
"#
}
