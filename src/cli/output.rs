// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Text and JSON rendering for command output.

use crate::rules::{RuleSet, ScopeMap};
use crate::workspace::ProjectMap;
use console::style;
use std::collections::BTreeMap;

/// Shown in place of the empty scope name.
const EMPTY_SCOPE_LABEL: &str = "(none)";

/// Render the whole rule set as text.
pub fn rule_set_text(rules: &RuleSet) -> String {
    let mut output = format!(
        "{} {}\n{} {}\n",
        style("MIN_LENGTH").bold(),
        rules.min_length,
        style("MAX_LENGTH").bold(),
        rules.max_length
    );

    output.push('\n');
    output.push_str(&types_text(&rules.types));
    output.push('\n');
    output.push_str(&scopes_text(&rules.scopes));
    output
}

/// Render commit types as an aligned list.
pub fn types_text(types: &BTreeMap<String, String>) -> String {
    let rows: Vec<(&str, &str)> = types.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    section("Types", &rows)
}

/// Render scopes as an aligned list.
pub fn scopes_text(scopes: &ScopeMap) -> String {
    let rows: Vec<(&str, &str)> = scopes
        .iter()
        .map(|(name, desc)| {
            if name.is_empty() {
                (EMPTY_SCOPE_LABEL, desc)
            } else {
                (name, desc)
            }
        })
        .collect();
    section("Scopes", &rows)
}

/// Render discovered projects as an aligned list.
pub fn projects_text(projects: &ProjectMap) -> String {
    if projects.is_empty() {
        return format!("{}\n", style("No projects found").dim());
    }

    let roots: Vec<(String, String)> = projects
        .values()
        .map(|p| {
            let root = match p.kind {
                Some(kind) => format!("{} ({})", p.root_display(), kind.as_str()),
                None => p.root_display(),
            };
            (p.name.clone(), root)
        })
        .collect();
    let rows: Vec<(&str, &str)> = roots
        .iter()
        .map(|(n, r)| (n.as_str(), r.as_str()))
        .collect();
    section("Projects", &rows)
}

fn section(title: &str, rows: &[(&str, &str)]) -> String {
    let width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = format!("{}\n", style(title).bold().underlined());
    for (name, value) in rows {
        let padding = " ".repeat(width - name.chars().count());
        output.push_str(&format!(
            "  {}{}  {}\n",
            style(name).cyan(),
            padding,
            value
        ));
    }
    output
}

/// Pretty-print any serializable value as JSON.
pub fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
