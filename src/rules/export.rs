// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Export of a rule set as lint engine rules.
//!
//! Each rule is written as `[level, applicability, value]`, the layout
//! commitlint reads from its `rules` object.

use crate::config::RuleLevel;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use super::provider::RuleSet;

/// When a rule applies. Exported rules always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
}

/// Value carried by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RuleValue {
    Length(usize),
    Enum(Vec<String>),
}

/// A single lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintRule(
    #[serde(serialize_with = "serialize_level")] pub RuleLevel,
    pub Applicability,
    pub RuleValue,
);

fn serialize_level<S: Serializer>(level: &RuleLevel, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(level.as_u8())
}

/// The exported configuration: rule name to rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintConfig {
    pub rules: BTreeMap<String, LintRule>,
}

impl LintConfig {
    /// Look up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&LintRule> {
        self.rules.get(name)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Derive lint rules from a rule set.
pub fn export(rules: &RuleSet, level: RuleLevel) -> LintConfig {
    let length = |n: usize| LintRule(level, Applicability::Always, RuleValue::Length(n));
    let allow = |names: Vec<String>| LintRule(level, Applicability::Always, RuleValue::Enum(names));

    let mut exported = BTreeMap::new();
    exported.insert("header-max-length".to_string(), length(rules.max_length));
    exported.insert("body-max-length".to_string(), length(rules.max_length));
    exported.insert("footer-max-length".to_string(), length(rules.max_length));
    exported.insert("header-min-length".to_string(), length(rules.min_length));
    exported.insert(
        "type-enum".to_string(),
        allow(rules.types.keys().cloned().collect()),
    );
    exported.insert(
        "scope-enum".to_string(),
        allow(rules.scopes.names().map(str::to_string).collect()),
    );

    LintConfig { rules: exported }
}
