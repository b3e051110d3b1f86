// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit lint rule derivation.
//!
//! [`RuleProvider`] turns a workspace's project list into a [`RuleSet`]
//! (length bounds, types and scopes), and [`export`] maps a rule set onto
//! the rules a lint engine evaluates.

mod bounds;
mod export;
mod provider;
mod scopes;
mod types;

pub use bounds::LengthBounds;
pub use export::{export, Applicability, LintConfig, LintRule, RuleValue};
pub use provider::{get_rules, RuleProvider, RuleSet};
pub use scopes::{
    is_reserved, ScopeMap, ScopeTemplate, DEPS_SCOPE, DEV_INFRA_SCOPE, EMPTY_SCOPE,
    RESERVED_SCOPES,
};
pub use types::{type_rules, CommitType};
