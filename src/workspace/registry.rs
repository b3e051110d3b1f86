// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Project registry interface.

use crate::error::WorkspaceReadError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Project name to project.
pub type ProjectMap = BTreeMap<String, Project>;

/// A project declared in the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Project name, used as the commit scope.
    pub name: String,
    /// Project root, relative to the workspace root.
    pub root: PathBuf,
    /// Declared project type, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProjectKind>,
}

impl Project {
    /// Create a project without a declared type.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            kind: None,
        }
    }

    /// Root rendered with `/` separators regardless of platform.
    pub fn root_display(&self) -> String {
        to_slash(&self.root)
    }
}

/// Project type as declared in project.json (`projectType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Application,
    Library,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Application => "application",
            ProjectKind::Library => "library",
        }
    }
}

/// Source of the workspace's project list.
///
/// Implementations either return every project or fail; a partial list is
/// never returned.
pub trait ProjectRegistry {
    /// Enumerate all declared projects.
    fn list_projects(&self) -> Result<ProjectMap, WorkspaceReadError>;
}

/// A registry over a fixed project list.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    projects: ProjectMap,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project, replacing any project with the same name.
    pub fn with_project(mut self, name: &str, root: &str) -> Self {
        self.projects
            .insert(name.to_string(), Project::new(name, root));
        self
    }
}

impl FromIterator<Project> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = Project>>(iter: I) -> Self {
        Self {
            projects: iter.into_iter().map(|p| (p.name.clone(), p)).collect(),
        }
    }
}

impl ProjectRegistry for StaticRegistry {
    fn list_projects(&self) -> Result<ProjectMap, WorkspaceReadError> {
        Ok(self.projects.clone())
    }
}

/// Join path components with `/`.
pub(crate) fn to_slash(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            Component::CurDir => Some(".".to_string()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
