// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Project discovery for Nx style workspaces.
//!
//! Projects come from three places, read in this order:
//!
//! 1. the `projects` object of `workspace.json` (or `angular.json`),
//! 2. `project.json` files found under the workspace root,
//! 3. package-manager workspaces listed in the root `package.json`.
//!
//! A directory claimed by an earlier source is not read again by a later one.
//! A project.json at the workspace root is a standalone project with root `.`.
//! The walk has no depth limit, so no declared project is left out.

use crate::config::WorkspaceConfig;
use crate::error::WorkspaceReadError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use super::registry::{to_slash, Project, ProjectKind, ProjectMap, ProjectRegistry};

/// Workspace manifests that declare projects, in order of priority.
const WORKSPACE_MANIFESTS: &[&str] = &["workspace.json", "angular.json"];

const PROJECT_FILE: &str = "project.json";
const PACKAGE_FILE: &str = "package.json";

/// The subset of project.json that matters for scopes.
#[derive(Debug, Default, Deserialize)]
struct ProjectFile {
    name: Option<String>,
    #[serde(rename = "projectType")]
    project_type: Option<String>,
}

/// An entry of the `projects` object in workspace.json.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestEntry {
    /// Path to a directory holding a project.json.
    Path(String),
    /// Inline project configuration.
    Inline {
        root: Option<String>,
        #[serde(rename = "projectType")]
        project_type: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct WorkspaceManifest {
    #[serde(default)]
    projects: std::collections::BTreeMap<String, ManifestEntry>,
}

/// Project registry backed by an Nx workspace on disk.
#[derive(Debug, Clone)]
pub struct NxWorkspace {
    root: PathBuf,
    ignore: Vec<String>,
}

impl NxWorkspace {
    /// Create a registry for the workspace rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, config: &WorkspaceConfig) -> Self {
        Self {
            root: root.into(),
            ignore: config.ignore.clone(),
        }
    }

    /// Whether a directory with this name is never searched for projects.
    fn is_skipped(&self, name: &str) -> bool {
        name.starts_with('.') || self.ignore.iter().any(|i| i == name)
    }

    /// Read projects declared in workspace.json or angular.json.
    fn read_manifest(&self, projects: &mut ProjectMap) -> Result<(), WorkspaceReadError> {
        let Some(path) = WORKSPACE_MANIFESTS
            .iter()
            .map(|name| self.root.join(name))
            .find(|p| p.is_file())
        else {
            return Ok(());
        };

        tracing::debug!("Reading workspace manifest: {:?}", path);
        let manifest: WorkspaceManifest = read_json(&path)?;

        for (name, entry) in manifest.projects {
            let project = match entry {
                ManifestEntry::Path(dir) => {
                    let file: ProjectFile = read_json(&self.root.join(&dir).join(PROJECT_FILE))?;
                    Project {
                        name,
                        root: normalize_root(Path::new(&dir)),
                        kind: parse_kind(file.project_type.as_deref()),
                    }
                }
                ManifestEntry::Inline { root, project_type } => {
                    let root = root.ok_or_else(|| WorkspaceReadError::MissingRoot {
                        project: name.clone(),
                    })?;
                    Project {
                        name,
                        root: normalize_root(Path::new(&root)),
                        kind: parse_kind(project_type.as_deref()),
                    }
                }
            };
            register(projects, project)?;
        }

        Ok(())
    }

    /// Walk the tree for project.json files.
    fn read_project_files(
        &self,
        projects: &mut ProjectMap,
        claimed: &mut HashSet<PathBuf>,
    ) -> Result<(), WorkspaceReadError> {
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                // Skip hidden directories and configured non-project directories
                e.depth() == 0
                    || !e.file_type().is_dir()
                    || !self.is_skipped(&e.file_name().to_string_lossy())
            });

        for entry in walker {
            let entry = entry.map_err(|e| WorkspaceReadError::Unreadable {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone()),
                message: e.to_string(),
            })?;

            if entry.file_name() != PROJECT_FILE || !entry.file_type().is_file() {
                continue;
            }

            let Some(dir) = entry.path().parent() else {
                continue;
            };

            let relative = self.relative(dir);
            if claimed.contains(&relative) {
                continue;
            }

            let file: ProjectFile = read_json(entry.path())?;
            let name = file.name.unwrap_or_else(|| dir_name(dir));

            tracing::debug!("Found project '{}' at {:?}", name, relative);
            claimed.insert(relative.clone());
            register(
                projects,
                Project {
                    name,
                    root: relative,
                    kind: parse_kind(file.project_type.as_deref()),
                },
            )?;
        }

        Ok(())
    }

    /// Read package-manager workspaces from the root package.json.
    fn read_package_workspaces(
        &self,
        projects: &mut ProjectMap,
        claimed: &mut HashSet<PathBuf>,
    ) -> Result<(), WorkspaceReadError> {
        let manifest = self.root.join(PACKAGE_FILE);
        if !manifest.is_file() {
            return Ok(());
        }

        let json: serde_json::Value = read_json(&manifest)?;
        let patterns = workspace_patterns(&json);
        if patterns.is_empty() {
            return Ok(());
        }

        let base = glob::Pattern::escape(&self.root.to_string_lossy());
        let (excluded, included): (Vec<String>, Vec<String>) =
            patterns.into_iter().partition(|p| p.starts_with('!'));
        let excluded = excluded
            .iter()
            .map(|p| {
                let p = p.trim_start_matches('!').trim_start_matches("./");
                glob::Pattern::new(p).map_err(|e| WorkspaceReadError::InvalidPattern {
                    pattern: p.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for pattern in included {
            let full = format!("{}/{}", base, pattern.trim_start_matches("./"));
            let matches = glob::glob(&full).map_err(|e| WorkspaceReadError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;

            for matched in matches {
                let dir = matched.map_err(|e| WorkspaceReadError::Unreadable {
                    path: e.path().to_path_buf(),
                    message: e.error().to_string(),
                })?;

                let package = dir.join(PACKAGE_FILE);
                if !package.is_file() || dir.join(PROJECT_FILE).is_file() {
                    continue;
                }

                let relative = self.relative(&dir);
                let relative_str = to_slash(&relative);
                if claimed.contains(&relative)
                    || self.has_skipped_component(&relative)
                    || excluded.iter().any(|p| p.matches(&relative_str))
                {
                    continue;
                }

                let json: serde_json::Value = read_json(&package)?;
                let name = json
                    .get("name")
                    .and_then(|n| n.as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| dir_name(&dir));

                tracing::debug!("Found package '{}' at {:?}", name, relative);
                claimed.insert(relative.clone());
                register(projects, Project::new(name, relative))?;
            }
        }

        Ok(())
    }

    /// Glob matches can reach into directories the walk never enters.
    fn has_skipped_component(&self, relative: &Path) -> bool {
        relative.components().any(|c| match c {
            Component::Normal(name) => self.is_skipped(&name.to_string_lossy()),
            _ => false,
        })
    }

    fn relative(&self, dir: &Path) -> PathBuf {
        normalize_root(dir.strip_prefix(&self.root).unwrap_or(dir))
    }
}

impl ProjectRegistry for NxWorkspace {
    fn list_projects(&self) -> Result<ProjectMap, WorkspaceReadError> {
        if !self.root.is_dir() {
            return Err(WorkspaceReadError::RootNotFound {
                path: self.root.clone(),
            });
        }

        let mut projects = ProjectMap::new();
        self.read_manifest(&mut projects)?;

        let mut claimed: HashSet<PathBuf> = projects.values().map(|p| p.root.clone()).collect();
        self.read_project_files(&mut projects, &mut claimed)?;
        self.read_package_workspaces(&mut projects, &mut claimed)?;

        tracing::debug!("Discovered {} projects in {:?}", projects.len(), self.root);
        Ok(projects)
    }
}

/// Add a project, failing if another root already uses its name.
fn register(projects: &mut ProjectMap, project: Project) -> Result<(), WorkspaceReadError> {
    if let Some(existing) = projects.get(&project.name) {
        if existing.root == project.root {
            return Ok(());
        }
        return Err(WorkspaceReadError::DuplicateProject {
            project: project.name.clone(),
            first: to_slash(&existing.root),
            second: to_slash(&project.root),
        });
    }

    projects.insert(project.name.clone(), project);
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, WorkspaceReadError> {
    let content = std::fs::read_to_string(path).map_err(|e| WorkspaceReadError::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| WorkspaceReadError::ManifestParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn parse_kind(value: Option<&str>) -> Option<ProjectKind> {
    match value? {
        "application" => Some(ProjectKind::Application),
        "library" => Some(ProjectKind::Library),
        other => {
            tracing::debug!("Ignoring unknown projectType '{}'", other);
            None
        }
    }
}

/// Glob patterns from the `workspaces` field (array or `{ packages: [...] }`).
fn workspace_patterns(package_json: &serde_json::Value) -> Vec<String> {
    let list = match package_json.get("workspaces") {
        Some(serde_json::Value::Array(items)) => items,
        Some(serde_json::Value::Object(obj)) => match obj.get("packages") {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    list.iter()
        .filter_map(|v| v.as_str())
        .map(str::to_string)
        .collect()
}

/// Drop `.` components and trailing separators; an empty path becomes `.`.
fn normalize_root(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .or_else(|| {
            // `.` or `..` as the workspace root
            dir.canonicalize()
                .ok()?
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
