// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Workspace project discovery.
//!
//! The rule provider never looks at the filesystem itself; it asks a
//! [`ProjectRegistry`]. [`NxWorkspace`] reads an Nx workspace on disk and
//! [`StaticRegistry`] serves a fixed list.

mod nx;
mod registry;

pub use nx::NxWorkspace;
pub use registry::{Project, ProjectKind, ProjectMap, ProjectRegistry, StaticRegistry};
