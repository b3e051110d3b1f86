// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::ScopeKitConfig;
use crate::error::{ConfigError, Result, ResultExt, ScopeKitError};
use crate::rules::{export, type_rules, RuleProvider};
use crate::workspace::{NxWorkspace, ProjectRegistry};
use std::path::{Path, PathBuf};

use super::args::{Cli, Commands, InitArgs};
use super::output;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let root = workspace_root(&cli)?;
    tracing::debug!("Workspace root: {:?}", root);

    // Commands that need neither the configuration file nor the workspace
    match cli.effective_command() {
        Commands::Init(args) => return run_init(&root, args),
        Commands::Version => return run_version(),
        Commands::Types => return run_types(&cli),
        _ => {}
    }

    let config = if let Some(config_path) = &cli.config {
        ScopeKitConfig::load_from(config_path)?
    } else {
        ScopeKitConfig::load(&root)?
    };
    let registry = NxWorkspace::new(&root, &config.workspace);

    match cli.effective_command() {
        Commands::Show => run_show(&cli, &config, &registry),
        Commands::Export => run_export(&config, &registry),
        Commands::Scopes => run_scopes(&cli, &config, &registry),
        Commands::Projects => run_projects(&cli, &registry),
        Commands::Init(_) | Commands::Version | Commands::Types => Ok(()),
    }
}

fn workspace_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.workspace {
        Some(path) => Ok(path.clone()),
        None => std::env::current_dir().context("workspace"),
    }
}

/// Run the show command.
fn run_show(cli: &Cli, config: &ScopeKitConfig, registry: &dyn ProjectRegistry) -> Result<()> {
    let rules = RuleProvider::new(config)?.get_rules(registry)?;

    if cli.wants_json() {
        println!("{}", output::json(&rules));
    } else {
        print!("{}", output::rule_set_text(&rules));
    }
    Ok(())
}

/// Run the export command.
fn run_export(config: &ScopeKitConfig, registry: &dyn ProjectRegistry) -> Result<()> {
    let rules = RuleProvider::new(config)?.get_rules(registry)?;
    let lint = export(&rules, config.rules.level);

    println!("{}", lint.to_json());
    Ok(())
}

/// Run the scopes command.
fn run_scopes(cli: &Cli, config: &ScopeKitConfig, registry: &dyn ProjectRegistry) -> Result<()> {
    let rules = RuleProvider::new(config)?.get_rules(registry)?;

    if cli.wants_json() {
        println!("{}", output::json(&rules.scopes));
    } else {
        print!("{}", output::scopes_text(&rules.scopes));
    }
    Ok(())
}

/// Run the types command. Types are fixed, so the workspace is not read.
fn run_types(cli: &Cli) -> Result<()> {
    let types = type_rules();

    if cli.wants_json() {
        println!("{}", output::json(&types));
    } else {
        print!("{}", output::types_text(&types));
    }
    Ok(())
}

/// Run the projects command.
fn run_projects(cli: &Cli, registry: &dyn ProjectRegistry) -> Result<()> {
    let projects = registry.list_projects()?;

    if cli.wants_json() {
        println!("{}", output::json(&projects));
    } else {
        print!("{}", output::projects_text(&projects));
    }
    Ok(())
}

/// Run the init command.
fn run_init(root: &Path, args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = root.join("scopekit.toml");

    if config_path.exists() && !args.force {
        return Err(ScopeKitError::Config(ConfigError::AlreadyExists {
            path: config_path,
        }));
    }

    std::fs::write(&config_path, example_config()).context("init")?;

    println!("✓ Created {}", config_path.display());
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("scopekit {}", crate::version::version_string());

    if let Some(sha) = crate::version::git_sha() {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::git_commit_date() {
        println!("commit date: {}", date);
    }

    Ok(())
}
