//! Entry point logic for the `srclayout` binary.

pub mod cli;
pub mod logging;

use anyhow::{bail, Context, Result};
use std::fmt::Write as _;

use crate::constants::PATHS;
use crate::layout::{verify, violations, LayoutPaths};

pub use cli::Cli;

/// Resolve the layout selected by `cli`, check it unless told not to, and
/// print it when asked. Prints nothing on a plain successful check.
pub fn run(cli: &Cli) -> Result<()> {
    let paths = resolve(cli)?;

    if !cli.no_check {
        check(&paths, cli.all)?;
        tracing::info!("all layout invariants hold");
    }

    if cli.wants_output() {
        print!("{}", render(&paths, cli.json)?);
    }
    Ok(())
}

fn resolve(cli: &Cli) -> Result<LayoutPaths> {
    match &cli.module {
        Some(module) => {
            tracing::debug!("resolving from {}", module.display());
            LayoutPaths::resolve(module).context("failed to read the current directory")
        }
        None => Ok(PATHS.clone()),
    }
}

fn check(paths: &LayoutPaths, all: bool) -> Result<()> {
    if !all {
        verify(paths)?;
        return Ok(());
    }

    let found = violations(paths);
    if found.is_empty() {
        return Ok(());
    }
    let mut message = format!("{} layout invariant(s) violated", found.len());
    for err in &found {
        write!(message, "\n  {err}")?;
    }
    bail!(message)
}

/// Text form is one `NAME=path` line per directory; JSON is a pretty object.
pub fn render(paths: &LayoutPaths, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(paths).context("failed to encode layout")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for (name, path) in paths.entries() {
        writeln!(out, "{name}={}", path.display())?;
    }
    Ok(out)
}
