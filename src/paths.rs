//! Path resolution for the playground layout.
//!
//! Generated files go to `tmp/` and playbooks live in `hack/ansible/`,
//! both relative to the current directory by default. Either directory can
//! be overridden on the command line or via environment variables:
//!
//! - `KPLAY_TMP_DIR` - Override the scratch directory
//! - `KPLAY_ANSIBLE_DIR` - Override the playbook directory
//!
//! Overrides go through tilde expansion, so `--tmp-dir ~/scratch` works.

use ansiblekit::Layout;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the playground layout from optional directory overrides.
pub fn layout(tmp_override: Option<&str>, ansible_override: Option<&str>) -> Result<Layout> {
    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    let default = Layout::under(&cwd);

    let tmp_dir = match tmp_override {
        Some(dir) => expand_path(dir),
        None => default.tmp_dir,
    };
    let ansible_dir = match ansible_override {
        Some(dir) => expand_path(dir),
        None => default.ansible_dir,
    };

    Ok(Layout::new(tmp_dir, ansible_dir))
}

/// Expand `~` and environment variables in a configured path.
fn expand_path(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

/// Render a path relative to the current directory when possible, for
/// friendlier output.
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok())
        .unwrap_or(path)
        .display()
        .to_string()
}
