//! Core types shared by the inventory and extra-vars writers.

use crate::vars::VarValue;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A machine participating in the playground cluster.
///
/// Machines are supplied fully formed by the caller (typically parsed from a
/// cluster definition file) and are read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Machine {
    /// Unique machine name, used as the Ansible host name.
    pub name: String,
    /// Address the playbooks reach the machine at.
    pub ip: String,
    /// Roles this machine fulfils (e.g. "master", "worker", "etcd").
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Machine {
    /// Create a machine with the given name, address and roles.
    pub fn new(
        name: impl Into<String>,
        ip: impl Into<String>,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

/// Cluster-level configuration overrides.
///
/// [`crate::write_extra_vars`] merges `extra_vars` over the built-in defaults
/// and replaces the field with the merged tree.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Cluster {
    /// User-supplied overrides, layered over [`crate::default_extra_vars`].
    #[serde(default)]
    pub extra_vars: VarValue,
}

/// Filesystem conventions shared by the writers and the runner.
///
/// The generated `inventory` and `extra_vars.yml` land in `tmp_dir`, next to
/// the externally produced `ssh_config`. Playbooks and the static
/// `ansible.cfg` live in `ansible_dir`. File names are significant: the
/// playbooks expect exactly these paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Scratch directory for generated files (created on demand).
    pub tmp_dir: PathBuf,
    /// Directory holding playbooks and `ansible.cfg`.
    pub ansible_dir: PathBuf,
}

impl Layout {
    /// Create a layout from the two base directories.
    pub fn new(tmp_dir: impl Into<PathBuf>, ansible_dir: impl Into<PathBuf>) -> Self {
        Self {
            tmp_dir: tmp_dir.into(),
            ansible_dir: ansible_dir.into(),
        }
    }

    /// Path of the generated inventory file.
    pub fn inventory_path(&self) -> PathBuf {
        self.tmp_dir.join("inventory")
    }

    /// Path of the generated extra-vars file.
    pub fn extra_vars_path(&self) -> PathBuf {
        self.tmp_dir.join("extra_vars.yml")
    }

    /// Path of the SSH client configuration consumed by Ansible.
    ///
    /// This file is produced elsewhere; the runner only references it.
    pub fn ssh_config_path(&self) -> PathBuf {
        self.tmp_dir.join("ssh_config")
    }

    /// Path of the static Ansible configuration file.
    pub fn ansible_cfg_path(&self) -> PathBuf {
        self.ansible_dir.join("ansible.cfg")
    }

    /// Path of a playbook by name (`join` → `<ansible_dir>/join.yml`).
    pub fn playbook_path(&self, name: &str) -> PathBuf {
        self.ansible_dir.join(format!("{name}.yml"))
    }

    /// Convenience constructor for layouts rooted under one directory,
    /// using the `tmp/` and `hack/ansible/` convention.
    pub fn under(root: &Path) -> Self {
        Self::new(root.join("tmp"), root.join("hack").join("ansible"))
    }
}
