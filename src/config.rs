//! Cluster definition file loading.
//!
//! A cluster file is YAML with a machine list and optional extra-vars
//! overrides:
//!
//! ```yaml
//! machines:
//!   - name: node1
//!     ip: 10.0.0.1
//!     roles: [master]
//!   - name: node2
//!     ip: 10.0.0.2
//!     roles: [worker]
//! extra_vars:
//!   kubeadm:
//!     token: abcdef.0123456789abcdef
//! ```

use ansiblekit::{Cluster, Machine, VarValue};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A parsed cluster definition file.
#[derive(Debug, Default, Deserialize)]
pub struct ClusterFile {
    /// Machines making up the cluster.
    #[serde(default)]
    pub machines: Vec<Machine>,
    /// Overrides layered onto the default extra vars.
    #[serde(default)]
    pub extra_vars: VarValue,
}

impl ClusterFile {
    /// Load a cluster definition from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid cluster file {}", path.display()))
    }

    /// Parse a cluster definition from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Invalid cluster definition format")
    }

    /// The cluster record handed to the extra-vars writer.
    pub fn cluster(&self) -> Cluster {
        Cluster {
            extra_vars: self.extra_vars.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_cluster_file() {
        let content = r#"
machines:
  - name: node1
    ip: 10.0.0.1
    roles: [master]
  - name: node2
    ip: 10.0.0.2
    roles: [worker]
extra_vars:
  kubeadm:
    token: XYZ
"#;
        let file = ClusterFile::parse(content).unwrap();
        assert_eq!(file.machines.len(), 2);
        assert_eq!(file.machines[0].name, "node1");
        assert_eq!(file.machines[1].roles, vec!["worker".to_string()]);
        assert_eq!(
            file.cluster()
                .extra_vars
                .at(&["kubeadm", "token"])
                .and_then(VarValue::as_str),
            Some("XYZ")
        );
    }

    #[test]
    fn test_parse_machines_only() {
        let file = ClusterFile::parse("machines:\n  - name: solo\n    ip: 10.0.0.9\n").unwrap();
        assert_eq!(file.machines.len(), 1);
        assert!(file.machines[0].roles.is_empty());
        // No overrides: the cluster merges cleanly over defaults.
        assert_eq!(file.extra_vars, VarValue::default());
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        assert!(ClusterFile::parse("machines: [unclosed").is_err());
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let err = ClusterFile::load(Path::new("/nonexistent/cluster.yml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cluster.yml"));
    }
}
