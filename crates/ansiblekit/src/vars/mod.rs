//! Extra-vars value model, defaults and deep merge.
//!
//! Extra vars are computed as a merge between overrides defined in the
//! cluster definition (highest priority) and a set of built-in defaults
//! (lowest priority), then written to `tmp/extra_vars.yml`.

pub mod defaults;
pub mod writer;

pub use defaults::default_extra_vars;
pub use writer::{write_file, write_string};

use crate::error::Result;
use crate::types::{Cluster, Layout};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

/// A node in an extra-vars tree.
///
/// Strings carry their output style as an explicit variant: [`Self::String`]
/// renders with the writer's default (plain unless the content requires
/// quoting), while [`Self::QuotedString`] is always emitted as a
/// double-quoted scalar. Values containing shell-expansion syntax such as
/// `$(...)` use the quoted variant so Ansible receives them verbatim.
///
/// Mappings use [`BTreeMap`], so files render with sorted keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_yaml::Value")]
pub enum VarValue {
    /// YAML `null`.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar, rendered plain where safe.
    String(String),
    /// String scalar, always rendered double-quoted.
    QuotedString(String),
    /// Block sequence.
    Sequence(Vec<VarValue>),
    /// Block mapping with sorted keys.
    Mapping(BTreeMap<String, VarValue>),
}

impl VarValue {
    /// Create a plain string value.
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Create a force-quoted string value.
    pub fn quoted(s: impl Into<String>) -> Self {
        Self::QuotedString(s.into())
    }

    /// Look up a key in a mapping. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Walk a path of mapping keys (`at(&["kubeadm", "token"])`).
    pub fn at(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// The string content, for either string variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::QuotedString(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for VarValue {
    /// An empty mapping: merging it over defaults is a no-op.
    fn default() -> Self {
        Self::Mapping(BTreeMap::new())
    }
}

impl From<serde_yaml::Value> for VarValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::String(s),
            Value::Sequence(seq) => Self::Sequence(seq.into_iter().map(Into::into).collect()),
            Value::Mapping(map) => Self::Mapping(
                map.into_iter()
                    .map(|(k, v)| (yaml_key_to_string(k), v.into()))
                    .collect(),
            ),
            Value::Tagged(tagged) => tagged.value.into(),
        }
    }
}

/// Render a YAML mapping key as a string. Cluster files use plain string
/// keys; numeric and boolean keys are stringified for completeness.
fn yaml_key_to_string(key: serde_yaml::Value) -> String {
    use serde_yaml::Value;
    match key {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        _ => String::new(),
    }
}

/// Deep-merge `overrides` into `base`, overrides winning on conflict.
///
/// Where both sides hold a mapping at the same key the merge recurses;
/// any other combination replaces the base value wholesale, including a
/// scalar displacing an entire subtree. Keys present only in the override
/// are added; keys present only in the base are kept.
pub fn deep_merge(base: &mut VarValue, overrides: VarValue) {
    match overrides {
        VarValue::Mapping(entries) => {
            if let VarValue::Mapping(target) = base {
                for (key, value) in entries {
                    match target.get_mut(&key) {
                        Some(slot) => deep_merge(slot, value),
                        None => {
                            target.insert(key, value);
                        }
                    }
                }
                return;
            }
            *base = VarValue::Mapping(entries);
        }
        other => *base = other,
    }
}

/// Creates the `tmp/extra_vars.yml` file.
///
/// The cluster's overrides are merged over [`default_extra_vars`] and the
/// merged tree replaces `cluster.extra_vars` before being serialized in
/// block style. The target file is overwritten unconditionally; the tmp
/// directory is created if absent.
pub fn write_extra_vars(layout: &Layout, cluster: &mut Cluster) -> Result<()> {
    let mut merged = default_extra_vars();
    deep_merge(&mut merged, std::mem::take(&mut cluster.extra_vars));
    cluster.extra_vars = merged;

    fs::create_dir_all(&layout.tmp_dir)?;
    write_file(&cluster.extra_vars, &layout.extra_vars_path())?;
    Ok(())
}
