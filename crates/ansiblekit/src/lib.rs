//! # ansiblekit
//!
//! Pure Rust helpers for driving `ansible-playbook` against a cluster
//! playground.
//!
//! This crate provides functionality for:
//! - Probing whether `ansible-playbook` is installed
//! - Generating a grouped host inventory from machine descriptors
//! - Merging cluster overrides over default extra vars and writing them as
//!   block-style YAML
//! - Invoking `ansible-playbook` with the generated files and a constructed
//!   environment
//!
//! ## Example
//!
//! ```no_run
//! use ansiblekit::{Cluster, Layout, Machine};
//! use std::path::Path;
//!
//! let layout = Layout::under(Path::new("."));
//! let machines = vec![
//!     Machine::new("node1", "10.0.0.1", ["master"]),
//!     Machine::new("node2", "10.0.0.2", ["worker"]),
//! ];
//! let mut cluster = Cluster::default();
//!
//! ansiblekit::write_inventory(&layout, &machines).expect("inventory");
//! ansiblekit::write_extra_vars(&layout, &mut cluster).expect("extra vars");
//!
//! let status = ansiblekit::run_playbook(&layout, "create").expect("launch");
//! if !status.success() {
//!     eprintln!("playbook failed");
//! }
//! ```
//!
//! All operations are synchronous and write into the layout's tmp directory
//! with unconditional overwrites; callers must not run them concurrently
//! against the same directory.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod inventory;
pub mod runner;
pub mod types;
pub mod vars;

pub use error::{Error, Result};
pub use inventory::{InventoryDoc, write_inventory};
pub use runner::{PLAYBOOK_BIN, ansible_installed, run_playbook};
pub use types::{Cluster, Layout, Machine};
pub use vars::{VarValue, deep_merge, default_extra_vars, write_extra_vars};
