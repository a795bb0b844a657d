//! Inventory document building and writing.
//!
//! The inventory file reflects the roles defined in the machine list: every
//! machine lands in group `all`, and each role `master` puts the machine in
//! group `masters`. Host lines at the top of the file carry per-host
//! variables (currently just `node_ip`).

use crate::error::Result;
use crate::types::{Layout, Machine};
use std::fmt::Write;
use std::fs;

/// Header comment written at the top of every generated inventory.
const HEADER: &str = "# Generated by kplay";

/// An in-memory inventory: ordered host groups plus per-host variables.
///
/// Groups keep their creation order and members keep encounter order, so
/// output is deterministic for a given machine list. Rebuilt from scratch on
/// every write; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryDoc {
    /// Host groups in creation order. `all` is always first.
    groups: Vec<(String, Vec<String>)>,
    /// Per-host `key=value` variables, in machine input order.
    host_vars: Vec<(String, Vec<(String, String)>)>,
}

impl InventoryDoc {
    /// Derive the inventory document from a machine list.
    ///
    /// A role listed twice on one machine yields a duplicate membership
    /// line, matching how the playbooks have always consumed the file.
    pub fn from_machines(machines: &[Machine]) -> Self {
        let mut groups: Vec<(String, Vec<String>)> = vec![("all".to_string(), Vec::new())];
        let mut host_vars = Vec::new();

        for machine in machines {
            groups[0].1.push(machine.name.clone());

            for role in &machine.roles {
                let group = format!("{}s", role.to_lowercase());
                match groups.iter_mut().find(|(name, _)| *name == group) {
                    Some((_, members)) => members.push(machine.name.clone()),
                    None => groups.push((group, vec![machine.name.clone()])),
                }
            }

            host_vars.push((
                machine.name.clone(),
                vec![("node_ip".to_string(), machine.ip.clone())],
            ));
        }

        Self { groups, host_vars }
    }

    /// Members of a group, if the group exists.
    pub fn group(&self, name: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(group, _)| group == name)
            .map(|(_, members)| members.as_slice())
    }

    /// Group names in creation order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Render the inventory file text.
    pub fn render(&self) -> String {
        let mut output = String::new();
        writeln!(output, "{HEADER}").unwrap();

        // Host-vars section: one line per machine.
        for (name, vars) in &self.host_vars {
            write!(output, "\n{name}").unwrap();
            for (key, value) in vars {
                write!(output, " {key}={value}").unwrap();
            }
        }
        writeln!(output).unwrap();

        // Host-groups section.
        for (group, members) in &self.groups {
            writeln!(output, "\n[{group}]").unwrap();
            for member in members {
                writeln!(output, "{member}").unwrap();
            }
        }

        output
    }
}

/// Creates the `tmp/inventory` file from the machine list.
///
/// The tmp directory is created if absent; an existing file is overwritten.
pub fn write_inventory(layout: &Layout, machines: &[Machine]) -> Result<()> {
    let doc = InventoryDoc::from_machines(machines);
    fs::create_dir_all(&layout.tmp_dir)?;
    fs::write(layout.inventory_path(), doc.render())?;
    Ok(())
}
