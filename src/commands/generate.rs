use ansiblekit::Layout;
use anyhow::{Context as _, Result};
use std::path::Path;

use crate::Context;
use crate::config::ClusterFile;
use crate::paths;
use crate::ui;

/// Generate the inventory and extra-vars files from the cluster definition.
pub fn run(ctx: &Context, layout: &Layout, cluster_file: &Path) -> Result<()> {
    let file = ClusterFile::load(cluster_file)?;
    log::info!(
        "loaded {} with {} machine(s)",
        cluster_file.display(),
        file.machines.len()
    );

    ansiblekit::write_inventory(layout, &file.machines)
        .with_context(|| format!("Could not write {}", layout.inventory_path().display()))?;

    let mut cluster = file.cluster();
    ansiblekit::write_extra_vars(layout, &mut cluster)
        .with_context(|| format!("Could not write {}", layout.extra_vars_path().display()))?;

    if !ctx.quiet {
        ui::success("generated Ansible input files");
        ui::kv("inventory", &paths::display_path(&layout.inventory_path()));
        ui::kv("extra vars", &paths::display_path(&layout.extra_vars_path()));
        if ctx.verbose > 0 {
            // Consumed by reference at run time, not generated here.
            ui::kv("ssh config", &paths::display_path(&layout.ssh_config_path()));
            ui::kv("ansible.cfg", &paths::display_path(&layout.ansible_cfg_path()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_generate_round_trip_through_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::under(dir.path());
        let cluster_file = dir.path().join("cluster.yml");
        fs::write(
            &cluster_file,
            "machines:\n  - name: node1\n    ip: 10.0.0.1\n    roles: [master]\n\
             extra_vars:\n  kubeadm:\n    token: XYZ\n",
        )
        .unwrap();

        let ctx = Context {
            verbose: 0,
            quiet: true,
        };
        run(&ctx, &layout, &cluster_file).unwrap();

        let inventory = fs::read_to_string(layout.inventory_path()).unwrap();
        assert!(inventory.contains("node1 node_ip=10.0.0.1"));
        assert!(inventory.contains("[masters]"));

        let extra_vars = fs::read_to_string(layout.extra_vars_path()).unwrap();
        assert!(extra_vars.contains("token: XYZ"));
        assert!(extra_vars.contains("binary: /usr/bin/kubeadm"));
    }

    #[test]
    fn test_generate_fails_on_missing_cluster_file() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::under(dir.path());
        let ctx = Context {
            verbose: 0,
            quiet: true,
        };
        assert!(run(&ctx, &layout, &dir.path().join("absent.yml")).is_err());
    }
}
