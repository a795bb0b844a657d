use anyhow::Result;

use crate::Context;
use crate::ui;

/// Report whether `ansible-playbook` is available on this system.
///
/// Returns `true` when available, so the caller can map absence to a
/// non-zero exit code.
pub fn run(ctx: &Context) -> Result<bool> {
    let installed = ansiblekit::ansible_installed()?;

    if installed {
        if !ctx.quiet {
            ui::success("ansible-playbook is installed");
        }
    } else {
        ui::error("ansible-playbook not found on PATH");
        ui::dim("install Ansible to run playground playbooks");
    }

    Ok(installed)
}
