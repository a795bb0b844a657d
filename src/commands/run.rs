use ansiblekit::Layout;
use anyhow::Result;
use std::path::Path;

use crate::Context;
use crate::commands::generate;
use crate::ui;

/// Generate input files, then run a playbook. Returns the exit code to
/// propagate: the playbook's own exit code, not an error, since judging a
/// run's outcome belongs to the caller of ansible-playbook.
pub fn run(ctx: &Context, layout: &Layout, cluster_file: &Path, playbook: &str) -> Result<i32> {
    generate::run(ctx, layout, cluster_file)?;

    let playbook_path = layout.playbook_path(playbook);
    if !playbook_path.is_file() {
        ui::warn(&format!("playbook {} does not exist", playbook_path.display()));
    }

    if !ctx.quiet {
        ui::info(&format!("running playbook {playbook}"));
    }
    log::debug!("invoking {} {}", ansiblekit::PLAYBOOK_BIN, playbook_path.display());

    let status = ansiblekit::run_playbook(layout, playbook)?;

    if status.success() {
        if !ctx.quiet {
            ui::success(&format!("playbook {playbook} finished"));
        }
    } else {
        ui::error(&format!("playbook {playbook} exited with {status}"));
    }

    Ok(status.code().unwrap_or(1))
}
