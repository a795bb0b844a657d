//! Probing for and invoking `ansible-playbook`.

use crate::error::{Error, Result};
use crate::types::Layout;
use std::ffi::OsString;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// Name of the executable driven by this crate.
pub const PLAYBOOK_BIN: &str = "ansible-playbook";

/// Check whether `ansible-playbook` is installed.
///
/// Probes with `-h`, discarding all output. A missing executable is a
/// normal negative result; any other spawn failure is unexpected and
/// propagates as an error.
pub fn ansible_installed() -> Result<bool> {
    let probe = Command::new(PLAYBOOK_BIN)
        .arg("-h")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match probe {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Io(e)),
    }
}

/// Run a playbook via subprocess, blocking until it exits.
///
/// Execution depends on files that must exist beforehand:
/// - `tmp/inventory` (generated by [`crate::write_inventory`])
/// - `tmp/extra_vars.yml` (generated by [`crate::write_extra_vars`])
/// - `tmp/ssh_config` (generated externally)
/// - `<ansible_dir>/ansible.cfg` (part of the code base)
///
/// The subprocess inherits stdio and runs with `ANSIBLE_CONFIG` pointing at
/// the static configuration file and the ssh_config appended to
/// `ANSIBLE_SSH_ARGS`. A non-zero exit is not an error at this layer; the
/// exit status is returned for the caller to judge. Only a failure to
/// launch is reported, wrapped as [`Error::Launch`].
pub fn run_playbook(layout: &Layout, playbook: &str) -> Result<ExitStatus> {
    let mut command = Command::new(PLAYBOOK_BIN);
    command
        .arg(layout.playbook_path(playbook))
        .arg("-i")
        .arg(layout.inventory_path())
        .arg("-e")
        .arg(extra_vars_arg(layout))
        .env("ANSIBLE_CONFIG", layout.ansible_cfg_path())
        .env(
            "ANSIBLE_SSH_ARGS",
            ssh_args(layout, std::env::var("ANSIBLE_SSH_ARGS").ok().as_deref()),
        )
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    command.status().map_err(|e| Error::Launch { source: e })
}

/// The `-e` argument: `@file` indirection to the generated extra-vars file.
fn extra_vars_arg(layout: &Layout) -> OsString {
    let mut arg = OsString::from("@");
    arg.push(layout.extra_vars_path());
    arg
}

/// The `ANSIBLE_SSH_ARGS` value: any pre-existing arguments with
/// `-F <tmp>/ssh_config` appended.
fn ssh_args(layout: &Layout, existing: Option<&str>) -> String {
    format!(
        "{} -F {}",
        existing.unwrap_or(""),
        layout.ssh_config_path().display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new("/work/tmp", "/work/hack/ansible")
    }

    #[test]
    fn test_extra_vars_arg_uses_file_indirection() {
        assert_eq!(
            extra_vars_arg(&layout()),
            OsString::from("@/work/tmp/extra_vars.yml")
        );
    }

    #[test]
    fn test_ssh_args_appends_to_existing_value() {
        assert_eq!(
            ssh_args(&layout(), Some("-o ControlMaster=auto")),
            "-o ControlMaster=auto -F /work/tmp/ssh_config"
        );
    }

    #[test]
    fn test_ssh_args_without_existing_value() {
        assert_eq!(ssh_args(&layout(), None), " -F /work/tmp/ssh_config");
    }
}
