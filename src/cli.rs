use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kplay")]
#[command(version)]
#[command(about = "Run Ansible playbooks against a kubeadm cluster playground", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Cluster definition file
    #[arg(
        short,
        long,
        global = true,
        default_value = "cluster.yml",
        env = "KPLAY_CLUSTER"
    )]
    pub cluster: PathBuf,

    /// Override the scratch directory for generated files
    #[arg(long, global = true, env = "KPLAY_TMP_DIR")]
    pub tmp_dir: Option<String>,

    /// Override the directory holding playbooks and ansible.cfg
    #[arg(long, global = true, env = "KPLAY_ANSIBLE_DIR")]
    pub ansible_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that ansible-playbook is installed
    Check,

    /// Generate the inventory and extra-vars files
    Generate,

    /// Generate input files, then run a playbook by name
    Run {
        /// Playbook name (resolved as <ansible-dir>/<name>.yml)
        playbook: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
