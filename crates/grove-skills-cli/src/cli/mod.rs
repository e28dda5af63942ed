//! CLI command definitions for the `grove-skills` binary.
//!
//! Skill commands are available at the top level (`grove-skills install ...`)
//! and under the `skills` group (`grove-skills skills install ...`).

pub mod skill;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use skill::SkillCommand;

/// Install, list, sync and remove agent skills for Claude, Codex and OpenCode.
#[derive(Parser)]
#[command(name = "grove-skills", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Skill(SkillCommand),

    /// Manage agent skills (same commands as the top level).
    #[command(alias = "skill")]
    Skills {
        #[command(subcommand)]
        action: SkillCommand,
    },

    /// Print version information.
    Version,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
