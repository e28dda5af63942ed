//! grove-skills CLI entry point.
//!
//! Binary name: `grove-skills`
//!
//! Parses CLI arguments, sets up tracing, builds the application state and
//! dispatches to the skill command handlers.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,grove_skills=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let action = match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "grove-skills", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Version => {
            print_version(cli.json);
            return Ok(());
        }
        Commands::Skill(action) | Commands::Skills { action } => action,
    };

    let state = AppState::init()?;
    cli::skill::handle_skill_command(action, &state, cli.json)
}

fn print_version(json: bool) {
    let version = env!("CARGO_PKG_VERSION");
    if json {
        println!("{}", serde_json::json!({ "name": "grove-skills", "version": version }));
    } else {
        println!("grove-skills {version}");
    }
}
