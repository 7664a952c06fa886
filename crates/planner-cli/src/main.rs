mod config;
mod console;
mod menu;
#[cfg(test)]
mod test_util;

use std::io;

use clap::{Parser, Subcommand};

use planner_core::Planner;

use config::AppConfig;
use console::Console;
use menu::App;

#[derive(Parser)]
#[command(name = "planner", about = "Interactive academic course planner")]
struct Cli {
    /// Maximum courses per planner (overrides PLANNER_CAPACITY env var)
    #[arg(long, global = true)]
    capacity: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a planner config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Start the interactive menu (the default)
    Run,
}

/// Execute the `planner init` command: write config file.
fn cmd_init(capacity: Option<usize>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let capacity = capacity.unwrap_or(planner_core::PlannerConfig::DEFAULT_CAPACITY);
    if capacity == 0 {
        anyhow::bail!("planner capacity must be at least 1");
    }

    let cfg = config::ConfigFile {
        planner: config::PlannerSection { capacity },
    };
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  planner.capacity = {capacity}");

    Ok(())
}

/// Run the interactive menu on stdin/stdout.
fn cmd_run(cli_capacity: Option<usize>) -> anyhow::Result<()> {
    let resolved = AppConfig::resolve(cli_capacity)?;
    let mut app = App::new(Planner::from_config(&resolved.planner));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    menu::run_menu(&mut app, &mut console)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { force }) => cmd_init(cli.capacity, force),
        Some(Commands::Run) | None => cmd_run(cli.capacity),
    }
}
