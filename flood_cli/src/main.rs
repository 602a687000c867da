//! # Floodcalc CLI
//!
//! Terminal front end for the agent calculation engine. Reads a project file
//! (JSON) and prints the agent quantity report or the bill of materials.
//!
//! ```text
//! flood_cli calc project.json
//! flood_cli bom project.json --json
//! flood_cli --agents tables.json agents
//! ```

mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use flood_core::agents::AgentCatalog;
use flood_core::config::CalcConfig;
use flood_core::project::Project;

#[derive(Parser)]
#[command(name = "flood_cli", version, about = "Clean agent quantity and BOM calculator")]
struct Cli {
    /// JSON agent catalog replacing the built-in agent tables
    #[arg(long, global = true, value_name = "FILE")]
    agents: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Required agent per room, per-agent subtotals and grand total
    Calc {
        /// Project file
        project: PathBuf,

        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Room-by-room BOM and aggregated project BOM
    Bom {
        /// Project file
        project: PathBuf,

        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// List configured agents with their tables and defaults
    Agents,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let custom;
    let config: &CalcConfig = match &cli.agents {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading agent catalog {}", path.display()))?;
            let agents = AgentCatalog::from_json(&json)
                .with_context(|| format!("parsing agent catalog {}", path.display()))?;
            tracing::info!(agents = agents.len(), "loaded agent catalog from {}", path.display());
            custom = CalcConfig::with_agents(agents);
            &custom
        }
        None => CalcConfig::standard(),
    };

    match cli.command {
        Commands::Calc { project, json } => {
            let project = load_project(&project)?;
            let summary = config.summarize(&project.rooms);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render::calculation_report(&project, &summary));
            }
        }
        Commands::Bom { project, json } => {
            let project = load_project(&project)?;
            let report = config.bill_of_materials(&project.rooms);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::bom_report(&report));
            }
        }
        Commands::Agents => print!("{}", render::agent_list(&config.agents)),
    }

    Ok(())
}

fn load_project(path: &Path) -> Result<Project> {
    let json = fs::read_to_string(path).with_context(|| format!("reading project {}", path.display()))?;
    let project = Project::from_json(&json).with_context(|| format!("parsing project {}", path.display()))?;
    tracing::debug!(rooms = project.rooms.len(), "loaded project {}", path.display());
    Ok(project)
}
