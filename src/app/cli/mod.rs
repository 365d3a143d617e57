//! CLI Adapter.

mod add;
mod init;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, Workspace};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "mcctl")]
#[command(version)]
#[command(
    about = "Provision Minecraft servers across the inventory, proxy config and compose manifest",
    long_about = None
)]
struct Cli {
    /// Directory holding the managed files (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Configuration file (default: <root>/mcctl.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision a new server
    #[clap(visible_alias = "a")]
    Add {
        /// Server name (prompted when omitted)
        #[arg(short, long)]
        name: Option<String>,
        /// Server type (prompted when omitted)
        #[arg(short = 't', long = "type")]
        server_type: Option<String>,
        /// Backend address for the proxy, e.g. alpha:25565 (prompted when omitted)
        #[arg(short, long)]
        address: Option<String>,
        /// Complete a partially provisioned server whose inventory record matches
        #[arg(long)]
        resume: bool,
    },
    /// List provisioned servers
    #[clap(visible_alias = "ls")]
    List,
    /// List registered server types
    #[clap(visible_alias = "t")]
    Types,
    /// Install the default server templates
    #[clap(visible_alias = "i")]
    Init,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let workspace = Workspace { root: cli.root, config: cli.config };

    let result: Result<(), AppError> = match cli.command {
        Commands::Add { name, server_type, address, resume } => {
            add::run_add(&workspace, add::AddArgs { name, server_type, address, resume })
        }
        Commands::List => run_list(&workspace),
        Commands::Types => run_types(),
        Commands::Init => init::run_init(&workspace),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_list(workspace: &Workspace) -> Result<(), AppError> {
    let records = api::list_servers_in(workspace)?;
    if records.is_empty() {
        println!("No servers provisioned");
        return Ok(());
    }
    for record in records {
        println!("{:<20} {:<10} {}", record.name, record.version, record.address);
    }
    Ok(())
}

fn run_types() -> Result<(), AppError> {
    for summary in api::server_types()? {
        let subdirs: Vec<&str> = summary.descriptor.subdirectories.iter().map(String::as_str).collect();
        println!(
            "{:<10} version {:<8} memory {:<4} dirs: {}",
            summary.name,
            summary.env("VERSION").unwrap_or("-"),
            summary.env("MEMORY").unwrap_or("-"),
            subdirs.join(", ")
        );
    }
    Ok(())
}
