//! Add command implementation.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api::{self, ProvisionRequest, ProvisionStep, StepOutcome, Workspace};
use crate::domain::AppError;

pub struct AddArgs {
    pub name: Option<String>,
    pub server_type: Option<String>,
    pub address: Option<String>,
    pub resume: bool,
}

pub fn run_add(workspace: &Workspace, args: AddArgs) -> Result<(), AppError> {
    let Some(request) = resolve_add_inputs(args)? else {
        return Ok(());
    };

    let report = match api::add_server_in(workspace, &request) {
        Ok(report) => report,
        Err(err) => {
            if matches!(
                err.failed_step(),
                Some(ProvisionStep::ProxyRoute | ProvisionStep::ComposeService | ProvisionStep::Scaffold)
            ) {
                eprintln!(
                    "⚠️  {} is already in the inventory. Fix the error below and re-run with --resume.",
                    request.name
                );
            }
            return Err(err);
        }
    };

    for (step, outcome) in &report.steps {
        match (step, outcome) {
            (ProvisionStep::Scaffold, StepOutcome::Unchanged { path }) => {
                println!("✅ {}/ already scaffolded", path)
            }
            (ProvisionStep::Scaffold, _) => println!(
                "✅ Scaffolded {}/ ({} file(s) copied)",
                report.scaffold.server_dir,
                report.scaffold.copied.len()
            ),
            (_, StepOutcome::Written { path }) => println!("✅ Updated {}", path),
            (_, StepOutcome::Unchanged { path }) => println!("✅ {} already up to date", path),
            (_, StepOutcome::Resolved) => {}
        }
    }
    for skipped in &report.scaffold.skipped {
        println!("  Kept existing {}", skipped);
    }
    println!(
        "✅ Provisioned {} ({}) at {}",
        report.record.name, report.record.version, report.record.address
    );
    Ok(())
}

/// Fill missing values from prompts. `None` means the user cancelled.
fn resolve_add_inputs(args: AddArgs) -> Result<Option<ProvisionRequest>, AppError> {
    let name = match args.name {
        Some(value) => value,
        None => match prompt_text("Server name", None)? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let server_type = match args.server_type {
        Some(value) => value,
        None => match prompt_server_type()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let address = match args.address {
        Some(value) => value,
        None => match prompt_text("Server address", Some(format!("{}:25565", name)))? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    Ok(Some(ProvisionRequest { name, server_type, address, resume: args.resume }))
}

fn prompt_server_type() -> Result<Option<String>, AppError> {
    let types = api::server_type_names()?;
    let selection = Select::new()
        .with_prompt("Select server type")
        .items(&types)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::config_error(format!("Failed to select server type: {}", err)))?;

    Ok(selection.map(|index| types[index].clone()))
}

fn prompt_text(prompt: &str, default: Option<String>) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default);
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => {
            Err(AppError::config_error(format!("Failed to read {}: {}", prompt.to_lowercase(), err)))
        }
    }
}
