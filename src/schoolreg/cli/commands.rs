//! # CLI Layer
//!
//! This module is **one possible UI client** for the registry. It is the only place
//! in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the store root and builds the `RegistryApi`
//! - `handle_*()`: Per-command handlers that call the API and print results
//! - `report_error()`: Maps library errors to stderr output
//!
//! Running `schoolreg` with no command lists the directory.

use super::print::{
    print_config, print_directory, print_error_message, print_messages, print_states,
    print_validation_errors,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use school_registry::api::{CmdMessage, ConfigAction, RegistryApi};
use school_registry::config::RegistryConfig;
use school_registry::error::{RegistryError, Result};
use school_registry::init::{initialize, resolve_home};
use school_registry::logging::{init_logging, Verbosity};
use school_registry::model::{ImageUpload, NewSchool};
use school_registry::store::fs::FileStore;
use std::path::PathBuf;

struct AppContext {
    api: RegistryApi<FileStore>,
    config: RegistryConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flag(cli.verbose));

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            address,
            city,
            state,
            contact,
            email,
            image,
        }) => {
            let fields = NewSchool {
                name,
                address,
                city,
                state,
                contact,
                email_id: email,
            };
            handle_add(&mut ctx, fields, image)
        }
        Some(Commands::List {
            search,
            state,
            sort,
        }) => handle_list(&ctx, search, state, sort),
        Some(Commands::States) => handle_states(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = resolve_home(cli.home.as_deref())?;
    let ctx = initialize(home);
    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

fn handle_add(ctx: &mut AppContext, fields: NewSchool, image: Option<PathBuf>) -> Result<()> {
    let upload = match image {
        Some(path) => {
            let bytes = std::fs::read(&path).map_err(|e| {
                RegistryError::Api(format!("Cannot read image {}: {}", path.display(), e))
            })?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Some(ImageUpload::new(file_name, bytes))
        }
        None => None,
    };

    match ctx.api.register_school(fields, upload) {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e) => {
            if e.is_storage() {
                print_error_message("Failed to add school. Please try again.");
            }
            Err(e)
        }
    }
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    state: Option<String>,
    sort: Option<String>,
) -> Result<()> {
    let result = ctx.api.browse(
        search.as_deref(),
        state.as_deref(),
        sort.as_deref(),
        ctx.config.sort_key(),
    )?;

    if let Some(directory) = &result.directory {
        if let Some(wanted) = state.as_deref().filter(|s| *s != "all") {
            if !directory.states.iter().any(|s| s == wanted) {
                print_messages(&[CmdMessage::warning(format!(
                    "No registered school is in state \"{}\"",
                    wanted
                ))]);
            }
        }
        print_directory(directory, &ctx.config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_states(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.states()?;
    print_states(&result.states);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Prints an error returned by [`run`] to stderr.
pub fn report_error(err: &RegistryError) {
    match err {
        RegistryError::Validation(errors) => print_validation_errors(errors),
        other => eprintln!("{} {}", "Error:".red().bold(), other),
    }
}
