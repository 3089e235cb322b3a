//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the `tracing` subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_logging()`: stderr subscriber filtered by `RUST_LOG` or `--verbose`
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and format output
//!
//! Errors bubble up as `ShelfError`; `main` prints them and exits with 1.

use super::render::{print_json, print_messages, print_product_detail, print_products};
use super::setup::{Cli, Commands, ProductFields};
use clap::Parser;
use serde_json::json;
use shelfapp::api::ShelfApi;
use shelfapp::config::ShelfConfig;
use shelfapp::error::Result;
use shelfapp::init::initialize;
use shelfapp::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

struct AppContext {
    api: ShelfApi<FileStore>,
    config: ShelfConfig,
    data_file: PathBuf,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Get { id }) => handle_get(&ctx, id),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Update { id, fields }) => handle_update(&mut ctx, id, fields),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Config) => handle_config(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let ctx = initialize(&cwd, cli.file.clone());

    AppContext {
        api: ctx.api,
        config: ctx.config,
        data_file: ctx.data_file,
        json: cli.json,
    }
}

fn handle_add(ctx: &mut AppContext, fields: ProductFields) -> Result<()> {
    let result = ctx.api.add_product(fields.into_new_product())?;
    if ctx.json {
        if let Some(product) = result.affected_products.first() {
            print_json(product)?;
        }
        return Ok(());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.get_product(id)?;
    for product in &result.listed_products {
        if ctx.json {
            print_json(product)?;
        } else {
            print_product_detail(product);
        }
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_products()?;
    if ctx.json {
        return print_json(&result.listed_products);
    }
    print_products(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: u64, fields: ProductFields) -> Result<()> {
    let result = ctx.api.update_product(id, fields.into_patch())?;
    if ctx.json {
        if let Some(product) = result.affected_products.first() {
            print_json(product)?;
        }
        return Ok(());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.delete_product(id)?;
    if ctx.json {
        return print_json(&result.affected_products);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    if ctx.json {
        return print_json(&json!({
            "data_file": ctx.config.data_file(),
            "indent": ctx.config.indent,
            "resolved_file": ctx.data_file,
        }));
    }
    println!("data_file = {}", ctx.config.data_file());
    println!("indent = {}", ctx.config.indent);
    println!("resolved_file = {}", ctx.data_file.display());
    Ok(())
}
