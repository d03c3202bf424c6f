// ABOUTME: e2e-tools CLI - lists, describes and invokes the mock fixture tools.
// ABOUTME: Lets non-Rust test harnesses drive the fixtures as a subprocess.

use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};
use e2e_tools::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "e2e-tools", version, about = "Mock tools for agent e2e tests")]
struct Cli {
    /// Log filter directive, e.g. `debug` or `e2e_tools=trace`.
    #[arg(long, global = true, env = "E2E_TOOLS_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every tool name, one per line.
    List,
    /// Print tool definitions as JSON.
    Schema {
        /// Only print this tool's definition.
        name: Option<String>,
    },
    /// Execute a tool and print its output.
    Call {
        name: String,
        /// Tool parameters as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,
        /// Print the whole result as JSON instead of just its content.
        #[arg(long)]
        json: bool,
    },
}

/// Explicit directive first, then `RUST_LOG`, then `warn`.
fn log_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

fn init_logging(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(log_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

async fn run(command: Command, registry: &Registry, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::List => {
            for name in registry.list().await {
                writeln!(out, "{}", name)?;
            }
        }
        Command::Schema { name: None } => {
            let defs = registry.to_definitions().await;
            writeln!(out, "{}", serde_json::to_string_pretty(&defs)?)?;
        }
        Command::Schema { name: Some(name) } => {
            let tool = registry
                .get(&name)
                .await
                .ok_or_else(|| ToolError::NotFound(name.clone()))?;
            let def = ToolDefinition::from_tool(tool.as_ref());
            writeln!(out, "{}", serde_json::to_string_pretty(&def)?)?;
        }
        Command::Call { name, params, json } => {
            let params: serde_json::Value =
                serde_json::from_str(&params).context("--params must be valid JSON")?;
            let result = registry.execute(&name, params).await?;
            if json {
                writeln!(out, "{}", serde_json::to_string(&result)?)?;
            } else {
                writeln!(out, "{}", result.content)?;
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let registry = Registry::with_fixtures().await;
    run(cli.command, &registry, &mut std::io::stdout().lock()).await
}
