use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Stdio smoke-test harness for Model Context Protocol servers
///
/// Spawns the configured MCP server, drives the fixed
/// initialize -> tools/list -> tools/call conversation over its stdio pipes,
/// prints each response, and always reaps the server on the way out.
#[derive(Parser, Debug)]
#[command(name = "mcp-smoke")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    ///
    /// If not specified, tries in order:
    /// 1. ./.mcp-smoke.toml
    /// 2. $MCP_SMOKE_CONFIG
    /// 3. ~/.config/mcp-smoke/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Server launch command, overriding the configured one
    #[arg(trailing_var_arg = true)]
    server_command: Vec<String>,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt().with_env_filter(filter).with_target(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(std::sync::Arc::new(file)).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = mcp_smoke::ConfigLoader::load(args.config.as_deref())?;

    let log_level = args
        .log_level
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    setup_logging(&log_level, args.log_file)?;

    info!("Starting mcp-smoke v{}", env!("CARGO_PKG_VERSION"));

    if let Some((command, rest)) = args.server_command.split_first() {
        config.server.command = command.clone();
        config.server.args = rest.to_vec();
    }

    info!(
        "Target server: {} {}",
        config.server.command,
        config.server.args.join(" ")
    );

    let report = mcp_smoke::harness::run(&config).await?;

    let answered = report
        .steps
        .iter()
        .filter(|step| step.response.is_some())
        .count();
    info!(
        "Smoke run complete: {}/{} steps answered, server exited with {}",
        answered,
        report.steps.len(),
        report.server_status
    );

    Ok(())
}
