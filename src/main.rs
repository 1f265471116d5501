mod config;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use rfwalk::common::{Health, Status};
use rfwalk::redfish::{ComputerSystem, ServiceRoot};
use rfwalk::service::{format_error, USER_AGENT};
use rfwalk::Transport;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Walk the resources of a Redfish service
#[derive(Parser, Debug)]
#[command(name = "rfwalk", version, about, long_about = None)]
struct Args {
    /// Service endpoint, e.g. https://bmc.example.com
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Session token sent as X-Auth-Token
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the service root
    Root,
    /// List computer systems
    Systems,
    /// List managers
    Managers,
    /// List chassis
    Chassis,
    /// List the drives of a system, e.g. /redfish/v1/Systems/1
    Drives { system: String },
    /// Print any resource as JSON
    Get { path: String },
    /// Remember an endpoint for later runs
    Use { endpoint: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Cannot open log file {:?}: {}", log_path, e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("rfwalk started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("rfwalk").join("rfwalk.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".rfwalk").join("rfwalk.log");
    }
    PathBuf::from("rfwalk.log")
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    if let Err(err) = run(args).await {
        tracing::error!("{:?}", err);
        match err.downcast_ref::<rfwalk::Error>() {
            Some(api_err) => eprintln!("Error: {}", format_error(api_err)),
            None => eprintln!("Error: {:#}", err),
        }
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config::load();

    if let Command::Use { endpoint } = &args.command {
        // Validate before persisting
        Transport::new(endpoint, None)?;
        config
            .set_endpoint(endpoint)
            .context("Failed to save configuration")?;
        println!("Using {}", endpoint);
        return Ok(());
    }

    let endpoint = config
        .effective_endpoint(args.endpoint.as_deref())
        .ok_or_else(|| anyhow!("No endpoint configured. Use --endpoint or `rfwalk use <endpoint>`"))?;

    let transport = connect(&endpoint, &config, args.token.as_deref()).await?;
    tracing::info!("Using endpoint: {}", endpoint);

    match args.command {
        Command::Root => show_root(&transport).await,
        Command::Systems => list_systems(&transport).await,
        Command::Managers => list_managers(&transport).await,
        Command::Chassis => list_chassis(&transport).await,
        Command::Drives { system } => list_drives(&transport, &system).await,
        Command::Get { path } => print_raw(&transport, &path).await,
        Command::Use { .. } => Ok(()),
    }
}

async fn connect(endpoint: &str, config: &Config, token: Option<&str>) -> Result<Transport> {
    let mut builder = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(0);
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    let http = builder.build().context("Failed to build HTTP client")?;

    let transport = Transport::new(endpoint, Some(http))?;
    if let Some(token) = token {
        transport.set_token(token).await;
    }
    Ok(transport)
}

fn health(status: &Status) -> &'static str {
    match status.health {
        Some(Health::Ok) => "OK",
        Some(Health::Warning) => "Warning",
        Some(Health::Critical) => "Critical",
        Some(Health::Unknown) | None => "-",
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

async fn show_root(transport: &Transport) -> Result<()> {
    let root = ServiceRoot::connect(transport).await?;

    println!("{} ({})", root.entity.name, root.entity.id);
    println!("  Redfish version: {}", or_dash(&root.redfish_version));
    println!("  Vendor:          {}", or_dash(&root.vendor));
    println!("  Product:         {}", or_dash(&root.product));
    println!("  UUID:            {}", or_dash(&root.uuid));
    println!("  Systems:         {}", or_dash(root.systems_link()));
    println!("  Managers:        {}", or_dash(root.managers_link()));
    println!("  Chassis:         {}", or_dash(root.chassis_link()));
    Ok(())
}

async fn list_systems(transport: &Transport) -> Result<()> {
    let root = ServiceRoot::connect(transport).await?;
    for system in root.systems().await? {
        println!(
            "{:<24} {:<24} {:<10} {}",
            system.odata.id,
            system.entity.name,
            system
                .power_state
                .map(|s| format!("{:?}", s))
                .unwrap_or_else(|| "-".to_string()),
            health(&system.status)
        );
    }
    Ok(())
}

async fn list_managers(transport: &Transport) -> Result<()> {
    let root = ServiceRoot::connect(transport).await?;
    for manager in root.managers().await? {
        println!(
            "{:<24} {:<24} {:<10} {}",
            manager.odata.id,
            manager.entity.name,
            or_dash(&manager.firmware_version),
            health(&manager.status)
        );
    }
    Ok(())
}

async fn list_chassis(transport: &Transport) -> Result<()> {
    let root = ServiceRoot::connect(transport).await?;
    for chassis in root.chassis().await? {
        println!(
            "{:<24} {:<24} {:<12} {}",
            chassis.odata.id,
            chassis.entity.name,
            chassis
                .chassis_type
                .map(|t| format!("{:?}", t))
                .unwrap_or_else(|| "-".to_string()),
            health(&chassis.status)
        );
    }
    Ok(())
}

async fn list_drives(transport: &Transport, system_path: &str) -> Result<()> {
    let system = ComputerSystem::get(transport, system_path)
        .await
        .with_context(|| format!("Failed to load system {}", system_path))?;

    for storage in system.storage().await? {
        for drive in storage.drives().await? {
            println!(
                "{:<12} {:<20} {:<6} {:>16} {}",
                drive.entity.id,
                or_dash(&drive.model),
                drive
                    .media_type
                    .map(|m| format!("{:?}", m))
                    .unwrap_or_else(|| "-".to_string()),
                drive
                    .capacity_bytes
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                health(&drive.status)
            );
        }
    }
    Ok(())
}

async fn print_raw(transport: &Transport, path: &str) -> Result<()> {
    let response = transport.get(path).await?;
    let body = response.bytes().await.map_err(rfwalk::Error::from)?;
    let value: serde_json::Value = serde_json::from_slice(&body).map_err(rfwalk::Error::from)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
