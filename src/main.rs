use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fastly_mgmt::config::Config;
use fastly_mgmt::fastly::{format_fastly_error, Client, FastlyError};
use fastly_mgmt::resource::dispatch::{self, Context};
use fastly_mgmt::resource::{self, get_resource, OutputFormat, Scope};
use serde_json::Value;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Manage Fastly services from the command line
#[derive(Parser, Debug)]
#[command(name = "fastly-mgmt", version, about, long_about = None)]
struct Args {
    /// Fastly API token (defaults to FASTLY_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API endpoint (defaults to FASTLY_API_URL or https://api.fastly.com)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Service ID to operate on
    #[arg(short, long, global = true)]
    service: Option<String>,

    /// Service version; defaults to the active version, else the latest
    #[arg(short = 'n', long = "number", global = true)]
    number: Option<u32>,

    /// Customer ID for user listings (defaults to the current user's)
    #[arg(long, global = true)]
    customer: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    output: Output,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the resource kinds this tool knows about
    Kinds,
    /// List all items of a kind
    List { kind: String },
    /// Show a single item
    Get { kind: String, name: String },
    /// Delete a single item
    Delete { kind: String, name: String },
    /// List the versions of the service
    Versions,
    /// Activate a version
    Activate { version: u32 },
    /// Deactivate a version
    Deactivate { version: u32 },
    /// Clone a version into a new editable version
    Clone { version: u32 },
    /// Lock a version against changes
    Lock { version: u32 },
    /// Validate a version's configuration
    Validate { version: u32 },
    /// List every versioned kind of a version at once
    Summary { version: Option<u32> },
    /// Remember a service ID as the default
    UseService { service_id: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Output {
    Table,
    Json,
    Yaml,
}

impl From<Output> for OutputFormat {
    fn from(output: Output) -> Self {
        match output {
            Output::Table => OutputFormat::Table,
            Output::Json => OutputFormat::Json,
            Output::Yaml => OutputFormat::Yaml,
        }
    }
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

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

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

    tracing::info!("fastly-mgmt started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("fastly-mgmt").join("fastly-mgmt.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".fastly-mgmt").join("fastly-mgmt.log");
    }
    PathBuf::from("fastly-mgmt.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let mut config = Config::load();

    // Commands that need no API access
    match &args.command {
        Command::Kinds => {
            print_kinds();
            return Ok(());
        }
        Command::UseService { service_id } => {
            config.set_service(service_id)?;
            println!("Default service set to {}", service_id);
            return Ok(());
        }
        _ => {}
    }

    let api_key = config
        .effective_api_key(args.api_key.as_deref())?
        .context("No Fastly API key configured. Set FASTLY_API_KEY or use --api-key")?;
    let endpoint = config.effective_endpoint(args.endpoint.as_deref());
    let client = Client::with_endpoint(api_key, &endpoint)?;

    let ctx = Context {
        service_id: config.effective_service(args.service.as_deref()),
        version: args.number,
        customer_id: args.customer.clone(),
    };

    tracing::info!("Using endpoint: {}, service: {:?}", endpoint, ctx.service_id);

    if let Err(err) = run(&client, ctx, &args).await {
        eprintln!("Error: {}", describe_error(&err));
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(client: &Client, mut ctx: Context, args: &Args) -> Result<()> {
    let format = OutputFormat::from(args.output);

    match &args.command {
        Command::List { kind } => {
            resolve_version_if_needed(client, &mut ctx, kind).await?;
            let items = dispatch::list(kind, client, &ctx).await?;
            println!("{}", resource::render(format, get_resource(kind), &Value::Array(items))?);
        }
        Command::Get { kind, name } => {
            resolve_version_if_needed(client, &mut ctx, kind).await?;
            let item = dispatch::get(kind, client, &ctx, name).await?;
            println!("{}", resource::render(format, get_resource(kind), &item)?);
        }
        Command::Delete { kind, name } => {
            resolve_version_if_needed(client, &mut ctx, kind).await?;
            dispatch::delete(kind, client, &ctx, name).await?;
            let label = get_resource(kind)
                .map(|def| format!("{}: {}", def.display_name, def.item_label(name)))
                .unwrap_or_else(|| format!("{} {}", kind, name));
            println!("Deleted {}", label);
        }
        Command::Versions => {
            let items = dispatch::list("versions", client, &ctx).await?;
            println!("{}", resource::render(format, get_resource("versions"), &Value::Array(items))?);
        }
        Command::Activate { version } => {
            let v = client.activate_version(ctx.service(), *version).await?;
            println!("Activated version {} of {}", v.number, ctx.service());
        }
        Command::Deactivate { version } => {
            let v = client.deactivate_version(ctx.service(), *version).await?;
            println!("Deactivated version {} of {}", v.number, ctx.service());
        }
        Command::Clone { version } => {
            let v = client.clone_version(ctx.service(), *version).await?;
            println!("Cloned version {} into version {}", version, v.number);
        }
        Command::Lock { version } => {
            let v = client.lock_version(ctx.service(), *version).await?;
            println!("Locked version {}", v.number);
        }
        Command::Validate { version } => {
            let result = client.validate_version(ctx.service(), *version).await?;
            if result.is_valid() {
                println!("Version {} is valid", version);
            } else {
                println!(
                    "Version {} is invalid: {}",
                    version,
                    result.msg.as_deref().unwrap_or("no message")
                );
            }
            for warning in &result.warnings {
                println!("  warning: {}", warning);
            }
            for error in &result.errors {
                println!("  error: {}", error);
            }
        }
        Command::Summary { version } => {
            if version.is_some() {
                ctx.version = *version;
            }
            resolve_version_if_needed(client, &mut ctx, "backends").await?;
            let kinds = resource::versioned_resource_keys();
            for (kind, result) in dispatch::summary(client, &ctx, &kinds).await {
                let def = get_resource(kind);
                let title = def.map(|d| d.display_name.as_str()).unwrap_or(kind);
                match result {
                    Ok(items) if items.is_empty() => continue,
                    Ok(items) => {
                        println!("== {} ({})", title, items.len());
                        println!("{}\n", resource::render(format, def, &Value::Array(items))?);
                    }
                    Err(err) => println!("== {}: {}\n", title, describe_error(&err)),
                }
            }
        }
        Command::Kinds | Command::UseService { .. } => unreachable!("handled before connecting"),
    }

    Ok(())
}

/// Fill in the version for versioned kinds when none was given
async fn resolve_version_if_needed(client: &Client, ctx: &mut Context, kind: &str) -> Result<()> {
    let versioned = get_resource(kind).map(|d| d.scope == Scope::Versioned).unwrap_or(false);
    if !versioned || ctx.version.is_some() || ctx.service().is_empty() {
        return Ok(());
    }

    let versions = client.list_versions(ctx.service()).await?;
    let chosen = versions
        .iter()
        .find(|v| v.active)
        .or_else(|| versions.last())
        .map(|v| v.number)
        .with_context(|| format!("Service {} has no versions", ctx.service()))?;

    tracing::debug!("Resolved version {} for {}", chosen, ctx.service());
    ctx.version = Some(chosen);
    Ok(())
}

fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<FastlyError>() {
        Some(fastly_err) => format_fastly_error(fastly_err),
        None => format!("{:#}", err),
    }
}

fn print_kinds() {
    for key in resource::get_all_resource_keys() {
        if let Some(def) = get_resource(key) {
            println!(
                "{:<22} {:<28} {:<10} by {}",
                key,
                def.display_name,
                format!("{:?}", def.scope),
                def.name_field
            );
        }
    }
}
