//! Reclaim daemon: entry point for running the lost-and-found registry.

use clap::Parser;
use std::path::PathBuf;

use reclaim_notify::MailerConfig;
use reclaim_service::{ReclaimService, ServiceConfig, StoreBackend};
use reclaim_utils::LogFormat;

#[derive(Parser)]
#[command(name = "reclaim-daemon", about = "Lost-and-found registry daemon")]
struct Cli {
    /// Address the HTTP server binds to.
    #[arg(long, env = "RECLAIM_LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// HTTP port.
    #[arg(long, env = "RECLAIM_PORT")]
    port: Option<u16>,

    /// Data directory for item storage.
    #[arg(long, env = "RECLAIM_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Item store backend: "lmdb" or "memory".
    #[arg(long, env = "RECLAIM_STORE_BACKEND")]
    store_backend: Option<String>,

    /// Base URL used in mailed verification links.
    #[arg(long, env = "RECLAIM_PUBLIC_BASE_URL")]
    public_base_url: Option<String>,

    /// Mail API key. Delivery stays disabled when unset and no config file
    /// provides one.
    #[arg(long, env = "RECLAIM_MAIL_API_KEY", hide_env_values = true)]
    mail_api_key: Option<String>,

    /// Mail sender address.
    #[arg(long, env = "RECLAIM_MAIL_SENDER")]
    mail_sender: Option<String>,

    /// Mail API send endpoint.
    #[arg(
        long,
        env = "RECLAIM_MAIL_ENDPOINT",
        default_value = "https://api.brevo.com/v3/smtp/email"
    )]
    mail_endpoint: String,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "RECLAIM_LOG_LEVEL")]
    log_level: String,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "RECLAIM_LOG_FORMAT")]
    log_format: String,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the registry service.
    Serve,
}

fn parse_backend(s: &str) -> StoreBackend {
    match s.to_lowercase().as_str() {
        "memory" => StoreBackend::Memory,
        _ => StoreBackend::Lmdb,
    }
}

fn resolve_config(cli: &Cli) -> ServiceConfig {
    let file_config: Option<ServiceConfig> = cli.config.as_ref().and_then(|path| {
        match ServiceConfig::from_toml_file(&path.display().to_string()) {
            Ok(cfg) => {
                tracing::info!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to load config file: {e}, using CLI defaults");
                None
            }
        }
    });

    let mut config = file_config.unwrap_or_default();

    if let Some(listen_addr) = &cli.listen_addr {
        config.listen_addr = listen_addr.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(backend) = &cli.store_backend {
        config.store_backend = parse_backend(backend);
    }
    if let Some(public_base_url) = &cli.public_base_url {
        config.public_base_url = public_base_url.clone();
    }
    config.log_level = cli.log_level.clone();
    config.log_format = cli.log_format.clone();

    // A mail key on the command line (or env) beats the file's mail section.
    if let (Some(api_key), Some(sender)) = (&cli.mail_api_key, &cli.mail_sender) {
        config.mail = Some(MailerConfig {
            endpoint: cli.mail_endpoint.clone(),
            api_key: api_key.clone(),
            sender_email: sender.clone(),
            sender_name: None,
        });
    }

    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    reclaim_utils::init_logging(LogFormat::from_config(&cli.log_format), &cli.log_level);

    let config = resolve_config(&cli);

    match cli.command {
        Command::Serve => {
            tracing::info!(
                "Starting reclaim registry on {}:{} ({} store)",
                config.listen_addr,
                config.port,
                match config.store_backend {
                    StoreBackend::Lmdb => "lmdb",
                    StoreBackend::Memory => "memory",
                },
            );

            let service = ReclaimService::new(config)?;
            service.run().await?;

            tracing::info!("reclaim daemon exited cleanly");
        }
    }

    Ok(())
}
