use clap::Parser;
use color_eyre::eyre::Result;
use grocery_daemon::cors::{normalize_origins, DEFAULT_CORS_ORIGINS};
use grocery_daemon::logging::{default_log_dir, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use grocery_daemon::user_config::{load_user_config, UserConfig};
use grocery_daemon::{build_router, GroceryService, JsonFileStore};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Grocery Daemon - HTTP service for named grocery lists kept in a JSON file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "GROCERY_DAEMON_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// JSON data file (default: `[store].data_file` from ~/.grocery/config.toml,
    /// then ~/.grocery/grocery-lists.json)
    #[arg(long, env = "GROCERY_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins (not recommended for production).
    #[arg(
        long,
        env = "GROCERY_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "GROCERY_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "GROCERY_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.grocery/logs)
    #[arg(long, env = "GROCERY_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn report_bind_error(addr: SocketAddr, log_file: &Path, e: &std::io::Error) {
    eprintln!();
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of grocery-daemon may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill grocery-daemon");
        eprintln!("  2. Use a different port:        grocery-daemon --addr 127.0.0.1:3001");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
    } else {
        eprintln!("Error: Failed to start server: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Received shutdown signal, stopping server...");
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);
    let log_file = log_dir.join(LOG_FILENAME);
    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let user_cfg = load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });
    let data_file = user_cfg.resolve_data_file(args.data_file);
    info!("Using data file {}", data_file.display());

    let addr: SocketAddr = args.addr.parse()?;

    let cors_origins = normalize_origins(&args.cors_origins);
    info!(
        "CORS origins: {}",
        if cors_origins.iter().any(|o| o == "*") {
            "*".to_string()
        } else {
            cors_origins.join(", ")
        }
    );

    let service = GroceryService::new(Arc::new(JsonFileStore::new(data_file)));
    let app = build_router(service, cors_origins);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_bind_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!("Starting grocery daemon on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Grocery daemon stopped");
    Ok(())
}
