use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

use flowman::{AppState, LoggingConfig, ServerConfig, TaskRegistry};

/// Flow manager service: executes declarative task flows over HTTP.
#[derive(Parser)]
#[command(name = "flowman", version)]
struct Cli {
    /// Bind address, overriding FLOWMAN_BIND.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    LoggingConfig::init();
    let cli = Cli::parse();

    let config = ServerConfig::from_env()?;
    let bind = cli.bind.unwrap_or(config.bind);

    let registry = Arc::new(TaskRegistry::with_builtins());
    let state = Arc::new(AppState::new(registry));
    flowman::server::serve(bind, state).await
}
