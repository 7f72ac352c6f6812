use http_dispatcher::config::loader;
use http_dispatcher::lifecycle::{self, Shutdown};
use http_dispatcher::observability::logging;
use http_dispatcher::{HttpServer, RouterTable};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration first: the log level comes from it.
    let config = loader::resolve()?;

    logging::init(&config.observability.log_level);

    tracing::info!(
        env = %config.env_name,
        http_port = config.http_port,
        https_port = config.https_port,
        "Configuration loaded"
    );

    // The router table is built once and injected into the server; nothing
    // mutates it after this point.
    let table = RouterTable::new();

    let shutdown = Shutdown::new();
    tokio::spawn(lifecycle::watch_ctrl_c(shutdown.clone()));

    let server = HttpServer::new(config, table);
    server.run(shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
