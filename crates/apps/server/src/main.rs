use server::ServerConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("configuration error: {err}");
            std::process::exit(2);
        }
    };
    let addr = config.addr;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    info!("zoning map server listening on http://{addr}");
    if let Err(err) = axum::serve(listener, server::app(config)).await {
        error!("server error: {err}");
        std::process::exit(1);
    }
}
