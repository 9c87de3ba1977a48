use std::path::PathBuf;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mock_server::Seed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| {
        info!("PORT not set, using default: 3000");
        "3000".to_string()
    });
    let seed = match std::env::var("ANIMALS_DB") {
        Ok(path) => {
            let seed = Seed::load(&PathBuf::from(&path))?;
            info!(path = %path, count = seed.animals.len(), "seeded registry");
            seed
        }
        Err(_) => Seed::default(),
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    mock_server::serve(listener, seed.animals).await?;
    Ok(())
}
