use std::error::Error;
use tracing::{error, info};
use wazuphb::config::env_loader::load_config;
use wazuphb::runner;
use wazuphb::tracing::setup_loki;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    let loki = setup_loki(config.loki_url.as_deref()).await;

    let result = runner::run(&config).await;

    match &result {
        Ok(paths) => paths
            .iter()
            .for_each(|path| info!("Wrote {}", path.display())),
        Err(err) => error!("Scraping failed: {}", err),
    }

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        handle.await?;
    }

    result?;

    Ok(())
}
