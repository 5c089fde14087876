mod command;
mod component;
mod config;
mod view;

use config::AppConfig;
use connectors::coingecko::CoinGeckoConnector;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the table on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config =
        AppConfig::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    info!("Starting cointable against {}", config.connector.base_url);

    let source = CoinGeckoConnector::new(&config.connector)
        .map_err(|e| format!("Failed to create market connector: {}", e))?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let table = component::run(&source, stdin, &mut stdout, config.show_images).await?;

    info!(
        "cointable stopped ({:?}, {} coins loaded)",
        table.status(),
        table.store().full_set().len()
    );

    Ok(())
}
