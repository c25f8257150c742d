use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skycast::config::AppConfig;
use skycast::forecast;
use skycast::owm::OwmClient;
use skycast::render;
use skycast::weather::{Units, WeatherService};

/// Shared HTTP client configuration
const HTTP_TIMEOUT_SECS: u64 = 30;
const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;
const HTTP_POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// Create the shared HTTP client with connection pooling
fn create_http_client() -> anyhow::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .pool_idle_timeout(Duration::from_secs(HTTP_POOL_IDLE_TIMEOUT_SECS))
        .pool_max_idle_per_host(10)
        .build()
        .context("Failed to create HTTP client")
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Run one lookup and render the dashboard, or print the failure as a
/// transient message. The user can always issue a new search afterwards.
async fn run_lookup(service: &WeatherService, city: &str, units: Units) {
    println!("Fetching weather for {city} ({units})...");
    match service.lookup(city, units).await {
        Ok(weather) => {
            let today =
                forecast::local_date(chrono::Utc::now().timestamp(), weather.timezone_offset);
            match today {
                Some(today) => println!("\n{}", render::render_dashboard(&weather, units, today)),
                None => println!("\n{}", render::render_current(&weather, units)),
            }
        }
        Err(e) => println!("{e}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skycast=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(default_city = %config.default_city, units = %config.units, "Configuration loaded");

    let http_client = create_http_client()?;
    let api = OwmClient::new(http_client, &config.openweathermap_api_key);
    let service = WeatherService::new(api);

    let mut units = config.units;

    // Fresh dashboard opens on the default city
    run_lookup(&service, &config.default_city, units).await;

    println!("Type a city name to search, 'units metric|imperial' to toggle, 'quit' to exit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        if input.is_empty() {
            println!("Enter a city name");
        } else if matches!(input, "quit" | "q" | "exit") {
            break;
        } else if let Some(rest) = input
            .strip_prefix("units")
            .or_else(|| input.strip_prefix("u "))
        {
            match Units::from_str(rest) {
                Ok(requested) if requested != units => {
                    units = requested;
                    println!("Units set to {units}");
                    // Re-fetch the loaded city so displayed values match
                    let loaded = service.state().weather.map(|w| w.city_name);
                    if let Some(city) = loaded {
                        run_lookup(&service, &city, units).await;
                    }
                }
                Ok(_) => println!("Units already {units}"),
                Err(e) => println!("{e} (expected 'units metric' or 'units imperial')"),
            }
        } else {
            run_lookup(&service, input, units).await;
        }

        prompt();
    }

    tracing::info!("Exiting");
    Ok(())
}
