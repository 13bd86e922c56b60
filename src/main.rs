//! Vacation pay HTTP server.
//!
//! Environment:
//! - `VACATION_PAY_CONFIG`: path to a YAML settings file (built-in defaults if unset)
//! - `VACATION_PAY_ADDR`: bind address, default `0.0.0.0:8080`
//! - `RUST_LOG`: log filter, default `vacation_pay=info`

use std::env;
use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vacation_pay::api::{AppState, create_router};
use vacation_pay::config::{CalculatorConfig, ConfigLoader};

const CONFIG_ENV: &str = "VACATION_PAY_CONFIG";
const ADDR_ENV: &str = "VACATION_PAY_ADDR";
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vacation_pay=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config() -> Result<CalculatorConfig, vacation_pay::error::CalculatorError> {
    match env::var(CONFIG_ENV) {
        Ok(path) => {
            info!(path = %path, "Loading calculator settings");
            Ok(ConfigLoader::load(path)?.into_config())
        }
        Err(_) => {
            info!("No {CONFIG_ENV} set, using built-in defaults");
            Ok(CalculatorConfig::default())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let config = load_config()?;
    info!(
        max_vacation_period = config.max_vacation_period(),
        average_month_length = config.average_month_length(),
        holidays = config.holidays().len(),
        "Calculator configured"
    );

    let addr = env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
