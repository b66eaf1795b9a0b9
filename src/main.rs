use std::process::ExitCode;

use order_desk::config::AppConfig;
use order_desk::startup::{self, StartupError};
use order_desk::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    match serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "Order desk failed");
            eprintln!("order-desk: {}", error);
            ExitCode::FAILURE
        }
    }
}

async fn serve() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.server);
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        validate_stock = config.orders.validate_stock,
        "Configuration loaded"
    );

    startup::run(config).await
}
