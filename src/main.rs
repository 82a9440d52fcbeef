//! Bike Sharing Demand Predictor - Main Entry Point
//!
//! Loads the regression model once, then serves predictions from an
//! interactive terminal form.

use anyhow::{Context, Result};
use bike_demand_predictor::{
    app::AppContext,
    config::{AppConfig, LogFormat, LoggingConfig},
    form::DemandForm,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("Invalid log level")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }

    Ok(())
}

fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Bike Sharing Demand Predictor");
    info!(model_path = %config.model.path, "Configuration loaded successfully");

    // Model load failure is unrecoverable
    let mut ctx = match AppContext::load(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "Failed to load model");
            return Err(e).context("Cannot serve predictions without a model");
        }
    };

    info!(
        model_path = %ctx.config().model.path,
        model = %ctx.gateway().model_name(),
        "Model ready"
    );

    DemandForm::new().run(&mut ctx)?;

    info!("Predictor shutting down");
    Ok(())
}
