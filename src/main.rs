use meal_api::{app::App, types::ToContext, utils::config::{AppEnvironment, Config}};
use std::{process::ExitCode, sync::Arc};
use tracing_subscriber::{prelude::*, EnvFilter};

fn init_tracing(environment: &AppEnvironment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(environment.colored_logs()))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();
    let environment = match &config {
        Ok(config) => config.app.environment.clone(),
        Err(_) => AppEnvironment::Development,
    };
    init_tracing(&environment);

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let ctx = match config.to_context().await {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let app = App::new(ctx);

    let listener = match app.bind().await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind listener: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match app.serve(listener).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Server error: {}", err);
            ExitCode::FAILURE
        }
    }
}
