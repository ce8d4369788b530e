use ecotrip::estimation::EmissionsModel;
use ecotrip::estimation::linear::LinearModel;
use ecotrip::{api, config, estimation, state};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::Level;

fn init_tracing(level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_default()?;
    init_tracing(config.log_level().unwrap_or(Level::INFO));
    if config.log_level().is_none() {
        tracing::warn!(level = %config.logging.level, "Unknown log level, using info");
    }
    tracing::info!(
        app = %config.app.name,
        config_path = config::DEFAULT_CONFIG_PATH,
        "ecotrip starting"
    );

    let model = load_model(&config);
    let state = Arc::new(state::AppState::new(model));

    let app = api::router(state);
    let port = config.server_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load the estimation model from calibration, falling back to defaults.
fn load_model(config: &config::Config) -> Arc<dyn EmissionsModel> {
    match config.calibration_path() {
        Some(path) => match estimation::load_calibration_from_path(path) {
            Ok(model) => {
                tracing::info!(
                    path = %path.display(),
                    model = model.name(),
                    "Estimation model loaded"
                );
                Arc::from(model)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load calibration, using default");
                Arc::new(LinearModel::with_defaults())
            }
        },
        None => {
            tracing::info!("No calibration path configured, using default model");
            Arc::new(LinearModel::with_defaults())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads_calibrated_model() -> Result<(), Box<dyn std::error::Error>> {
        let config = config::load_default()?;
        let model = load_model(&config);
        assert_eq!(model.name(), "linear");
        Ok(())
    }
}
