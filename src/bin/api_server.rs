//! azimuth-calc HTTP server
//!
//! # Environment Variables
//!
//! - `AZIMUTH_CALC_CONFIG`: optional TOML configuration file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `RUST_LOG`: Log filter directives, e.g. `info,azimuth_calc=debug` (default: info)

use tracing::info;

use azimuth_calc::api::{create_router, AppState};
use azimuth_calc::{logging, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("info");

    let config = ServerConfig::load()?;
    let addr = config.bind_address()?;

    let app = create_router(AppState::from_config(&config), config.body_limit_bytes());

    info!(ellipsoid = %config.ellipsoid, max_batch_rows = config.max_batch_rows, "starting azimuth-calc API server");
    info!("Listening on http://{}", addr);
    info!("  GET  /api/calculate?lat_a=..&lon_a=..&azimuth=..&distance_km=..&lat_b=..&lon_b=..");
    info!("  POST /api/batch (multipart/form-data: csv file)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
