//! HTTP interface
//!
//! - `GET  /health`
//! - `GET  /api/calculate?lat_a=..&lon_a=..&azimuth=..&distance_km=..&lat_b=..&lon_b=..`
//! - `POST /api/batch` (multipart/form-data with a `csv` file field)

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
