//! Weather AQI - weather and air-quality API backend
//!
//! Serves Open-Meteo forecasts and simulated air-quality readings through a
//! bounded LRU cache with per-namespace freshness windows.

pub mod alerts;
pub mod analysis;
pub mod api;
pub mod aqi;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod tasks;
pub mod upstream;

pub use api::create_router;
pub use cache::{RecencyCache, SharedCache};
pub use config::Config;
pub use error::{AppError, CacheError};
pub use state::AppState;
pub use tasks::spawn_purge_task;
