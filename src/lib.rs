pub mod app;
pub mod buckets;
pub mod config;
pub mod errors;
pub mod heatmap;
pub mod hud;
pub mod models;
pub mod orbit;
pub mod poller;
pub mod render;
pub mod state;
pub mod ui;

pub use app::Dashboard;
pub use config::{DashConfig, HeatmapWindow};
pub use state::DashState;
