use std::{env, time::Duration};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_POLL_SECS: u64 = 60;
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Which heatmap window the dashboard draws. The source dashboards shipped
/// both and never settled on one, so it stays a config choice here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatmapWindow {
    /// Twelve month blocks for the current calendar year.
    Months,
    /// Sunday-aligned rolling window ending today.
    Trailing,
}

#[derive(Debug, Clone)]
pub struct DashConfig {
    pub base_url: String,
    pub poll_interval: Duration,
    pub window: HeatmapWindow,
    pub hud: bool,
    pub frame_interval: Duration,
}

impl DashConfig {
    /// Resolve config from the environment once at startup. Bad values fall
    /// back to defaults rather than failing.
    pub fn from_env() -> Self {
        let base_url = env::var("DASH_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let poll_secs = env::var("DASH_POLL_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_POLL_SECS);
        let window = match env::var("DASH_HEATMAP").as_deref() {
            Ok("trailing") => HeatmapWindow::Trailing,
            _ => HeatmapWindow::Months,
        };
        let hud = env::var("DASH_HUD")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let frame_ms = env::var("DASH_FRAME_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_FRAME_MS);

        Self {
            base_url,
            poll_interval: Duration::from_secs(poll_secs),
            window,
            hud,
            frame_interval: Duration::from_millis(frame_ms),
        }
    }
}
