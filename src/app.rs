use crate::config::DashConfig;
use crate::poller::Poller;
use crate::render::build_plan;
use crate::state::DashState;
use crate::ui;
use chrono::Local;
use tracing::warn;

/// Wires the poller, shared state, and the terminal surface together.
pub struct Dashboard {
    pub state: DashState,
    pub config: DashConfig,
}

impl Dashboard {
    pub fn new(config: DashConfig) -> Self {
        Self {
            state: DashState::new(),
            config,
        }
    }

    /// Spawns the poll loop and re-renders on every snapshot replacement.
    /// Runs for the process lifetime; callers race it against shutdown.
    pub async fn run(&self) {
        // Subscribe before the first poll can land so its wake is not missed.
        let mut versions = self.state.subscribe();

        let poller = Poller::new(self.config.base_url.clone());
        tokio::spawn(poller.run(self.config.poll_interval, self.state.clone()));
        while versions.changed().await.is_ok() {
            let Some(snapshot) = self.state.snapshot().await else {
                continue;
            };
            let plan = build_plan(
                Local::now().date_naive(),
                &snapshot,
                self.config.window,
                self.config.hud,
            );
            let mut stdout = std::io::stdout();
            if let Err(err) = ui::apply_plan(&plan, &mut stdout) {
                warn!("render failed: {err}");
            }
        }
    }
}
