use crate::errors::PollError;
use crate::models::{Snapshot, Stats};
use crate::state::DashState;
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error};

/// Client for the two read-only dashboard endpoints.
#[derive(Clone)]
pub struct Poller {
    client: Client,
    base_url: String,
}

impl Poller {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One poll cycle: both endpoints fetched concurrently and combined into
    /// a snapshot. Either failure fails the whole cycle; there is no partial
    /// update.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, PollError> {
        let (logs, stats) = tokio::try_join!(self.fetch_logs(), self.fetch_stats())?;
        Ok(Snapshot {
            logs,
            stats,
            fetched_at: Utc::now(),
        })
    }

    async fn fetch_logs(&self) -> Result<Vec<String>, PollError> {
        let response = self
            .client
            .get(format!("{}/logs", self.base_url))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| PollError::new("/logs", err))?;
        response
            .json()
            .await
            .map_err(|err| PollError::new("/logs", err))
    }

    async fn fetch_stats(&self) -> Result<Stats, PollError> {
        let response = self
            .client
            .get(format!("{}/stats", self.base_url))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| PollError::new("/stats", err))?;
        response
            .json()
            .await
            .map_err(|err| PollError::new("/stats", err))
    }

    /// Fetch once and apply the outcome: success replaces the shared
    /// snapshot, failure is logged and the prior state stays untouched.
    pub async fn poll_once(&self, state: &DashState) {
        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                debug!(logs = snapshot.logs.len(), "snapshot refreshed");
                state.replace(snapshot).await;
            }
            Err(err) => error!("poll failed: {err}"),
        }
    }

    /// Poll loop: fires every `interval` regardless of prior outcome, first
    /// tick immediately. Each cycle runs as its own task, so an in-flight
    /// poll is never cancelled by the next tick; whichever resolves last
    /// wins the snapshot.
    pub async fn run(self, interval: Duration, state: DashState) {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let poller = self.clone();
            let state = state.clone();
            tokio::spawn(async move {
                poller.poll_once(&state).await;
            });
        }
    }
}
