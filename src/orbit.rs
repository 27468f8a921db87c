use crate::state::DashState;
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use std::f64::consts::TAU;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Entries older than this are not rendered at all.
pub const MAX_AGE_DAYS: f64 = 30.0;
/// Entries younger than this get the highlight styling.
pub const RECENT_HOURS: f64 = 24.0;
/// Radius of the newest possible entry.
pub const RADIUS_MIN: f64 = 50.0;
/// Radius of an entry right at the age cutoff.
pub const RADIUS_MAX: f64 = 400.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
const ROTATION_PER_FRAME: f64 = 0.0005;

/// One log entry placed in the orbital field. Angle is deterministic from the
/// timestamp's time of day plus the frame loop's slow rotation term; radius
/// grows with age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPoint {
    pub radius: f64,
    pub angle: f64,
    pub recent: bool,
}

impl OrbitPoint {
    pub fn x(&self) -> f64 {
        self.angle.cos() * self.radius
    }

    pub fn y(&self) -> f64 {
        self.angle.sin() * self.radius
    }
}

/// Everything one redraw needs.
#[derive(Debug, Clone)]
pub struct OrbitFrame {
    pub points: Vec<OrbitPoint>,
    pub rotation: f64,
}

/// Surface the frame loop draws onto. Implementations must not block the
/// runtime for longer than a frame.
pub trait Canvas {
    fn draw(&mut self, frame: &OrbitFrame);
}

/// Project the log feed into the orbital field at `now`. Unparseable
/// timestamps and entries past the age cutoff are skipped, not errors.
pub fn project(now: DateTime<Utc>, rotation: f64, timestamps: &[String]) -> Vec<OrbitPoint> {
    timestamps
        .iter()
        .filter_map(|timestamp| project_one(now, rotation, timestamp))
        .collect()
}

fn project_one(now: DateTime<Utc>, rotation: f64, timestamp: &str) -> Option<OrbitPoint> {
    let logged_at = parse_timestamp(timestamp)?;
    let age_secs = (now - logged_at).num_seconds().max(0) as f64;
    let age_days = age_secs / SECONDS_PER_DAY;
    if age_days > MAX_AGE_DAYS {
        return None;
    }

    let radius = RADIUS_MIN + age_days / MAX_AGE_DAYS * (RADIUS_MAX - RADIUS_MIN);
    let day_fraction = f64::from(logged_at.num_seconds_from_midnight()) / SECONDS_PER_DAY;
    Some(OrbitPoint {
        radius,
        angle: day_fraction * TAU + rotation,
        recent: age_secs < RECENT_HOURS * 3_600.0,
    })
}

fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Server timestamps may carry no offset; read them as UTC.
    timestamp
        .parse::<NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc())
}

/// Drives the orbital redraw loop as a tokio task. The loop is deliberately
/// decoupled from the poll cycle, but unlike a bare spawned loop it carries an
/// explicit lifecycle so an embedding context can tear it down.
pub struct Animator {
    handle: Option<JoinHandle<()>>,
    stop_tx: watch::Sender<bool>,
}

impl Animator {
    pub fn start<C>(state: DashState, frame_interval: Duration, mut canvas: C) -> Self
    where
        C: Canvas + Send + 'static,
    {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(frame_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut rotation = 0.0_f64;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = stop_rx.changed() => break,
                }
                rotation += ROTATION_PER_FRAME;
                let Some(snapshot) = state.snapshot().await else {
                    continue;
                };
                let frame = OrbitFrame {
                    points: project(Utc::now(), rotation, &snapshot.logs),
                    rotation,
                };
                canvas.draw(&frame);
            }
        });
        Self {
            handle: Some(handle),
            stop_tx,
        }
    }

    /// Stops the loop and waits for the task to finish.
    pub async fn stop(mut self) {
        let _ = self.stop_tx.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Snapshot, Stats};
    use chrono::Duration as ChronoDuration;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn now() -> DateTime<Utc> {
        "2024-06-15T12:00:00Z"
            .parse::<DateTime<Utc>>()
            .expect("fixed now")
    }

    fn stamp(offset: ChronoDuration) -> String {
        (now() - offset).to_rfc3339()
    }

    #[test]
    fn entries_past_cutoff_are_skipped() {
        let logs = vec![stamp(ChronoDuration::days(31)), stamp(ChronoDuration::days(2))];
        let points = project(now(), 0.0, &logs);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn radius_grows_with_age_within_bounds() {
        let logs = vec![
            stamp(ChronoDuration::hours(1)),
            stamp(ChronoDuration::days(15)),
            stamp(ChronoDuration::days(29)),
        ];
        let points = project(now(), 0.0, &logs);
        assert_eq!(points.len(), 3);
        assert!(points[0].radius < points[1].radius);
        assert!(points[1].radius < points[2].radius);
        for point in &points {
            assert!(point.radius >= RADIUS_MIN && point.radius <= RADIUS_MAX);
        }
    }

    #[test]
    fn recent_flag_marks_entries_younger_than_a_day() {
        let logs = vec![stamp(ChronoDuration::hours(23)), stamp(ChronoDuration::hours(25))];
        let points = project(now(), 0.0, &logs);
        assert!(points[0].recent);
        assert!(!points[1].recent);
    }

    #[test]
    fn angle_carries_the_rotation_term() {
        let logs = vec![stamp(ChronoDuration::hours(1))];
        let still = project(now(), 0.0, &logs);
        let turned = project(now(), 0.25, &logs);
        assert!((turned[0].angle - still[0].angle - 0.25).abs() < 1e-9);
    }

    #[test]
    fn naive_timestamps_parse_as_utc() {
        let point = project_one(now(), 0.0, "2024-06-15T06:30:00");
        assert!(point.is_some());
        assert!(point.map(|p| p.recent).unwrap_or(false));
    }

    #[test]
    fn unparseable_timestamps_are_skipped() {
        assert!(project_one(now(), 0.0, "not-a-timestamp").is_none());
    }

    struct CountingCanvas(Arc<AtomicUsize>);

    impl Canvas for CountingCanvas {
        fn draw(&mut self, frame: &OrbitFrame) {
            assert!(frame.rotation > 0.0);
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn animator_draws_until_stopped() {
        let state = DashState::new();
        state
            .replace(Snapshot {
                logs: vec![Utc::now().to_rfc3339()],
                stats: Stats::default(),
                fetched_at: Utc::now(),
            })
            .await;

        let frames = Arc::new(AtomicUsize::new(0));
        let animator = Animator::start(
            state,
            Duration::from_millis(5),
            CountingCanvas(Arc::clone(&frames)),
        );

        tokio::time::sleep(Duration::from_millis(80)).await;
        animator.stop().await;
        let drawn = frames.load(Ordering::SeqCst);
        assert!(drawn > 0);

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(frames.load(Ordering::SeqCst), drawn);
    }
}
