use crate::models::Stats;

/// Weekly volume goal the volume ring fills against.
pub const VOLUME_GOAL: u64 = 7;
/// Streak goal the streak ring fills against.
pub const STREAK_GOAL: u64 = 4;

/// One radial percentage indicator, a pure function of the server stats.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub label: &'static str,
    pub value: u64,
    pub goal: u64,
    pub percent: f64,
}

/// Percentage of goal reached, capped at 100.
pub fn gauge_percent(value: u64, goal: u64) -> f64 {
    if goal == 0 {
        return 100.0;
    }
    (value as f64 / goal as f64 * 100.0).min(100.0)
}

pub fn gauges(stats: &Stats) -> [Gauge; 2] {
    [
        Gauge {
            label: "volume",
            value: stats.volume,
            goal: VOLUME_GOAL,
            percent: gauge_percent(stats.volume, VOLUME_GOAL),
        },
        Gauge {
            label: "streak",
            value: stats.streak,
            goal: STREAK_GOAL,
            percent: gauge_percent(stats.streak, STREAK_GOAL),
        },
    ]
}
