use crate::buckets::bucket_by_day;
use crate::config::HeatmapWindow;
use crate::heatmap::{month_grid, trailing_grid, DayCell, MonthBlock};
use crate::hud::{self, Gauge};
use crate::models::Snapshot;
use chrono::{Datelike, NaiveDate};

/// The header stat cards: today's count derived from the buckets, streak and
/// total passed through from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCards {
    pub today: u64,
    pub streak: u64,
    pub total: u64,
}

#[derive(Debug, Clone)]
pub enum HeatmapView {
    Months(Vec<MonthBlock>),
    Trailing(Vec<DayCell>),
}

/// Everything the surface needs to draw one refresh. Built purely from the
/// snapshot and a caller-supplied `today`; applying it is the adapter's job.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub header_date: String,
    pub cards: StatCards,
    pub heatmap: HeatmapView,
    pub gauges: Option<[Gauge; 2]>,
}

pub fn build_plan(
    today: NaiveDate,
    snapshot: &Snapshot,
    window: HeatmapWindow,
    hud_enabled: bool,
) -> RenderPlan {
    let counts = bucket_by_day(&snapshot.logs);

    let cards = StatCards {
        today: counts.count(&today.to_string()),
        streak: snapshot.stats.streak,
        total: snapshot.stats.total,
    };

    let heatmap = match window {
        HeatmapWindow::Months => HeatmapView::Months(month_grid(today.year(), &counts)),
        HeatmapWindow::Trailing => HeatmapView::Trailing(trailing_grid(today, &counts)),
    };

    RenderPlan {
        header_date: today.format("%A, %B %-d, %Y").to_string(),
        cards,
        heatmap,
        gauges: hud_enabled.then(|| hud::gauges(&snapshot.stats)),
    }
}
