use crate::heatmap::{DayCell, MonthBlock};
use crate::hud::Gauge;
use crate::orbit::{Canvas, OrbitFrame, RADIUS_MAX};
use crate::render::{HeatmapView, RenderPlan};
use std::io::{self, Stdout, Write};

const DAYS_PER_WEEK: usize = 7;
const GAUGE_SLOTS: usize = 20;

fn glyph(level: u8) -> char {
    if level > 0 { '█' } else { '·' }
}

/// Apply a render plan to a text surface. This is the whole adapter; the plan
/// itself carries no I/O.
pub fn apply_plan(plan: &RenderPlan, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", plan.header_date)?;
    writeln!(
        out,
        "today {}  streak {}  total {}",
        plan.cards.today, plan.cards.streak, plan.cards.total
    )?;
    writeln!(out)?;

    match &plan.heatmap {
        HeatmapView::Months(months) => write_months(months, out)?,
        HeatmapView::Trailing(cells) => write_trailing(cells, out)?,
    }

    if let Some(gauges) = &plan.gauges {
        writeln!(out)?;
        for gauge in gauges {
            writeln!(out, "{}", gauge_bar(gauge))?;
        }
    }
    Ok(())
}

fn write_months(months: &[MonthBlock], out: &mut impl Write) -> io::Result<()> {
    for month in months {
        writeln!(out, "{}", month.label)?;
        let mut column = month.leading_blanks as usize;
        let mut week = " ".repeat(column);
        for cell in &month.cells {
            week.push(glyph(cell.level));
            column += 1;
            if column == DAYS_PER_WEEK {
                writeln!(out, "  {week}")?;
                week.clear();
                column = 0;
            }
        }
        if !week.is_empty() {
            writeln!(out, "  {week}")?;
        }
    }
    Ok(())
}

/// Seven weekday rows, weeks as columns. The grid starts on a Sunday, so
/// row r holds every cell whose index is ≡ r mod 7.
fn write_trailing(cells: &[DayCell], out: &mut impl Write) -> io::Result<()> {
    for weekday in 0..DAYS_PER_WEEK {
        let row: String = cells
            .iter()
            .skip(weekday)
            .step_by(DAYS_PER_WEEK)
            .map(|cell| glyph(cell.level))
            .collect();
        writeln!(out, "{row}")?;
    }
    Ok(())
}

fn gauge_bar(gauge: &Gauge) -> String {
    let filled = (gauge.percent / 100.0 * GAUGE_SLOTS as f64).round() as usize;
    format!(
        "{:<6} [{}{}] {:>3.0}%",
        gauge.label,
        "#".repeat(filled),
        "-".repeat(GAUGE_SLOTS - filled),
        gauge.percent
    )
}

/// Rasterizes orbit frames into a character grid. Recent entries draw as `@`,
/// the rest as `*`, the center as `+`. Draw errors are swallowed: the frame
/// loop has no error path.
pub struct TermCanvas<W> {
    out: W,
    width: usize,
    height: usize,
}

impl TermCanvas<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), 48, 24)
    }
}

impl<W: Write> TermCanvas<W> {
    pub fn new(out: W, width: usize, height: usize) -> Self {
        Self { out, width, height }
    }

    fn rasterize(&self, frame: &OrbitFrame) -> Vec<String> {
        let mut grid = vec![vec![' '; self.width]; self.height];
        grid[self.height / 2][self.width / 2] = '+';

        for point in &frame.points {
            let x = (point.x() / RADIUS_MAX + 1.0) / 2.0 * (self.width - 1) as f64;
            let y = (point.y() / RADIUS_MAX + 1.0) / 2.0 * (self.height - 1) as f64;
            let column = (x.round() as usize).min(self.width - 1);
            let row = (y.round() as usize).min(self.height - 1);
            grid[row][column] = if point.recent { '@' } else { '*' };
        }

        grid.into_iter().map(String::from_iter).collect()
    }
}

impl<W: Write> Canvas for TermCanvas<W> {
    fn draw(&mut self, frame: &OrbitFrame) {
        for line in self.rasterize(frame) {
            if writeln!(self.out, "{line}").is_err() {
                return;
            }
        }
        let _ = writeln!(self.out);
    }
}
