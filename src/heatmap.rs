use crate::models::DailyCounts;
use chrono::{Datelike, Duration, NaiveDate};

/// Width of the trailing window, excluding today.
pub const TRAILING_DAYS: i64 = 364;

/// One heatmap cell. `level` is binary presence: 1 for a day with at least
/// one log, 0 otherwise — no magnitude grading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: String,
    pub count: u64,
    pub level: u8,
    pub tooltip: String,
}

impl DayCell {
    fn new(date: NaiveDate, counts: &DailyCounts) -> Self {
        let date = date.to_string();
        let count = counts.count(&date);
        let level = u8::from(count > 0);
        let tooltip = format!("{date}: {count} logs");
        Self {
            date,
            count,
            level,
            tooltip,
        }
    }
}

/// One month of the calendar-year grid. `leading_blanks` aligns day 1 to its
/// weekday column (0 = Sunday).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBlock {
    pub label: String,
    pub leading_blanks: u8,
    pub cells: Vec<DayCell>,
}

/// Calendar-year policy: twelve month blocks for `year`, one cell per day.
pub fn month_grid(year: i32, counts: &DailyCounts) -> Vec<MonthBlock> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|first| {
            let label = first.format("%b").to_string();
            let leading_blanks = first.weekday().num_days_from_sunday() as u8;
            let mut cells = Vec::new();
            let mut day = first;
            while day.month() == first.month() {
                cells.push(DayCell::new(day, counts));
                day = match day.succ_opt() {
                    Some(next) => next,
                    None => break,
                };
            }
            MonthBlock {
                label,
                leading_blanks,
                cells,
            }
        })
        .collect()
}

/// Trailing-window policy: one cell per day from the most recent Sunday
/// on/before `today - 364` through `today`, so the grid always opens on a
/// Sunday column.
pub fn trailing_grid(today: NaiveDate, counts: &DailyCounts) -> Vec<DayCell> {
    let anchor = today - Duration::days(TRAILING_DAYS);
    let start = anchor - Duration::days(anchor.weekday().num_days_from_sunday() as i64);

    let mut cells = Vec::new();
    let mut day = start;
    while day <= today {
        cells.push(DayCell::new(day, counts));
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn counts_for(days: &[(&str, u64)]) -> DailyCounts {
        let mut counts = DailyCounts::default();
        for (date, count) in days {
            counts.days.insert((*date).to_string(), *count);
        }
        counts
    }

    #[test]
    fn month_grid_has_twelve_months() {
        let grid = month_grid(2024, &DailyCounts::default());
        assert_eq!(grid.len(), 12);
        assert_eq!(grid[0].label, "Jan");
        assert_eq!(grid[11].label, "Dec");
    }

    #[test]
    fn leading_blanks_match_weekday_of_first() {
        let grid = month_grid(2024, &DailyCounts::default());
        // 2024-01-01 was a Monday, 2024-09-01 a Sunday.
        assert_eq!(grid[0].leading_blanks, 1);
        assert_eq!(grid[8].leading_blanks, 0);

        for (index, month) in grid.iter().enumerate() {
            let first = NaiveDate::from_ymd_opt(2024, index as u32 + 1, 1).expect("valid month");
            assert_eq!(
                month.leading_blanks as u32,
                first.weekday().num_days_from_sunday()
            );
        }
    }

    #[test]
    fn month_lengths_include_leap_february() {
        let grid = month_grid(2024, &DailyCounts::default());
        assert_eq!(grid[1].cells.len(), 29);
        let grid = month_grid(2023, &DailyCounts::default());
        assert_eq!(grid[1].cells.len(), 28);
    }

    #[test]
    fn cell_level_is_binary_presence() {
        let counts = counts_for(&[("2024-01-01", 2), ("2024-01-02", 1)]);
        let grid = month_grid(2024, &counts);
        let january = &grid[0];
        assert_eq!(january.cells[0].level, 1);
        assert_eq!(january.cells[0].count, 2);
        assert_eq!(january.cells[1].level, 1);
        assert_eq!(january.cells[2].level, 0);
        assert_eq!(january.cells[0].tooltip, "2024-01-01: 2 logs");
    }

    #[test]
    fn trailing_grid_starts_on_a_sunday() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
        let cells = trailing_grid(today, &DailyCounts::default());
        let first: NaiveDate = cells[0].date.parse().expect("parse first cell");
        assert_eq!(first.weekday(), Weekday::Sun);
        assert_eq!(cells.last().map(|cell| cell.date.as_str()), Some("2024-03-15"));
    }

    #[test]
    fn trailing_grid_is_365_cells_when_window_opens_on_sunday() {
        // 364 is a whole number of weeks, so the window opens on a Sunday
        // exactly when today is one.
        let today = NaiveDate::from_ymd_opt(2024, 1, 7).expect("valid date");
        assert_eq!(today.weekday(), Weekday::Sun);
        let cells = trailing_grid(today, &DailyCounts::default());
        assert_eq!(cells.len(), 365);
        assert_eq!(cells.last().map(|cell| cell.date.as_str()), Some("2024-01-07"));
    }

    #[test]
    fn trailing_grid_pads_back_to_sunday_otherwise() {
        // 2024-01-10 was a Wednesday; the grid reaches back three extra days.
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid date");
        let cells = trailing_grid(today, &DailyCounts::default());
        assert_eq!(cells.len(), 368);
        let first: NaiveDate = cells[0].date.parse().expect("parse first cell");
        assert_eq!(first.weekday(), Weekday::Sun);
    }
}
