//! Month-grid projection for the project calendar.
//!
//! Maps a client's milestones onto a Sunday-first calendar grid for a target
//! year and month: leading blanks up to the weekday of the 1st, one cell per
//! day carrying the milestones dated on it, trailing blanks to complete the
//! last seven-column week. Pure: the same inputs always produce the same
//! grid.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Grid types
// ---------------------------------------------------------------------------

/// A milestone entry as placed on a calendar day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMilestone {
    pub id: EntityId,
    pub title: String,
    pub kind: String,
    pub completed: bool,
}

/// A single in-month day cell with any milestones falling on it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub day: u32,
    pub milestones: Vec<CalendarMilestone>,
}

/// One week row: seven cells, `None` for leading/trailing blanks.
pub type WeekRow = Vec<Option<DayCell>>;

/// A full month grid of seven-column week rows.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekRow>,
}

impl MonthGrid {
    /// Look up the cell for an in-month day, if present.
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.weeks
            .iter()
            .flatten()
            .flatten()
            .find(|cell| cell.day == day)
    }

    /// Total cell count, blanks included.
    pub fn cell_count(&self) -> usize {
        self.weeks.iter().map(Vec::len).sum()
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Build the grid for `year`/`month` from dated milestone entries.
///
/// Entries dated outside the month are ignored; multiple entries may share a
/// day. Fails with `Validation` for a month outside 1-12 or a year chrono
/// cannot represent.
pub fn month_grid(
    year: i32,
    month: u32,
    milestones: &[(NaiveDate, CalendarMilestone)],
) -> Result<MonthGrid, CoreError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        CoreError::Validation(format!("Invalid calendar month: {year}-{month:02}"))
    })?;
    let days = days_in_month(first);
    let leading = first.weekday().num_days_from_sunday() as usize;

    // Bucket entries by in-month day (1-based).
    let mut by_day: Vec<Vec<CalendarMilestone>> = vec![Vec::new(); days as usize];
    for (date, entry) in milestones {
        if date.year() == year && date.month() == month {
            by_day[(date.day() - 1) as usize].push(entry.clone());
        }
    }

    let mut cells: Vec<Option<DayCell>> = Vec::with_capacity(leading + days as usize + 6);
    cells.resize(leading, None);
    for (idx, milestones) in by_day.into_iter().enumerate() {
        cells.push(Some(DayCell {
            day: idx as u32 + 1,
            milestones,
        }));
    }
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    let weeks = cells.chunks(7).map(|week| week.to_vec()).collect();

    Ok(MonthGrid { year, month, weeks })
}

/// Number of days in the month containing `first` (the 1st of that month).
fn days_in_month(first: NaiveDate) -> u32 {
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next_first| next_first.pred_opt())
        .map_or(31, |last| last.day())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entry(title: &str, kind: &str) -> CalendarMilestone {
        CalendarMilestone {
            id: Uuid::new_v4(),
            title: title.to_string(),
            kind: kind.to_string(),
            completed: false,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn non_blank_count(grid: &MonthGrid) -> usize {
        grid.weeks.iter().flatten().flatten().count()
    }

    #[test]
    fn january_2025_layout() {
        // January 1st 2025 is a Wednesday: three leading blanks in a
        // Sunday-first week.
        let grid = month_grid(2025, 1, &[]).unwrap();
        assert_eq!(grid.cell_count() % 7, 0);
        assert_eq!(non_blank_count(&grid), 31);

        let first_week = &grid.weeks[0];
        assert!(first_week[0].is_none());
        assert!(first_week[1].is_none());
        assert!(first_week[2].is_none());
        assert_eq!(first_week[3].as_ref().unwrap().day, 1);
    }

    #[test]
    fn milestone_lands_on_its_day() {
        let milestones = vec![(date(2025, 1, 15), entry("Kickoff Meeting", "kickoff"))];
        let grid = month_grid(2025, 1, &milestones).unwrap();

        let cell = grid.day(15).unwrap();
        assert_eq!(cell.milestones.len(), 1);
        assert_eq!(cell.milestones[0].title, "Kickoff Meeting");
        assert!(grid.day(14).unwrap().milestones.is_empty());
    }

    #[test]
    fn milestones_may_share_a_day() {
        let milestones = vec![
            (date(2025, 1, 22), entry("Security Review", "review")),
            (date(2025, 1, 22), entry("Checkpoint", "custom")),
        ];
        let grid = month_grid(2025, 1, &milestones).unwrap();
        assert_eq!(grid.day(22).unwrap().milestones.len(), 2);
    }

    #[test]
    fn out_of_month_entries_are_ignored() {
        let milestones = vec![
            (date(2025, 2, 3), entry("Final Delivery", "delivery")),
            (date(2024, 1, 15), entry("Old Kickoff", "kickoff")),
        ];
        let grid = month_grid(2025, 1, &milestones).unwrap();
        assert!(grid
            .weeks
            .iter()
            .flatten()
            .flatten()
            .all(|cell| cell.milestones.is_empty()));
    }

    #[test]
    fn short_and_long_months_fill_complete_weeks() {
        // February 2025: 28 days, the 1st is a Saturday.
        let feb = month_grid(2025, 2, &[]).unwrap();
        assert_eq!(non_blank_count(&feb), 28);
        assert_eq!(feb.cell_count() % 7, 0);
        assert_eq!(feb.weeks[0][6].as_ref().unwrap().day, 1);

        // Leap February 2024: 29 days.
        let leap = month_grid(2024, 2, &[]).unwrap();
        assert_eq!(non_blank_count(&leap), 29);
        assert_eq!(leap.cell_count() % 7, 0);

        // December rolls the year for the month-length computation.
        let dec = month_grid(2025, 12, &[]).unwrap();
        assert_eq!(non_blank_count(&dec), 31);
    }

    #[test]
    fn every_month_of_a_year_is_a_multiple_of_seven() {
        for month in 1..=12 {
            let grid = month_grid(2025, month, &[]).unwrap();
            assert_eq!(grid.cell_count() % 7, 0, "month {month}");
        }
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(matches!(
            month_grid(2025, 13, &[]),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            month_grid(2025, 0, &[]),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn projection_is_restartable() {
        let milestones = vec![(date(2025, 1, 15), entry("Kickoff Meeting", "kickoff"))];
        let a = month_grid(2025, 1, &milestones).unwrap();
        let b = month_grid(2025, 1, &milestones).unwrap();
        assert_eq!(a, b);
    }
}
