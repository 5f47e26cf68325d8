//! Buckets the flat day-record sequence into a fixed week/day grid.

use crate::extract::DayRecord;

/// Number of week columns in the calendar grid.
pub const WEEKS: usize = 53;

/// Number of day rows per week column.
pub const DAYS_PER_WEEK: usize = 7;

/// A fixed 53x7 grid of optional day records.
///
/// Placement is purely positional: the i-th record lands at week `i / 7`,
/// day `i % 7`. Records beyond the grid's capacity (53 * 7 = 371) are
/// dropped, not wrapped; slots with no record stay empty.
#[derive(Debug, Clone)]
pub struct Grid {
    weeks: Vec<Vec<Option<DayRecord>>>,
}

impl Grid {
    /// Build a grid from records in document order.
    pub fn from_records(records: Vec<DayRecord>) -> Self {
        let mut weeks = vec![vec![None; DAYS_PER_WEEK]; WEEKS];
        for (i, record) in records.into_iter().enumerate() {
            let week = i / DAYS_PER_WEEK;
            if week >= WEEKS {
                break;
            }
            weeks[week][i % DAYS_PER_WEEK] = Some(record);
        }
        Self { weeks }
    }

    /// The record at a given week/day position, if one was placed there.
    pub fn cell(&self, week: usize, day: usize) -> Option<&DayRecord> {
        self.weeks.get(week)?.get(day)?.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(i: usize) -> DayRecord {
        DayRecord {
            date: format!("day-{}", i),
            count: i as u32,
        }
    }

    #[test]
    fn placement_is_positional() {
        let grid = Grid::from_records((0..10).map(record).collect());
        assert_eq!(grid.cell(0, 0).unwrap().date, "day-0");
        assert_eq!(grid.cell(0, 6).unwrap().date, "day-6");
        assert_eq!(grid.cell(1, 0).unwrap().date, "day-7");
        assert_eq!(grid.cell(1, 2).unwrap().date, "day-9");
        assert!(grid.cell(1, 3).is_none());
    }

    #[test]
    fn records_beyond_capacity_are_dropped() {
        let grid = Grid::from_records((0..400).map(record).collect());
        // Last slot is filled, nothing wraps back to the start
        assert_eq!(grid.cell(52, 6).unwrap().date, "day-370");
        assert_eq!(grid.cell(0, 0).unwrap().date, "day-0");
        assert!(grid.cell(53, 0).is_none());
    }

    #[test]
    fn short_input_leaves_trailing_weeks_empty() {
        let grid = Grid::from_records(vec![record(0)]);
        assert!(grid.cell(0, 0).is_some());
        assert!(grid.cell(0, 1).is_none());
        assert!(grid.cell(52, 6).is_none());
    }
}
