//! Purchase density over the hour-by-weekday grid.

use crate::domain::{Dataset, Weekday};

/// Hours on the grid's horizontal axis.
pub const GRID_HOURS: usize = 24;

/// Purchase density per (weekday, hour) cell.
///
/// Each cell sums the purchase counts of users whose most common hour and
/// weekday land there. Cells nobody maps to hold zero density.
#[derive(Debug, Clone)]
pub struct TrendGrid {
    /// `cells[weekday][hour]`, Monday first.
    pub cells: [[u64; GRID_HOURS]; 7],
    /// Largest cell value, for color scaling.
    pub max: u64,
    /// Rows skipped because hour or weekday was missing.
    pub skipped: usize,
}

impl TrendGrid {
    /// Density at a grid cell.
    #[must_use]
    pub const fn at(&self, weekday: Weekday, hour: usize) -> u64 {
        self.cells[weekday.index()][hour]
    }
}

/// Sums purchase counts into the 24x7 grid.
#[must_use]
pub fn purchase_trends(dataset: &Dataset) -> TrendGrid {
    let mut cells = [[0u64; GRID_HOURS]; 7];
    let mut skipped = 0;

    for user in dataset {
        let (Some(hour), Some(weekday)) = (user.most_common_hour, user.most_common_weekday)
        else {
            skipped += 1;
            continue;
        };
        let hour = hour as usize;
        if hour < GRID_HOURS {
            cells[weekday.index()][hour] += u64::from(user.purchase_count);
        }
    }

    let max = cells
        .iter()
        .flat_map(|row| row.iter())
        .copied()
        .max()
        .unwrap_or(0);

    TrendGrid {
        cells,
        max,
        skipped,
    }
}
