//! Retention cohort cross-tab.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Dataset, MonthKey};

/// Cross-tab of registration month by first-purchase month.
///
/// Axes hold only the distinct months actually present, sorted
/// chronologically. A `None` cell means no users fell there; it renders as
/// empty, not zero.
#[derive(Debug, Clone)]
pub struct CohortMatrix {
    /// Row axis: registration months.
    pub registration_months: Vec<MonthKey>,
    /// Column axis: first-purchase months.
    pub purchase_months: Vec<MonthKey>,
    /// `cells[row][col]` is the user count, or `None` where the cohort is
    /// empty.
    pub cells: Vec<Vec<Option<u64>>>,
}

impl CohortMatrix {
    /// Largest populated cell, for color scaling.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.cells
            .iter()
            .flatten()
            .filter_map(|cell| *cell)
            .max()
            .unwrap_or(0)
    }

    /// Whether no user ever reached a first purchase.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registration_months.is_empty()
    }
}

/// Counts users by (registration month, first-purchase month).
///
/// Users who never purchased have no first-purchase month and are outside
/// this chart.
#[must_use]
pub fn retention_cohort(dataset: &Dataset) -> CohortMatrix {
    let mut counts: BTreeMap<(MonthKey, MonthKey), u64> = BTreeMap::new();
    let mut row_axis: BTreeSet<MonthKey> = BTreeSet::new();
    let mut col_axis: BTreeSet<MonthKey> = BTreeSet::new();

    for user in dataset {
        let Some(first_purchase) = user.first_purchase_day else {
            continue;
        };
        let cohort = MonthKey::from_datetime(&user.registration_date);
        let purchase_month = MonthKey::from_datetime(&first_purchase);
        *counts.entry((cohort, purchase_month)).or_insert(0) += 1;
        row_axis.insert(cohort);
        col_axis.insert(purchase_month);
    }

    let registration_months: Vec<MonthKey> = row_axis.into_iter().collect();
    let purchase_months: Vec<MonthKey> = col_axis.into_iter().collect();

    let cells = registration_months
        .iter()
        .map(|row| {
            purchase_months
                .iter()
                .map(|col| counts.get(&(*row, *col)).copied())
                .collect()
        })
        .collect();

    CohortMatrix {
        registration_months,
        purchase_months,
        cells,
    }
}
