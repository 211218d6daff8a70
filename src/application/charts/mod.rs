//! Chart computations.
//!
//! Every chart is a pure function from the immutable [`Dataset`] to a
//! plain spec value; rendering happens in the presentation layer. The
//! functions take the full dataset and no other parameters, so recomputing
//! on menu selection is always safe.

mod cohort;
mod distribution;
mod funnel;
mod preference;
mod revenue;
mod segmentation;
mod trends;

pub use cohort::{CohortMatrix, retention_cohort};
pub use distribution::{Histogram, HistogramBin, purchase_distribution, purchase_hour};
pub use funnel::{Funnel, FunnelStage, funnel_conversion};
pub use preference::{
    Slice, device_preference, order_type_preference, repeat_vs_one_time,
};
pub use revenue::{CountryRevenue, TOP_COUNTRIES, revenue_by_country};
pub use segmentation::{CustomerTier, Segmentation, customer_segmentation};
pub use trends::{TrendGrid, purchase_trends};

use crate::domain::{ChartKind, Dataset};

/// A computed chart, ready to hand to the rendering surface.
#[derive(Debug, Clone)]
pub enum ChartSpec {
    /// Histogram with a fixed bin axis.
    Histogram(Histogram),
    /// Customer tier partition.
    Segmentation(Segmentation),
    /// Descending per-country revenue, at most ten rows.
    Revenue(Vec<CountryRevenue>),
    /// Registration-month by first-purchase-month cross-tab.
    Cohort(CohortMatrix),
    /// Lifecycle funnel stages.
    Funnel(Funnel),
    /// Labeled category totals shown as proportions.
    Breakdown(Vec<Slice>),
    /// Hour-by-weekday purchase density.
    Trends(TrendGrid),
}

/// Computes the chart for a menu selection.
///
/// The `match` is exhaustive over [`ChartKind`], which is the lookup table
/// the sidebar dispatches through.
#[must_use]
pub fn compute(kind: ChartKind, dataset: &Dataset) -> ChartSpec {
    match kind {
        ChartKind::PurchaseDistribution => ChartSpec::Histogram(purchase_distribution(dataset)),
        ChartKind::PurchaseHour => ChartSpec::Histogram(purchase_hour(dataset)),
        ChartKind::CustomerSegmentation => {
            ChartSpec::Segmentation(customer_segmentation(dataset))
        }
        ChartKind::RevenueByCountry => ChartSpec::Revenue(revenue_by_country(dataset)),
        ChartKind::RetentionCohort => ChartSpec::Cohort(retention_cohort(dataset)),
        ChartKind::FunnelConversion => ChartSpec::Funnel(funnel_conversion(dataset)),
        ChartKind::DevicePreference => ChartSpec::Breakdown(device_preference(dataset).to_vec()),
        ChartKind::OrderTypePreference => {
            ChartSpec::Breakdown(order_type_preference(dataset).to_vec())
        }
        ChartKind::RepeatVsOneTime => ChartSpec::Breakdown(repeat_vs_one_time(dataset).to_vec()),
        ChartKind::PurchaseTrends => ChartSpec::Trends(purchase_trends(dataset)),
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    use crate::domain::{Dataset, UserRecord, Weekday};

    pub fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    /// A user with the given purchase count and otherwise unremarkable
    /// fields. Users with at least one purchase get a first-purchase day.
    pub fn user(purchase_count: u32) -> UserRecord {
        let first_purchase = (purchase_count > 0).then(|| day(2024, 2, 1));
        UserRecord {
            registration_date: day(2024, 1, 15),
            first_purchase_day: first_purchase,
            last_purchase_day: first_purchase,
            purchase_count,
            delivery_purchases: purchase_count / 2,
            takeaway_purchases: purchase_count - purchase_count / 2,
            ios_purchases: purchase_count,
            android_purchases: 0,
            web_purchases: 0,
            most_common_hour: (purchase_count > 0).then_some(12),
            most_common_weekday: (purchase_count > 0).then_some(Weekday::Friday),
            registration_country: "Finland".to_string(),
            total_purchases_eur: f64::from(purchase_count) * 10.0,
        }
    }

    pub fn dataset(purchase_counts: &[u32]) -> Dataset {
        Dataset::new(purchase_counts.iter().copied().map(user).collect())
    }
}
