//! Histogram charts: purchase counts and purchase hour.

use crate::domain::Dataset;

/// Number of bins in the purchase-count histogram.
pub const PURCHASE_COUNT_BINS: usize = 30;

/// Hours in the fixed purchase-hour axis.
pub const HOUR_BINS: usize = 24;

/// One histogram bucket over an inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBin {
    /// Inclusive lower bound.
    pub lower: u32,
    /// Inclusive upper bound.
    pub upper: u32,
    /// Users falling into this bucket.
    pub count: u64,
}

impl HistogramBin {
    /// Axis label for the bucket.
    #[must_use]
    pub fn label(&self) -> String {
        if self.lower == self.upper {
            self.lower.to_string()
        } else {
            format!("{}-{}", self.lower, self.upper)
        }
    }
}

/// A computed histogram with a fixed bucket axis.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Axis caption for the bucketed variable.
    pub x_label: &'static str,
    /// Axis caption for the user counts.
    pub y_label: &'static str,
    /// The buckets, in axis order.
    pub bins: Vec<HistogramBin>,
    /// Render the count axis log-scaled to manage skew.
    pub log_scale: bool,
    /// Rows excluded because the bucketed value was missing.
    pub dropped: usize,
}

impl Histogram {
    /// Largest bucket count, for axis scaling.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}

/// Histogram of purchase counts per user over thirty equal bins.
///
/// Purchase counts are heavily skewed toward zero, so the histogram
/// carries a log-scale hint for the renderer.
#[must_use]
pub fn purchase_distribution(dataset: &Dataset) -> Histogram {
    let max = dataset
        .iter()
        .map(|user| user.purchase_count)
        .max()
        .unwrap_or(0);

    // Equal-width integer bins covering 0..=max; width rounds up so the
    // bin count stays fixed at thirty.
    let bin_count = PURCHASE_COUNT_BINS as u32;
    let width = (max / bin_count) + 1;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: i * width,
            upper: (i + 1) * width - 1,
            count: 0,
        })
        .collect();

    for user in dataset {
        let index = (user.purchase_count / width).min(bin_count - 1) as usize;
        bins[index].count += 1;
    }

    Histogram {
        x_label: "Number of Purchases",
        y_label: "Number of Users",
        bins,
        log_scale: true,
        dropped: 0,
    }
}

/// Histogram of the most common purchase hour over a fixed 24-bucket axis.
///
/// Users with no recorded hour are dropped from this chart only.
#[must_use]
pub fn purchase_hour(dataset: &Dataset) -> Histogram {
    let mut bins: Vec<HistogramBin> = (0..HOUR_BINS as u32)
        .map(|hour| HistogramBin {
            lower: hour,
            upper: hour,
            count: 0,
        })
        .collect();
    let mut dropped = 0;

    for user in dataset {
        match user.most_common_hour {
            Some(hour) if (hour as usize) < HOUR_BINS => bins[hour as usize].count += 1,
            _ => dropped += 1,
        }
    }

    Histogram {
        x_label: "Hour of the Day",
        y_label: "Number of Users",
        bins,
        log_scale: false,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::charts::testutil;

    #[test]
    fn test_purchase_distribution_has_thirty_bins_and_counts_everyone() {
        let dataset = testutil::dataset(&[0, 1, 5, 7, 21, 100]);
        let histogram = purchase_distribution(&dataset);

        assert_eq!(histogram.bins.len(), PURCHASE_COUNT_BINS);
        assert!(histogram.log_scale);
        assert_eq!(histogram.dropped, 0);

        let total: u64 = histogram.bins.iter().map(|bin| bin.count).sum();
        assert_eq!(total, dataset.user_count() as u64);
    }

    #[test]
    fn test_purchase_distribution_bins_are_contiguous_and_cover_max() {
        let dataset = testutil::dataset(&[0, 250]);
        let histogram = purchase_distribution(&dataset);

        for pair in histogram.bins.windows(2) {
            assert_eq!(pair[0].upper + 1, pair[1].lower);
        }
        assert!(histogram.bins.last().unwrap().upper >= 250);
    }

    #[test]
    fn test_purchase_distribution_on_single_user() {
        let dataset = testutil::dataset(&[3]);
        let histogram = purchase_distribution(&dataset);
        assert_eq!(histogram.max_count(), 1);
        assert_eq!(histogram.bins[3].count, 1);
    }

    #[test]
    fn test_purchase_hour_axis_is_fixed_at_24() {
        let dataset = testutil::dataset(&[1, 2, 3]);
        let histogram = purchase_hour(&dataset);

        assert_eq!(histogram.bins.len(), HOUR_BINS);
        assert_eq!(histogram.bins[0].lower, 0);
        assert_eq!(histogram.bins[23].upper, 23);
        assert!(!histogram.log_scale);
    }

    #[test]
    fn test_purchase_hour_drops_missing_values() {
        let mut users = vec![testutil::user(2), testutil::user(3), testutil::user(0)];
        users[0].most_common_hour = Some(9);
        users[1].most_common_hour = Some(9);
        // user(0) has no hour recorded
        let dataset = crate::domain::Dataset::new(users);

        let histogram = purchase_hour(&dataset);
        assert_eq!(histogram.bins[9].count, 2);
        assert_eq!(histogram.dropped, 1);

        let counted: u64 = histogram.bins.iter().map(|bin| bin.count).sum();
        assert_eq!(counted as usize + histogram.dropped, dataset.user_count());
    }

    #[test]
    fn test_bin_labels() {
        let bin = HistogramBin {
            lower: 10,
            upper: 19,
            count: 0,
        };
        assert_eq!(bin.label(), "10-19");
        let unit = HistogramBin {
            lower: 7,
            upper: 7,
            count: 0,
        };
        assert_eq!(unit.label(), "7");
    }
}
