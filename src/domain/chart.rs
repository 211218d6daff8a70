//! The fixed catalogue of charts offered by the dashboard.

/// One of the ten pre-built charts.
///
/// The menu order is the declaration order; dispatch over this enum is an
/// exhaustive `match`, so adding a variant forces every render and compute
/// site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Histogram of purchase counts per user.
    PurchaseDistribution,
    /// Histogram of the most common purchase hour of the day.
    PurchaseHour,
    /// Customer tiers by purchase frequency.
    CustomerSegmentation,
    /// Top countries by total revenue.
    RevenueByCountry,
    /// Registration month by first-purchase month cross-tab.
    RetentionCohort,
    /// Registered / first order / repeat order funnel.
    FunnelConversion,
    /// Purchases by platform (iOS, Android, Web).
    DevicePreference,
    /// Delivery vs takeaway proportions.
    OrderTypePreference,
    /// Repeat customers vs one-time users.
    RepeatVsOneTime,
    /// Purchase density over the hour-by-weekday grid.
    PurchaseTrends,
}

impl ChartKind {
    /// All charts, in menu order.
    pub const ALL: [Self; 10] = [
        Self::PurchaseDistribution,
        Self::PurchaseHour,
        Self::CustomerSegmentation,
        Self::RevenueByCountry,
        Self::RetentionCohort,
        Self::FunnelConversion,
        Self::DevicePreference,
        Self::OrderTypePreference,
        Self::RepeatVsOneTime,
        Self::PurchaseTrends,
    ];

    /// Human-readable chart title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PurchaseDistribution => "Distribution of Purchase Counts per User",
            Self::PurchaseHour => "Most Common Purchase Hour of the Day",
            Self::CustomerSegmentation => "Customer Segmentation by Purchase Frequency",
            Self::RevenueByCountry => "Top 10 Countries by Total Revenue",
            Self::RetentionCohort => "Customer Retention Cohort Analysis",
            Self::FunnelConversion => "User Funnel Conversion",
            Self::DevicePreference => "Device Preference: iOS vs. Android vs. Web",
            Self::OrderTypePreference => "Order Type Preference: Delivery vs. Takeaway",
            Self::RepeatVsOneTime => "Repeat Customers vs. One-Time Users",
            Self::PurchaseTrends => "Purchase Trends by Time of Day & Day of Week",
        }
    }

    /// Short label used in the sidebar menu.
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::PurchaseDistribution => "Purchase Distribution",
            Self::PurchaseHour => "Purchase Hour",
            Self::CustomerSegmentation => "Customer Segmentation",
            Self::RevenueByCountry => "Revenue by Country",
            Self::RetentionCohort => "Customer Retention Cohort",
            Self::FunnelConversion => "User Funnel Conversion",
            Self::DevicePreference => "Device Preference",
            Self::OrderTypePreference => "Order Type Preference",
            Self::RepeatVsOneTime => "Repeat vs. One-Time Users",
            Self::PurchaseTrends => "Purchase Trends",
        }
    }

    /// Position of this chart within [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0)
    }

    /// Next chart in menu order, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous chart in menu order, wrapping at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Maps the digit row to menu entries: `1`-`9` are the first nine
    /// charts, `0` is the tenth.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Self::ALL.last().copied(),
            '1'..='9' => {
                let index = (digit as usize) - ('1' as usize);
                Self::ALL.get(index).copied()
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.menu_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_has_ten_distinct_charts() {
        let distinct: HashSet<_> = ChartKind::ALL.iter().collect();
        assert_eq!(ChartKind::ALL.len(), 10);
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(
            ChartKind::PurchaseTrends.next(),
            ChartKind::PurchaseDistribution
        );
        assert_eq!(
            ChartKind::PurchaseDistribution.previous(),
            ChartKind::PurchaseTrends
        );

        let mut kind = ChartKind::PurchaseDistribution;
        for _ in 0..ChartKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, ChartKind::PurchaseDistribution);
    }

    #[test]
    fn test_digit_jump_covers_whole_menu() {
        assert_eq!(
            ChartKind::from_digit('1'),
            Some(ChartKind::PurchaseDistribution)
        );
        assert_eq!(ChartKind::from_digit('9'), Some(ChartKind::RepeatVsOneTime));
        assert_eq!(ChartKind::from_digit('0'), Some(ChartKind::PurchaseTrends));
        assert_eq!(ChartKind::from_digit('x'), None);
    }

    #[test]
    fn test_index_matches_menu_order() {
        for (i, kind) in ChartKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
