//! Customer segmentation by purchase frequency.

use crate::domain::Dataset;

/// Customer tier by purchase frequency.
///
/// The thresholds partition the count axis: 0, 1-5, 6-20, >20. Every user
/// lands in exactly one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerTier {
    /// Never purchased.
    NoPurchase,
    /// 1-5 purchases.
    Low,
    /// 6-20 purchases.
    Medium,
    /// More than 20 purchases.
    High,
}

impl CustomerTier {
    /// All tiers, in ascending frequency order.
    pub const ALL: [Self; 4] = [Self::NoPurchase, Self::Low, Self::Medium, Self::High];

    /// The tier a purchase count falls into.
    #[must_use]
    pub const fn of_count(purchase_count: u32) -> Self {
        match purchase_count {
            0 => Self::NoPurchase,
            1..=5 => Self::Low,
            6..=20 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoPurchase => "No Purchase",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Tier counts for the whole dataset.
#[derive(Debug, Clone, Copy)]
pub struct Segmentation {
    /// Users per tier, indexed in [`CustomerTier::ALL`] order.
    pub users_per_tier: [u64; 4],
    /// Total users, equal to the sum of the tier counts.
    pub total_users: u64,
}

impl Segmentation {
    /// Users in a given tier.
    #[must_use]
    pub const fn count(&self, tier: CustomerTier) -> u64 {
        self.users_per_tier[tier as usize]
    }

    /// Iterates tiers with their counts, ascending frequency order.
    pub fn iter(&self) -> impl Iterator<Item = (CustomerTier, u64)> + '_ {
        CustomerTier::ALL
            .into_iter()
            .map(|tier| (tier, self.count(tier)))
    }
}

/// Buckets every user into exactly one tier.
#[must_use]
pub fn customer_segmentation(dataset: &Dataset) -> Segmentation {
    let mut users_per_tier = [0u64; 4];
    for user in dataset {
        users_per_tier[CustomerTier::of_count(user.purchase_count) as usize] += 1;
    }
    Segmentation {
        users_per_tier,
        total_users: dataset.user_count() as u64,
    }
}
