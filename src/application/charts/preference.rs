//! Category-total charts: devices, order types, repeat vs one-time.

use crate::domain::Dataset;

/// A labeled category total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    /// Category label.
    pub label: &'static str,
    /// Aggregated value.
    pub value: u64,
}

/// Sums per-platform purchase counts across all users.
///
/// The three platform counters are independent per row; a user purchasing
/// on two platforms contributes to both slices.
#[must_use]
pub fn device_preference(dataset: &Dataset) -> [Slice; 3] {
    let mut ios = 0u64;
    let mut android = 0u64;
    let mut web = 0u64;
    for user in dataset {
        ios += u64::from(user.ios_purchases);
        android += u64::from(user.android_purchases);
        web += u64::from(user.web_purchases);
    }
    [
        Slice {
            label: "iOS",
            value: ios,
        },
        Slice {
            label: "Android",
            value: android,
        },
        Slice {
            label: "Web",
            value: web,
        },
    ]
}

/// Sums delivery vs takeaway purchase counts; shown as proportions of the
/// combined total.
#[must_use]
pub fn order_type_preference(dataset: &Dataset) -> [Slice; 2] {
    let mut delivery = 0u64;
    let mut takeaway = 0u64;
    for user in dataset {
        delivery += u64::from(user.delivery_purchases);
        takeaway += u64::from(user.takeaway_purchases);
    }
    [
        Slice {
            label: "Delivery",
            value: delivery,
        },
        Slice {
            label: "Takeaway",
            value: takeaway,
        },
    ]
}

/// Users who purchased more than once vs exactly once.
///
/// Zero-purchase users are deliberately excluded from this chart only;
/// other charts keep counting them.
#[must_use]
pub fn repeat_vs_one_time(dataset: &Dataset) -> [Slice; 2] {
    let repeat = dataset
        .iter()
        .filter(|user| user.purchase_count > 1)
        .count() as u64;
    let one_time = dataset
        .iter()
        .filter(|user| user.purchase_count == 1)
        .count() as u64;
    [
        Slice {
            label: "Repeat Customers",
            value: repeat,
        },
        Slice {
            label: "One-Time Users",
            value: one_time,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::charts::testutil;
    use crate::domain::Dataset;

    #[test]
    fn test_device_sums_equal_per_row_sums() {
        let mut users = vec![testutil::user(3), testutil::user(4)];
        users[0].ios_purchases = 1;
        users[0].android_purchases = 2;
        users[0].web_purchases = 0;
        users[1].ios_purchases = 0;
        users[1].android_purchases = 3;
        users[1].web_purchases = 1;
        let dataset = Dataset::new(users);

        let [ios, android, web] = device_preference(&dataset);
        assert_eq!(ios.value, 1);
        assert_eq!(android.value, 5);
        assert_eq!(web.value, 1);

        let expected: u64 = dataset
            .iter()
            .map(|u| u64::from(u.ios_purchases + u.android_purchases + u.web_purchases))
            .sum();
        assert_eq!(ios.value + android.value + web.value, expected);
    }

    #[test]
    fn test_order_type_sums() {
        let mut users = vec![testutil::user(5), testutil::user(2)];
        users[0].delivery_purchases = 4;
        users[0].takeaway_purchases = 1;
        users[1].delivery_purchases = 0;
        users[1].takeaway_purchases = 2;
        let dataset = Dataset::new(users);

        let [delivery, takeaway] = order_type_preference(&dataset);
        assert_eq!(delivery.value, 4);
        assert_eq!(takeaway.value, 3);
    }

    #[test]
    fn test_repeat_vs_one_time_excludes_zero_purchase_users() {
        let dataset = testutil::dataset(&[0, 0, 1, 1, 1, 2, 7]);
        let [repeat, one_time] = repeat_vs_one_time(&dataset);

        assert_eq!(repeat.value, 2);
        assert_eq!(one_time.value, 3);

        // The two slices plus the excluded zero-purchase users account for
        // every user exactly once.
        let zero = dataset.iter().filter(|u| u.purchase_count == 0).count() as u64;
        assert_eq!(
            repeat.value + one_time.value + zero,
            dataset.user_count() as u64
        );
    }
}
