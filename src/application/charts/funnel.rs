//! User lifecycle funnel.

use crate::domain::Dataset;

/// One funnel stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunnelStage {
    /// Stage name.
    pub label: &'static str,
    /// Users reaching this stage.
    pub users: u64,
    /// Share of the initial stage, in percent.
    pub pct_of_initial: f64,
}

/// The three-stage lifecycle funnel.
#[derive(Debug, Clone, Copy)]
pub struct Funnel {
    /// Registered, first order, repeat order; non-increasing by
    /// construction.
    pub stages: [FunnelStage; 3],
}

/// Counts the funnel stages: every user, users with a first purchase, and
/// users with more than one purchase.
///
/// A first purchase implies registration and a repeat purchase implies a
/// first one, so the stages cannot increase.
#[must_use]
pub fn funnel_conversion(dataset: &Dataset) -> Funnel {
    let registered = dataset.user_count() as u64;
    let first_order = dataset.iter().filter(|user| user.has_purchased()).count() as u64;
    let repeat_order = dataset
        .iter()
        .filter(|user| user.is_repeat_customer())
        .count() as u64;

    let pct = |users: u64| -> f64 {
        if registered == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                users as f64 / registered as f64 * 100.0
            }
        }
    };

    Funnel {
        stages: [
            FunnelStage {
                label: "Registered",
                users: registered,
                pct_of_initial: pct(registered),
            },
            FunnelStage {
                label: "First Order",
                users: first_order,
                pct_of_initial: pct(first_order),
            },
            FunnelStage {
                label: "Repeat Order",
                users: repeat_order,
                pct_of_initial: pct(repeat_order),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::charts::testutil;

    #[test]
    fn test_three_user_example() {
        // Counts [0, 1, 7] => funnel [3, 2, 1].
        let dataset = testutil::dataset(&[0, 1, 7]);
        let funnel = funnel_conversion(&dataset);

        let users: Vec<u64> = funnel.stages.iter().map(|stage| stage.users).collect();
        assert_eq!(users, [3, 2, 1]);
    }

    #[test]
    fn test_stages_are_non_increasing() {
        let dataset = testutil::dataset(&[0, 0, 1, 1, 2, 5, 30]);
        let funnel = funnel_conversion(&dataset);

        for pair in funnel.stages.windows(2) {
            assert!(pair[0].users >= pair[1].users);
        }
    }

    #[test]
    fn test_percentages_are_relative_to_initial_stage() {
        let dataset = testutil::dataset(&[0, 1, 7, 9]);
        let funnel = funnel_conversion(&dataset);

        assert!((funnel.stages[0].pct_of_initial - 100.0).abs() < f64::EPSILON);
        assert!((funnel.stages[1].pct_of_initial - 75.0).abs() < f64::EPSILON);
        assert!((funnel.stages[2].pct_of_initial - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stage_labels() {
        let dataset = testutil::dataset(&[1]);
        let funnel = funnel_conversion(&dataset);
        let labels: Vec<_> = funnel.stages.iter().map(|stage| stage.label).collect();
        assert_eq!(labels, ["Registered", "First Order", "Repeat Order"]);
    }
}
