//! Revenue breakdown by registration country.

use std::collections::HashMap;

use crate::domain::Dataset;

/// Maximum number of countries in the chart.
pub const TOP_COUNTRIES: usize = 10;

/// Total revenue attributed to one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRevenue {
    /// Registration country, as spelled in the dataset.
    pub country: String,
    /// Summed lifetime purchase value in euros.
    pub revenue_eur: f64,
}

/// Sums revenue per registration country and keeps the top ten, descending.
///
/// The sort is stable over first-seen input order, so revenue ties keep a
/// deterministic ordering across runs.
#[must_use]
pub fn revenue_by_country(dataset: &Dataset) -> Vec<CountryRevenue> {
    let mut totals: Vec<CountryRevenue> = Vec::new();
    let mut index_by_country: HashMap<&str, usize> = HashMap::new();

    for user in dataset {
        match index_by_country.get(user.registration_country.as_str()) {
            Some(&index) => totals[index].revenue_eur += user.total_purchases_eur,
            None => {
                index_by_country.insert(user.registration_country.as_str(), totals.len());
                totals.push(CountryRevenue {
                    country: user.registration_country.clone(),
                    revenue_eur: user.total_purchases_eur,
                });
            }
        }
    }

    totals.sort_by(|a, b| b.revenue_eur.total_cmp(&a.revenue_eur));
    totals.truncate(TOP_COUNTRIES);
    totals
}
