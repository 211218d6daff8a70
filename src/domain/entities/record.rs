//! Per-user purchase behavior record.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::Weekday;
use crate::domain::serde_utils;

/// One row of the dataset: the purchase behavior of a single user.
///
/// Field names map onto the fixed CSV schema via serde renames; a missing
/// or misnamed column fails deserialization of the first row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    /// When the user registered.
    #[serde(
        rename = "REGISTRATION_DATE",
        deserialize_with = "serde_utils::flexible_timestamp::deserialize"
    )]
    pub registration_date: NaiveDateTime,

    /// Day of the user's first purchase, if they ever purchased.
    ///
    /// An empty cell means the user never purchased; a missing column is
    /// still a fatal schema error.
    #[serde(
        rename = "FIRST_PURCHASE_DAY",
        deserialize_with = "serde_utils::flexible_timestamp::deserialize_option"
    )]
    pub first_purchase_day: Option<NaiveDateTime>,

    /// Day of the user's most recent purchase.
    #[serde(
        rename = "LAST_PURCHASE_DAY",
        deserialize_with = "serde_utils::flexible_timestamp::deserialize_option"
    )]
    pub last_purchase_day: Option<NaiveDateTime>,

    /// Total number of purchases.
    #[serde(rename = "PURCHASE_COUNT")]
    pub purchase_count: u32,

    /// Purchases delivered to the user.
    #[serde(rename = "PURCHASE_COUNT_DELIVERY")]
    pub delivery_purchases: u32,

    /// Purchases picked up by the user.
    #[serde(rename = "PURCHASE_COUNT_TAKEAWAY")]
    pub takeaway_purchases: u32,

    /// Purchases placed from iOS.
    #[serde(rename = "IOS_PURCHASES")]
    pub ios_purchases: u32,

    /// Purchases placed from Android.
    #[serde(rename = "ANDROID_PURCHASES")]
    pub android_purchases: u32,

    /// Purchases placed from the web.
    #[serde(rename = "WEB_PURCHASES")]
    pub web_purchases: u32,

    /// The hour of day (0-23) the user most often purchases at.
    #[serde(
        rename = "MOST_COMMON_HOUR_OF_THE_DAY_TO_PURCHASE",
        deserialize_with = "serde_utils::optional_hour::deserialize"
    )]
    pub most_common_hour: Option<u8>,

    /// The weekday the user most often purchases on.
    #[serde(
        rename = "MOST_COMMON_WEEKDAY_TO_PURCHASE",
        deserialize_with = "serde_utils::optional_weekday::deserialize"
    )]
    pub most_common_weekday: Option<Weekday>,

    /// Country the user registered from.
    #[serde(rename = "REGISTRATION_COUNTRY")]
    pub registration_country: String,

    /// Lifetime purchase value in euros.
    #[serde(rename = "TOTAL_PURCHASES_EUR")]
    pub total_purchases_eur: f64,
}

impl UserRecord {
    /// Whether the user has ever purchased, judged by the first-purchase
    /// date the way the funnel does.
    #[must_use]
    pub const fn has_purchased(&self) -> bool {
        self.first_purchase_day.is_some()
    }

    /// Whether the user has purchased more than once.
    #[must_use]
    pub const fn is_repeat_customer(&self) -> bool {
        self.purchase_count > 1
    }
}
