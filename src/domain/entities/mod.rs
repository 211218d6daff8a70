//! Dataset entities.

mod dataset;
mod month;
mod record;
mod weekday;

pub use dataset::Dataset;
pub use month::MonthKey;
pub use record::UserRecord;
pub use weekday::Weekday;
