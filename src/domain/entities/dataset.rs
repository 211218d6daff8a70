//! Immutable dataset handle.

use std::sync::Arc;

use super::UserRecord;

/// The loaded dataset: one [`UserRecord`] per user, immutable for the
/// lifetime of the process.
///
/// The handle is a cheap `Arc` clone; chart computations borrow the rows
/// and never write back. Derived values (tiers, cohort months) live only
/// inside the charts that compute them.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Arc<[UserRecord]>,
}

impl Dataset {
    /// Wraps loaded rows into an immutable handle.
    #[must_use]
    pub fn new(rows: Vec<UserRecord>) -> Self {
        Self { rows: rows.into() }
    }

    /// Number of users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no rows. The loader rejects this case,
    /// but chart code stays total over it anyway.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over all user rows.
    pub fn iter(&self) -> std::slice::Iter<'_, UserRecord> {
        self.rows.iter()
    }

    /// All rows as a slice.
    #[must_use]
    pub fn rows(&self) -> &[UserRecord] {
        &self.rows
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a UserRecord;
    type IntoIter = std::slice::Iter<'a, UserRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
