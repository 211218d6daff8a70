//! CSV dataset loader.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::domain::{DataError, Dataset, UserRecord};

/// Reads the dataset from a CSV file.
///
/// The schema is fixed: headers must match the column names referenced by
/// [`UserRecord`]. The whole file is read once at startup and held in
/// memory for the rest of the run.
///
/// # Errors
///
/// Returns [`DataError`] if the file cannot be opened, any row fails to
/// deserialize (including missing or misnamed columns), or the file holds
/// no data rows.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let started = Instant::now();

    let file = File::open(path).map_err(|source| DataError::io(path, source))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut rows: Vec<UserRecord> = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }

    if rows.is_empty() {
        return Err(DataError::EmptyDataset);
    }

    info!(
        path = %path.display(),
        rows = rows.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Dataset loaded"
    );

    Ok(Dataset::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::domain::Weekday;

    const HEADER: &str = "REGISTRATION_DATE,FIRST_PURCHASE_DAY,LAST_PURCHASE_DAY,PURCHASE_COUNT,PURCHASE_COUNT_DELIVERY,PURCHASE_COUNT_TAKEAWAY,IOS_PURCHASES,ANDROID_PURCHASES,WEB_PURCHASES,MOST_COMMON_HOUR_OF_THE_DAY_TO_PURCHASE,MOST_COMMON_WEEKDAY_TO_PURCHASE,REGISTRATION_COUNTRY,TOTAL_PURCHASES_EUR";

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_loads_well_formed_rows() {
        let file = write_csv(&[
            "2024-01-15,2024-02-01,2024-03-10,7,4,3,5,2,0,18.0,Friday,Finland,123.45",
            "2024-01-20,,,0,0,0,0,0,0,,,Germany,0.0",
        ]);

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.user_count(), 2);

        let first = &dataset.rows()[0];
        assert_eq!(first.purchase_count, 7);
        assert_eq!(first.most_common_hour, Some(18));
        assert_eq!(first.most_common_weekday, Some(Weekday::Friday));
        assert!(first.has_purchased());

        let second = &dataset.rows()[1];
        assert!(second.first_purchase_day.is_none());
        assert_eq!(second.most_common_hour, None);
        assert_eq!(second.most_common_weekday, None);
        assert_eq!(second.registration_country, "Germany");
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let file = write_csv(&[]);
        let error = load_dataset(file.path()).unwrap_err();
        assert!(matches!(error, DataError::EmptyDataset));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let error = load_dataset(Path::new("/nonexistent/users.csv")).unwrap_err();
        assert!(matches!(error, DataError::Io { .. }));
    }

    #[test]
    fn test_missing_column_fails_the_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "REGISTRATION_DATE,PURCHASE_COUNT").unwrap();
        writeln!(file, "2024-01-15,3").unwrap();
        file.flush().unwrap();

        let error = load_dataset(file.path()).unwrap_err();
        assert!(matches!(error, DataError::Csv(_)));
    }

    #[test]
    fn test_out_of_range_hour_fails_the_load() {
        let file = write_csv(&[
            "2024-01-15,2024-02-01,2024-03-10,7,4,3,5,2,0,24,Friday,Finland,123.45",
        ]);
        let error = load_dataset(file.path()).unwrap_err();
        assert!(matches!(error, DataError::Csv(_)));
    }

    #[test]
    fn test_unknown_weekday_fails_the_load() {
        let file = write_csv(&[
            "2024-01-15,2024-02-01,2024-03-10,7,4,3,5,2,0,18,Blursday,Finland,123.45",
        ]);
        let error = load_dataset(file.path()).unwrap_err();
        assert!(matches!(error, DataError::Csv(_)));
    }
}
