//! GTFS loading error types.

/// Errors from loading a GTFS timetable directory.
///
/// Any of these means the dataset could not be materialized; the query
/// cannot run and there is nothing to retry.
#[derive(Debug, thiserror::Error)]
pub enum GtfsError {
    /// A timetable file could not be read or parsed as CSV.
    #[error("failed to read {file}: {source}")]
    Read {
        file: &'static str,
        #[source]
        source: csv::Error,
    },

    /// A row parsed as CSV but failed domain validation.
    #[error("{file} row {row}: {message}")]
    InvalidRecord {
        file: &'static str,
        row: usize,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_record_display_names_file_and_row() {
        let err = GtfsError::InvalidRecord {
            file: "stop_times.txt",
            row: 17,
            message: "invalid time: expected HH:MM:SS format".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "stop_times.txt row 17: invalid time: expected HH:MM:SS format"
        );
    }
}
