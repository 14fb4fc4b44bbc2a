/// Error types for launch record data
use thiserror::Error;

/// Main error type for loading launch records and resolving filter selections.
///
/// Row numbers are 1-based and count data rows only (the header is row 0).
#[derive(Error, Debug)]
pub enum LaunchDataError {
    /// The CSV reader failed (bad quoting, I/O, ragged record)
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0:?}")]
    MissingColumn(&'static str),

    /// A required field is blank
    #[error("Row {row}: empty value in column {column:?}")]
    EmptyField { row: usize, column: &'static str },

    /// The launch site is not one of the four known sites
    #[error("Row {row}: unknown launch site {value:?}")]
    UnknownSite { row: usize, value: String },

    /// Payload mass is not a finite, non-negative number
    #[error("Row {row}: invalid payload mass {value:?}")]
    InvalidPayload { row: usize, value: String },

    /// Outcome class is not 0 or 1
    #[error("Row {row}: invalid class {value:?} (expected 0 or 1)")]
    InvalidOutcome { row: usize, value: String },

    /// `Flight Number` is present but not a non-negative integer
    #[error("Row {row}: invalid flight number {value:?}")]
    InvalidFlightNumber { row: usize, value: String },

    /// The dataset has a header but no launches
    #[error("The launch dataset contains no records")]
    EmptyTable,

    /// The dropdown value is not part of the site choice enumeration
    #[error("No such site choice: {0:?}")]
    UnknownSiteChoice(String),

    /// A payload range bound is NaN or the bounds are inverted
    #[error("Invalid payload range: [{low}, {high}]")]
    InvalidPayloadRange { low: f64, high: f64 },
}

/// Type alias for Results using LaunchDataError
pub type Result<T> = std::result::Result<T, LaunchDataError>;
