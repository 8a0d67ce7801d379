use thiserror::Error;

/// Errors returned by the metrics in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Two parallel sequences have different lengths.
    #[error("length mismatch: {left} labels vs {right} {what}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
        /// What the second sequence holds.
        what: &'static str,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch at row {row}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Row index of the offending point.
        row: usize,
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A feature value is NaN or infinite.
    #[error("non-finite feature value at row {row}, column {column}")]
    NonFiniteValue {
        /// Row index of the offending point.
        row: usize,
        /// Coordinate index within the row.
        column: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// The number of distinct clusters is outside the range a metric accepts.
    #[error("{metric}: {n_clusters} clusters over {n_samples} samples is out of range")]
    InsufficientClusters {
        /// Metric that rejected the input.
        metric: &'static str,
        /// Number of distinct clusters found.
        n_clusters: usize,
        /// Number of samples.
        n_samples: usize,
    },

    /// The result is mathematically undefined for this input.
    #[error("{metric} is undefined: {reason}")]
    DegenerateInput {
        /// Metric that rejected the input.
        metric: &'static str,
        /// Why the value is undefined.
        reason: &'static str,
    },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: empty, mismatched lengths, bad dimensions or parameters.
    InvalidInput,
    /// Too few (or too many) distinct clusters for the metric.
    InsufficientClusters,
    /// Well-formed input on which the metric has no defined value.
    DegenerateInput,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput
            | Error::LengthMismatch { .. }
            | Error::DimensionMismatch { .. }
            | Error::NonFiniteValue { .. }
            | Error::InvalidParameter { .. } => ErrorKind::InvalidInput,
            Error::InsufficientClusters { .. } => ErrorKind::InsufficientClusters,
            Error::DegenerateInput { .. } => ErrorKind::DegenerateInput,
        }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
