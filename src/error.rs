use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised while building, running or training a `Network`.
///
/// Configuration faults (`EmptyTrainingSet`, `WeightShape`,
/// `InconsistentTrainingSet`) abort construction. Shape faults
/// (`AttributeCount`, `ClassCount`) abort the single call that hit them.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// `bad_row` is the first row with the wrong length, as `(row, len)`.
    #[error(
        "{layer} weight matrix must be {expected_rows}x{expected_cols}, got {rows} rows{}",
        describe_row(.bad_row)
    )]
    WeightShape {
        layer: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        bad_row: Option<(usize, usize)>,
    },

    #[error("training example {index} does not share the shape of the first example")]
    InconsistentTrainingSet { index: usize },

    #[error("example has {got} attributes, network expects {expected}")]
    AttributeCount { expected: usize, got: usize },

    #[error("example has {got} class values, network expects {expected}")]
    ClassCount { expected: usize, got: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe_row(bad_row: &Option<(usize, usize)>) -> String {
    match bad_row {
        Some((row, len)) => format!(" (row {row} has {len} columns)"),
        None => String::new(),
    }
}
