use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for loading the number list and target.
#[derive(Error, Debug)]
pub enum InputError {
    /// Error when reading the input file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the number list has no tokens at all.
    #[error("No numbers given; enter numbers separated by commas or spaces")]
    EmptyNumbers,

    /// Error when a token of the number list is not an integer.
    #[error("Invalid number '{0}'; enter numbers separated by commas or spaces")]
    InvalidNumber(String),

    /// Error when the target is not an integer.
    #[error("Invalid target '{0}'; the target must be a whole number")]
    InvalidTarget(String),

    /// Error when the list is longer than the configured cap.
    #[error("Got {count} numbers; enter {max} or fewer numbers for performance reasons")]
    TooManyNumbers { count: usize, max: usize },
}
