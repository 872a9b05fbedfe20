use std::path::PathBuf;

/// Errors returned by the board engine. None of them leave the game in a
/// modified state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("rows and columns must be greater than 0 (got {rows}x{columns})")]
    InvalidDimensions { rows: isize, columns: isize },

    #[error("rows and columns must be greater than or equal to n (got {rows}x{columns}, n = {n})")]
    ThresholdTooLarge { rows: isize, columns: isize, n: isize },

    #[error("n must be greater than zero (got {0})")]
    InvalidThreshold(isize),

    #[error("column {column} is out of range (must be between 0 and {})", .columns.saturating_sub(1))]
    ColumnOutOfRange { column: isize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cell ({row}, {col}) is outside the board")]
    CellOutOfRange { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(#[from] GameError),
}
