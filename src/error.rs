use thiserror::Error;

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Faults that reach the top of the program.
///
/// Everything a user can cause at the prompt is handled inside the shell;
/// what ends up here is a store that cannot be opened, created or seeded,
/// or a terminal that can no longer be read from.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
