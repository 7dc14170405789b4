use thiserror::Error;

use crate::utils::validation::ValidationError;

// Core internal errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid input: {0}")]
    Input(#[from] ValidationError),
}
