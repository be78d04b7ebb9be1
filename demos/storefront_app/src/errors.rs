// demos/storefront_app/src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Order submission failed: {0}")]
  OrderSubmission(String),

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
