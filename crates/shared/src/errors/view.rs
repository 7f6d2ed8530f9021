use crate::errors::ClientError;
use crate::model::ProductId;
use thiserror::Error;

/// Failures a view controller catches at its boundary and turns into notices.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Fetch failed: {0}")]
    Fetch(#[source] ClientError),

    #[error("Write failed: {0}")]
    Write(#[source] ClientError),

    #[error("Product {0} not found")]
    NotFound(ProductId),
}

