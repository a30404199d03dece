use reqwest::StatusCode;
use thiserror::Error;

/// A submission rejected before any request is made. The display text is
/// what the error banner shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("End date must be after start date.")]
    EndNotAfterStart,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("booking service answered {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("base url '{0}' cannot carry path segments")]
    InvalidBaseUrl(String),
}

pub(crate) const CREATE_FAILED: &str = "Failed to create booking.";
pub(crate) const UPDATE_FAILED: &str = "Failed to update booking.";
