//! Error types for the animal registry client and the quiz.
//!
//! # Design
//! Every non-2xx response lands in `HttpError` with the raw status code,
//! its reason phrase and the body for debugging. A missing record is not
//! special-cased: callers only ever see "the request did not succeed".

use thiserror::Error;

/// Errors returned by `AnimalClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a status outside 200..=299.
    #[error("HTTP error! status: {status} {status_text}")]
    HttpError {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// Status code carried by an `HttpError`, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors from the selection rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no animals available to pick from")]
    NoAnimalsAvailable,
}

/// Anything that can go wrong while running a dispatched action.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
