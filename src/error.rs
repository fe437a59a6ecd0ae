// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for try-on requests.
//!
//! Validation errors are raised before any network activity and are always
//! recoverable. Everything else collapses into a transient failure that is
//! shown to the user as a notification.

use thiserror::Error;

/// Text shown when a busy submit control is pressed again.
const BUSY_MESSAGE: &str = "A try-on is already being processed.";

/// A required image was not provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload both model and garment images.")]
    MissingPersonImage,
    #[error("Please upload both model and garment images.")]
    MissingGarmentImage,
    #[error("Please upload both model and garment images.")]
    MissingBothImages,
    /// Catalogue flow: no person photo uploaded yet.
    #[error("Please upload your photo first.")]
    MissingPersonPhoto,
}

/// Failure of a single try-on attempt.
#[derive(Debug, Error)]
pub enum TryOnError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("a try-on request is already in flight")]
    Busy,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("malformed service response: {reason}")]
    Malformed {
        reason: String,
        message: Option<String>,
    },

    #[error("catalogue asset unavailable: {0}")]
    Asset(String),

    #[error("try-on worker stopped unexpectedly: {0}")]
    Worker(String),
}

impl TryOnError {
    /// True for errors caught before the request was dispatched.
    pub fn is_validation(&self) -> bool {
        matches!(self, TryOnError::Validation(_))
    }

    /// Text for the error notification.
    ///
    /// A message supplied by the service is shown verbatim; transport and
    /// other failures fall back to `generic`.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            TryOnError::Validation(e) => e.to_string(),
            TryOnError::Busy => BUSY_MESSAGE.to_string(),
            TryOnError::Status { message: Some(m), .. }
            | TryOnError::Malformed { message: Some(m), .. } => m.clone(),
            _ => generic.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_is_shown_verbatim() {
        let err = TryOnError::Status {
            status: 400,
            message: Some("person_image: unsupported image/gif".to_string()),
        };
        assert_eq!(
            err.user_message("Something went wrong."),
            "person_image: unsupported image/gif"
        );
    }

    #[test]
    fn test_generic_fallback_without_message() {
        let err = TryOnError::Status { status: 500, message: None };
        assert_eq!(err.user_message("Something went wrong."), "Something went wrong.");

        let err = TryOnError::Asset("missing".to_string());
        assert_eq!(err.user_message("Failed to generate try-on."), "Failed to generate try-on.");
    }

    #[test]
    fn test_validation_messages() {
        let err: TryOnError = ValidationError::MissingGarmentImage.into();
        assert!(err.is_validation());
        assert_eq!(
            err.user_message("unused"),
            "Please upload both model and garment images."
        );

        let err: TryOnError = ValidationError::MissingPersonPhoto.into();
        assert_eq!(err.user_message("unused"), "Please upload your photo first.");
        assert!(!TryOnError::Busy.is_validation());
    }
}
