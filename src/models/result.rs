// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Completed try-on results.

use crate::service::TryOnResponse;

/// Display format for result timestamps, e.g. `3/14/2025, 9:05:12 PM`.
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// One successful try-on. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryOnResult {
    pub id: String,
    /// URI or data reference the view can render directly.
    pub result_image: String,
    /// Caption returned by the service.
    pub text: String,
    /// Local completion time, for display only.
    pub timestamp: String,
}

impl TryOnResult {
    /// Wrap a service response with a fresh id and the current time.
    pub fn from_response(response: TryOnResponse) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            result_image: response.image,
            text: response.text,
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
