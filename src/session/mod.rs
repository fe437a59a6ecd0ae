// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interaction state for the two try-on screens.
//!
//! Both flows are plain state machines driven by the UI: `submit`/`select`
//! start a request, `poll` applies completions and yields notifications.
//! Neither touches egui, so they can be exercised directly in tests.

pub mod catalogue;
pub mod form;
pub mod history;
pub mod uploads;

use crate::service::client::Ticket;

/// Short message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn text(&self) -> &str {
        match self {
            Notification::Success(text) | Notification::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

/// Persistent part of the submission state machine.
///
/// Validation, success and failure are transient: they are handled inside
/// `submit`/`poll` and always return the flow to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Submitting { ticket: Ticket },
}

impl FlowState {
    pub fn is_busy(&self) -> bool {
        matches!(self, FlowState::Submitting { .. })
    }
}
