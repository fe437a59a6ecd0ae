// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background dispatch of try-on requests.
//!
//! Each submission runs on its own worker thread and reports back over an
//! mpsc channel, which the UI drains once per frame. The client refuses a
//! new submission while one is still outstanding.

use super::{TryOnRequest, TryOnResponse, TryOnService};
use crate::error::TryOnError;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Sequence number attached to a submission.
pub type Ticket = u64;

/// Outcome of one submission, delivered to the flow that started it.
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub result: Result<TryOnResponse, TryOnError>,
}

/// Shared handle used by every flow to reach the service.
#[derive(Clone)]
pub struct TryOnClient {
    service: Arc<dyn TryOnService>,
    busy: Arc<AtomicBool>,
}

/// Releases the in-flight flag when the worker finishes.
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl TryOnClient {
    pub fn new(service: Arc<dyn TryOnService>) -> Self {
        Self {
            service,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Dispatch a ready request.
    pub fn submit(
        &self,
        ticket: Ticket,
        request: TryOnRequest,
        completions: Sender<Completion>,
    ) -> Result<(), TryOnError> {
        self.submit_with(ticket, completions, move || Ok(request))
    }

    /// Dispatch a request whose preparation (e.g. fetching a catalogue
    /// asset) must also happen off the UI thread.
    ///
    /// Returns [`TryOnError::Busy`] without touching the service if another
    /// request is in flight.
    pub fn submit_with<F>(
        &self,
        ticket: Ticket,
        completions: Sender<Completion>,
        prepare: F,
    ) -> Result<(), TryOnError>
    where
        F: FnOnce() -> Result<TryOnRequest, TryOnError> + Send + 'static,
    {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("Rejected submission #{}: a request is already in flight", ticket);
            return Err(TryOnError::Busy);
        }

        let guard = InFlight(self.busy.clone());
        let service = self.service.clone();
        log::info!("Dispatching try-on request #{}", ticket);

        std::thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                prepare().and_then(|request| service.try_on(&request))
            }))
            .unwrap_or_else(|payload| Err(TryOnError::Worker(panic_text(payload.as_ref()))));
            match &result {
                Ok(_) => log::info!("Try-on request #{} completed", ticket),
                Err(e) => log::error!("Try-on request #{} failed: {}", ticket, e),
            }

            // Release before delivering so the next submit is accepted as
            // soon as the completion is observed.
            drop(guard);
            if completions.send(Completion { ticket, result }).is_err() {
                log::debug!("Completion #{} dropped: receiver gone", ticket);
            }
        });

        Ok(())
    }
}

fn panic_text(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic".to_string())
}
