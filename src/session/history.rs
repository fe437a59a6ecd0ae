// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Current result and session history.
//!
//! History is newest-first in completion order, unbounded, and lives only
//! as long as the window. The current result follows the newest *submitted*
//! request, so a slow early response cannot replace a later one.

use crate::models::result::TryOnResult;
use crate::service::client::Ticket;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct ResultHistory {
    current: Option<(Ticket, TryOnResult)>,
    entries: VecDeque<TryOnResult>,
}

impl ResultHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a completed result.
    ///
    /// The result is always prepended to history. It becomes current unless
    /// a result from a later ticket is already shown. Returns whether the
    /// current result changed.
    pub fn record(&mut self, ticket: Ticket, result: TryOnResult) -> bool {
        self.entries.push_front(result.clone());

        let is_stale = matches!(self.current, Some((shown, _)) if shown > ticket);
        if is_stale {
            log::warn!(
                "Result for request #{} arrived after a newer one; kept in history only",
                ticket
            );
            return false;
        }

        self.current = Some((ticket, result));
        true
    }

    /// Most recent result, if any request has succeeded.
    pub fn current(&self) -> Option<&TryOnResult> {
        self.current.as_ref().map(|(_, result)| result)
    }

    /// All results, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &TryOnResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str) -> TryOnResult {
        TryOnResult {
            id: text.to_string(),
            result_image: format!("https://x/{}.png", text),
            text: text.to_string(),
            timestamp: "1/1/2025, 12:00:00 PM".to_string(),
        }
    }

    #[test]
    fn test_empty_until_first_result() {
        let history = ResultHistory::new();
        assert!(history.current().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn test_new_result_goes_to_head() {
        let mut history = ResultHistory::new();
        for (ticket, text) in ["a", "b", "c"].iter().enumerate() {
            history.record(ticket as Ticket, result(text));
            assert_eq!(history.len(), ticket + 1);
            assert_eq!(history.entries().next().unwrap().text, *text);
            assert_eq!(history.current().unwrap().text, *text);
        }
        let texts: Vec<&str> = history.entries().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_history_follows_completion_order() {
        // A is submitted first (ticket 1) but B (ticket 2) resolves first.
        let mut history = ResultHistory::new();
        assert!(history.record(2, result("B")));
        assert!(!history.record(1, result("A")));

        // B was inserted before A; A, the later completion, is at the head.
        let texts: Vec<&str> = history.entries().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B"]);

        // The stale response does not replace the newer current result.
        assert_eq!(history.current().unwrap().text, "B");
    }

    #[test]
    fn test_no_deduplication() {
        let mut history = ResultHistory::new();
        history.record(1, result("same"));
        history.record(2, result("same"));
        assert_eq!(history.len(), 2);
    }
}
