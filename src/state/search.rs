//! Search state machine.
//!
//! SearchState is a sum type representing the five possible search states:
//! - Idle: Nothing searched yet
//! - Loading: A committed search is waiting on the remote backend
//! - Success: Results from the remote backend or the fallback dataset
//! - EmptyInputError: The user submitted a blank query
//! - NoResults: The fallback dataset had no match either
//!
//! A search runs in two halves so the TUI never blocks on the network:
//! [`SearchController::begin`] validates and enters Loading, then
//! [`SearchController::resolve`] applies whatever the backend returned.
//! [`SearchController::submit_search`] chains both around a single await.

use crate::model::{Person, ResultSet, TransportError};
use crate::source::{PeopleSearch, StaticDataset};
use std::sync::Arc;
use tracing::{info, warn};

// ===== SearchState =====

/// Search state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// No search committed yet.
    Idle,
    /// Waiting on the remote backend.
    Loading,
    /// Search finished with this result set (possibly empty).
    Success(ResultSet),
    /// Blank query submitted; no request was made.
    EmptyInputError,
    /// Remote failed and the fallback dataset had no match.
    NoResults,
}

// ===== Presentation =====

/// What the results region shows. Derived from [`SearchState`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation<'a> {
    /// "Please enter a name before searching."
    ValidationError,
    /// Progress indicator; hides everything else.
    Loading,
    /// "No results for `last_query`" plus the whole dataset as suggestions.
    NoResults {
        /// Query the message names.
        last_query: &'a str,
        /// The whole fallback dataset.
        suggestions: &'a [Person],
    },
    /// The current result set.
    Results(&'a [Person]),
    /// Instructions to type a name and search.
    IdlePrompt,
}

// ===== PendingSearch =====

/// A committed search waiting for its backend outcome.
///
/// Carries its own copy of the query so the fallback filters by what was
/// submitted, not by whatever the input box holds when the response lands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending search must be resolved or the controller stays in Loading"]
pub struct PendingSearch {
    query: String,
}

impl PendingSearch {
    /// The submitted query, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }
}

// ===== Fallback =====

/// Filter people by case-insensitive substring match on name.
///
/// Order is preserved. The query is matched as given (not trimmed).
pub fn fallback_filter(people: &[Person], query: &str) -> ResultSet {
    let query_lower = query.to_lowercase();
    people
        .iter()
        .filter(|p| p.name_contains_lower(&query_lower))
        .cloned()
        .collect()
}

// ===== SearchController =====

/// Single owner of all search state.
///
/// Overlapping searches are not fenced: each `resolve` overwrites the state,
/// so the last outcome to arrive wins.
#[derive(Debug, Clone)]
pub struct SearchController {
    state: SearchState,
    last_query: String,
    dataset: Arc<StaticDataset>,
}

impl SearchController {
    /// Start idle, falling back to `dataset` on remote failure.
    pub fn new(dataset: Arc<StaticDataset>) -> Self {
        Self {
            state: SearchState::Idle,
            last_query: String::new(),
            dataset,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Query text as of the last committed (non-blank) search.
    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Fallback dataset, also the suggestion list.
    pub fn dataset(&self) -> &StaticDataset {
        &self.dataset
    }

    /// True while a remote search is outstanding.
    pub fn is_loading(&self) -> bool {
        self.state == SearchState::Loading
    }

    /// Current result set; empty unless the state is `Success`.
    pub fn results(&self) -> &[Person] {
        match &self.state {
            SearchState::Success(people) => people.as_slice(),
            _ => &[],
        }
    }

    /// Validate and commit a search.
    ///
    /// A blank query moves to `EmptyInputError` and returns `None`; no request
    /// must be made. Otherwise the state becomes `Loading`, the query is
    /// snapshotted as the last query, and the returned [`PendingSearch`] must
    /// be passed to [`resolve`](Self::resolve) once the backend answers.
    pub fn begin(&mut self, query: &str) -> Option<PendingSearch> {
        info!(query, "Searching for");

        if query.trim().is_empty() {
            self.state = SearchState::EmptyInputError;
            return None;
        }

        self.state = SearchState::Loading;
        self.last_query = query.to_string();
        Some(PendingSearch {
            query: query.to_string(),
        })
    }

    /// Apply a backend outcome to a committed search.
    ///
    /// `Ok` replaces the results wholesale. `Err` discards the remote attempt
    /// and resolves from the fallback dataset instead. The controller always
    /// leaves `Loading`.
    pub fn resolve(&mut self, pending: PendingSearch, outcome: Result<ResultSet, TransportError>) {
        self.state = match outcome {
            Ok(people) => {
                info!(query = %pending.query, count = people.len(), "Search resolved remotely");
                SearchState::Success(people)
            }
            Err(error) => {
                warn!(%error, query = %pending.query, "Live fetch failed, falling back to local dataset");
                let filtered = fallback_filter(self.dataset.people(), &pending.query);
                if filtered.is_empty() {
                    SearchState::NoResults
                } else {
                    SearchState::Success(filtered)
                }
            }
        };
    }

    /// Run a full search against `backend`: validate, fetch, fall back.
    pub async fn submit_search<S>(&mut self, query: &str, backend: &S)
    where
        S: PeopleSearch + ?Sized,
    {
        let Some(pending) = self.begin(query) else {
            return;
        };
        let outcome = backend.search(pending.query()).await;
        self.resolve(pending, outcome);
    }

    /// Derive the display mode from the current state.
    pub fn presentation(&self) -> Presentation<'_> {
        match &self.state {
            SearchState::EmptyInputError => Presentation::ValidationError,
            SearchState::Loading => Presentation::Loading,
            SearchState::NoResults => Presentation::NoResults {
                last_query: &self.last_query,
                suggestions: self.dataset.people(),
            },
            SearchState::Success(people) if !people.is_empty() => Presentation::Results(people),
            SearchState::Success(_) | SearchState::Idle => Presentation::IdlePrompt,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
