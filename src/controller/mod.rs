//! Presentation state for the search screen
//!
//! [`SearchController`] owns the query / results / loading state, drives a
//! [`SearchBackend`](crate::search::SearchBackend), and derives what the
//! view should render. Results are stored in backend order; ranking happens
//! on read, never written back into state.

use crate::ranking;
use crate::results::ServiceResult;
use crate::search::{Coordinates, ErrorKind, SearchBackend, SearchError, SearchRequest};
use tracing::{debug, error};

/// Ticket identifying one submission.
///
/// Settling with a superseded ticket is a no-op, so a slow response can
/// never overwrite the state of a newer search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    generation: u64,
    query: String,
}

impl Submission {
    /// The trimmed query recorded at submission time
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What the view should render, derived from controller state
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// Nothing has been submitted yet
    Idle,
    /// A search is in flight
    Searching,
    /// The last search settled with no matches
    NoMatches,
    /// The last search settled with a failure
    Failed(ErrorKind),
    /// Ranked results ready for display
    Ranked(Vec<ServiceResult>),
}

/// Controller for the search screen
#[derive(Debug, Default)]
pub struct SearchController {
    query: String,
    results: Vec<ServiceResult>,
    loading: bool,
    error: Option<ErrorKind>,
    submitted: bool,
    generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a search.
    ///
    /// Empty and whitespace-only queries are a no-op returning `None`; the
    /// current state is left untouched. Otherwise previous results and any
    /// recorded failure are cleared immediately, the loading flag is set,
    /// and the returned ticket identifies this submission for [`settle`].
    ///
    /// [`settle`]: Self::settle
    pub fn submit(&mut self, raw_query: &str) -> Option<Submission> {
        let query = raw_query.trim();
        if query.is_empty() {
            return None;
        }

        self.results.clear();
        self.error = None;
        self.loading = true;
        self.submitted = true;
        self.query = query.to_string();
        self.generation += 1;

        debug!(query = %self.query, generation = self.generation, "search submitted");
        Some(Submission {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Settle a submission with the backend's outcome.
    ///
    /// Outcomes for superseded submissions are discarded. For the current
    /// submission, success stores the result list and failure records the
    /// error kind with an empty list; the loading flag clears on both
    /// paths, so the screen always settles.
    pub fn settle(
        &mut self,
        submission: &Submission,
        outcome: Result<Vec<ServiceResult>, SearchError>,
    ) {
        if submission.generation != self.generation {
            debug!(
                stale = submission.generation,
                current = self.generation,
                "discarding response from superseded search"
            );
            return;
        }

        match outcome {
            Ok(results) => {
                debug!(count = results.len(), "search settled");
                self.results = results;
                self.error = None;
            }
            Err(e) => {
                error!("search failed: {}", e);
                self.results.clear();
                self.error = Some(e.kind());
            }
        }
        self.loading = false;
    }

    /// Submit, call the backend, and settle in one step
    pub async fn run<B: SearchBackend>(
        &mut self,
        backend: &B,
        raw_query: &str,
        limit: Option<u32>,
        coordinates: Option<Coordinates>,
    ) {
        let Some(submission) = self.submit(raw_query) else {
            return;
        };

        let mut request = SearchRequest::new(submission.query());
        if let Some(limit) = limit {
            request = request.with_limit(limit);
        }
        if let Some(coordinates) = coordinates {
            request = request.with_coordinates(coordinates);
        }

        let outcome = backend.search(&request).await;
        self.settle(&submission, outcome);
    }

    /// The most recently submitted query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a search is in flight
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Results in backend order; [`view`](Self::view) applies the ranking
    pub fn results(&self) -> &[ServiceResult] {
        &self.results
    }

    /// Failure recorded by the last settled search, if any
    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Derive what the view should render.
    ///
    /// Ranking is applied here, on read; controller state keeps the
    /// backend's order.
    pub fn view(&self) -> ResultsView {
        if self.loading {
            return ResultsView::Searching;
        }
        if !self.submitted {
            return ResultsView::Idle;
        }
        if let Some(kind) = self.error {
            return ResultsView::Failed(kind);
        }
        if self.results.is_empty() {
            return ResultsView::NoMatches;
        }
        ResultsView::Ranked(ranking::rank(&self.results))
    }
}
