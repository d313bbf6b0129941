//! Sequenced coordination of search submissions.
//!
//! The [`SearchRuntime`] owns the submitted query, the loading flag, and the
//! result list. Requests carry a monotonically increasing id; only the
//! response for the newest id may touch state, so two quickly submitted
//! searches can never leave the older answer on screen.

use std::sync::mpsc::Sender;

use pdfsift_client::{ClientError, ResultItem};

use crate::worker::BackendCommand;

pub(crate) struct SearchRuntime {
	tx: Sender<BackendCommand>,
	next_request_id: u64,
	current_request_id: Option<u64>,
	submitted_query: String,
	loading: bool,
	results: Option<Vec<ResultItem>>,
	last_error: Option<String>,
}

impl SearchRuntime {
	pub(crate) fn new(tx: Sender<BackendCommand>) -> Self {
		Self {
			tx,
			next_request_id: 0,
			current_request_id: None,
			submitted_query: String::new(),
			loading: false,
			results: None,
			last_error: None,
		}
	}

	/// Trim and submit `text` as the active query.
	///
	/// Returns `true` when the submitted query changed value, which is the
	/// exact condition for resetting per-result toggles. Resubmitting the
	/// same query re-runs the search without counting as a change.
	pub(crate) fn submit(&mut self, text: &str) -> bool {
		let trimmed = text.trim();
		let changed = trimmed != self.submitted_query;
		self.submitted_query = trimmed.to_string();
		self.loading = true;
		self.last_error = None;

		self.next_request_id += 1;
		let id = self.next_request_id;
		self.current_request_id = Some(id);
		let _ = self.tx.send(BackendCommand::Search {
			id,
			query: self.submitted_query.clone(),
		});

		changed
	}

	/// Whether `id` belongs to the most recently issued search.
	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		Some(id) == self.current_request_id
	}

	/// Apply a finished search. Callers must have filtered stale ids.
	pub(crate) fn record_outcome(&mut self, outcome: Result<Vec<ResultItem>, ClientError>) {
		self.loading = false;
		match outcome {
			Ok(items) => {
				self.results = Some(items);
			}
			Err(err) => {
				// Stale results stay visible; the failure is only surfaced.
				tracing::warn!(error = %err, query = %self.submitted_query, "search failed");
				self.last_error = Some(err.to_string());
			}
		}
	}

	/// The trimmed query the current results answer.
	pub(crate) fn submitted_query(&self) -> &str {
		&self.submitted_query
	}

	pub(crate) fn is_loading(&self) -> bool {
		self.loading
	}

	/// Result list of the newest completed search, if any.
	pub(crate) fn results(&self) -> Option<&[ResultItem]> {
		self.results.as_deref()
	}

	/// Error line for the results area, until dismissed.
	pub(crate) fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	pub(crate) fn dismiss_error(&mut self) {
		self.last_error = None;
	}

	#[cfg(test)]
	pub(crate) fn latest_request_id(&self) -> Option<u64> {
		self.current_request_id
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc::{Receiver, channel};

	use super::*;
	use crate::testing::item;

	fn runtime() -> (SearchRuntime, Receiver<BackendCommand>) {
		let (tx, rx) = channel();
		(SearchRuntime::new(tx), rx)
	}

	#[test]
	fn submit_trims_and_reports_query_changes() {
		let (mut search, _commands) = runtime();
		assert!(search.submit("  neural nets  "));
		assert_eq!(search.submitted_query(), "neural nets");
		assert!(search.is_loading());

		// Same query again: re-issued but not a change.
		assert!(!search.submit("neural nets"));
		assert!(search.submit("transformers"));
	}

	#[test]
	fn each_submit_issues_a_fresh_request_id() {
		let (mut search, _commands) = runtime();
		search.submit("a");
		let first = search.latest_request_id().unwrap();
		search.submit("b");
		let second = search.latest_request_id().unwrap();
		assert!(second > first);
		assert!(!search.matches_latest(first));
		assert!(search.matches_latest(second));
	}

	#[test]
	fn success_replaces_results_atomically() {
		let (mut search, _commands) = runtime();
		search.submit("first");
		search.record_outcome(Ok(vec![item("a.pdf", "alpha", 1)]));
		search.submit("second");
		search.record_outcome(Ok(vec![item("b.pdf", "beta", 2)]));

		let results = search.results().unwrap();
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].document, "b.pdf");
		assert!(!search.is_loading());
	}

	#[test]
	fn failure_keeps_stale_results_and_surfaces_an_error() {
		let (mut search, _commands) = runtime();
		search.submit("good");
		search.record_outcome(Ok(vec![item("a.pdf", "alpha", 1)]));

		search.submit("bad");
		search.record_outcome(Err(pdfsift_client::ClientError::InvalidBase {
			url: "nonsense".to_string(),
		}));

		assert!(!search.is_loading());
		assert_eq!(search.results().unwrap()[0].document, "a.pdf");
		assert!(search.last_error().is_some());

		search.dismiss_error();
		assert!(search.last_error().is_none());
	}
}
