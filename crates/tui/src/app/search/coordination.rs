//! Wiring between the [`App`], the search runtime, and worker events.

use std::sync::mpsc::TryRecvError;

use crate::app::state::App;
use crate::highlight::Highlighter;
use crate::worker::BackendEvent;

impl App<'_> {
	/// Submit the current search input as the active query.
	pub(crate) fn submit_search(&mut self) {
		let text = self.search_input.text().to_string();
		if self.search.submit(&text) {
			// A different query invalidates every per-result toggle.
			self.results.reset_toggles();
		}
		self.highlighter = Highlighter::new(self.search.submitted_query());
	}

	/// Drain backend events waiting on the receiver channel.
	pub(crate) fn pump_backend_events(&mut self) {
		loop {
			match self.events.try_recv() {
				Ok(event) => self.handle_backend_event(event),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply one backend event, dropping anything with a stale request id.
	pub(crate) fn handle_backend_event(&mut self, event: BackendEvent) {
		match event {
			BackendEvent::Search { id, outcome } => {
				if !self.search.matches_latest(id) {
					tracing::debug!(id, "dropping stale search response");
					return;
				}
				self.search.record_outcome(outcome);
				let len = self.visible_results().len();
				self.results.ensure_selection(len);
			}
			BackendEvent::Upload { id, outcome } => {
				if !self.upload.matches_latest(id) {
					tracing::debug!(id, "dropping stale upload response");
					return;
				}
				if self.upload.record_outcome(outcome) {
					// Inventory is re-fetched, never patched locally.
					self.inventory.request_refresh();
				}
			}
			BackendEvent::Inventory { id, outcome } => {
				if !self.inventory.matches_latest(id) {
					tracing::debug!(id, "dropping stale inventory response");
					return;
				}
				self.inventory.record_outcome(outcome);
				let len = self.filtered_filenames().len();
				self.inventory.ensure_selection(len);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use pdfsift_client::{DocumentPayload, PDF_MIME, UploadReceipt};

	use super::*;
	use crate::config::UiLabels;
	use crate::testing::{FakeApi, item};

	fn app() -> App<'static> {
		App::new(Arc::new(FakeApi::default()), UiLabels::default())
	}

	fn submit(app: &mut App<'_>, text: &str) {
		app.search_input = crate::input::SearchInput::new(text.to_string());
		app.submit_search();
	}

	#[test]
	fn latest_submission_wins_regardless_of_arrival_order() {
		let mut app = app();
		submit(&mut app, "A");
		submit(&mut app, "B");
		app.results.toggle_expanded("left-over.pdf");

		// B's response lands first, then A's stale one.
		app.handle_backend_event(BackendEvent::Search {
			id: 2,
			outcome: Ok(vec![item("b.pdf", "from b", 1)]),
		});
		app.handle_backend_event(BackendEvent::Search {
			id: 1,
			outcome: Ok(vec![item("a.pdf", "from a", 1)]),
		});

		assert_eq!(app.search.submitted_query(), "B");
		let visible = app.visible_results();
		assert_eq!(visible.len(), 1);
		assert_eq!(visible[0].document, "b.pdf");
	}

	#[test]
	fn changing_the_query_resets_toggles_and_resubmitting_does_not() {
		let mut app = app();
		submit(&mut app, "alpha");
		app.results.toggle_expanded("a.pdf");
		app.results.toggle_show_more("a.pdf");

		submit(&mut app, "alpha");
		assert_eq!(app.results.toggle_count(), 2, "same query keeps toggles");

		submit(&mut app, "beta");
		assert_eq!(app.results.toggle_count(), 0, "new query clears toggles");
	}

	#[test]
	fn trimmed_queries_compare_equal_for_the_reset_rule() {
		let mut app = app();
		submit(&mut app, "alpha");
		app.results.toggle_expanded("a.pdf");
		submit(&mut app, "  alpha  ");
		assert_eq!(app.results.toggle_count(), 1);
	}

	#[test]
	fn upload_success_triggers_exactly_one_inventory_refresh() {
		let mut app = app();
		// App::new already requested listing id 1.
		app.upload
			.select(DocumentPayload {
				filename: "new.pdf".to_string(),
				content_type: PDF_MIME.to_string(),
				bytes: vec![0x25],
			})
			.unwrap();

		app.handle_backend_event(BackendEvent::Upload {
			id: 1,
			outcome: Ok(UploadReceipt {
				filename: "new.pdf".to_string(),
			}),
		});

		// The refresh carries a fresh id, superseding the startup listing.
		assert!(!app.inventory.matches_latest(1));
		assert!(app.inventory.matches_latest(2));
	}

	#[test]
	fn stale_inventory_responses_are_dropped() {
		let mut app = app();
		app.inventory.request_refresh();
		// id 1 (startup) is stale now that id 2 is out.
		app.handle_backend_event(BackendEvent::Inventory {
			id: 1,
			outcome: Ok(vec!["old.pdf".to_string()]),
		});
		assert!(app.inventory.filenames().is_empty());

		app.handle_backend_event(BackendEvent::Inventory {
			id: 2,
			outcome: Ok(vec!["new.pdf".to_string()]),
		});
		assert_eq!(app.inventory.filenames(), ["new.pdf"]);
	}

	#[test]
	fn search_response_clamps_the_result_selection() {
		let mut app = app();
		submit(&mut app, "query");
		app.handle_backend_event(BackendEvent::Search {
			id: 1,
			outcome: Ok(vec![item("a.pdf", "text", 1)]),
		});
		assert_eq!(app.results.list_state.selected(), Some(0));

		submit(&mut app, "other");
		app.handle_backend_event(BackendEvent::Search {
			id: 2,
			outcome: Ok(Vec::new()),
		});
		assert_eq!(app.results.list_state.selected(), None);
	}
}
