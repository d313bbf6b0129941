//! State management for the result list.
//!
//! Tracks which documents show their source panel and which show their full
//! snippet, both keyed by the document filename so toggles survive result
//! reordering within one query. Both sets reset whenever the submitted
//! query changes value.

use std::collections::HashSet;

use pdfsift_client::ResultItem;
use ratatui::widgets::ListState;

/// Maximum characters of a snippet shown before truncation applies.
pub(crate) const SNIPPET_LIMIT: usize = 1000;

/// Which placeholder the result area shows when no items render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResultsPlaceholder {
	/// No search has been performed yet.
	Prompt,
	/// A search is in flight.
	Scanning,
	/// The search completed and nothing is left to display.
	NoMatches,
}

/// Aggregate state for the result list and its per-document toggles.
pub(crate) struct ResultsState {
	/// Selection within the visible list.
	pub list_state: ListState,
	/// Documents currently showing their source-link panel.
	expanded: HashSet<String>,
	/// Documents currently showing their untruncated snippet.
	show_more: HashSet<String>,
}

impl Default for ResultsState {
	fn default() -> Self {
		let mut list_state = ListState::default();
		list_state.select(Some(0));
		Self {
			list_state,
			expanded: HashSet::new(),
			show_more: HashSet::new(),
		}
	}
}

impl ResultsState {
	/// Flip the source-panel toggle for `document`.
	pub(crate) fn toggle_expanded(&mut self, document: &str) {
		if !self.expanded.remove(document) {
			self.expanded.insert(document.to_string());
		}
	}

	/// Whether `document` is showing its source-link panel.
	pub(crate) fn is_expanded(&self, document: &str) -> bool {
		self.expanded.contains(document)
	}

	/// Flip the full-snippet toggle for `document`.
	pub(crate) fn toggle_show_more(&mut self, document: &str) {
		if !self.show_more.remove(document) {
			self.show_more.insert(document.to_string());
		}
	}

	/// Whether `document` is showing its untruncated snippet.
	pub(crate) fn shows_full_snippet(&self, document: &str) -> bool {
		self.show_more.contains(document)
	}

	/// Clear both toggle sets. Called exactly when the submitted query
	/// changes value.
	pub(crate) fn reset_toggles(&mut self) {
		self.expanded.clear();
		self.show_more.clear();
	}

	/// Keep the selection valid for a visible list of `len` items.
	pub(crate) fn ensure_selection(&mut self, len: usize) {
		if len == 0 {
			self.list_state.select(None);
		} else {
			match self.list_state.selected() {
				None => self.list_state.select(Some(0)),
				Some(selected) if selected >= len => {
					self.list_state.select(Some(len - 1));
				}
				Some(_) => {}
			}
		}
	}

	pub(crate) fn select_previous(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	pub(crate) fn select_next(&mut self, len: usize) {
		if let Some(selected) = self.list_state.selected()
			&& selected + 1 < len
		{
			self.list_state.select(Some(selected + 1));
		}
	}

	#[cfg(test)]
	pub(crate) fn toggle_count(&self) -> usize {
		self.expanded.len() + self.show_more.len()
	}
}

/// Result items that actually render: everything but sentinel snippets.
pub(crate) fn visible(results: &[ResultItem]) -> Vec<&ResultItem> {
	results.iter().filter(|item| item.has_snippet()).collect()
}

/// Classify the empty-state message, if any, for the current search state.
pub(crate) fn placeholder(
	loading: bool,
	results: Option<&[ResultItem]>,
) -> Option<ResultsPlaceholder> {
	if loading {
		return Some(ResultsPlaceholder::Scanning);
	}
	match results {
		None => Some(ResultsPlaceholder::Prompt),
		Some(items) if !items.iter().any(ResultItem::has_snippet) => {
			Some(ResultsPlaceholder::NoMatches)
		}
		Some(_) => None,
	}
}

/// Characters of `snippet` beyond the truncation limit.
pub(crate) fn remaining_characters(snippet: &str) -> usize {
	snippet.chars().count().saturating_sub(SNIPPET_LIMIT)
}

/// Longest prefix of `snippet` within the truncation limit.
pub(crate) fn truncated(snippet: &str) -> &str {
	match snippet.char_indices().nth(SNIPPET_LIMIT) {
		Some((index, _)) => &snippet[..index],
		None => snippet,
	}
}

/// Sources line text, singular exactly for a count of one.
pub(crate) fn occurrences_label(occurrences: u64) -> String {
	if occurrences == 1 {
		format!("Sources - {occurrences} occurrence in total")
	} else {
		format!("Sources - {occurrences} occurrences in total")
	}
}

#[cfg(test)]
mod tests {
	use pdfsift_client::MISSING_SNIPPET;

	use super::*;
	use crate::testing::item;

	#[test]
	fn sentinel_snippets_never_render() {
		let results = vec![
			item("a.pdf", "real excerpt", 2),
			item("b.pdf", MISSING_SNIPPET, 5),
			item("c.pdf", "another excerpt", 1),
		];
		let visible = visible(&results);
		assert_eq!(visible.len(), 2);
		assert!(visible.iter().all(|item| item.snippet != MISSING_SNIPPET));
	}

	#[test]
	fn toggles_flip_membership_per_document() {
		let mut state = ResultsState::default();
		state.toggle_expanded("a.pdf");
		assert!(state.is_expanded("a.pdf"));
		assert!(!state.is_expanded("b.pdf"));
		state.toggle_expanded("a.pdf");
		assert!(!state.is_expanded("a.pdf"));

		state.toggle_show_more("a.pdf");
		state.toggle_show_more("b.pdf");
		assert!(state.shows_full_snippet("a.pdf"));
		state.toggle_show_more("a.pdf");
		assert!(!state.shows_full_snippet("a.pdf"));
		assert!(state.shows_full_snippet("b.pdf"));
	}

	#[test]
	fn reset_clears_both_sets() {
		let mut state = ResultsState::default();
		state.toggle_expanded("a.pdf");
		state.toggle_show_more("b.pdf");
		state.reset_toggles();
		assert_eq!(state.toggle_count(), 0);
	}

	#[test]
	fn placeholder_distinguishes_the_three_empty_states() {
		// Nothing searched yet.
		assert_eq!(placeholder(false, None), Some(ResultsPlaceholder::Prompt));
		// In flight, with or without stale results behind it.
		assert_eq!(placeholder(true, None), Some(ResultsPlaceholder::Scanning));
		assert_eq!(
			placeholder(true, Some(&[item("a.pdf", "text", 1)])),
			Some(ResultsPlaceholder::Scanning)
		);
		// Completed with nothing to show, including sentinel-only lists.
		assert_eq!(placeholder(false, Some(&[])), Some(ResultsPlaceholder::NoMatches));
		assert_eq!(
			placeholder(false, Some(&[item("a.pdf", MISSING_SNIPPET, 1)])),
			Some(ResultsPlaceholder::NoMatches)
		);
		// Items render: no placeholder.
		assert_eq!(placeholder(false, Some(&[item("a.pdf", "text", 1)])), None);
	}

	#[test]
	fn truncation_counts_characters_not_bytes() {
		let snippet = "ä".repeat(1200);
		assert_eq!(remaining_characters(&snippet), 200);
		assert_eq!(truncated(&snippet).chars().count(), 1000);

		let short = "brief";
		assert_eq!(remaining_characters(short), 0);
		assert_eq!(truncated(short), short);

		let exact = "x".repeat(1000);
		assert_eq!(remaining_characters(&exact), 0);
		assert_eq!(truncated(&exact), exact);
	}

	#[test]
	fn occurrence_label_is_singular_only_for_one() {
		assert_eq!(occurrences_label(0), "Sources - 0 occurrences in total");
		assert_eq!(occurrences_label(1), "Sources - 1 occurrence in total");
		assert_eq!(occurrences_label(3), "Sources - 3 occurrences in total");
	}

	#[test]
	fn selection_stays_within_the_visible_list() {
		let mut state = ResultsState::default();
		state.ensure_selection(3);
		assert_eq!(state.list_state.selected(), Some(0));

		state.select_next(3);
		state.select_next(3);
		state.select_next(3);
		assert_eq!(state.list_state.selected(), Some(2));

		state.ensure_selection(1);
		assert_eq!(state.list_state.selected(), Some(0));

		state.ensure_selection(0);
		assert_eq!(state.list_state.selected(), None);

		state.ensure_selection(2);
		assert_eq!(state.list_state.selected(), Some(0));
		state.select_previous();
		assert_eq!(state.list_state.selected(), Some(0));
	}
}
