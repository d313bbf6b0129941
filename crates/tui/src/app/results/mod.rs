//! Per-result UI state for the search view.

mod state;

pub(crate) use state::{
	ResultsPlaceholder, ResultsState, occurrences_label, placeholder, remaining_characters,
	truncated, visible,
};
