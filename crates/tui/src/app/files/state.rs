//! Inventory state and the pure filename filter.
//!
//! The inventory is owned here and only ever replaced wholesale from a list
//! response; uploads never patch it locally. List responses carry request
//! ids like every other backend call.

use std::sync::mpsc::Sender;

use pdfsift_client::ClientError;
use ratatui::widgets::ListState;

use crate::worker::BackendCommand;

/// Which placeholder the file list shows when no rows render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InventoryPlaceholder {
	/// Nothing has been uploaded yet.
	Empty,
	/// The filter matches no files.
	NoMatches,
}

/// State for the file inventory and its list selection.
pub(crate) struct InventoryState {
	tx: Sender<BackendCommand>,
	next_request_id: u64,
	current_request_id: Option<u64>,
	filenames: Vec<String>,
	/// Selection within the filtered list.
	pub list_state: ListState,
	last_error: Option<String>,
}

impl InventoryState {
	pub(crate) fn new(tx: Sender<BackendCommand>) -> Self {
		Self {
			tx,
			next_request_id: 0,
			current_request_id: None,
			filenames: Vec::new(),
			list_state: ListState::default(),
			last_error: None,
		}
	}

	/// Ask the worker for a fresh inventory listing.
	pub(crate) fn request_refresh(&mut self) {
		self.next_request_id += 1;
		let id = self.next_request_id;
		self.current_request_id = Some(id);
		let _ = self.tx.send(BackendCommand::ListDocuments { id });
	}

	/// Whether `id` belongs to the most recently requested listing.
	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		Some(id) == self.current_request_id
	}

	/// Apply a finished listing. Callers must have filtered stale ids.
	pub(crate) fn record_outcome(&mut self, outcome: Result<Vec<String>, ClientError>) {
		match outcome {
			Ok(filenames) => {
				self.filenames = filenames;
			}
			Err(err) => {
				tracing::warn!(error = %err, "inventory listing failed");
				self.last_error = Some(err.to_string());
			}
		}
	}

	/// Every known filename, in service order.
	pub(crate) fn filenames(&self) -> &[String] {
		&self.filenames
	}

	pub(crate) fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	pub(crate) fn dismiss_error(&mut self) {
		self.last_error = None;
	}

	/// Keep the selection valid for a filtered list of `len` items.
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
}

/// Filter `filenames` to those containing `needle` case-insensitively,
/// preserving input order. An empty needle keeps the input unchanged.
pub(crate) fn filter_inventory<'a>(filenames: &'a [String], needle: &str) -> Vec<&'a str> {
	if needle.is_empty() {
		return filenames.iter().map(String::as_str).collect();
	}
	let needle = needle.to_lowercase();
	filenames
		.iter()
		.map(String::as_str)
		.filter(|name| name.to_lowercase().contains(&needle))
		.collect()
}

/// Classify the file-list placeholder, if any.
pub(crate) fn placeholder(
	filenames: &[String],
	needle: &str,
	matches: usize,
) -> Option<InventoryPlaceholder> {
	if filenames.is_empty() && needle.is_empty() {
		Some(InventoryPlaceholder::Empty)
	} else if matches == 0 {
		Some(InventoryPlaceholder::NoMatches)
	} else {
		None
	}
}
