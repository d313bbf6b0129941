//! Aggregate state shared across the terminal UI.
//!
//! The [`App`] bundles the per-view state objects (search, results,
//! inventory, upload), the text inputs, and the channels to the backend
//! worker. Each view owns its state exclusively; the worker channels are
//! the only cross-cutting pieces.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

use pdfsift_client::{DocumentApi, ResultItem};
use throbber_widgets_tui::ThrobberState;

use super::files::{InventoryState, UploadRuntime, filter_inventory};
use super::results::{self, ResultsState};
use super::search::SearchRuntime;
use crate::config::UiLabels;
use crate::highlight::Highlighter;
use crate::input::SearchInput;
use crate::style::StyleConfig;
use crate::worker::{self, BackendCommand, BackendEvent};

/// Which of the two views is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
	/// Search form and result list.
	Browser,
	/// File inventory and upload controls.
	Files,
}

/// Which input owns keystrokes within the files view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilesFocus {
	Filter,
	Upload,
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		let _ = self.commands.send(BackendCommand::Shutdown);
	}
}

/// Aggregate state for the terminal UI.
pub struct App<'a> {
	/// Query input on the search view.
	pub(crate) search_input: SearchInput<'a>,
	/// Filename filter input on the files view.
	pub(crate) filter_input: SearchInput<'a>,
	/// Upload path input on the files view.
	pub(crate) upload_input: SearchInput<'a>,
	pub(crate) view: View,
	pub(crate) files_focus: FilesFocus,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	/// Compiled terms of the submitted query, rebuilt on each submit.
	pub(crate) highlighter: Highlighter,
	pub(crate) search: SearchRuntime,
	pub(crate) results: ResultsState,
	pub(crate) inventory: InventoryState,
	pub(crate) upload: UploadRuntime,
	pub(crate) api: Arc<dyn DocumentApi>,
	pub(crate) commands: Sender<BackendCommand>,
	pub(crate) events: Receiver<BackendEvent>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] talking to `api` through a fresh worker thread.
	pub fn new(api: Arc<dyn DocumentApi>, ui: UiLabels) -> Self {
		let (commands, events) = worker::spawn(Arc::clone(&api));

		let mut search_input = SearchInput::new(String::new());
		search_input.set_placeholder(ui.search_placeholder.clone());
		let mut filter_input = SearchInput::new(String::new());
		filter_input.set_placeholder(ui.filter_placeholder.clone());
		let mut upload_input = SearchInput::new(String::new());
		upload_input.set_placeholder(ui.upload_placeholder.clone());

		let search = SearchRuntime::new(commands.clone());
		let results = ResultsState::default();
		let mut inventory = InventoryState::new(commands.clone());
		let upload = UploadRuntime::new(commands.clone());

		// The file browser shows the known corpus from the start.
		inventory.request_refresh();

		Self {
			search_input,
			filter_input,
			upload_input,
			view: View::Browser,
			files_focus: FilesFocus::Filter,
			ui,
			style: StyleConfig::default(),
			throbber_state: ThrobberState::default(),
			highlighter: Highlighter::default(),
			search,
			results,
			inventory,
			upload,
			api,
			commands,
			events,
		}
	}

	/// Result items that render for the current search, sentinel excluded.
	pub(crate) fn visible_results(&self) -> Vec<&ResultItem> {
		self.search
			.results()
			.map(results::visible)
			.unwrap_or_default()
	}

	/// Filenames passing the current filter input, in inventory order.
	pub(crate) fn filtered_filenames(&self) -> Vec<&str> {
		filter_inventory(self.inventory.filenames(), self.filter_input.text())
	}

	/// Document key of the selected visible result.
	pub(crate) fn selected_document(&self) -> Option<String> {
		let visible = self.visible_results();
		let selected = self.results.list_state.selected()?;
		visible.get(selected).map(|item| item.document.clone())
	}

	/// Filename selected in the filtered file list.
	pub(crate) fn selected_filename(&self) -> Option<String> {
		let filtered = self.filtered_filenames();
		let selected = self.inventory.list_state.selected()?;
		filtered.get(selected).map(ToString::to_string)
	}
}
