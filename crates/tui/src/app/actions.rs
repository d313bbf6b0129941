//! Keyboard handling for both views.

use std::path::Path;

use pdfsift_client::DocumentPayload;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, FilesFocus, View};

impl App<'_> {
	/// Process a keyboard event; returns `true` when the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		// Global bindings first.
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return true;
			}
			// Ctrl+Shift+F focuses the search form from anywhere; terminals
			// that fold Shift into the char report 'F', the rest send 'f'.
			KeyCode::Char('f' | 'F') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.view = View::Browser;
				return false;
			}
			KeyCode::Tab => {
				self.view = match self.view {
					View::Browser => View::Files,
					View::Files => View::Browser,
				};
				self.files_focus = FilesFocus::Filter;
				return false;
			}
			_ => {}
		}

		match self.view {
			View::Browser => self.handle_browser_key(key),
			View::Files => self.handle_files_key(key),
		}
	}

	fn handle_browser_key(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Esc => {
				if self.search.last_error().is_some() {
					self.search.dismiss_error();
					return false;
				}
				return true;
			}
			KeyCode::Enter => {
				self.submit_search();
			}
			KeyCode::Up => {
				self.results.select_previous();
			}
			KeyCode::Down => {
				let len = self.visible_results().len();
				self.results.select_next(len);
			}
			KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				if let Some(document) = self.selected_document() {
					self.results.toggle_expanded(&document);
				}
			}
			KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				if let Some(document) = self.selected_document() {
					self.results.toggle_show_more(&document);
				}
			}
			KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				if let Some(document) = self.selected_document() {
					self.open_document(&document);
				}
			}
			_ => {
				self.search_input.input(key);
			}
		}
		false
	}

	fn handle_files_key(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Esc => {
				if self.upload.last_error().is_some() || self.inventory.last_error().is_some() {
					self.upload.dismiss_error();
					self.inventory.dismiss_error();
					return false;
				}
				if self.files_focus == FilesFocus::Upload {
					self.files_focus = FilesFocus::Filter;
					return false;
				}
				return true;
			}
			KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.files_focus = FilesFocus::Upload;
				return false;
			}
			_ => {}
		}

		match self.files_focus {
			FilesFocus::Filter => match key.code {
				KeyCode::Up => {
					self.inventory.select_previous();
				}
				KeyCode::Down => {
					let len = self.filtered_filenames().len();
					self.inventory.select_next(len);
				}
				KeyCode::Enter => {
					if let Some(filename) = self.selected_filename() {
						self.open_document(&filename);
					}
				}
				_ => {
					if self.filter_input.input(key) {
						let len = self.filtered_filenames().len();
						self.inventory.ensure_selection(len);
					}
				}
			},
			FilesFocus::Upload => match key.code {
				KeyCode::Enter => {
					self.stage_upload();
				}
				_ => {
					self.upload_input.input(key);
				}
			},
		}
		false
	}

	/// Read the path in the upload input and hand it to the coordinator.
	fn stage_upload(&mut self) {
		// The control is disabled while an upload is pending.
		if self.upload.is_in_flight() {
			return;
		}

		let path = self.upload_input.text().trim().to_string();
		if path.is_empty() {
			return;
		}

		let payload = match DocumentPayload::from_path(Path::new(&path)) {
			Ok(payload) => payload,
			Err(err) => {
				tracing::warn!(error = %err, path, "could not read upload candidate");
				self.upload
					.record_selection_failure(format!("cannot read {path}: {err}"));
				return;
			}
		};

		match self.upload.select(payload) {
			Ok(true) => {
				self.upload_input.clear();
				self.files_focus = FilesFocus::Filter;
			}
			Ok(false) => {}
			Err(err) => {
				// Already surfaced in the upload area; log for the record.
				tracing::warn!(error = %err, "upload selection rejected");
			}
		}
	}

	/// Open the retrieval URL for `document` in the system browser.
	fn open_document(&self, document: &str) {
		let url = self.api.document_url(document);
		if let Err(err) = open::that_detached(&url) {
			tracing::warn!(error = %err, url, "could not open document");
		}
	}
}
