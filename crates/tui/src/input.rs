//! Single-line text inputs backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Thin wrapper keeping a [`TextArea`] single-line and cursor-managed.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	/// Construct an input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: String) -> Self {
		let mut textarea = TextArea::new(vec![initial]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current input text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Placeholder shown while the input is empty.
	pub fn set_placeholder(&mut self, text: impl Into<String>) {
		self.textarea.set_placeholder_text(text);
	}

	/// Show or hide the cursor depending on focus.
	pub fn set_focused(&mut self, focused: bool) {
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
	}

	/// Feed a key event into the input; returns `true` if the text changed.
	///
	/// Enter is rejected so the input stays single-line; submission is a
	/// concern of the key handler, not the widget.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		use ratatui::crossterm::event::KeyCode;
		if key.code == KeyCode::Enter {
			return false;
		}
		self.textarea.input(key)
	}

	/// Erase the input contents.
	pub fn clear(&mut self) {
		self.textarea.select_all();
		self.textarea.cut();
	}

	/// Render the underlying textarea into `area`.
	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
