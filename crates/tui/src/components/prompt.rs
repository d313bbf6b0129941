//! Input row rendering with an optional right-aligned progress overlay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::input::SearchInput;
use crate::style::Theme;

/// Argument bundle for rendering an input row.
pub(crate) struct InputContext<'a> {
	/// The text input widget.
	pub input: &'a SearchInput<'a>,
	/// Rendering area, one row high.
	pub area: Rect,
}

/// Progress indicator drawn at the right edge of the input row.
pub(crate) struct ProgressContext<'a> {
	/// Text describing the pending operation.
	pub text: &'a str,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the input row, overlaying progress when an operation is pending.
pub(crate) fn render_input(
	frame: &mut Frame,
	input: InputContext<'_>,
	progress: Option<ProgressContext<'_>>,
) {
	input.input.render_textarea(frame, input.area);

	if let Some(progress) = progress {
		render_progress(frame, input.area, progress);
	}
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressContext<'_>) {
	if area.width == 0 || area.height == 0 || progress.text.is_empty() {
		return;
	}

	let muted = progress.theme.empty_style();
	let spinner = Throbber::default().style(muted).throbber_style(muted);
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(progress.throbber_state));
	line.spans.push(Span::styled(progress.text.to_string(), muted));

	let line_width = line.width() as u16;
	if line_width == 0 || line_width >= area.width {
		return;
	}

	let start_x = area.right().saturating_sub(line_width);
	frame
		.buffer_mut()
		.set_line(start_x, area.top(), &line, line_width);
}
