//! Tab bar for switching between the search and file views.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::style::Theme;

/// Render the tab bar, highlighting the tab at `active`.
pub(crate) fn render_tabs(frame: &mut Frame, area: Rect, labels: &[&str], active: usize, theme: &Theme) {
	let mut spans = Vec::new();
	for (index, label) in labels.iter().enumerate() {
		if index > 0 {
			spans.push(Span::styled(" │ ", theme.empty_style()));
		}
		let style = if index == active {
			theme.header
		} else {
			theme.empty_style()
		};
		spans.push(Span::styled((*label).to_string(), style));
	}

	frame.render_widget(Line::from(spans), area);
}
