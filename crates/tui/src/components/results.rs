//! Row construction for the search-result list.
//!
//! Each visible result renders as a block of lines: a numbered title, the
//! (possibly truncated) snippet with query terms highlighted, a show-more
//! control when truncation applies, the sources line, and — when expanded —
//! the retrieval link for the document.

use pdfsift_client::{DocumentApi, ResultItem};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::ListItem;

use super::wrap_spans;
use crate::app::results::{
	ResultsState, occurrences_label, remaining_characters, truncated,
};
use crate::highlight::{Highlighter, highlight_spans};
use crate::style::Theme;

/// Build the lines for one visible result.
pub(crate) fn result_lines(
	item: &ResultItem,
	index: usize,
	state: &ResultsState,
	highlighter: &Highlighter,
	api: &dyn DocumentApi,
	theme: &Theme,
	width: usize,
) -> Vec<Line<'static>> {
	let mut lines = Vec::new();

	lines.push(Line::from(Span::styled(
		format!("Result - {}", index + 1),
		theme.header,
	)));

	let show_full = state.shows_full_snippet(&item.document);
	let remaining = remaining_characters(&item.snippet);
	let snippet = if show_full {
		item.snippet.as_str()
	} else {
		truncated(&item.snippet)
	};

	let mut snippet_spans = highlight_spans(snippet, highlighter, theme.highlight_style());
	if !show_full && remaining > 0 {
		snippet_spans.push(Span::raw(" ... "));
	}
	lines.extend(wrap_spans(&snippet_spans, width));

	if remaining > 0 {
		let control = if show_full {
			"Show less".to_string()
		} else {
			format!("Show {remaining} more characters")
		};
		lines.push(Line::from(vec![
			Span::styled(control, theme.link),
			Span::styled("  Ctrl+R", theme.empty_style()),
		]));
	}

	let expanded = state.is_expanded(&item.document);
	let arrow = if expanded { "▼ " } else { "▶ " };
	lines.push(Line::from(vec![
		Span::styled(arrow.to_string(), theme.empty_style()),
		Span::styled(occurrences_label(item.occurrences), theme.empty_style()),
		Span::styled("  Ctrl+E", theme.empty_style()),
	]));

	if expanded {
		lines.push(Line::from(vec![
			Span::styled(format!("  {} → ", item.document), theme.empty_style()),
			Span::styled(api.document_url(&item.document), theme.link),
			Span::styled("  Ctrl+O opens", theme.empty_style()),
		]));
	}

	lines.push(Line::default());
	lines
}

/// Build list items for every visible result.
pub(crate) fn build_result_items(
	visible: &[&ResultItem],
	state: &ResultsState,
	highlighter: &Highlighter,
	api: &dyn DocumentApi,
	theme: &Theme,
	width: usize,
) -> Vec<ListItem<'static>> {
	visible
		.iter()
		.enumerate()
		.map(|(index, item)| {
			ListItem::new(Text::from(result_lines(
				item,
				index,
				state,
				highlighter,
				api,
				theme,
				width,
			)))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{FakeApi, item};

	fn flatten(lines: &[Line<'_>]) -> String {
		lines
			.iter()
			.flat_map(|line| line.spans.iter())
			.map(|span| span.content.clone().into_owned())
			.collect::<Vec<_>>()
			.join("")
	}

	fn render(result: &ResultItem, state: &ResultsState) -> String {
		let highlighter = Highlighter::new("");
		let api = FakeApi::default();
		let theme = Theme::default();
		flatten(&result_lines(
			result,
			0,
			state,
			&highlighter,
			&api,
			&theme,
			80,
		))
	}

	#[test]
	fn long_snippets_truncate_with_an_exact_remaining_count() {
		let result = item("big.pdf", &"x".repeat(1200), 2);
		let state = ResultsState::default();
		let rendered = render(&result, &state);

		assert!(rendered.contains("Show 200 more characters"));
		assert!(rendered.contains(" ... "));
		let shown: usize = rendered.matches('x').count();
		assert_eq!(shown, 1000);
	}

	#[test]
	fn toggled_results_render_the_full_snippet_with_a_collapse_control() {
		let result = item("big.pdf", &"x".repeat(1200), 2);
		let mut state = ResultsState::default();
		state.toggle_show_more("big.pdf");
		let rendered = render(&result, &state);

		assert!(rendered.contains("Show less"));
		assert!(!rendered.contains(" ... "));
		assert_eq!(rendered.matches('x').count(), 1200);
	}

	#[test]
	fn short_snippets_render_without_any_control() {
		let result = item("small.pdf", "short snippet", 1);
		let rendered = render(&result, &ResultsState::default());
		assert!(!rendered.contains("Show "));
		assert!(rendered.contains("short snippet"));
		assert!(rendered.contains("Sources - 1 occurrence in total"));
	}

	#[test]
	fn expanding_reveals_the_retrieval_link() {
		let result = item("paper.pdf", "text", 3);
		let mut state = ResultsState::default();
		state.toggle_expanded("paper.pdf");
		let rendered = render(&result, &state);
		assert!(rendered.contains("http://service.test/get-pdf/paper.pdf"));
		assert!(rendered.contains("Sources - 3 occurrences in total"));
	}
}
