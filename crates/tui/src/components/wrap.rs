use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Greedily wrap `spans` into lines at most `width` columns wide.
///
/// Breaks happen at character granularity so highlighted runs keep their
/// style across line boundaries, and no character is ever dropped. Callers
/// guard against a zero-width viewport.
pub(crate) fn wrap_spans(spans: &[Span<'_>], width: usize) -> Vec<Line<'static>> {
	if width == 0 {
		return Vec::new();
	}

	let mut lines = Vec::new();
	let mut current: Vec<Span<'static>> = Vec::new();
	let mut current_width = 0usize;

	for span in spans {
		let style = span.style;
		let mut chunk = String::new();
		for c in span.content.chars() {
			let char_width = c.width().unwrap_or(0);
			if current_width + char_width > width && current_width > 0 {
				if !chunk.is_empty() {
					current.push(Span::styled(std::mem::take(&mut chunk), style));
				}
				lines.push(Line::from(std::mem::take(&mut current)));
				current_width = 0;
			}
			chunk.push(c);
			current_width += char_width;
		}
		if !chunk.is_empty() {
			current.push(Span::styled(chunk, style));
		}
	}

	if !current.is_empty() {
		lines.push(Line::from(current));
	}

	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	fn flatten(lines: &[Line<'_>]) -> String {
		lines
			.iter()
			.flat_map(|line| line.spans.iter())
			.map(|span| span.content.clone().into_owned())
			.collect()
	}

	#[test]
	fn wrapping_preserves_every_character() {
		let spans = vec![Span::raw("the quick "), Span::raw("brown fox jumps")];
		let lines = wrap_spans(&spans, 8);
		assert_eq!(flatten(&lines), "the quick brown fox jumps");
		assert!(lines.iter().all(|line| line.width() <= 8));
	}

	#[test]
	fn styled_runs_keep_their_style_across_breaks() {
		let style = ratatui::style::Style::new().fg(ratatui::style::Color::Yellow);
		let spans = vec![Span::raw("aa"), Span::styled("bbbb", style)];
		let lines = wrap_spans(&spans, 4);
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[1].spans[0].style, style);
	}

	#[test]
	fn oversized_characters_still_make_progress() {
		// Double-width char in a single-column viewport.
		let spans = vec![Span::raw("漢字")];
		let lines = wrap_spans(&spans, 1);
		assert_eq!(flatten(&lines), "漢字");
	}

	#[test]
	fn zero_width_yields_no_lines() {
		assert!(wrap_spans(&[Span::raw("text")], 0).is_empty());
	}
}
