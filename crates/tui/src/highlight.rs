//! Query-term highlighting over snippet text.
//!
//! A [`Highlighter`] compiles the submitted query into literal search terms
//! and splits arbitrary text into match and non-match runs. Segments borrow
//! from the input, and concatenating them in order reproduces the input
//! byte-for-byte, so rendering can never drop or duplicate snippet text.

use ratatui::style::Style;
use ratatui::text::Span;

/// One run of text, either matching a query term or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
	/// Slice of the original text covered by this run.
	pub text: &'a str,
	/// Whether the run matched a query term.
	pub is_match: bool,
}

/// Compiled query terms for repeated highlighting.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
	/// Lowercased, non-empty terms from the submitted query.
	terms: Vec<String>,
}

impl Highlighter {
	/// Split `query` on whitespace into literal terms, discarding empties.
	#[must_use]
	pub fn new(query: &str) -> Self {
		let terms = query.split_whitespace().map(str::to_lowercase).collect();
		Self { terms }
	}

	/// Whether the query produced no terms at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	/// Lazily split `text` into match and non-match runs.
	///
	/// The scan is leftmost-greedy-longest: at each position every term is
	/// tried case-insensitively, the longest match wins, and matched spans
	/// never overlap. With no terms the whole text comes back as one plain
	/// segment. The iterator is restartable; each call scans afresh.
	#[must_use]
	pub fn segments<'a>(&'a self, text: &'a str) -> Segments<'a> {
		Segments {
			highlighter: self,
			text,
			pos: 0,
			pending_match: None,
		}
	}

	/// Byte length of the longest term matching at byte offset `pos`.
	fn match_len_at(&self, text: &str, pos: usize) -> Option<usize> {
		self.terms
			.iter()
			.filter_map(|term| match_len(&text[pos..], term))
			.max()
	}
}

/// Byte length of the prefix of `haystack` that matches `term`
/// case-insensitively, if any. `term` is already lowercase; the haystack is
/// folded character by character, so the returned length always lands on a
/// char boundary of the original text.
fn match_len(haystack: &str, term: &str) -> Option<usize> {
	let mut rest = term;
	let mut len = 0;
	for c in haystack.chars() {
		if rest.is_empty() {
			break;
		}
		for folded in c.to_lowercase() {
			if !rest.starts_with(folded) {
				return None;
			}
			rest = &rest[folded.len_utf8()..];
		}
		len += c.len_utf8();
	}
	rest.is_empty().then_some(len)
}

/// Lazy segment iterator returned by [`Highlighter::segments`].
pub struct Segments<'a> {
	highlighter: &'a Highlighter,
	text: &'a str,
	pos: usize,
	/// Match found while scanning a plain run, emitted on the next call.
	pending_match: Option<(usize, usize)>,
}

impl<'a> Iterator for Segments<'a> {
	type Item = Segment<'a>;

	fn next(&mut self) -> Option<Segment<'a>> {
		if self.pos >= self.text.len() {
			return None;
		}

		if let Some((start, len)) = self.pending_match
			&& start == self.pos
		{
			self.pending_match = None;
			self.pos = start + len;
			return Some(Segment {
				text: &self.text[start..self.pos],
				is_match: true,
			});
		}

		if let Some(len) = self.highlighter.match_len_at(self.text, self.pos) {
			let start = self.pos;
			self.pos += len;
			return Some(Segment {
				text: &self.text[start..self.pos],
				is_match: true,
			});
		}

		// Extend the plain run up to the next match or the end of text.
		let start = self.pos;
		let mut end = self.text.len();
		let mut offsets = self.text[start..].char_indices();
		offsets.next();
		for (offset, _) in offsets {
			let at = start + offset;
			if let Some(len) = self.highlighter.match_len_at(self.text, at) {
				self.pending_match = Some((at, len));
				end = at;
				break;
			}
		}
		self.pos = end;
		Some(Segment {
			text: &self.text[start..end],
			is_match: false,
		})
	}
}

/// Render `text` as spans, styling the runs that match a query term.
#[must_use]
pub fn highlight_spans<'a>(
	text: &'a str,
	highlighter: &'a Highlighter,
	match_style: Style,
) -> Vec<Span<'a>> {
	highlighter
		.segments(text)
		.map(|segment| {
			if segment.is_match {
				Span::styled(segment.text, match_style)
			} else {
				Span::raw(segment.text)
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn concat(segments: Segments<'_>) -> String {
		segments.map(|segment| segment.text.to_string()).collect()
	}

	fn matches<'a>(highlighter: &'a Highlighter, text: &'a str) -> Vec<&'a str> {
		highlighter
			.segments(text)
			.filter(|segment| segment.is_match)
			.map(|segment| segment.text)
			.collect()
	}

	#[test]
	fn concatenation_reproduces_the_input() {
		let texts = [
			"the quick brown fox",
			"Foo at the start",
			"ends with foo",
			"foofoofoo",
			"no terms here at all",
			"ünïcode Straße ss",
			"",
		];
		let highlighter = Highlighter::new("foo straße the");
		for text in texts {
			assert_eq!(concat(highlighter.segments(text)), text);
		}
	}

	#[test]
	fn empty_query_yields_one_plain_segment() {
		for query in ["", "   ", "\t\n"] {
			let highlighter = Highlighter::new(query);
			let segments: Vec<_> = highlighter.segments("some result text").collect();
			assert_eq!(segments.len(), 1);
			assert!(!segments[0].is_match);
			assert_eq!(segments[0].text, "some result text");
		}
	}

	#[test]
	fn matching_is_case_insensitive() {
		let highlighter = Highlighter::new("Neural");
		assert_eq!(matches(&highlighter, "NEURAL networks, neural nets"), vec![
			"NEURAL", "neural"
		]);
	}

	#[test]
	fn longest_term_wins_at_the_same_position() {
		let highlighter = Highlighter::new("net networks");
		assert_eq!(matches(&highlighter, "neural networks"), vec!["networks"]);
	}

	#[test]
	fn matches_never_overlap() {
		let highlighter = Highlighter::new("aba");
		// Leftmost-greedy: "aba" consumed, scan resumes after it.
		let segments: Vec<_> = highlighter.segments("ababa").collect();
		assert_eq!(segments.len(), 2);
		assert_eq!(segments[0].text, "aba");
		assert!(segments[0].is_match);
		assert_eq!(segments[1].text, "ba");
		assert!(!segments[1].is_match);
	}

	#[test]
	fn query_characters_are_literal_not_patterns() {
		let highlighter = Highlighter::new(".* [a]");
		assert_eq!(matches(&highlighter, "match .* and [a] literally"), vec![
			".*", "[a]"
		]);
		assert!(matches(&highlighter, "xx and a alone").is_empty());
	}

	#[test]
	fn adjacent_terms_produce_back_to_back_match_segments() {
		let highlighter = Highlighter::new("ab cd");
		let segments: Vec<_> = highlighter.segments("abcd").collect();
		assert_eq!(segments.len(), 2);
		assert!(segments.iter().all(|segment| segment.is_match));
	}

	#[test]
	fn iterator_is_restartable() {
		let highlighter = Highlighter::new("fox");
		let first: Vec<_> = highlighter.segments("the fox jumps").collect();
		let second: Vec<_> = highlighter.segments("the fox jumps").collect();
		assert_eq!(first, second);
	}

	#[test]
	fn multibyte_text_keeps_char_boundaries() {
		let highlighter = Highlighter::new("straße");
		let segments: Vec<_> = highlighter.segments("in der STRASSE wohnen").collect();
		// "STRASSE" folds to "strasse", which is not byte-equal to "straße";
		// the scan must not panic or split a multibyte char either way.
		assert_eq!(concat(highlighter.segments("in der STRASSE wohnen")), "in der STRASSE wohnen");
		assert!(segments.iter().all(|segment| !segment.text.is_empty()));
	}

	#[test]
	fn highlight_spans_mark_only_matches() {
		let highlighter = Highlighter::new("fox");
		let style = Style::default();
		let spans = highlight_spans("the fox", &highlighter, style);
		assert_eq!(spans.len(), 2);
		assert_eq!(spans[1].content, "fox");
	}
}
