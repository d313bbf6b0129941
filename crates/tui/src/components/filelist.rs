//! Row construction for the file-browser list.

use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Theme;

/// Build one-line items for the filtered inventory, truncating names that
/// exceed the viewport width.
pub(crate) fn build_file_items(
	filenames: &[&str],
	theme: &Theme,
	width: usize,
) -> Vec<ListItem<'static>> {
	filenames
		.iter()
		.map(|name| {
			let display = if width > 1 && name.width() > width {
				let truncated: String = name
					.chars()
					.scan(0usize, |used, c| {
						*used += c.width().unwrap_or(0).max(1);
						(*used < width).then_some(c)
					})
					.collect();
				format!("{truncated}…")
			} else {
				(*name).to_string()
			};
			ListItem::new(Line::from(Span::styled(display, theme.link)))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_one_item_per_filename() {
		let theme = Theme::default();
		let items = build_file_items(&["a.pdf", "b.pdf"], &theme, 40);
		assert_eq!(items.len(), 2);
	}
}
