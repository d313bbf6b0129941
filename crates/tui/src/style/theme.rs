use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the UI elements this client renders.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for the tab bar and section titles.
	pub header: Style,
	/// Style for the selected list row.
	pub row_highlight: Style,
	/// Style for dim placeholder and hint text.
	pub empty: Style,
	/// Style applied to query-term matches inside snippets.
	pub highlight: Style,
	/// Style for document retrieval links.
	pub link: Style,
	/// Style for dismissible error lines.
	pub error: Style,
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

impl Theme {
	/// Style for dim placeholder text.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Style for query-term matches.
	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}
}

/// Theme used when nothing is configured.
#[must_use]
pub fn default_theme() -> Theme {
	Theme {
		header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().bg(Color::DarkGray),
		empty: Style::new().fg(Color::DarkGray),
		highlight: Style::new()
			.fg(Color::Yellow)
			.add_modifier(Modifier::BOLD),
		link: Style::new()
			.fg(Color::Blue)
			.add_modifier(Modifier::UNDERLINED),
		error: Style::new().fg(Color::Red),
	}
}

/// Monochrome theme for terminals without reliable color support.
fn plain_theme() -> Theme {
	Theme {
		header: Style::new().add_modifier(Modifier::BOLD),
		row_highlight: Style::new().add_modifier(Modifier::REVERSED),
		empty: Style::new().add_modifier(Modifier::DIM),
		highlight: Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
		link: Style::new().add_modifier(Modifier::UNDERLINED),
		error: Style::new().add_modifier(Modifier::BOLD),
	}
}

/// All built-in themes, addressable by name.
#[must_use]
pub fn builtin_themes() -> Vec<(&'static str, Theme)> {
	vec![("default", default_theme()), ("plain", plain_theme())]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_themes_include_the_default() {
		let themes = builtin_themes();
		assert!(themes.iter().any(|(name, _)| *name == "default"));
	}
}
