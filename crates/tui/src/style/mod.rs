//! Styling and theme configuration for the terminal UI.

mod theme;

pub use theme::{Theme, builtin_themes, default_theme};

/// Current style configuration for the application.
#[derive(Debug, Clone, Default)]
pub struct StyleConfig {
	/// Active color theme.
	pub theme: Theme,
}
