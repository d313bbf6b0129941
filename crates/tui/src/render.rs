//! Frame rendering for both views.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, Paragraph};

use crate::app::files::{InventoryPlaceholder, placeholder as files_placeholder};
use crate::app::results::{ResultsPlaceholder, placeholder as results_placeholder};
use crate::app::{App, FilesFocus, View};
use crate::components::filelist::build_file_items;
use crate::components::results::build_result_items;
use crate::components::tabs::render_tabs;
use crate::components::{InputContext, ProgressContext, render_input};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(area);

		let tabs = [self.ui.browser_tab.clone(), self.ui.files_tab.clone()];
		let labels: Vec<&str> = tabs.iter().map(String::as_str).collect();
		let active = match self.view {
			View::Browser => 0,
			View::Files => 1,
		};
		render_tabs(frame, layout[0], &labels, active, &self.style.theme);

		match self.view {
			View::Browser => self.render_browser(frame, layout[1]),
			View::Files => self.render_files(frame, layout[1]),
		}
	}

	fn render_browser(&mut self, frame: &mut Frame, area: Rect) {
		let error = self.search.last_error().map(ToString::to_string);
		let mut constraints = vec![Constraint::Length(1)];
		if error.is_some() {
			constraints.push(Constraint::Length(1));
		}
		constraints.push(Constraint::Min(1));
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints(constraints)
			.split(area);

		self.search_input.set_focused(true);
		let progress = self.search.is_loading().then(|| ProgressContext {
			text: &self.ui.scanning,
			throbber_state: &self.throbber_state,
			theme: &self.style.theme,
		});
		render_input(
			frame,
			InputContext {
				input: &self.search_input,
				area: rows[0],
			},
			progress,
		);

		let mut next_row = 1;
		if let Some(error) = error {
			self.render_error_line(frame, rows[next_row], &error);
			next_row += 1;
		}
		let results_area = rows[next_row];

		if let Some(placeholder) =
			results_placeholder(self.search.is_loading(), self.search.results())
		{
			let message = match placeholder {
				ResultsPlaceholder::Prompt => &self.ui.prompt_empty,
				ResultsPlaceholder::Scanning => &self.ui.scanning,
				ResultsPlaceholder::NoMatches => &self.ui.no_results,
			};
			self.render_placeholder(frame, results_area, message);
			return;
		}

		let width = results_area.width.saturating_sub(2) as usize;
		let items = {
			let visible = self.visible_results();
			build_result_items(
				&visible,
				&self.results,
				&self.highlighter,
				self.api.as_ref(),
				&self.style.theme,
				width,
			)
		};

		let list = List::new(items)
			.highlight_style(self.style.theme.row_highlight)
			.highlight_symbol("▶ ");
		frame.render_stateful_widget(list, results_area, &mut self.results.list_state);
	}

	fn render_files(&mut self, frame: &mut Frame, area: Rect) {
		let error = self
			.upload
			.last_error()
			.or(self.inventory.last_error())
			.map(ToString::to_string);
		let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
		if error.is_some() {
			constraints.push(Constraint::Length(1));
		}
		constraints.push(Constraint::Min(1));
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints(constraints)
			.split(area);

		self.filter_input
			.set_focused(self.files_focus == FilesFocus::Filter);
		self.upload_input
			.set_focused(self.files_focus == FilesFocus::Upload);

		render_input(
			frame,
			InputContext {
				input: &self.filter_input,
				area: rows[0],
			},
			None,
		);

		let upload_progress = self.upload.is_in_flight().then(|| ProgressContext {
			text: &self.ui.uploading,
			throbber_state: &self.throbber_state,
			theme: &self.style.theme,
		});
		let show_hint =
			upload_progress.is_none() && self.files_focus == FilesFocus::Filter;
		render_input(
			frame,
			InputContext {
				input: &self.upload_input,
				area: rows[1],
			},
			upload_progress,
		);
		if show_hint {
			let hint = Line::from(Span::styled(
				self.ui.upload_hint.clone(),
				self.style.theme.empty_style(),
			));
			let hint_width = (hint.width() as u16).min(rows[1].width);
			if hint_width > 0 && hint_width < rows[1].width {
				let x = rows[1].right().saturating_sub(hint_width);
				frame.buffer_mut().set_line(x, rows[1].top(), &hint, hint_width);
			}
		}

		let mut next_row = 2;
		if let Some(error) = error {
			self.render_error_line(frame, rows[next_row], &error);
			next_row += 1;
		}
		let list_area = rows[next_row];

		let filtered = self.filtered_filenames();
		let matches = filtered.len();
		if let Some(placeholder) =
			files_placeholder(self.inventory.filenames(), self.filter_input.text(), matches)
		{
			let message = match placeholder {
				InventoryPlaceholder::Empty => self.ui.files_empty.clone(),
				InventoryPlaceholder::NoMatches => self.ui.files_no_match.clone(),
			};
			self.render_placeholder(frame, list_area, &message);
			return;
		}

		let width = list_area.width.saturating_sub(2) as usize;
		let items = build_file_items(&filtered, &self.style.theme, width);
		drop(filtered);

		let list = List::new(items)
			.highlight_style(self.style.theme.row_highlight)
			.highlight_symbol("▶ ");
		frame.render_stateful_widget(list, list_area, &mut self.inventory.list_state);
	}

	fn render_placeholder(&self, frame: &mut Frame, area: Rect, message: &str) {
		if area.height == 0 {
			return;
		}
		// Drop the message a little below the input, like a hero banner.
		let mut target = area;
		let offset = (area.height / 3).min(area.height.saturating_sub(1));
		target.y += offset;
		target.height -= offset;

		let paragraph = Paragraph::new(message.to_string())
			.style(self.style.theme.empty_style())
			.alignment(Alignment::Center);
		frame.render_widget(paragraph, target);
	}

	fn render_error_line(&self, frame: &mut Frame, area: Rect, error: &str) {
		let line = Line::from(vec![
			Span::styled(error.to_string(), self.style.theme.error),
			Span::styled("  Esc dismisses", self.style.theme.empty_style()),
		]);
		frame.render_widget(Paragraph::new(line), area);
	}
}
