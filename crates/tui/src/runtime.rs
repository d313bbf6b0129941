//! Application runtime and event loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use pdfsift_client::DocumentApi;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::App;
use crate::config::UiLabels;
use crate::style::Theme;

/// Construct an [`App`] for the provided service client and run it until the
/// user exits.
pub fn run(api: Arc<dyn DocumentApi>, ui: UiLabels, theme: Theme) -> Result<()> {
	let mut app = App::new(api, ui);
	app.style.theme = theme;
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user exits.
	///
	/// Raw mode and the alternate screen are acquired here and released
	/// unconditionally before returning, errors included.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		let result = self.run_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn run_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result: Result<()> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
						if self.handle_key(key) {
							break 'event_loop Ok(());
						}
					}
					Ok(_) => {}
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			self.pump_backend_events();
			self.throbber_state.calc_next();

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		};

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
