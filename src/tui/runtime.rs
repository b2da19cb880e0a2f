//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::info;

use super::App;
use super::outcome::BrowseOutcome;
use crate::catalog::{CatalogClient, FetchRuntime, Selection};
use crate::tui::style::Theme;

/// Settings for one interactive session.
#[derive(Debug, Clone)]
pub struct BrowseOptions {
	/// Search text and filters to start from.
	pub selection: Selection,
	pub theme: Theme,
	/// `None` opens the detail pane on wide terminals only.
	pub detail_pane: Option<bool>,
	/// Number of background fetch workers.
	pub workers: usize,
}

impl Default for BrowseOptions {
	fn default() -> Self {
		Self {
			selection: Selection::default(),
			theme: Theme::default(),
			detail_pane: None,
			workers: 4,
		}
	}
}

/// Construct an [`App`] against `client` and run it to completion.
pub fn run(client: CatalogClient, options: BrowseOptions) -> Result<BrowseOutcome> {
	let fetch = FetchRuntime::start(client, options.workers);
	let mut app = App::new(fetch, options.selection);
	app.set_theme(options.theme);
	if let Some(enabled) = options.detail_pane {
		app.set_detail_pane(enabled);
	}
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<BrowseOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let initial_size = terminal.size()?;
		self.update_detail_responsive(initial_size.width);

		self.mount();

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

		let mut pending_events = VecDeque::new();

		let result: Result<BrowseOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(width, _)) => {
						self.update_detail_responsive(width);
					}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key)? {
							maybe_outcome = Some(outcome);
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			self.pump_fetch_results();
			self.throbber_state.calc_next();

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(outcome) = &result {
			info!(shown = outcome.shown, "browser closed");
		}
		result
	}
}
