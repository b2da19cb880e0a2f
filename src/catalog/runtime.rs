//! Background fetch workers and their command infrastructure.
//!
//! The UI thread sends [`FetchCommand`]s; a fixed pool of worker threads runs
//! them against the [`CatalogClient`] and returns [`FetchCompletion`]s on a
//! single channel, which the UI drains and applies in order of arrival.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;

use tracing::{debug, error, trace};

use super::api::{CatalogClient, FetchError};
use super::view::{FetchCompletion, FetchRequest};

/// Commands understood by the fetch workers.
#[derive(Debug)]
pub enum FetchCommand {
	/// Perform a request and report its completion.
	Fetch(FetchRequest),
	/// Stop the receiving worker thread.
	Shutdown,
}

/// Launch `workers` fetch threads and return the communication channels.
pub fn spawn(
	client: CatalogClient,
	workers: usize,
) -> (Sender<FetchCommand>, Receiver<FetchCompletion>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (completion_tx, completion_rx) = mpsc::channel();
	let command_rx = Arc::new(Mutex::new(command_rx));

	for index in 0..workers.max(1) {
		let client = client.clone();
		let command_rx = Arc::clone(&command_rx);
		let completion_tx = completion_tx.clone();
		let spawned = thread::Builder::new()
			.name(format!("catalog-fetch-{index}"))
			.spawn(move || worker_loop(&client, &command_rx, &completion_tx));
		if let Err(err) = spawned {
			error!(error = %err, "failed to spawn fetch worker");
		}
	}

	(command_tx, completion_rx)
}

fn worker_loop(
	client: &CatalogClient,
	command_rx: &Mutex<Receiver<FetchCommand>>,
	completion_tx: &Sender<FetchCompletion>,
) {
	loop {
		let command = {
			let Ok(receiver) = command_rx.lock() else {
				break;
			};
			match receiver.recv() {
				Ok(command) => command,
				Err(_) => break,
			}
		};

		match command {
			FetchCommand::Fetch(request) => {
				trace!(seq = request.seq, facet = %request.facet(), "fetching");
				let completion = request.execute(client);
				if completion_tx.send(completion).is_err() {
					break;
				}
			}
			FetchCommand::Shutdown => break,
		}
	}
	debug!("fetch worker stopped");
}

/// Owner-side handle on the worker pool.
pub struct FetchRuntime {
	tx: Sender<FetchCommand>,
	rx: Receiver<FetchCompletion>,
	workers: usize,
	in_flight: usize,
	/// Failures for requests no worker could take, delivered before the channel.
	undelivered: VecDeque<FetchCompletion>,
}

impl FetchRuntime {
	/// Spawn a worker pool for `client`.
	pub fn start(client: CatalogClient, workers: usize) -> Self {
		let workers = workers.max(1);
		let (tx, rx) = spawn(client, workers);
		Self::new(tx, rx, workers)
	}

	/// Wrap existing channels.
	pub fn new(tx: Sender<FetchCommand>, rx: Receiver<FetchCompletion>, workers: usize) -> Self {
		Self {
			tx,
			rx,
			workers,
			in_flight: 0,
			undelivered: VecDeque::new(),
		}
	}

	/// Queue requests for the workers.
	///
	/// Every request yields exactly one completion. When no worker is left to
	/// receive it, the request completes at once as a transport failure.
	pub fn submit(&mut self, requests: impl IntoIterator<Item = FetchRequest>) {
		for request in requests {
			self.in_flight += 1;
			if let Err(mpsc::SendError(command)) = self.tx.send(FetchCommand::Fetch(request)) {
				let FetchCommand::Fetch(request) = command else {
					continue;
				};
				error!(seq = request.seq, facet = %request.facet(), "no fetch worker available");
				let err = FetchError::Transport("no fetch worker available".to_string());
				self.undelivered.push_back(request.fail(err));
			}
		}
	}

	pub fn try_recv(&mut self) -> Result<FetchCompletion, TryRecvError> {
		let completion = match self.undelivered.pop_front() {
			Some(completion) => completion,
			None => self.rx.try_recv()?,
		};
		self.in_flight = self.in_flight.saturating_sub(1);
		Ok(completion)
	}

	/// Block until the next completion arrives.
	pub fn recv(&mut self) -> Option<FetchCompletion> {
		let completion = match self.undelivered.pop_front() {
			Some(completion) => completion,
			None => self.rx.recv().ok()?,
		};
		self.in_flight = self.in_flight.saturating_sub(1);
		Some(completion)
	}

	/// Number of submitted requests whose completion has not been received.
	#[must_use]
	pub fn in_flight(&self) -> usize {
		self.in_flight
	}

	pub fn shutdown(&self) {
		for _ in 0..self.workers {
			let _ = self.tx.send(FetchCommand::Shutdown);
		}
	}
}

impl Drop for FetchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}
