//! Background worker executing document-service calls.
//!
//! All network I/O runs on one dedicated thread so the render loop never
//! blocks. Commands carry a per-concern request id; the UI drops any event
//! whose id is no longer the latest issued, which is what makes a slow old
//! response unable to overwrite newer state.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use pdfsift_client::{ClientError, DocumentApi, DocumentPayload, ResultItem, UploadReceipt};

/// Commands sent to the backend worker thread.
pub(crate) enum BackendCommand {
	/// Run a search for `query`.
	Search { id: u64, query: String },
	/// Upload one staged document.
	Upload { id: u64, document: DocumentPayload },
	/// Fetch the full file inventory.
	ListDocuments { id: u64 },
	/// Stop the worker thread.
	Shutdown,
}

/// Completed calls reported back to the UI loop.
pub(crate) enum BackendEvent {
	Search {
		id: u64,
		outcome: Result<Vec<ResultItem>, ClientError>,
	},
	Upload {
		id: u64,
		outcome: Result<UploadReceipt, ClientError>,
	},
	Inventory {
		id: u64,
		outcome: Result<Vec<String>, ClientError>,
	},
}

/// Spawn the worker thread and return its command/event channels.
pub(crate) fn spawn(api: Arc<dyn DocumentApi>) -> (Sender<BackendCommand>, Receiver<BackendEvent>) {
	let (command_tx, command_rx) = channel();
	let (event_tx, event_rx) = channel();

	thread::Builder::new()
		.name("backend-worker".into())
		.spawn(move || worker_loop(api, command_rx, event_tx))
		.expect("failed to spawn backend worker thread");

	(command_tx, event_rx)
}

fn worker_loop(
	api: Arc<dyn DocumentApi>,
	command_rx: Receiver<BackendCommand>,
	event_tx: Sender<BackendEvent>,
) {
	while let Ok(command) = command_rx.recv() {
		let event = match command {
			BackendCommand::Shutdown => break,
			BackendCommand::Search { id, query } => BackendEvent::Search {
				id,
				outcome: api.search(&query),
			},
			BackendCommand::Upload { id, document } => BackendEvent::Upload {
				id,
				outcome: api.upload(&document),
			},
			BackendCommand::ListDocuments { id } => BackendEvent::Inventory {
				id,
				outcome: api.list_documents(),
			},
		};

		// The UI dropping its receiver means shutdown is underway.
		if event_tx.send(event).is_err() {
			break;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::FakeApi;

	#[test]
	fn worker_answers_commands_with_matching_ids() {
		let api = Arc::new(FakeApi {
			filenames: vec!["a.pdf".to_string()],
			..FakeApi::default()
		});
		let (tx, rx) = spawn(api);

		tx.send(BackendCommand::ListDocuments { id: 7 }).unwrap();
		match rx.recv().unwrap() {
			BackendEvent::Inventory { id, outcome } => {
				assert_eq!(id, 7);
				assert_eq!(outcome.unwrap(), vec!["a.pdf".to_string()]);
			}
			_ => panic!("expected an inventory event"),
		}

		tx.send(BackendCommand::Shutdown).unwrap();
	}
}
