//! Upload validation and single-flight coordination.
//!
//! Exactly one upload may be in flight: while pending, the trigger is
//! disabled and further selections are ignored. Validation happens before
//! any command is issued, so a wrong file type never reaches the network.

use std::sync::mpsc::Sender;

use pdfsift_client::{ClientError, DocumentPayload, PDF_MIME, UploadReceipt, ValidationError};

use crate::worker::BackendCommand;

pub(crate) struct UploadRuntime {
	tx: Sender<BackendCommand>,
	next_request_id: u64,
	current_request_id: Option<u64>,
	in_flight: bool,
	last_error: Option<String>,
}

impl UploadRuntime {
	pub(crate) fn new(tx: Sender<BackendCommand>) -> Self {
		Self {
			tx,
			next_request_id: 0,
			current_request_id: None,
			in_flight: false,
			last_error: None,
		}
	}

	/// Validate `document` and stage it for upload.
	///
	/// Returns `Ok(true)` when the upload was issued, `Ok(false)` when one
	/// is already in flight (the control is disabled), and a
	/// [`ValidationError`] when the declared type is not PDF.
	pub(crate) fn select(&mut self, document: DocumentPayload) -> Result<bool, ValidationError> {
		if self.in_flight {
			return Ok(false);
		}

		if document.content_type != PDF_MIME {
			let err = ValidationError {
				filename: document.filename,
				content_type: document.content_type,
			};
			self.last_error = Some(err.to_string());
			return Err(err);
		}

		self.last_error = None;
		self.in_flight = true;
		self.next_request_id += 1;
		let id = self.next_request_id;
		self.current_request_id = Some(id);
		let _ = self.tx.send(BackendCommand::Upload { id, document });
		Ok(true)
	}

	/// Whether `id` belongs to the most recently issued upload.
	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		Some(id) == self.current_request_id
	}

	/// Apply a finished upload; returns `true` on success so the caller can
	/// trigger the separate inventory re-fetch.
	pub(crate) fn record_outcome(&mut self, outcome: Result<UploadReceipt, ClientError>) -> bool {
		self.in_flight = false;
		match outcome {
			Ok(receipt) => {
				tracing::info!(filename = %receipt.filename, "document indexed");
				true
			}
			Err(err) => {
				tracing::warn!(error = %err, "upload failed");
				self.last_error = Some(err.to_string());
				false
			}
		}
	}

	/// Surface a selection failure that happened before validation, e.g. a
	/// path that could not be read.
	pub(crate) fn record_selection_failure(&mut self, message: impl Into<String>) {
		self.last_error = Some(message.into());
	}

	/// Whether an upload is pending and the control is disabled.
	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	pub(crate) fn dismiss_error(&mut self) {
		self.last_error = None;
	}
}
