//! In-memory service doubles shared by unit tests.

use std::sync::Mutex;

use pdfsift_client::{
	ClientError, DocumentApi, DocumentPayload, ResultItem, UploadReceipt,
};

/// Recording [`DocumentApi`] double with canned answers.
pub(crate) struct FakeApi {
	/// Call log, one entry per invocation.
	pub calls: Mutex<Vec<String>>,
	/// Answer for `search`.
	pub results: Vec<ResultItem>,
	/// Answer for `list_documents`.
	pub filenames: Vec<String>,
}

impl Default for FakeApi {
	fn default() -> Self {
		Self {
			calls: Mutex::new(Vec::new()),
			results: Vec::new(),
			filenames: Vec::new(),
		}
	}
}

impl FakeApi {
	pub fn logged_calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}
}

impl DocumentApi for FakeApi {
	fn search(&self, query: &str) -> Result<Vec<ResultItem>, ClientError> {
		self.calls.lock().unwrap().push(format!("search:{query}"));
		Ok(self.results.clone())
	}

	fn upload(&self, document: &DocumentPayload) -> Result<UploadReceipt, ClientError> {
		self.calls
			.lock()
			.unwrap()
			.push(format!("upload:{}", document.filename));
		Ok(UploadReceipt {
			filename: document.filename.clone(),
		})
	}

	fn list_documents(&self) -> Result<Vec<String>, ClientError> {
		self.calls.lock().unwrap().push("list".to_string());
		Ok(self.filenames.clone())
	}

	fn reset_library(&self) -> Result<(), ClientError> {
		self.calls.lock().unwrap().push("reset".to_string());
		Ok(())
	}

	fn document_url(&self, filename: &str) -> String {
		format!("http://service.test/get-pdf/{filename}")
	}
}

/// A result item with a usable snippet.
pub(crate) fn item(document: &str, snippet: &str, occurrences: u64) -> ResultItem {
	ResultItem {
		document: document.to_string(),
		snippet: snippet.to_string(),
		occurrences,
		distance: None,
	}
}
