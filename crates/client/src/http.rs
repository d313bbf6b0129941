//! Blocking HTTP implementation of the document-service API.
//!
//! Calls run on the UI's backend worker thread, never on the render loop,
//! so the blocking client keeps the dependency surface small while the
//! request-id discipline upstream handles interleaving.

use std::time::Duration;

use reqwest::blocking::{Client, Response, multipart};
use serde::Serialize;
use url::Url;

use crate::error::ClientError;
use crate::types::{DocumentPayload, ResultItem, UploadReceipt};

/// Operations the document service exposes to the client.
///
/// This trait is the seam between UI state and the network: the backend
/// worker owns a `dyn DocumentApi`, and tests substitute an in-memory
/// implementation.
pub trait DocumentApi: Send + Sync {
	/// Run a search and return the ranked result list.
	fn search(&self, query: &str) -> Result<Vec<ResultItem>, ClientError>;

	/// Upload one document for indexing.
	fn upload(&self, document: &DocumentPayload) -> Result<UploadReceipt, ClientError>;

	/// List every filename known to the service.
	fn list_documents(&self) -> Result<Vec<String>, ClientError>;

	/// Delete every stored document and the index built from them.
	fn reset_library(&self) -> Result<(), ClientError>;

	/// URL the given document can be retrieved from.
	fn document_url(&self, filename: &str) -> String;
}

#[derive(Serialize)]
struct SearchRequest<'a> {
	query: &'a str,
}

/// Production [`DocumentApi`] backed by `reqwest`'s blocking client.
pub struct HttpDocumentApi {
	base: Url,
	http: Client,
}

/// Upper bound on any single service call; searches against a cold index
/// are the slow path this has to accommodate.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

impl HttpDocumentApi {
	/// Build a client rooted at `base` (e.g. `http://localhost:8000`).
	pub fn new(base: Url) -> Result<Self, ClientError> {
		if base.cannot_be_a_base() {
			return Err(ClientError::InvalidBase {
				url: base.to_string(),
			});
		}

		let http = Client::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.map_err(|source| ClientError::Init { source })?;

		Ok(Self { base, http })
	}

	/// Endpoint URL for a service route, with the trailing slash the
	/// service's router expects.
	fn endpoint(&self, segment: &str) -> Url {
		let mut url = self.base.clone();
		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().push(segment).push("");
		}
		url
	}
}

impl DocumentApi for HttpDocumentApi {
	fn search(&self, query: &str) -> Result<Vec<ResultItem>, ClientError> {
		tracing::debug!(query, "issuing search request");
		let response = self
			.http
			.post(self.endpoint("search"))
			.json(&SearchRequest { query })
			.send()
			.map_err(|source| ClientError::Transport {
				endpoint: "search",
				source,
			})?;

		check_status("search", response)?
			.json()
			.map_err(|source| ClientError::Decode {
				endpoint: "search",
				source,
			})
	}

	fn upload(&self, document: &DocumentPayload) -> Result<UploadReceipt, ClientError> {
		tracing::debug!(filename = %document.filename, "uploading document");
		let part = multipart::Part::bytes(document.bytes.clone())
			.file_name(document.filename.clone())
			.mime_str(&document.content_type)
			.map_err(|source| ClientError::Transport {
				endpoint: "upload-pdf",
				source,
			})?;
		let form = multipart::Form::new().part("file", part);

		let response = self
			.http
			.post(self.endpoint("upload-pdf"))
			.multipart(form)
			.send()
			.map_err(|source| ClientError::Transport {
				endpoint: "upload-pdf",
				source,
			})?;

		check_status("upload-pdf", response)?
			.json()
			.map_err(|source| ClientError::Decode {
				endpoint: "upload-pdf",
				source,
			})
	}

	fn list_documents(&self) -> Result<Vec<String>, ClientError> {
		let response = self
			.http
			.get(self.endpoint("get-all-pdf"))
			.send()
			.map_err(|source| ClientError::Transport {
				endpoint: "get-all-pdf",
				source,
			})?;

		check_status("get-all-pdf", response)?
			.json()
			.map_err(|source| ClientError::Decode {
				endpoint: "get-all-pdf",
				source,
			})
	}

	fn reset_library(&self) -> Result<(), ClientError> {
		let response = self
			.http
			.delete(self.endpoint("reset-files"))
			.send()
			.map_err(|source| ClientError::Transport {
				endpoint: "reset-files",
				source,
			})?;

		check_status("reset-files", response).map(|_| ())
	}

	fn document_url(&self, filename: &str) -> String {
		let mut url = self.base.clone();
		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().push("get-pdf").push(filename);
		}
		url.to_string()
	}
}

fn check_status(endpoint: &'static str, response: Response) -> Result<Response, ClientError> {
	let status = response.status();
	if status.is_success() {
		Ok(response)
	} else {
		Err(ClientError::Status { endpoint, status })
	}
}
