use thiserror::Error;

/// Upload selection rejected before any network call: the declared media
/// type of the chosen file is not `application/pdf`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot upload {filename}: declared type {content_type} is not application/pdf")]
pub struct ValidationError {
	pub filename: String,
	pub content_type: String,
}

/// Failures surfaced by [`DocumentApi`](crate::DocumentApi) calls.
///
/// Every variant is non-fatal from the UI's point of view: the last good
/// state stays visible and the user retries by resubmitting.
#[derive(Debug, Error)]
pub enum ClientError {
	/// The configured service URL cannot serve as a request base.
	#[error("service URL {url} cannot be used as a base")]
	InvalidBase { url: String },

	/// The HTTP client itself could not be constructed.
	#[error("could not initialize HTTP client: {source}")]
	Init {
		#[source]
		source: reqwest::Error,
	},

	/// The request never completed: connection refused, timeout, or the
	/// transport failed mid-flight.
	#[error("request to {endpoint} failed: {source}")]
	Transport {
		endpoint: &'static str,
		#[source]
		source: reqwest::Error,
	},

	/// The service answered with a non-success status code.
	#[error("{endpoint} returned HTTP {status}")]
	Status {
		endpoint: &'static str,
		status: reqwest::StatusCode,
	},

	/// The response body did not decode as the expected shape.
	#[error("could not decode {endpoint} response: {source}")]
	Decode {
		endpoint: &'static str,
		#[source]
		source: reqwest::Error,
	},
}
