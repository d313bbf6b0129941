//! HTTP client for the pdfsift document-search service.
//!
//! The service indexes uploaded PDF files and answers free-text queries with
//! ranked snippet excerpts. This crate owns the wire types, the error
//! taxonomy, and the [`DocumentApi`] seam the UI talks through; the blocking
//! [`HttpDocumentApi`] is the production implementation.

mod error;
mod http;
mod types;

pub use error::{ClientError, ValidationError};
pub use http::{DocumentApi, HttpDocumentApi};
pub use types::{DocumentPayload, MISSING_SNIPPET, PDF_MIME, ResultItem, UploadReceipt};
