use std::io;
use std::path::Path;
use std::{fmt, fs};

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Snippet placeholder the backend returns when it matched a document but
/// could not produce an excerpt. Items carrying it are dropped from display.
pub const MISSING_SNIPPET: &str = "Snippet not found.";

/// The only media type the service accepts for uploads.
pub const PDF_MIME: &str = "application/pdf";

/// One ranked document returned by the search endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResultItem {
	/// Filename of the matched document; unique within one result set.
	pub document: String,
	/// Excerpt of the document text surrounding the match.
	pub snippet: String,
	/// Number of query-term matches found within the document.
	#[serde(deserialize_with = "lenient_count")]
	pub occurrences: u64,
	/// Ranking distance reported by the index; smaller is closer.
	#[serde(default)]
	pub distance: Option<f64>,
}

impl ResultItem {
	/// Whether the backend produced a usable excerpt for this item.
	#[must_use]
	pub fn has_snippet(&self) -> bool {
		self.snippet != MISSING_SNIPPET
	}
}

/// Response body of a successful upload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadReceipt {
	/// Filename the backend stored the document under.
	pub filename: String,
}

/// A document staged for upload, together with its declared media type.
#[derive(Debug, Clone)]
pub struct DocumentPayload {
	/// Name the document will be uploaded under.
	pub filename: String,
	/// Declared media type, guessed from the extension for path-picked files.
	pub content_type: String,
	/// Raw file contents.
	pub bytes: Vec<u8>,
}

impl DocumentPayload {
	/// Read `path` into a payload whose declared type is the extension guess.
	pub fn from_path(path: &Path) -> io::Result<Self> {
		let bytes = fs::read(path)?;
		let filename = path
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_default();
		let content_type = mime_guess::from_path(path)
			.first_or_octet_stream()
			.essence_str()
			.to_string();
		Ok(Self {
			filename,
			content_type,
			bytes,
		})
	}
}

/// Accept occurrence counts written as either an integer or a float.
///
/// Older service builds serialized the count through `float()`, so `3.0`
/// and `3` both appear in the wild.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
	D: Deserializer<'de>,
{
	struct CountVisitor;

	impl de::Visitor<'_> for CountVisitor {
		type Value = u64;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("a non-negative count")
		}

		fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
			Ok(value)
		}

		fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
			u64::try_from(value).map_err(|_| E::custom("negative count"))
		}

		fn visit_f64<E: de::Error>(self, value: f64) -> Result<u64, E> {
			if value.is_finite() && value >= 0.0 {
				Ok(value as u64)
			} else {
				Err(E::custom("count must be a non-negative number"))
			}
		}
	}

	deserializer.deserialize_any(CountVisitor)
}
