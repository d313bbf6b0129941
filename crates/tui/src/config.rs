/// Textual configuration for every label and placeholder the UI renders.
///
/// Kept in one place so the binary can override strings from settings
/// without reaching into rendering code.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Label on the search view tab.
	pub browser_tab: String,
	/// Label on the file-browser tab.
	pub files_tab: String,
	/// Placeholder for the search query input.
	pub search_placeholder: String,
	/// Placeholder for the file filter input.
	pub filter_placeholder: String,
	/// Placeholder for the upload path input.
	pub upload_placeholder: String,
	/// Shown before the first search is submitted.
	pub prompt_empty: String,
	/// Shown while a search is in flight.
	pub scanning: String,
	/// Shown when a completed search has nothing to display.
	pub no_results: String,
	/// Shown when the file inventory is empty.
	pub files_empty: String,
	/// Shown when the filter matches no files.
	pub files_no_match: String,
	/// Shown while an upload is in flight.
	pub uploading: String,
	/// Hint for reaching the upload input.
	pub upload_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			browser_tab: "Browser".to_string(),
			files_tab: "Files".to_string(),
			search_placeholder: "Search query".to_string(),
			filter_placeholder: "Search for files".to_string(),
			upload_placeholder: "Path to a PDF file".to_string(),
			prompt_empty: "Query something ...".to_string(),
			scanning: "Scanning documents ...".to_string(),
			no_results: "No results found".to_string(),
			files_empty: "Upload some files ...".to_string(),
			files_no_match: "No files matching query".to_string(),
			uploading: "Indexing document ...".to_string(),
			upload_hint: "Ctrl+U to upload a PDF".to_string(),
		}
	}
}
