//! CSV reading utilities.

mod header;
mod reader;

pub use header::{CsvHeader, read_header};
pub use reader::{NULL_TOKENS, ensure_file, read_frame};
