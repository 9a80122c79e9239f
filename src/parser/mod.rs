//! Low-level line handling shared by the scanner.
//!
//! This module provides the forward-only [LineCursor], the whitespace
//! tokenizer [LineFields] and the [ScanningError] type.

pub mod line_cursor;
pub mod line_fields;
pub mod scanning_error;

pub use line_cursor::LineCursor;
pub use line_fields::LineFields;
pub use scanning_error::ScanningError;
