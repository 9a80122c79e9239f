//! Scanner for the TREES block of NEXUS documents.
//!
//! This module provides:
//! - [BlockScannerBuilder] / [BlockScanner] - configured scanning of a
//!   document's lines
//! - [ScanMachine] - the underlying line-fed state machine
//! - [ScanResult] / [TranslationTable] - what a scan hands back
//!
//! # Quick API
//! For simple use cases with default settings:
//! - [`scan_lines`] - scans lines, returns tree strings + [TranslationTable]
//! - [`scan_str`] - the same for a whole document as one string
//!
//! # Format
//! Only the TREES block is looked at:
//! ```text
//! begin trees;
//!     translate
//!         1 Apteryx_australis,
//!         2 Apteryx_mantelli,
//!         3 Apteryx_rowi
//!         ;
//!     tree one = ((1,2),3);
//!     tree two = (1,(2,3));
//! end;
//! ```
//!
//! ## Assumptions
//! * The block opens with a line reading exactly `begin trees;` and closes
//!   with a line whose first field is `end;` (both case-insensitive).
//!   Everything before and after is ignored, including further TREES blocks.
//! * A `translate` command starts on its own line and holds one
//!   `<token> <name>` pair per line; its last line ends with `;`.
//!   - That last line is consumed without being recorded, so a table
//!     written as `3 Apteryx_rowi;` loses its last entry.
//!   - Names containing whitespace are cut to their last word.
//! * Each tree command occupies a single line starting with `tree`.
//! * Unknown commands and comments on lines of their own are skipped.
//!
//! Tree strings are returned verbatim; no Newick validation is performed.

mod defs;
mod machine;
mod scanner;
mod translation;

pub use self::machine::{ScanMachine, ScanState, TreeExtraction};
pub use self::scanner::{BlockScanner, BlockScannerBuilder, Burnin, ScanResult};
pub use self::translation::TranslationTable;

// ============================================================================
// QUICK SCANNING API (public)
// ============================================================================
/// Scans lines with default settings and returns all tree strings together
/// with the [TranslationTable].
///
/// # Arguments
/// * `lines` - The document's lines, without line terminators
///
/// # Returns
/// A tuple of (tree strings, translation table); both empty if the document
/// has no TREES block
///
/// # Example
/// ```
/// let lines = ["begin trees;", "tree t1 = (A,B);", "tree t2 = (A,(B,C));", "end;"];
/// let (trees, translation) = nexscan::nexus::scan_lines(lines);
///
/// assert_eq!(trees, vec!["(A,B);", "(A,(B,C));"]);
/// assert!(translation.is_empty());
/// ```
pub fn scan_lines<I, L>(lines: I) -> (Vec<String>, TranslationTable)
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    BlockScanner::default().scan(lines).into_parts()
}

/// Scans a whole document with default settings and returns all tree
/// strings together with the [TranslationTable].
///
/// The document is split with [str::lines].
pub fn scan_str(document: &str) -> (Vec<String>, TranslationTable) {
    BlockScanner::default().scan_str(document).into_parts()
}
