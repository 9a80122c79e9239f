//! Nexscan is a library to extract phylogenetic tree data from the TREES
//! block of Nexus documents.
//!
//! This crate offers a tolerant, single-pass scanner over the lines of a
//! Nexus document. Core functionality provided:
//! - Locate the `begin trees; ... end;` block among arbitrary other content.
//! - Collect the `translate` table mapping short tokens to taxon names.
//! - Collect the raw Newick string of every `tree` command, in order.
//!   Newick strings are not parsed; hand them to a Newick parser of your
//!   choice and substitute names via [TranslationTable::resolve].
//! - Configurability:
//!   - Tree string extraction: everything after `=` (default, robust
//!     against annotations containing spaces as written by MrBayes)
//!     or the last whitespace-separated field
//!   - Burnin: number/percentage of initial trees skipped
//!   - Skip first: Since some Bayesian MCMC implementations include the
//!     start tree in Nexus files, the scanner can be configured to skip it
//!
//! The scanner never fails on its input: documents without TREES block
//! give empty results and truncated blocks give what was collected.
//! It performs no I/O; callers read and decode documents themselves.
//!
//! Diagnostics are emitted as [`tracing`] events; install a subscriber to
//! see them.
//!
//! # Usage patterns
//! 1. [`scan_nexus_lines`] and [`scan_nexus_str`] scan with default settings.
//! 2. Configure a scanner using
//!    [BlockScannerBuilder](crate::nexus::BlockScannerBuilder) for control
//!    over extraction, burnin and skip-first.
//!
//! ## Example Default Configuration
//! ```
//! use nexscan::scan_nexus_str;
//!
//! let document = "#NEXUS
//! begin trees;
//!     translate
//!         1 Porphyrio_hochstetteri,
//!         2 Porphyrio_melanotus
//!         ;
//!     tree takahe = [&R] (1:0.5,2:0.5);
//! end;
//! ";
//! let (trees, translation) = scan_nexus_str(document);
//! assert_eq!(trees, vec!["[&R] (1:0.5,2:0.5);"]);
//! assert_eq!(translation.resolve("1"), "Porphyrio_hochstetteri");
//! ```
//!
//! ## Example Scanner Configuration
//! ```
//! use nexscan::nexus::{BlockScannerBuilder, Burnin, TreeExtraction};
//!
//! let scanner = BlockScannerBuilder::new()
//!     .with_tree_extraction(TreeExtraction::LastField)
//!     .with_skip_first()
//!     .with_burnin(Burnin::Percentage(0.1))
//!     .build()?;
//!
//! let result = scanner.scan(["begin trees;", "tree start = (A,B);", "end;"]);
//! assert_eq!(result.num_total_trees(), 1);
//! assert!(result.trees().is_empty());
//! # Ok::<(), nexscan::parser::ScanningError>(())
//! ```

pub mod nexus;
pub mod parser;

pub use crate::nexus::TranslationTable;

// ============================================================================
// Quick Nexus API
// ============================================================================
/// Scans the lines of a Nexus document using default settings,
/// returning the raw tree strings together with the [TranslationTable].
///
/// See [`nexus::scan_lines`] for full documentation.
pub fn scan_nexus_lines<I, L>(lines: I) -> (Vec<String>, TranslationTable)
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    nexus::scan_lines(lines)
}

/// Scans a Nexus document given as one string using default settings,
/// returning the raw tree strings together with the [TranslationTable].
///
/// See [`nexus::scan_str`] for full documentation.
pub fn scan_nexus_str(document: &str) -> (Vec<String>, TranslationTable) {
    nexus::scan_str(document)
}
