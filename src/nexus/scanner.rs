//! Structs and logic to scan Nexus documents for their TREES block.
//!
//! This module provides the [BlockScannerBuilder] and [BlockScanner] structs,
//! which drive a [ScanMachine] over the lines of a document, and the
//! [ScanResult] handed back to the caller.

use crate::nexus::machine::{ScanMachine, ScanState, TreeExtraction};
use crate::nexus::translation::TranslationTable;
use crate::parser::line_cursor::LineCursor;
use crate::parser::scanning_error::{Result, ScanningError};
use tracing::{debug, instrument};

// =#========================================================================#=
// BURNIN
// =#========================================================================€=
/// Specifies how many initial trees to skip as burnin.
///
/// Burnin is commonly used in MCMC sampling to discard initial trees
/// before the chain has converged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Burnin {
    /// Skip a fixed number of trees.
    ///
    /// # Example
    /// ```
    /// use nexscan::nexus::Burnin;
    /// let burnin = Burnin::Count(1001); // Skip first 1001 trees
    /// ```
    Count(usize),

    /// Skip a percentage of total trees.
    ///
    /// The percentage must be in the range [0.0, 1.0), which is checked
    /// by [BlockScannerBuilder::build].
    ///
    /// # Example
    /// ```
    /// use nexscan::nexus::Burnin;
    /// let burnin = Burnin::Percentage(0.25); // Skip first 25% of trees
    /// ```
    Percentage(f64),
}

impl Default for Burnin {
    fn default() -> Self {
        Burnin::Count(0)
    }
}

impl Burnin {
    /// Calculates the absolute number of trees to skip given the total tree count.
    ///
    /// # Arguments
    /// * `num_total_trees` - Number of trees burnin is applied to
    ///
    /// # Returns
    /// The number of trees to skip as burnin
    pub(crate) fn get_count(&self, num_total_trees: usize) -> usize {
        match self {
            Burnin::Count(n) => *n,
            Burnin::Percentage(p) => (num_total_trees as f64 * p).floor() as usize,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Burnin::Percentage(p) if !(0.0..1.0).contains(p) => {
                Err(ScanningError::InvalidBurnin(*p))
            }
            _ => Ok(()),
        }
    }
}

// =#========================================================================#=
// BLOCK SCANNER BUILDER
// =#========================================================================$=
/// Builder for configuring and creating a [BlockScanner].
///
/// # Configuration Options
/// * **Tree extraction**: How the Newick string is cut from a `tree` line
///   - [`with_tree_extraction()`](Self::with_tree_extraction):
///     [TreeExtraction::AfterAssignment] (default) or
///     [TreeExtraction::LastField]
///
/// * **Skip first**: Skip the first tree (some software writes the start
///   tree of an MCMC run as first sample)
///   - [`with_skip_first()`](Self::with_skip_first)
///
/// * **Burnin**: Discard initial trees (commonly used for MCMC samples)
///   - [`with_burnin()`](Self::with_burnin): skip a fixed count or percentage
///
/// # Example
/// ```
/// use nexscan::nexus::{BlockScannerBuilder, Burnin};
///
/// let scanner = BlockScannerBuilder::new()
///     .with_skip_first()
///     .with_burnin(Burnin::Percentage(0.5))
///     .build()?;
///
/// let result = scanner.scan_str(
///     "begin trees;\n tree s0 = (A,B);\n tree s1 = (A,B);\n tree s2 = (B,A);\nend;",
/// );
/// assert_eq!(result.num_total_trees(), 3);
/// assert_eq!(result.trees(), &["(B,A);"]);
/// # Ok::<(), nexscan::parser::ScanningError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockScannerBuilder {
    extraction: TreeExtraction,
    burnin: Burnin,
    skip_first: bool,
}

impl BlockScannerBuilder {
    /// Creates a builder with default settings:
    /// - Tree strings taken after the `=`
    /// - First tree not skipped
    /// - No burnin (all trees included)
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure how tree strings are extracted from `tree` lines.
    pub fn with_tree_extraction(mut self, extraction: TreeExtraction) -> Self {
        self.extraction = extraction;
        self
    }

    /// Configure burnin, i.e., discard initial trees.
    ///
    /// If both burnin and [with_skip_first()](Self::with_skip_first)
    /// are configured, the first tree is skipped, then burnin is applied to
    /// the remaining trees.
    pub fn with_burnin(mut self, burnin: Burnin) -> Self {
        self.burnin = burnin;
        self
    }

    /// Configure the scanner to skip the first tree.
    pub fn with_skip_first(mut self) -> Self {
        self.skip_first = true;
        self
    }

    /// Builds the [BlockScanner] with the configured settings.
    ///
    /// # Errors
    /// Returns [ScanningError::InvalidBurnin] if a burnin percentage outside
    /// of `[0.0, 1.0)` was configured.
    pub fn build(self) -> Result<BlockScanner> {
        self.burnin.validate()?;

        Ok(BlockScanner {
            extraction: self.extraction,
            burnin: self.burnin,
            skip_first: self.skip_first,
        })
    }
}

// =#========================================================================#=
// BLOCK SCANNER
// =#========================================================================$=
/// Scanner extracting raw tree strings and the translation table from the
/// TREES block of a Nexus document.
///
/// A scanner holds only its configuration; every scan starts from scratch,
/// so the same scanner can be reused (and shared across threads).
///
/// # Example
/// ```
/// use nexscan::nexus::BlockScanner;
///
/// let lines = [
///     "#NEXUS",
///     "begin trees;",
///     "  translate",
///     "    1 Apteryx_haastii,",
///     "    2 Apteryx_owenii",
///     "  ;",
///     "  tree kiwi = (1,2);",
///     "end;",
/// ];
/// let result = BlockScanner::default().scan(lines);
///
/// assert_eq!(result.trees(), &["(1,2);"]);
/// assert_eq!(result.translation().get("1"), Some("Apteryx_haastii"));
/// assert!(result.block_closed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockScanner {
    extraction: TreeExtraction,
    burnin: Burnin,
    skip_first: bool,
}

impl BlockScanner {
    /// Scans the given lines in a single forward pass.
    ///
    /// Stops pulling lines once the `end;` of the TREES block is consumed.
    /// Never fails: a missing TREES block yields an empty result and a
    /// truncated block yields whatever was collected up to the last line.
    ///
    /// # Arguments
    /// * `lines` - The document's lines, without line terminators
    #[instrument(level = "debug", skip_all)]
    pub fn scan<I, L>(&self, lines: I) -> ScanResult
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut cursor = LineCursor::new(lines);
        let mut machine = ScanMachine::new(self.extraction);

        for line in cursor.by_ref() {
            if machine.feed(line.as_ref()) == ScanState::Done {
                break;
            }
        }

        match machine.state() {
            ScanState::SeekBlock => debug!(
                num_lines = cursor.line_number(),
                "No TREES block found"
            ),
            ScanState::InBlock | ScanState::InTranslate => debug!(
                num_lines = cursor.line_number(),
                state = ?machine.state(),
                "Input ended inside TREES block"
            ),
            ScanState::Done => {}
        }

        let mut result = machine.finish();
        result.discard_leading(self.skip_first, self.burnin);
        debug!(
            num_trees = result.num_trees(),
            num_total_trees = result.num_total_trees(),
            num_translations = result.translation().len(),
            "Scan finished"
        );
        result
    }

    /// Scans a whole document, split into lines by [str::lines]
    /// (`\n` and `\r\n` line endings).
    pub fn scan_str(&self, document: &str) -> ScanResult {
        self.scan(document.lines())
    }
}

// =#========================================================================#=
// SCAN RESULT
// =#========================================================================$=
/// Outcome of a scan: tree strings in source order and the translation table.
///
/// Owns all of its contents; nothing refers back to the scanned input.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    trees: Vec<String>,
    translation: TranslationTable,
    /// Number of trees in the block, before skip-first and burnin
    num_total_trees: usize,
    block_found: bool,
    block_closed: bool,
}

impl ScanResult {
    pub(crate) fn new(
        trees: Vec<String>,
        translation: TranslationTable,
        block_found: bool,
        block_closed: bool,
    ) -> Self {
        Self {
            num_total_trees: trees.len(),
            trees,
            translation,
            block_found,
            block_closed,
        }
    }

    /// Drops skipped and burnin trees from the front.
    fn discard_leading(&mut self, skip_first: bool, burnin: Burnin) {
        let num_total_trees = self.trees.len();

        let mut skip_count: usize = 0;
        if skip_first && num_total_trees > 0 {
            skip_count = 1;
        }
        skip_count = skip_count.saturating_add(burnin.get_count(num_total_trees - skip_count));

        self.trees.drain(..skip_count.min(num_total_trees));
    }

    /// Raw Newick strings in the order they appear in the document.
    pub fn trees(&self) -> &[String] {
        &self.trees
    }

    /// Translation table of the TREES block (empty if there was none).
    pub fn translation(&self) -> &TranslationTable {
        &self.translation
    }

    /// Number of trees returned (without skipped and burnin trees).
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Number of trees in the TREES block, including skipped and burnin trees.
    pub fn num_total_trees(&self) -> usize {
        self.num_total_trees
    }

    /// Whether a `begin trees;` line was found.
    pub fn block_found(&self) -> bool {
        self.block_found
    }

    /// Whether the TREES block was closed by `end;` before the input ended.
    pub fn block_closed(&self) -> bool {
        self.block_closed
    }

    /// Consumes the result, returning tree strings and translation table.
    pub fn into_parts(self) -> (Vec<String>, TranslationTable) {
        (self.trees, self.translation)
    }
}
