//! State machine scanning for the TREES block line by line.
//!
//! The [ScanMachine] is fed one line at a time and moves through the
//! [ScanState]s
//! `SeekBlock -> InBlock <-> InTranslate`, `InBlock -> Done`.
//! It never looks ahead, never backtracks and never fails; whatever it has
//! collected when the input runs out is the result.

use crate::nexus::defs::*;
use crate::nexus::scanner::ScanResult;
use crate::nexus::translation::TranslationTable;
use crate::parser::line_fields::{LineFields, line_matches, strip_separators};
use tracing::{debug, trace};

// =#========================================================================#=
// SCAN STATE
// =#========================================================================€=
/// Position of a [ScanMachine] relative to the TREES block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Discarding lines until `begin trees;`
    SeekBlock,
    /// Inside the TREES block, classifying lines
    InBlock,
    /// Inside the `translate` command, recording table entries
    InTranslate,
    /// Passed the `end;` of the TREES block; absorbing
    Done,
}

// =#========================================================================#=
// TREE EXTRACTION
// =#========================================================================€=
/// How the Newick string is taken from a `tree` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeExtraction {
    /// Everything after the first `=`, trimmed; the last field if there is no `=`.
    ///
    /// Keeps annotations containing spaces intact, e.g. MrBayes' `[&B ...]`
    /// branch length blocks or a `[&R] ` rooting prefix.
    ///
    /// The first `=` is taken even inside a comment: BEAST 1.x lines such as
    /// `tree STATE_0 [&lnP=-1.0] = [&R] (A,B);` yield `-1.0] = [&R] (A,B);`.
    #[default]
    AfterAssignment,
    /// The last whitespace-separated field of the line.
    ///
    /// Truncates Newick strings that contain spaces.
    LastField,
}

impl TreeExtraction {
    /// Extracts the tree string from a line already classified as `tree` line.
    ///
    /// # Returns
    /// * `Some(&str)` - The raw (unparsed) Newick string
    /// * `None` - If the line carries nothing after the assignment
    ///
    /// # Example
    /// ```
    /// use nexscan::nexus::TreeExtraction;
    /// use nexscan::parser::LineFields;
    ///
    /// let line = LineFields::split("tree rep.1 = [&R] (A:1,B:1);");
    /// assert_eq!(TreeExtraction::AfterAssignment.extract(&line), Some("[&R] (A:1,B:1);"));
    /// assert_eq!(TreeExtraction::LastField.extract(&line), Some("(A:1,B:1);"));
    /// ```
    pub fn extract<'a>(&self, fields: &LineFields<'a>) -> Option<&'a str> {
        let tree = match self {
            TreeExtraction::AfterAssignment => match fields.trimmed().split_once(TREE_ASSIGNMENT) {
                Some((_, newick)) => newick.trim(),
                None => fields.last()?,
            },
            TreeExtraction::LastField => fields.last()?,
        };

        if tree.is_empty() { None } else { Some(tree) }
    }
}

// =#========================================================================#=
// SCAN MACHINE
// =#========================================================================$=
/// Line-fed state machine collecting tree strings and the translation table.
///
/// Usually driven by [BlockScanner](crate::nexus::BlockScanner), but can be
/// fed directly, e.g. when lines arrive incrementally.
///
/// # Example
/// ```
/// use nexscan::nexus::{ScanMachine, ScanState, TreeExtraction};
///
/// let mut machine = ScanMachine::new(TreeExtraction::default());
/// assert_eq!(machine.feed("#NEXUS"), ScanState::SeekBlock);
/// assert_eq!(machine.feed("Begin Trees;"), ScanState::InBlock);
/// assert_eq!(machine.feed("  translate"), ScanState::InTranslate);
/// assert_eq!(machine.feed("    1 Kiwi,"), ScanState::InTranslate);
/// assert_eq!(machine.feed("    2 Weka"), ScanState::InTranslate);
/// assert_eq!(machine.feed("    ;"), ScanState::InBlock);
/// assert_eq!(machine.feed("  tree one = (1,2);"), ScanState::InBlock);
/// assert_eq!(machine.feed("End;"), ScanState::Done);
///
/// let (trees, translation) = machine.finish().into_parts();
/// assert_eq!(trees, vec!["(1,2);"]);
/// assert_eq!(translation.get("2"), Some("Weka"));
/// ```
#[derive(Debug, Clone)]
pub struct ScanMachine {
    state: ScanState,
    extraction: TreeExtraction,
    trees: Vec<String>,
    translation: TranslationTable,
    /// Number of lines fed so far, for diagnostics
    num_lines: usize,
}

impl ScanMachine {
    /// Creates a machine in [ScanState::SeekBlock].
    pub fn new(extraction: TreeExtraction) -> Self {
        Self {
            state: ScanState::SeekBlock,
            extraction,
            trees: Vec::new(),
            translation: TranslationTable::new(),
            num_lines: 0,
        }
    }

    /// Consumes one line and returns the state after it.
    pub fn feed(&mut self, line: &str) -> ScanState {
        self.num_lines += 1;
        self.state = match self.state {
            ScanState::SeekBlock => self.seek_block(line),
            ScanState::InBlock => self.consume_block_line(line),
            ScanState::InTranslate => self.consume_translate_line(line),
            ScanState::Done => ScanState::Done,
        };
        self.state
    }

    /// Current state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Whether the `end;` of the TREES block has been consumed.
    pub fn is_done(&self) -> bool {
        self.state == ScanState::Done
    }

    /// Tree strings collected so far.
    pub fn trees(&self) -> &[String] {
        &self.trees
    }

    /// Translation table collected so far.
    pub fn translation(&self) -> &TranslationTable {
        &self.translation
    }

    /// Consumes the machine and hands over everything collected,
    /// no matter in which state it stopped.
    pub fn finish(self) -> ScanResult {
        ScanResult::new(
            self.trees,
            self.translation,
            self.state != ScanState::SeekBlock,
            self.state == ScanState::Done,
        )
    }
}

// ============================================================================
// Transitions (private)
// ============================================================================
impl ScanMachine {
    fn seek_block(&mut self, line: &str) -> ScanState {
        if line_matches(line, BEGIN_TREES) {
            debug!(line = self.num_lines, "Found TREES block");
            ScanState::InBlock
        } else {
            ScanState::SeekBlock
        }
    }

    fn consume_block_line(&mut self, line: &str) -> ScanState {
        let fields = LineFields::split(line);
        let Some(keyword) = fields.keyword() else {
            return ScanState::InBlock;
        };

        if keyword == TRANSLATE {
            // The command line itself never holds entries
            if fields.last_ends_with(COMMAND_TERMINATOR) {
                debug!(line = self.num_lines, "TRANSLATE command closed on its own line");
                return ScanState::InBlock;
            }
            debug!(line = self.num_lines, "Entering TRANSLATE command");
            ScanState::InTranslate
        } else if keyword.starts_with(TREE) {
            match self.extraction.extract(&fields) {
                Some(tree) => {
                    trace!(line = self.num_lines, index = self.trees.len(), "Collected tree");
                    self.trees.push(tree.to_string());
                }
                None => debug!(line = self.num_lines, "Tree command without Newick string"),
            }
            ScanState::InBlock
        } else if keyword == BLOCK_END {
            debug!(
                line = self.num_lines,
                num_trees = self.trees.len(),
                num_translations = self.translation.len(),
                "Closed TREES block"
            );
            ScanState::Done
        } else {
            ScanState::InBlock
        }
    }

    fn consume_translate_line(&mut self, line: &str) -> ScanState {
        let fields = LineFields::split(line);
        let (Some(token), Some(name)) = (fields.first(), fields.last()) else {
            return ScanState::InTranslate;
        };

        // The terminating line is consumed without recording an entry,
        // even if it carries a token and a name.
        if name.ends_with(COMMAND_TERMINATOR) {
            debug!(
                line = self.num_lines,
                num_translations = self.translation.len(),
                "Leaving TRANSLATE command"
            );
            return ScanState::InBlock;
        }

        let name = strip_separators(name);
        trace!(line = self.num_lines, token, name, "Translation entry");
        self.translation.insert(token, name);
        ScanState::InTranslate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine_in_block() -> ScanMachine {
        let mut machine = ScanMachine::new(TreeExtraction::default());
        machine.feed("begin trees;");
        machine
    }

    #[test]
    fn test_seek_ignores_lookalikes() {
        let mut machine = ScanMachine::new(TreeExtraction::default());
        assert_eq!(machine.feed("tree t = (A,B);"), ScanState::SeekBlock);
        assert_eq!(machine.feed("translate"), ScanState::SeekBlock);
        assert_eq!(machine.feed("begin trees"), ScanState::SeekBlock);
        assert_eq!(machine.feed("begin taxa;"), ScanState::SeekBlock);
        assert!(machine.trees().is_empty());
        assert_eq!(machine.feed("\t BEGIN TREES;  "), ScanState::InBlock);
    }

    #[test]
    fn test_blank_lines_keep_state() {
        let mut machine = machine_in_block();
        assert_eq!(machine.feed(""), ScanState::InBlock);
        assert_eq!(machine.feed("Translate"), ScanState::InTranslate);
        assert_eq!(machine.feed("   "), ScanState::InTranslate);
        assert!(machine.translation().is_empty());
    }

    #[test]
    fn test_translate_header_with_terminator() {
        let mut machine = machine_in_block();
        assert_eq!(machine.feed("translate 1 A, 2 B;"), ScanState::InBlock);
        assert!(machine.translation().is_empty());
        assert_eq!(machine.feed("tree t = (1,2);"), ScanState::InBlock);
        assert_eq!(machine.trees(), &["(1,2);"]);
    }

    #[test]
    fn test_translate_terminator_row_dropped() {
        let mut machine = machine_in_block();
        machine.feed("translate");
        machine.feed("1 Kiwi,");
        assert_eq!(machine.feed("2 Weka;"), ScanState::InBlock);
        assert_eq!(machine.translation().len(), 1);
        assert!(!machine.translation().contains_token("2"));
    }

    #[test]
    fn test_tree_keyword_prefix() {
        let mut machine = machine_in_block();
        machine.feed("TREE a = (A,B);");
        machine.feed("utree b = (A,B);");
        machine.feed("Trees c = (A,C);");
        assert_eq!(machine.trees(), &["(A,B);", "(A,C);"]);
    }

    #[test]
    fn test_tree_without_newick_is_skipped() {
        let mut machine = machine_in_block();
        machine.feed("tree empty =");
        machine.feed("tree empty = ");
        assert!(machine.trees().is_empty());
    }

    #[test]
    fn test_done_is_absorbing() {
        let mut machine = machine_in_block();
        assert_eq!(machine.feed("END;"), ScanState::Done);
        assert_eq!(machine.feed("begin trees;"), ScanState::Done);
        assert_eq!(machine.feed("tree t = (A,B);"), ScanState::Done);
        assert!(machine.trees().is_empty());
    }

    #[test]
    fn test_end_must_be_exact_keyword() {
        let mut machine = machine_in_block();
        assert_eq!(machine.feed("endblock;"), ScanState::InBlock);
        assert_eq!(machine.feed("end"), ScanState::InBlock);
        assert_eq!(machine.feed("end; [trailing comment]"), ScanState::Done);
    }

    #[test]
    fn test_extraction_modes() {
        let line = LineFields::split("tree STATE_0 = [&U] ((A:1[&B IGR 0.5],B:1),C:2);");
        assert_eq!(
            TreeExtraction::AfterAssignment.extract(&line),
            Some("[&U] ((A:1[&B IGR 0.5],B:1),C:2);")
        );
        assert_eq!(TreeExtraction::LastField.extract(&line), Some("0.5],B:1),C:2);"));

        let commented_name = LineFields::split("tree STATE_0 [&lnP=-1.0] = [&R] (A,B);");
        assert_eq!(
            TreeExtraction::AfterAssignment.extract(&commented_name),
            Some("-1.0] = [&R] (A,B);")
        );
        assert_eq!(TreeExtraction::LastField.extract(&commented_name), Some("(A,B);"));

        let no_assignment = LineFields::split("tree (A,B);");
        assert_eq!(TreeExtraction::AfterAssignment.extract(&no_assignment), Some("(A,B);"));
    }

    #[test]
    fn test_finish_flags() {
        let result = ScanMachine::new(TreeExtraction::default()).finish();
        assert!(!result.block_found());
        assert!(!result.block_closed());

        let result = machine_in_block().finish();
        assert!(result.block_found());
        assert!(!result.block_closed());
    }
}
