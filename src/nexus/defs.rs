//! NEXUS keywords recognized by the scanner.
//!
//! All keywords are compared case-insensitively; the constants are lowercase.

/// Line opening the TREES block "begin trees;" (with semicolon)
pub(crate) const BEGIN_TREES: &str = "begin trees;";

/// Line closing any block "end;" (with semicolon)
pub(crate) const BLOCK_END: &str = "end;";

/// TREES block translate command "translate"
pub(crate) const TRANSLATE: &str = "translate";

/// Prefix of individual tree declarations "tree"
pub(crate) const TREE: &str = "tree";

/// Terminator of NEXUS commands
pub(crate) const COMMAND_TERMINATOR: char = ';';

/// Separates the tree name from the Newick string in a tree command
pub(crate) const TREE_ASSIGNMENT: char = '=';
