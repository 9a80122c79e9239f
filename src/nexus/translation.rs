//! Translation table of a TREES block.
//!
//! Maps the short tokens used inside Newick strings (usually integers) to
//! full taxon names, keeping the order in which the entries were written.

use std::collections::HashMap;

// =#========================================================================#=
// TRANSLATION TABLE
// =#========================================================================€=
/// Insertion-ordered mapping from translation token to taxon name.
///
/// Tokens are unique; inserting an existing token replaces its name but
/// keeps its original position.
///
/// # Example
/// ```
/// use nexscan::nexus::TranslationTable;
///
/// let mut table = TranslationTable::new();
/// table.insert("1", "Porphyrio_melanotus");
/// table.insert("2", "Gallirallus_australis");
///
/// assert_eq!(table.get("2"), Some("Gallirallus_australis"));
/// assert_eq!(table.resolve("1"), "Porphyrio_melanotus");
/// assert_eq!(table.resolve("Apteryx"), "Apteryx");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Entries in insertion order
    entries: Vec<(String, String)>,
    /// Token to position in `entries`
    index: HashMap<String, usize>,
}

impl TranslationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `token` with `name`.
    ///
    /// # Returns
    /// The name previously associated with `token`, if any
    pub fn insert(&mut self, token: impl Into<String>, name: impl Into<String>) -> Option<String> {
        let token = token.into();
        let name = name.into();

        match self.index.get(&token) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, name)),
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, name));
                None
            }
        }
    }

    /// Returns the name for `token`, if present.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.index
            .get(token)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Returns the name for `token`, or `token` itself if it is not translated.
    ///
    /// Handy when substituting names into Newick labels, where untranslated
    /// labels are already full names.
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.get(token).unwrap_or(token)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(token, name)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(token, name)| (token.as_str(), name.as_str()))
    }

    /// Consumes the table and returns its `(token, name)` pairs in insertion order.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = TranslationTable::new();
        for (token, name) in iter {
            table.insert(token, name);
        }
        table
    }
}

impl From<TranslationTable> for HashMap<String, String> {
    fn from(table: TranslationTable) -> Self {
        table.entries.into_iter().collect()
    }
}
