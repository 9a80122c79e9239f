//! Whitespace tokenizer for single lines.
//!
//! The scanner looks at a line only through its whitespace-delimited fields:
//! the first field classifies the line (compared case-insensitively), the
//! last field carries values such as taxon names or legacy tree strings.

// =#========================================================================#=
// LINE FIELDS
// =#========================================================================€=
/// A trimmed line split into whitespace-delimited fields.
///
/// Borrows from the line it was created from.
///
/// # Example
/// ```
/// use nexscan::parser::line_fields::LineFields;
///
/// let fields = LineFields::split("   Tree t1 = (A,B);  ");
/// assert_eq!(fields.len(), 4);
/// assert_eq!(fields.keyword().as_deref(), Some("tree"));
/// assert_eq!(fields.last(), Some("(A,B);"));
/// assert_eq!(fields.trimmed(), "Tree t1 = (A,B);");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LineFields<'a> {
    trimmed: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> LineFields<'a> {
    /// Trims `line` and splits it on (Unicode) whitespace.
    pub fn split(line: &'a str) -> Self {
        let trimmed = line.trim();
        Self {
            trimmed,
            fields: trimmed.split_whitespace().collect(),
        }
    }

    /// Whether the line contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Alias of [is_blank()](Self::is_blank), for symmetry with [len()](Self::len).
    pub fn is_empty(&self) -> bool {
        self.is_blank()
    }

    /// First field, verbatim.
    pub fn first(&self) -> Option<&'a str> {
        self.fields.first().copied()
    }

    /// Last field, verbatim.
    pub fn last(&self) -> Option<&'a str> {
        self.fields.last().copied()
    }

    /// First field in lowercase, used to classify the line.
    pub fn keyword(&self) -> Option<String> {
        self.first().map(str::to_ascii_lowercase)
    }

    /// The whole line with leading and trailing whitespace removed.
    pub fn trimmed(&self) -> &'a str {
        self.trimmed
    }

    /// All fields in order.
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Whether the last field ends with `terminator`.
    pub fn last_ends_with(&self, terminator: char) -> bool {
        self.last().is_some_and(|field| field.ends_with(terminator))
    }
}

/// Compares a line to a keyword ignoring ASCII case and surrounding whitespace.
///
/// # Example
/// ```
/// use nexscan::parser::line_fields::line_matches;
///
/// assert!(line_matches("  BEGIN TREES;  ", "begin trees;"));
/// assert!(!line_matches("begin  trees;", "begin trees;"));
/// ```
pub fn line_matches(line: &str, keyword: &str) -> bool {
    line.trim().eq_ignore_ascii_case(keyword)
}

/// Removes all trailing `,` and `;` from a field.
///
/// Leading separators are kept, e.g. `,alpha` stays `,alpha`.
///
/// # Example
/// ```
/// use nexscan::parser::line_fields::strip_separators;
///
/// assert_eq!(strip_separators("Pukeko,"), "Pukeko");
/// assert_eq!(strip_separators("Takahe;"), "Takahe");
/// assert_eq!(strip_separators("Weka,;"), "Weka");
/// assert_eq!(strip_separators(";"), "");
/// ```
pub fn strip_separators(field: &str) -> &str {
    field.trim_end_matches([',', ';'])
}
