//! Forward-only cursor over the lines of a document.
//!
//! This module provides the [LineCursor], the only way the scanner
//! consumes input. It wraps any iterator of string-like lines, can be
//! exhausted exactly once and offers neither rewind nor random access.

// =#========================================================================#=
// LINE CURSOR
// =#========================================================================€=
/// Forward-only cursor over lines, counting how many lines it has handed out.
///
/// Once [next_line()](LineCursor::next_line) returned `None`, the cursor is
/// exhausted and keeps returning `None`, even if the wrapped iterator would
/// produce further items.
///
/// # Example
/// ```
/// use nexscan::parser::line_cursor::LineCursor;
///
/// let mut cursor = LineCursor::new(["#NEXUS", "begin trees;"]);
/// assert_eq!(cursor.next_line(), Some("#NEXUS"));
/// assert_eq!(cursor.line_number(), 1);
/// assert_eq!(cursor.next_line(), Some("begin trees;"));
/// assert_eq!(cursor.next_line(), None);
/// assert!(cursor.is_exhausted());
/// ```
pub struct LineCursor<I: Iterator> {
    lines: I,
    /// Number of lines consumed so far (1-based number of the last one)
    line_number: usize,
    exhausted: bool,
}

impl<I: Iterator> LineCursor<I>
where
    I::Item: AsRef<str>,
{
    /// Creates a new cursor positioned before the first line.
    ///
    /// # Arguments
    /// * `lines` - Anything iterable over string-like lines
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            line_number: 0,
            exhausted: false,
        }
    }

    /// Advances the cursor and returns the next line.
    ///
    /// # Returns
    /// * `Some(line)` - The next line
    /// * `None` - If the input is exhausted
    pub fn next_line(&mut self) -> Option<I::Item> {
        if self.exhausted {
            return None;
        }

        match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                Some(line)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    /// Returns the 1-based number of the most recently consumed line,
    /// or 0 if nothing has been consumed yet.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Whether the cursor has run past the last line.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<I: Iterator> Iterator for LineCursor<I>
where
    I::Item: AsRef<str>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_consumed_lines() {
        let lines = vec![String::from("a"), String::from("b"), String::from("c")];
        let mut cursor = LineCursor::new(lines);
        assert_eq!(cursor.line_number(), 0);

        cursor.next_line();
        cursor.next_line();
        assert_eq!(cursor.line_number(), 2);
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn test_stays_exhausted() {
        // An iterator that would resume after yielding None
        let mut toggle = false;
        let flaky = std::iter::from_fn(move || {
            toggle = !toggle;
            if toggle { None } else { Some("late") }
        });

        let mut cursor = LineCursor::new(flaky);
        assert_eq!(cursor.next_line(), None);
        assert_eq!(cursor.next_line(), None);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.line_number(), 0);
    }

    #[test]
    fn test_iterates_remaining_lines() {
        let mut cursor = LineCursor::new(["skip", "x", "y"]);
        cursor.next_line();

        let rest: Vec<&str> = cursor.by_ref().collect();
        assert_eq!(rest, vec!["x", "y"]);
        assert_eq!(cursor.line_number(), 3);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_empty_input() {
        let mut cursor = LineCursor::new(Vec::<&str>::new());
        assert_eq!(cursor.next_line(), None);
        assert!(cursor.is_exhausted());
    }
}
