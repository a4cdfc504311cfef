//! Character buffer with line/column bookkeeping.

use crate::source_location::SourceArea;

/// The decoded input with a precomputed `(line, column)` for every character.
///
/// Lines and columns are 1-based. CR, LF and CRLF each end a line. A tab
/// advances the column to the next multiple of the tab size.
#[derive(Debug, Clone)]
pub struct CharStream {
    chars: Vec<char>,
    positions: Vec<(u32, u32)>,
}

impl CharStream {
    /// Create a stream over `input`. `tab_size` must be positive.
    pub fn new(input: &str, tab_size: u32) -> Self {
        let tab_size = tab_size.max(1);
        let chars: Vec<char> = input.chars().collect();
        let mut positions = Vec::with_capacity(chars.len());

        let mut line = 1u32;
        let mut column = 0u32;
        let mut prev_cr = false;
        let mut prev_lf = false;

        for &c in &chars {
            column += 1;
            if prev_lf {
                prev_lf = false;
                line += 1;
                column = 1;
            } else if prev_cr {
                prev_cr = false;
                if c == '\n' {
                    prev_lf = true;
                } else {
                    line += 1;
                    column = 1;
                }
            }

            match c {
                '\r' => prev_cr = true,
                '\n' => prev_lf = true,
                '\t' => {
                    column -= 1;
                    column += tab_size - (column % tab_size);
                }
                _ => {}
            }
            positions.push((line, column));
        }

        Self { chars, positions }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character at `index`, if any.
    #[inline]
    pub fn at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// The `(line, column)` of the character at `index`.
    ///
    /// Past the end, the position just after the last character is returned.
    pub fn position(&self, index: usize) -> (u32, u32) {
        match self.positions.get(index) {
            Some(&pos) => pos,
            None => match self.positions.last() {
                Some(&(line, column)) => (line, column + 1),
                None => (1, 1),
            },
        }
    }

    /// The area spanning `start` to `end` (exclusive) in character indices.
    pub fn area(&self, start: usize, end: usize) -> SourceArea {
        let (begin_line, begin_column) = self.position(start);
        let (end_line, end_column) = if end > start {
            self.position(end - 1)
        } else {
            (begin_line, begin_column)
        };
        SourceArea::new(begin_line, begin_column, end_line, end_column)
    }

    /// The text between two character indices.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        if start >= end {
            return String::new();
        }
        self.chars[start..end].iter().collect()
    }
}
