use crate::{Alphabet, Input, Reversed, SearchError, Symbols};

/// Extended bad-character table: one row per pattern position, one column
/// per alphabet symbol.
///
/// Cell `[i][c]` holds the greatest position `< i` where `c` occurs in the
/// pattern, or `None`. Rows are stored back to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadCharacterTable {
    alphabet: Alphabet,
    rows: usize,
    cells: Vec<Option<usize>>,
}

impl BadCharacterTable {
    /// Builds the table left to right. Row `i` is row `i - 1` with the cell
    /// of `pattern[i - 1]` set to `i - 1`.
    pub fn build(pattern: &[u8], alphabet: Alphabet) -> Result<Self, SearchError> {
        alphabet.validate(Input::Pattern, pattern)?;
        Ok(Self::build_over(pattern, alphabet))
    }

    /// Same table built on the reversed pattern, with its rows reversed.
    ///
    /// Row `p` then answers "nearest occurrence to the right of `p`" in
    /// mirrored form: the forward position is `m - 1 - value`.
    pub fn build_reversed(pattern: &[u8], alphabet: Alphabet) -> Result<Self, SearchError> {
        alphabet.validate(Input::Pattern, pattern)?;
        let mut table = Self::build_over(Reversed(pattern), alphabet);
        table.reverse_rows();
        Ok(table)
    }

    // symbols must already be validated against the alphabet
    fn build_over<S: Symbols>(pattern: S, alphabet: Alphabet) -> Self {
        let width = alphabet.size();
        let rows = pattern.len();
        let mut cells = vec![None; rows * width];

        for i in 1..rows {
            let (done, rest) = cells.split_at_mut(i * width);
            let row = &mut rest[..width];
            row.copy_from_slice(&done[(i - 1) * width..]);
            if let Some(col) = alphabet.column(pattern.at(i - 1)) {
                row[col] = Some(i - 1);
            }
        }

        Self {
            alphabet,
            rows,
            cells,
        }
    }

    fn reverse_rows(&mut self) {
        let width = self.alphabet.size();
        self.cells = self
            .cells
            .chunks_exact(width)
            .rev()
            .flatten()
            .copied()
            .collect();
    }

    /// Number of rows, equal to the pattern length.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Cell `[row][symbol]`. Symbols outside the alphabet never occur in the
    /// pattern, so they read as `None`.
    #[inline]
    pub fn get(&self, row: usize, symbol: u8) -> Option<usize> {
        let col = self.alphabet.column(symbol)?;
        self.cells[row * self.alphabet.size() + col]
    }

    pub fn row(&self, row: usize) -> &[Option<usize>] {
        let width = self.alphabet.size();
        &self.cells[row * width..(row + 1) * width]
    }
}
