//! KeySquare: the 5×5 Playfair letter grid derived from a key.

use std::fmt;

use crate::error::ClassiCryptError;

/// Side length of the key square.
pub const SQUARE_SIZE: usize = 5;

/// Residual alphabet appended after the key: A–Z without J.
const RESIDUAL_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// 5×5 grid holding each letter A–Z except J exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[char; SQUARE_SIZE]; SQUARE_SIZE],
}

/// Uppercases a letter and folds J into I. Non-letters yield `None`.
pub(crate) fn fold_letter(ch: char) -> Option<char> {
    if !ch.is_ascii_alphabetic() {
        return None;
    }
    match ch.to_ascii_uppercase() {
        'J' => Some('I'),
        upper => Some(upper),
    }
}

impl KeySquare {
    /// Builds the key square for `key`.
    ///
    /// The key is uppercased, J is folded into I and non-letters are
    /// dropped. The key letters are followed by the residual alphabet and
    /// only the first occurrence of each letter is kept. A key without
    /// letters yields the canonical square `ABCDE/FGHIK/LMNOP/QRSTU/VWXYZ`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::KeySquare;
    ///
    /// let square = KeySquare::from_key("MONARCHY");
    /// assert_eq!(square.rows()[0], ['M', 'O', 'N', 'A', 'R']);
    /// ```
    pub fn from_key(key: &str) -> Self {
        // index 0 is 'A'; J is never marked because it never gets through fold_letter
        let mut seen = [false; 26];
        let mut letters = Vec::with_capacity(SQUARE_SIZE * SQUARE_SIZE);

        let candidates = key
            .chars()
            .filter_map(fold_letter)
            .chain(RESIDUAL_ALPHABET.chars());
        for ch in candidates {
            let slot = (ch as u8 - b'A') as usize;
            if !seen[slot] {
                seen[slot] = true;
                letters.push(ch);
                if letters.len() == SQUARE_SIZE * SQUARE_SIZE {
                    break;
                }
            }
        }

        let mut cells = [[' '; SQUARE_SIZE]; SQUARE_SIZE];
        for (i, ch) in letters.into_iter().enumerate() {
            cells[i / SQUARE_SIZE][i % SQUARE_SIZE] = ch;
        }

        let square = KeySquare { cells };
        tracing::trace!(%square, "built Playfair key square");
        square
    }

    /// Returns the grid rows.
    pub fn rows(&self) -> &[[char; SQUARE_SIZE]; SQUARE_SIZE] {
        &self.cells
    }

    /// Returns the letter at `(row, col)`; both indices wrap modulo 5.
    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[row % SQUARE_SIZE][col % SQUARE_SIZE]
    }

    /// Finds the `(row, col)` position of `ch`.
    ///
    /// # Errors
    /// Returns [`ClassiCryptError::InvalidCharacter`] if `ch` is not in the
    /// square (lowercase letters, J, and non-letters are never present).
    pub fn locate(&self, ch: char) -> Result<(usize, usize), ClassiCryptError> {
        self.cells
            .iter()
            .enumerate()
            .find_map(|(row, cells)| cells.iter().position(|&c| c == ch).map(|col| (row, col)))
            .ok_or(ClassiCryptError::InvalidCharacter(ch))
    }

    /// Renders the grid as rows of single-character strings.
    pub fn to_matrix(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }
}

impl Default for KeySquare {
    fn default() -> Self {
        Self::from_key("")
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
