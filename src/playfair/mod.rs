//! Playfair cipher: digraph substitution over a 5×5 key square.
//!
//! ```text
//! key  ──► KeySquare::from_key ──► 5×5 grid (J folded into I)
//! text ──► pair_plaintext / pair_ciphertext ──► [Digraph]
//!                     │
//!                     ▼
//!      same row │ same column │ rectangle swap
//! ```

pub mod digraph;
pub mod square;

use std::fmt;

use crate::cipher::{Cipher, Mode, Transformation};
use crate::error::ClassiCryptError;

pub use digraph::Digraph;
pub use square::KeySquare;

/// Rule applied to a digraph, determined by the letters' positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    SameRow,
    SameColumn,
    Rectangle,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::SameRow => write!(f, "Same row"),
            Rule::SameColumn => write!(f, "Same column"),
            Rule::Rectangle => write!(f, "Rectangle swap"),
        }
    }
}

/// Playfair cipher bound to the key square built from its key.
///
/// # Examples
///
/// ```
/// use classicrypt::{Cipher, Playfair};
///
/// let playfair = Playfair::new("MONARCHY");
/// let t = playfair.encrypt("instruments").unwrap();
/// assert_eq!(t.result, "GATLMZCLRQXA");
/// assert_eq!(t.steps[0], "IN → Rectangle swap → GA");
/// assert!(t.matrix.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfair {
    square: KeySquare,
}

impl Playfair {
    /// Creates a Playfair cipher. Every key is accepted; only its letters
    /// contribute to the square.
    pub fn new(key: &str) -> Self {
        Playfair {
            square: KeySquare::from_key(key),
        }
    }

    /// Returns the key square.
    pub fn square(&self) -> &KeySquare {
        &self.square
    }

    /// Substitutes a single digraph, returning the output and the rule used.
    ///
    /// # Errors
    /// Returns [`ClassiCryptError::InvalidCharacter`] if either letter is
    /// not in the square.
    pub fn substitute(
        &self,
        pair: Digraph,
        mode: Mode,
    ) -> Result<(Digraph, Rule), ClassiCryptError> {
        let (row1, col1) = self.square.locate(pair.first)?;
        let (row2, col2) = self.square.locate(pair.second)?;
        // one step forward when encrypting, four (one back) when decrypting
        let step = match mode {
            Mode::Encrypt => 1,
            Mode::Decrypt => square::SQUARE_SIZE - 1,
        };
        let sq = &self.square;
        let substituted = if row1 == row2 {
            (
                Digraph::new(sq.get(row1, col1 + step), sq.get(row2, col2 + step)),
                Rule::SameRow,
            )
        } else if col1 == col2 {
            (
                Digraph::new(sq.get(row1 + step, col1), sq.get(row2 + step, col2)),
                Rule::SameColumn,
            )
        } else {
            (
                Digraph::new(sq.get(row1, col2), sq.get(row2, col1)),
                Rule::Rectangle,
            )
        };
        Ok(substituted)
    }

    fn transform(
        &self,
        pairs: &[Digraph],
        mode: Mode,
    ) -> Result<Transformation, ClassiCryptError> {
        let mut out = Transformation::with_capacity(pairs.len() * 2);
        for &pair in pairs {
            let (output, rule) = self.substitute(pair, mode)?;
            out.steps.push(format!("{} → {} → {}", pair, rule, output));
            out.result.push(output.first);
            out.result.push(output.second);
        }
        out.matrix = Some(self.square);
        Ok(out)
    }
}

impl Cipher for Playfair {
    fn name(&self) -> &'static str {
        "Playfair"
    }

    fn encrypt(&self, text: &str) -> Result<Transformation, ClassiCryptError> {
        let pairs = digraph::pair_plaintext(text);
        tracing::debug!(digraphs = pairs.len(), "Playfair encrypt");
        self.transform(&pairs, Mode::Encrypt)
    }

    fn decrypt(&self, text: &str) -> Result<Transformation, ClassiCryptError> {
        let pairs = digraph::pair_ciphertext(text)?;
        tracing::debug!(digraphs = pairs.len(), "Playfair decrypt");
        self.transform(&pairs, Mode::Decrypt)
    }
}
