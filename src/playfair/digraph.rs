//! Digraph pairing of Playfair plaintext and ciphertext.

use std::fmt;

use super::square::fold_letter;
use crate::error::ClassiCryptError;

/// Letter inserted to split doubled letters and complete a trailing single.
pub const FILLER: char = 'X';

/// Filler used when the letter needing a partner is itself [`FILLER`].
pub const ALTERNATE_FILLER: char = 'Q';

/// An ordered pair of uppercase letters processed as one Playfair unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digraph {
    pub first: char,
    pub second: char,
}

impl Digraph {
    pub fn new(first: char, second: char) -> Self {
        Digraph { first, second }
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

fn filler_for(letter: char) -> char {
    if letter == FILLER {
        ALTERNATE_FILLER
    } else {
        FILLER
    }
}

/// Pairs plaintext into digraphs ready for encryption.
///
/// The text is uppercased, J is folded into I and non-letters are dropped.
/// Letters are then paired left to right: when the next letter is missing
/// or repeats the current one, a filler becomes the partner and the next
/// letter starts the following pair.
///
/// The filler is [`FILLER`] except when the lone letter is itself `X`, which
/// takes [`ALTERNATE_FILLER`] so no digraph ever holds two equal letters.
///
/// # Examples
///
/// ```
/// use classicrypt::playfair::digraph::pair_plaintext;
///
/// let pairs: Vec<String> = pair_plaintext("balloon").iter().map(|d| d.to_string()).collect();
/// assert_eq!(pairs, ["BA", "LX", "LO", "ON"]);
///
/// let pairs: Vec<String> = pair_plaintext("xx").iter().map(|d| d.to_string()).collect();
/// assert_eq!(pairs, ["XQ", "XQ"]);
/// ```
pub fn pair_plaintext(text: &str) -> Vec<Digraph> {
    let mut letters = text.chars().filter_map(fold_letter).peekable();
    let mut pairs = Vec::new();
    while let Some(first) = letters.next() {
        let second = match letters.peek() {
            Some(&next) if next != first => {
                letters.next();
                next
            }
            _ => filler_for(first),
        };
        pairs.push(Digraph::new(first, second));
    }
    pairs
}

/// Splits ciphertext into consecutive digraphs for decryption.
///
/// The text is uppercased and non-letters are dropped; no filler is added
/// and J is left as is.
///
/// # Errors
/// Returns [`ClassiCryptError::MalformedInput`] if an odd number of letters
/// remains.
pub fn pair_ciphertext(text: &str) -> Result<Vec<Digraph>, ClassiCryptError> {
    let letters: Vec<char> = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if !letters.len().is_multiple_of(2) {
        return Err(ClassiCryptError::MalformedInput(format!(
            "Playfair ciphertext must contain an even number of letters, got {}",
            letters.len()
        )));
    }
    Ok(letters
        .chunks_exact(2)
        .map(|pair| Digraph::new(pair[0], pair[1]))
        .collect())
}
