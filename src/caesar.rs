//! Caesar cipher: fixed-shift substitution over the whole text.

use crate::cipher::{Cipher, Transformation};
use crate::error::ClassiCryptError;
use crate::utils::alphabet;

/// Caesar cipher keyed by a signed shift.
///
/// # Examples
///
/// ```
/// use classicrypt::{Caesar, Cipher};
///
/// let caesar = Caesar::new(3);
/// assert_eq!(caesar.encrypt("HELLO").unwrap().result, "KHOOR");
/// assert_eq!(caesar.decrypt("KHOOR").unwrap().result, "HELLO");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: i64,
}

impl Caesar {
    /// Creates a Caesar cipher with the given shift. Any value is accepted
    /// and reduced modulo 26 when applied.
    pub fn new(shift: i64) -> Self {
        Caesar { shift }
    }

    /// Parses a textual key as a base-10 integer shift.
    ///
    /// Surrounding whitespace and a leading sign are accepted.
    ///
    /// # Errors
    /// Returns [`ClassiCryptError::InvalidKey`] if the key is empty,
    /// fractional, or not a number.
    ///
    /// ```
    /// use classicrypt::Caesar;
    ///
    /// assert!(Caesar::from_key("-7").is_ok());
    /// assert!(Caesar::from_key("3.5").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self, ClassiCryptError> {
        let trimmed = key.trim();
        trimmed.parse::<i64>().map(Caesar::new).map_err(|_| {
            ClassiCryptError::InvalidKey(format!(
                "Caesar key must be an integer, got '{}'",
                trimmed
            ))
        })
    }

    /// Returns the configured shift.
    pub fn shift(&self) -> i64 {
        self.shift
    }

    fn transform(text: &str, shift: i64) -> Transformation {
        let mut out = Transformation::with_capacity(text.len());
        for ch in text.chars() {
            match alphabet::shift_letter(ch, shift) {
                Some(shifted) => {
                    out.result.push(shifted);
                    out.steps
                        .push(format!("{} → {} ({} + {})", ch, shifted, ch, shift));
                }
                None => out.push_unchanged(ch),
            }
        }
        out
    }
}

impl Cipher for Caesar {
    fn name(&self) -> &'static str {
        "Caesar"
    }

    fn encrypt(&self, text: &str) -> Result<Transformation, ClassiCryptError> {
        Ok(Self::transform(text, self.shift))
    }

    /// Encryption with the negated shift.
    fn decrypt(&self, text: &str) -> Result<Transformation, ClassiCryptError> {
        // i64::MIN has no negation; fall back to its residue
        let negated = self
            .shift
            .checked_neg()
            .unwrap_or_else(|| -i64::from(alphabet::normalize(self.shift)));
        Ok(Self::transform(text, negated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_hello() {
        let t = Caesar::new(3).encrypt("HELLO").unwrap();
        assert_eq!(t.result, "KHOOR");
        assert_eq!(t.steps.len(), 5);
        assert_eq!(t.steps[0], "H → K (H + 3)");
        assert!(t.matrix.is_none());
    }

    #[test]
    fn test_preserves_case_and_punctuation() {
        let t = Caesar::new(5).encrypt("Hello, World!").unwrap();
        assert_eq!(t.result, "Mjqqt, Btwqi!");
        assert_eq!(t.steps[5], ", (unchanged)");
        assert_eq!(t.steps[6], "  (unchanged)");
    }

    #[test]
    fn test_decrypt_steps_show_negated_key() {
        let t = Caesar::new(3).decrypt("KHOOR").unwrap();
        assert_eq!(t.result, "HELLO");
        assert_eq!(t.steps[0], "K → H (K + -3)");
    }

    #[test]
    fn test_large_and_negative_shifts() {
        assert_eq!(Caesar::new(29).encrypt("abc").unwrap().result, "def");
        assert_eq!(Caesar::new(-29).encrypt("def").unwrap().result, "abc");
        assert_eq!(Caesar::new(-1).encrypt("A").unwrap().result, "Z");
    }

    #[test]
    fn test_extreme_shift_roundtrip() {
        for shift in [i64::MAX, i64::MIN, i64::MIN + 1] {
            let caesar = Caesar::new(shift);
            let enc = caesar.encrypt("Attack at Dawn").unwrap();
            assert_eq!(caesar.decrypt(&enc.result).unwrap().result, "Attack at Dawn");
        }
    }

    #[test]
    fn test_from_key_valid() {
        assert_eq!(Caesar::from_key("3").unwrap().shift(), 3);
        assert_eq!(Caesar::from_key(" -12 ").unwrap().shift(), -12);
        assert_eq!(Caesar::from_key("+4").unwrap().shift(), 4);
    }

    #[test]
    fn test_from_key_invalid() {
        for key in ["", "abc", "3.5", "3abc", "1e3"] {
            assert!(
                matches!(Caesar::from_key(key), Err(ClassiCryptError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_output_length_matches_input() {
        let text = "ünïcode & ascii 123";
        let t = Caesar::new(7).encrypt(text).unwrap();
        assert_eq!(t.result.chars().count(), text.chars().count());
        assert_eq!(t.steps.len(), text.chars().count());
    }

    #[test]
    fn test_empty_text() {
        let t = Caesar::new(3).encrypt("").unwrap();
        assert!(t.result.is_empty());
        assert!(t.steps.is_empty());
    }
}
