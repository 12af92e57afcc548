//! Vigenère cipher: repeating-key polyalphabetic substitution.
//!
//! The key stream advances only on alphabetic characters, so spaces and
//! punctuation are copied through without consuming a key letter.

use crate::cipher::{Cipher, Mode, Transformation};
use crate::error::ClassiCryptError;
use crate::utils::alphabet;

const ALPHABET_LEN: u8 = alphabet::ALPHABET_LEN as u8;

fn key_letter(shift: u8) -> char {
    (b'A' + shift) as char
}

/// Vigenère cipher keyed by a non-empty alphabetic word.
///
/// # Examples
///
/// ```
/// use classicrypt::{Cipher, Vigenere};
///
/// let vigenere = Vigenere::new("LEMON").unwrap();
/// let t = vigenere.encrypt("ATTACKATDAWN").unwrap();
/// assert_eq!(t.result, "LXFOPVEFRNHR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    /// Key letters as shift amounts in `0..26`.
    shifts: Vec<u8>,
}

impl Vigenere {
    /// Creates a Vigenère cipher from `key`, ignoring its case.
    ///
    /// # Errors
    /// Returns [`ClassiCryptError::InvalidKey`] if the key is empty or
    /// contains anything other than ASCII letters.
    pub fn new(key: &str) -> Result<Self, ClassiCryptError> {
        if key.is_empty() {
            return Err(ClassiCryptError::InvalidKey(
                "Vigenere key must not be empty".into(),
            ));
        }
        let shifts = key
            .chars()
            .map(|c| {
                alphabet::letter_index(c).ok_or_else(|| {
                    ClassiCryptError::InvalidKey(format!(
                        "Vigenere key must contain only letters, found '{}'",
                        c
                    ))
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Ok(Vigenere { shifts })
    }

    /// Returns the normalized (uppercase) key.
    pub fn key(&self) -> String {
        self.shifts.iter().map(|&k| key_letter(k)).collect()
    }

    fn transform(&self, text: &str, mode: Mode) -> Transformation {
        let symbol = match mode {
            Mode::Encrypt => '+',
            Mode::Decrypt => '-',
        };
        let mut out = Transformation::with_capacity(text.len());
        let mut j = 0usize;
        for ch in text.chars() {
            if !alphabet::is_alphabetic(ch) {
                out.push_unchanged(ch);
                continue;
            }
            let k = self.shifts[j % self.shifts.len()];
            let shift = match mode {
                Mode::Encrypt => k,
                Mode::Decrypt => ALPHABET_LEN - k,
            };
            let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
            let shifted = (base + (ch as u8 - base + shift) % ALPHABET_LEN) as char;
            out.result.push(shifted);
            out.steps.push(format!(
                "{} → {} ({} {} {})",
                ch,
                shifted,
                ch,
                symbol,
                key_letter(k)
            ));
            j += 1;
        }
        out
    }
}

impl Cipher for Vigenere {
    fn name(&self) -> &'static str {
        "Vigenere"
    }

    fn encrypt(&self, text: &str) -> Result<Transformation, ClassiCryptError> {
        Ok(self.transform(text, Mode::Encrypt))
    }

    fn decrypt(&self, text: &str) -> Result<Transformation, ClassiCryptError> {
        Ok(self.transform(text, Mode::Decrypt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_lemon() {
        let v = Vigenere::new("LEMON").unwrap();
        let t = v.encrypt("ATTACKATDAWN").unwrap();
        assert_eq!(t.result, "LXFOPVEFRNHR");
        assert_eq!(t.steps[0], "A → L (A + L)");
        assert_eq!(t.steps[5], "K → V (K + L)");
    }

    #[test]
    fn test_decrypt_lemon() {
        let v = Vigenere::new("LEMON").unwrap();
        let t = v.decrypt("LXFOPVEFRNHR").unwrap();
        assert_eq!(t.result, "ATTACKATDAWN");
        assert_eq!(t.steps[1], "X → T (X - E)");
    }

    #[test]
    fn test_key_case_is_ignored() {
        let upper = Vigenere::new("LEMON").unwrap();
        let lower = Vigenere::new("lemon").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.key(), "LEMON");
    }

    #[test]
    fn test_non_letters_do_not_consume_key() {
        let v = Vigenere::new("LEMON").unwrap();
        let t = v.encrypt("attack at dawn").unwrap();
        assert_eq!(t.result, "lxfopv ef rnhr");
        assert_eq!(t.steps[6], "  (unchanged)");
        // the 'a' after the space uses key letter E, not M
        assert_eq!(t.steps[7], "a → e (a + E)");
    }

    #[test]
    fn test_preserves_case() {
        let v = Vigenere::new("key").unwrap();
        let t = v.encrypt("HeLLo").unwrap();
        for (a, b) in "HeLLo".chars().zip(t.result.chars()) {
            assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
        }
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            Vigenere::new(""),
            Err(ClassiCryptError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_non_alphabetic_key_rejected() {
        for key in ["LEM0N", "two words", "clé"] {
            assert!(
                matches!(Vigenere::new(key), Err(ClassiCryptError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_key_z_wraps_both_cases() {
        let v = Vigenere::new("z").unwrap();
        let t = v.encrypt("Aa Zz").unwrap();
        assert_eq!(t.result, "Zz Yy");
        assert_eq!(t.steps[0], "A → Z (A + Z)");
        assert_eq!(v.decrypt("Zz Yy").unwrap().result, "Aa Zz");
    }

    #[test]
    fn test_key_a_is_identity() {
        let v = Vigenere::new("A").unwrap();
        assert_eq!(v.encrypt("Same Text").unwrap().result, "Same Text");
    }
}
