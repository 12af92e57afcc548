//! Common interface shared by the cipher engines.

use std::fmt;
use std::str::FromStr;

use crate::error::ClassiCryptError;
use crate::playfair::KeySquare;

/// Direction of a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl FromStr for Mode {
    type Err = ClassiCryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            other => Err(ClassiCryptError::UnsupportedMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => write!(f, "encrypt"),
            Mode::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Output of a single encryption or decryption.
///
/// `steps` holds one human-readable entry per input character (Caesar,
/// Vigenère) or per digraph (Playfair), in input order. `matrix` is only
/// populated by Playfair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    pub result: String,
    pub steps: Vec<String>,
    pub matrix: Option<KeySquare>,
}

impl Transformation {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Transformation {
            result: String::with_capacity(capacity),
            steps: Vec::with_capacity(capacity),
            matrix: None,
        }
    }

    /// Records a character copied to the output untouched.
    pub(crate) fn push_unchanged(&mut self, ch: char) {
        self.result.push(ch);
        self.steps.push(format!("{} (unchanged)", ch));
    }
}

/// A keyed classical cipher.
///
/// Implementations hold an already validated key, so constructing one is
/// where key errors surface. Both directions are pure functions of the key
/// and the text.
pub trait Cipher {
    /// Short human-readable name of the cipher.
    fn name(&self) -> &'static str;

    /// Encrypts `text`, recording each transformation step.
    fn encrypt(&self, text: &str) -> Result<Transformation, ClassiCryptError>;

    /// Decrypts `text`, recording each transformation step.
    fn decrypt(&self, text: &str) -> Result<Transformation, ClassiCryptError>;

    /// Runs the direction selected by `mode`.
    fn apply(&self, mode: Mode, text: &str) -> Result<Transformation, ClassiCryptError> {
        match mode {
            Mode::Encrypt => self.encrypt(text),
            Mode::Decrypt => self.decrypt(text),
        }
    }
}
