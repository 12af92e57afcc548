//! Request routing: selects a cipher and direction and runs the engine.
//!
//! This is the boundary-facing contract of the library. A
//! [`TransformRequest`] carries the four raw fields as received from a
//! caller; [`process`] validates their presence, resolves the cipher and
//! mode, and returns a [`TransformResponse`] holding the engine output
//! unchanged.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::caesar::Caesar;
use crate::cipher::{Cipher, Mode, Transformation};
use crate::error::ClassiCryptError;
use crate::playfair::Playfair;
use crate::vigenere::Vigenere;

/// The supported ciphers, named as they appear in requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Caesar,
    Vigenere,
    Playfair,
}

impl CipherKind {
    /// All supported ciphers.
    pub const ALL: [CipherKind; 3] = [
        CipherKind::Caesar,
        CipherKind::Vigenere,
        CipherKind::Playfair,
    ];

    /// The request name of the cipher.
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "Caesar",
            CipherKind::Vigenere => "Vigenere",
            CipherKind::Playfair => "Playfair",
        }
    }

    /// Builds the engine for this cipher from a textual key.
    ///
    /// # Errors
    /// Returns [`ClassiCryptError::InvalidKey`] if the key is not valid for
    /// the cipher.
    pub fn build(&self, key: &str) -> Result<Box<dyn Cipher + Send + Sync>, ClassiCryptError> {
        Ok(match self {
            CipherKind::Caesar => Box::new(Caesar::from_key(key)?),
            CipherKind::Vigenere => Box::new(Vigenere::new(key)?),
            CipherKind::Playfair => Box::new(Playfair::new(key)),
        })
    }
}

impl FromStr for CipherKind {
    type Err = ClassiCryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ClassiCryptError::UnsupportedCipher(s.to_string()))
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming transformation request.
///
/// Every field is optional at the type level so that absence is reported
/// as [`ClassiCryptError::MissingField`] instead of a deserialization
/// failure. `key` also accepts a JSON number, as sent for Caesar shifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_key")]
    pub key: Option<String>,
    #[serde(default)]
    pub cipher: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

impl TransformRequest {
    pub fn new(message: &str, key: &str, cipher: &str, mode: &str) -> Self {
        TransformRequest {
            message: Some(message.to_string()),
            key: Some(key.to_string()),
            cipher: Some(cipher.to_string()),
            mode: Some(mode.to_string()),
        }
    }
}

/// Successful transformation as returned to the caller.
///
/// `matrix` is the Playfair key square as 5×5 single-letter strings and is
/// empty for the other ciphers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResponse {
    pub result: String,
    pub steps: Vec<String>,
    #[serde(default)]
    pub matrix: Vec<Vec<String>>,
}

impl From<Transformation> for TransformResponse {
    fn from(t: Transformation) -> Self {
        TransformResponse {
            result: t.result,
            steps: t.steps,
            matrix: t.matrix.map(|square| square.to_matrix()).unwrap_or_default(),
        }
    }
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, ClassiCryptError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ClassiCryptError::MissingField(field)),
    }
}

/// Runs one cipher in one direction over `message`.
///
/// # Errors
/// Propagates key and input errors from the selected engine.
pub fn transform(
    kind: CipherKind,
    mode: Mode,
    message: &str,
    key: &str,
) -> Result<Transformation, ClassiCryptError> {
    tracing::debug!(
        cipher = %kind,
        %mode,
        message_len = message.len(),
        "dispatching transformation"
    );
    kind.build(key)?.apply(mode, message)
}

/// Validates a raw request and runs the requested transformation.
///
/// # Errors
/// - [`ClassiCryptError::MissingField`] if any field is absent or empty.
/// - [`ClassiCryptError::UnsupportedCipher`] for an unknown cipher name.
/// - [`ClassiCryptError::UnsupportedMode`] for a mode other than
///   `encrypt`/`decrypt`.
/// - Any error of the selected engine.
///
/// # Examples
///
/// ```
/// use classicrypt::{process, TransformRequest};
///
/// let response = process(&TransformRequest::new("HELLO", "3", "Caesar", "encrypt")).unwrap();
/// assert_eq!(response.result, "KHOOR");
/// assert!(response.matrix.is_empty());
/// ```
pub fn process(request: &TransformRequest) -> Result<TransformResponse, ClassiCryptError> {
    let message = required(&request.message, "message")?;
    let key = required(&request.key, "key")?;
    let cipher = required(&request.cipher, "cipher")?;
    let mode = required(&request.mode, "mode")?;

    let kind: CipherKind = cipher.parse()?;
    let mode: Mode = mode.parse()?;
    transform(kind, mode, message, key).map(TransformResponse::from)
}

fn deserialize_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct KeyVisitor;

    impl<'de> Visitor<'de> for KeyVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(KeyVisitor)
        }
    }

    deserializer.deserialize_any(KeyVisitor)
}
