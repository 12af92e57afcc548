//! classicrypt: classical ciphers with step-by-step traces.
//!
//! Implements the Caesar, Vigenère and Playfair ciphers for teaching. Every
//! encryption or decryption returns the output text together with a log of
//! the individual transformation steps, and Playfair also returns the key
//! square it worked with. None of these ciphers offer any real security.
//!
//! # Architecture
//!
//! ```text
//! utils::alphabet  (letter classification and mod-26 shift arithmetic)
//!     ↓
//! Caesar · Vigenere · Playfair (KeySquare + Digraph pairing)
//!     ↓ implement the Cipher trait
//! dispatch         (request validation and routing by cipher name and mode)
//!     ↓
//! server           (axum JSON API, behind the `server` feature)
//! ```
//!
//! # Examples
//!
//! Use an engine directly:
//!
//! ```
//! use classicrypt::{Caesar, Cipher};
//!
//! let caesar = Caesar::new(5);
//! let encrypted = caesar.encrypt("Hello, World!").unwrap();
//! assert_eq!(encrypted.result, "Mjqqt, Btwqi!");
//! assert_eq!(encrypted.steps[0], "H → M (H + 5)");
//!
//! let decrypted = caesar.decrypt(&encrypted.result).unwrap();
//! assert_eq!(decrypted.result, "Hello, World!");
//! ```
//!
//! Or go through the dispatcher with raw request fields:
//!
//! ```
//! use classicrypt::{process, TransformRequest};
//!
//! let request = TransformRequest::new("INSTRUMENTS", "MONARCHY", "Playfair", "encrypt");
//! let response = process(&request).unwrap();
//! assert_eq!(response.result, "GATLMZCLRQXA");
//! assert_eq!(response.matrix[0], ["M", "O", "N", "A", "R"]);
//! ```

#![deny(clippy::all)]

pub mod error;

mod caesar;
mod cipher;
pub mod dispatch;
pub mod playfair;
#[cfg(feature = "server")]
pub mod server;
pub mod utils;
mod vigenere;

pub use caesar::Caesar;
pub use cipher::{Cipher, Mode, Transformation};
pub use dispatch::{process, transform, CipherKind, TransformRequest, TransformResponse};
pub use error::ClassiCryptError;
pub use playfair::{Digraph, KeySquare, Playfair, Rule};
pub use vigenere::Vigenere;
