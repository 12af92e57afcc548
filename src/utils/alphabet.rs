//! Letter classification and shift arithmetic over the 26-letter Latin
//! alphabet.
//!
//! Shared by the Caesar and Vigenère engines. Only ASCII letters are
//! considered alphabetic; every other character is left to the caller to
//! pass through unchanged.

/// Size of the alphabet all shift arithmetic is performed in.
pub const ALPHABET_LEN: i64 = 26;

/// Returns `true` if `ch` is an ASCII letter of either case.
pub fn is_alphabetic(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Returns the code-point base used to map a letter into `0..26`.
///
/// # Parameters
/// - `ch`: The character to classify.
///
/// # Returns
/// `Some(b'A')` for uppercase letters, `Some(b'a')` for lowercase letters,
/// `None` for anything else.
pub fn case_base(ch: char) -> Option<u8> {
    if ch.is_ascii_uppercase() {
        Some(b'A')
    } else if ch.is_ascii_lowercase() {
        Some(b'a')
    } else {
        None
    }
}

/// Returns the `0..26` position of an ASCII letter, ignoring case.
pub fn letter_index(ch: char) -> Option<u8> {
    case_base(ch).map(|base| ch as u8 - base)
}

/// Reduces `value` into `0..26`, never producing a negative result.
///
/// Equivalent to `((value mod 26) + 26) mod 26`.
pub fn normalize(value: i64) -> u8 {
    value.rem_euclid(ALPHABET_LEN) as u8
}

/// Shifts a letter by `shift` positions within its own case alphabet.
///
/// # Parameters
/// - `ch`: The character to shift.
/// - `shift`: Any signed shift; reduced modulo 26 before use.
///
/// # Returns
/// The shifted letter with the case of `ch`, or `None` if `ch` is not an
/// ASCII letter.
pub fn shift_letter(ch: char, shift: i64) -> Option<char> {
    let base = case_base(ch)?;
    let offset = (ch as u8 - base) as i64 + normalize(shift) as i64;
    Some((base + normalize(offset)) as char)
}
