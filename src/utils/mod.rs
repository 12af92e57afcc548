//! Shared helpers for the cipher engines.

pub mod alphabet;
