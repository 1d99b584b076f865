//! Inflection engine and static form tables.
//!
//! This crate derives French word forms: the suffix-code codec shared by
//! every derivation table, the verb conjugation engine and its paradigm
//! tables, the irregular feminine/plural tables with the regular
//! ending-driven derivation rules, and the phonetic-equivalence index used
//! as a last-resort suggestion source.

pub mod conjug;

pub mod mfsp;

pub mod phonet;

mod suffix;
pub use suffix::{apply_suffix_code, decode_or_diagnose, SuffixCodeError};
