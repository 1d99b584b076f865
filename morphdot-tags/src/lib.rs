//! Morphology tags and agreement predicates.
//!
//! This crate provides the parsed representation of dictionary morphology
//! tags, the certainty predicates used by grammar rule conditions, and the
//! disambiguation operations that narrow a token's candidate tag set.

mod disambig;

mod lexicon;
pub use lexicon::{Lexicon, MemoryLexicon};

mod tag;
pub use tag::{
    Gender, Morph, MorphSet, Number, ParseTagError, ParticipleForm, Person, Pos, Tense, VerbGroup,
};
