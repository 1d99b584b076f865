//! French morphological reasoning for rule-based grammar checking.
//!
//! This crate is the substrate a grammar checker's correction rules call
//! into: it decides what grammatical forms a word can take, whether two
//! words agree in gender and number, and how to turn one inflected form
//! into another (plural into singular, masculine into feminine, wrong
//! tense into the right one, near-homophone into the intended word).
//!
//! The pieces:
//!
//! - [`morphdot_tags`] (re-exported as [`tags`]): the morphology-tag data
//!   model, the certainty predicates rule conditions are built from, and
//!   the disambiguation protocol that narrows a token's candidate tags.
//! - [`morphdot_inflect`] (re-exported as [`inflect`]): the conjugation
//!   engine, the irregular feminine/plural tables and the phonetic index.
//! - [`suggest`]: the agreement and suggestion engine combining all of the
//!   above with a caller-supplied [`Lexicon`].
//!
//! Everything is a pure function over immutable static tables; the only
//! mutable state is the per-token candidate tag set owned by the caller.

pub use morphdot_inflect as inflect;
pub use morphdot_tags as tags;

pub use morphdot_tags::{
    Gender, Lexicon, MemoryLexicon, Morph, MorphSet, Number, ParticipleForm, Person, Pos, Tense,
    VerbGroup,
};

pub use morphdot_inflect::conjug::{
    Auxiliary, ConjugationError, ConjugationOptions, ConjugationTable, Group, Pronominal, Verb,
    VerbClass,
};

pub mod suggest;

mod verb_info;
pub use verb_info::{verb_info, VerbInfo};
