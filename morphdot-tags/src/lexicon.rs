//! The dictionary capability consumed by the morphology core.

use std::collections::HashMap;

use crate::tag::MorphSet;

/// A dictionary of word forms and their morphologies.
///
/// This is the contract the morphology core expects from the compiled
/// spell-checker lexicon. All lookups are total: an unknown word yields an
/// empty result, never an error.
pub trait Lexicon {
    /// The candidate morphologies of a word form. Empty if unknown.
    fn morph(&self, word: &str) -> MorphSet;

    /// The candidate lemmas of a flexed form. Empty if unknown.
    fn lemmas(&self, word: &str) -> Vec<String> {
        self.morph(word)
            .lemmas()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Does the word form exist?
    ///
    /// Used when probing constructed candidate forms, e.g. whether
    /// `word + "s"` exists when testing for a regular plural.
    fn is_valid(&self, word: &str) -> bool;
}

impl<L> Lexicon for &L
where
    L: Lexicon + ?Sized,
{
    fn morph(&self, word: &str) -> MorphSet {
        (**self).morph(word)
    }

    fn lemmas(&self, word: &str) -> Vec<String> {
        (**self).lemmas(word)
    }

    fn is_valid(&self, word: &str) -> bool {
        (**self).is_valid(word)
    }
}

/// An in-memory lexicon.
///
/// The reference `Lexicon` implementation, used in tests and by embedders
/// that load their word list from elsewhere.
#[derive(Clone, Debug, Default)]
pub struct MemoryLexicon {
    entries: HashMap<String, Vec<String>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        MemoryLexicon {
            entries: HashMap::new(),
        }
    }

    /// Insert a word form with its morphology tags.
    pub fn insert<W, I, S>(&mut self, word: W, tags: I)
    where
        W: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(word.into())
            .or_default()
            .extend(tags.into_iter().map(Into::into));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lexicon for MemoryLexicon {
    fn morph(&self, word: &str) -> MorphSet {
        match self.entries.get(word) {
            Some(tags) => MorphSet::from_tags(tags),
            None => MorphSet::new(),
        }
    }

    fn is_valid(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }
}

#[cfg(test)]
mod tests {
    use super::{Lexicon, MemoryLexicon};

    #[test]
    fn unknown_word_is_empty() {
        let lexicon = MemoryLexicon::new();
        assert!(lexicon.morph("plonk").is_empty());
        assert!(lexicon.lemmas("plonk").is_empty());
        assert!(!lexicon.is_valid("plonk"));
    }

    #[test]
    fn lookup_returns_candidates() {
        let mut lexicon = MemoryLexicon::new();
        lexicon.insert("suis", vec![">être/:V0e:Ip:1s", ">suivre/:V3_:Ip:1s"]);

        let morph = lexicon.morph("suis");
        assert_eq!(morph.len(), 2);
        assert_eq!(lexicon.lemmas("suis"), vec!["être", "suivre"]);
        assert!(lexicon.is_valid("suis"));
    }
}
