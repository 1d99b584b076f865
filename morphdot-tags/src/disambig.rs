//! Disambiguation operations.
//!
//! Grammar rules progressively narrow a token's candidate morphology as
//! more context is examined. Every narrowing operation is best-effort: if
//! it would leave the token without any candidate, the operation is
//! discarded and the original set is kept, so that a mistaken rule can
//! never strip a token of its analysis.

use log::debug;

use crate::tag::{Morph, MorphSet};

impl MorphSet {
    /// Keep only the candidates satisfying the predicate.
    ///
    /// Does nothing when no candidate matches. Returns whether the set was
    /// narrowed.
    pub fn select<F>(&mut self, keep: F) -> bool
    where
        F: Fn(&Morph) -> bool,
    {
        let kept: Vec<Morph> = self.iter().filter(|m| keep(m)).cloned().collect();
        self.replace_if_nonempty(kept)
    }

    /// Drop the candidates satisfying the predicate.
    ///
    /// Does nothing when every candidate matches. Returns whether the set
    /// was narrowed.
    pub fn exclude<F>(&mut self, drop: F) -> bool
    where
        F: Fn(&Morph) -> bool,
    {
        let kept: Vec<Morph> = self.iter().filter(|m| !drop(m)).cloned().collect();
        self.replace_if_nonempty(kept)
    }

    /// Keep the candidates satisfying the predicate, but only if *every*
    /// remaining candidate would satisfy it.
    ///
    /// The all-or-nothing variant used once a rule has proven that the word
    /// belongs to a closed class: either the whole set already conforms
    /// after filtering, or nothing is changed.
    pub fn restrict<F>(&mut self, keep: F) -> bool
    where
        F: Fn(&Morph) -> bool,
    {
        if self.is_empty() || !self.iter().any(|m| keep(m)) {
            debug!("restriction rejected, would empty the candidate set");
            return false;
        }
        self.select(keep)
    }

    /// Replace the candidate set with explicit tags.
    ///
    /// Used when external context fully determines the morphology; this is
    /// the one operation allowed to produce a set that differs from the
    /// dictionary's answer. An empty replacement is rejected.
    pub fn define<I, S>(&mut self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let morphs: Vec<Morph> = tags
            .into_iter()
            .map(|tag| Morph::parse(tag.as_ref()))
            .collect();
        self.replace_if_nonempty(morphs)
    }

    /// Add one candidate tag to the set.
    pub fn add_tag(&mut self, tag: &str) {
        self.push(Morph::parse(tag));
    }

    /// Textually rewrite every candidate tag and reparse it.
    ///
    /// Used to strip a feature that no longer applies, e.g. demoting a
    /// past-participle tag to a plain adjective tag.
    pub fn rewrite(&mut self, pattern: &str, replacement: &str) {
        for morph in self.morphs_mut() {
            let raw = morph.as_str().replace(pattern, replacement);
            *morph = Morph::parse(&raw);
        }
    }

    fn replace_if_nonempty(&mut self, morphs: Vec<Morph>) -> bool {
        if morphs.is_empty() {
            debug!("narrowing rejected, would empty the candidate set");
            return false;
        }
        let changed = morphs.len() != self.len();
        *self.morphs_mut() = morphs;
        changed
    }
}

#[cfg(test)]
mod tests {
    use crate::tag::{MorphSet, Pos, Tense};

    fn ambiguous() -> MorphSet {
        MorphSet::from_tags(vec![
            ">ferme/:N:f:s",
            ">ferme/:A:e:s",
            ">fermer/:V1_:Ip:1s",
        ])
    }

    #[test]
    fn select_keeps_matching_candidates() {
        let mut set = ambiguous();
        assert!(set.select(|m| m.has_pos(Pos::Noun)));
        assert_eq!(set.len(), 1);
        assert!(set.is_noun());
    }

    #[test]
    fn select_never_empties() {
        let mut set = ambiguous();
        assert!(!set.select(|m| m.has_pos(Pos::Title)));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn exclude_drops_matching_candidates() {
        let mut set = ambiguous();
        assert!(set.exclude(|m| m.is_verb()));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn exclude_never_empties() {
        let mut set = ambiguous();
        assert!(!set.exclude(|_| true));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn restrict_is_all_or_nothing() {
        let mut set = ambiguous();
        assert!(set.restrict(|m| !m.is_verb()));
        assert_eq!(set.len(), 2);

        let mut set = MorphSet::from_tags(vec![">fermer/:V1_:Ip:1s"]);
        assert!(!set.restrict(|m| m.has_pos(Pos::Noun)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn define_replaces_the_set() {
        let mut set = ambiguous();
        assert!(set.define(vec![">ferme/:N:f:s"]));
        assert_eq!(set.len(), 1);
        assert!(set.is_noun());

        assert!(!set.define(Vec::<&str>::new()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rewrite_reparses_candidates() {
        let mut set = MorphSet::from_tags(vec![">fermé/:V1_:Q:m:s"]);
        set.rewrite(":V1_:Q", ":A");
        assert!(set.is_adjective());
        assert!(!set.any(|m| m.has_tense(Tense::PastParticiple)));
    }
}
