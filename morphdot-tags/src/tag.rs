use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a feature code from its colon notation.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown tag code: '{0}'")]
pub struct ParseTagError(pub String);

/// Part of speech carried by a morphology tag.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Pos {
    Noun,
    Adjective,
    Adverb,
    NegationAdverb,
    InterrogativeAdverb,
    Interjection,
    NumberWord,
    RomanNumeral,
    FirstName,
    FamilyName,
    ProperNoun,
    Title,
    Grammatical,
    Preposition,
    Determiner,
    Pronoun,
    Conjunction,
    Verb(VerbGroup),
}

/// Conjugation group of a verb tag.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum VerbGroup {
    /// The auxiliary *avoir*.
    AuxiliaryAvoir,
    /// The auxiliary *être*.
    AuxiliaryEtre,
    First,
    Second,
    Third,
}

/// Grammatical gender.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Gender {
    Masculine,
    Feminine,
    /// Both genders (or mixed candidates).
    Epicene,
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Number {
    Singular,
    Plural,
    /// Number-invariable (or mixed candidates).
    Invariable,
}

/// Verb person and number.
///
/// `FirstSingularInterrogative` is the euphonic first-singular variant used
/// after subject inversion (*chanté-je*, *puis-je*). The lexicon historically
/// spells it both `:1ś` and `:1ŝ`; both parse to this variant.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Person {
    FirstSingular,
    FirstSingularInterrogative,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl FromStr for Person {
    type Err = ParseTagError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim_start_matches(':') {
            "1s" => Ok(Person::FirstSingular),
            "1ś" | "1ŝ" => Ok(Person::FirstSingularInterrogative),
            "2s" => Ok(Person::SecondSingular),
            "3s" => Ok(Person::ThirdSingular),
            "1p" => Ok(Person::FirstPlural),
            "2p" => Ok(Person::SecondPlural),
            "3p" | "3p!" => Ok(Person::ThirdPlural),
            _ => Err(ParseTagError(code.to_owned())),
        }
    }
}

/// Verb tense or mood.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Tense {
    Infinitive,
    PresentParticiple,
    PastParticiple,
    Present,
    Imperfect,
    SimplePast,
    Future,
    Conditional,
    SubjunctivePresent,
    SubjunctiveImperfect,
    Imperative,
}

impl FromStr for Tense {
    type Err = ParseTagError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim_start_matches(':') {
            "Y" => Ok(Tense::Infinitive),
            "P" => Ok(Tense::PresentParticiple),
            "Q" => Ok(Tense::PastParticiple),
            "Ip" => Ok(Tense::Present),
            "Iq" => Ok(Tense::Imperfect),
            "Is" => Ok(Tense::SimplePast),
            "If" => Ok(Tense::Future),
            "K" => Ok(Tense::Conditional),
            "Sp" => Ok(Tense::SubjunctivePresent),
            "Sq" => Ok(Tense::SubjunctiveImperfect),
            "E" => Ok(Tense::Imperative),
            _ => Err(ParseTagError(code.to_owned())),
        }
    }
}

/// Agreement form of a past participle.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ParticipleForm {
    MascSing,
    MascPlur,
    FemSing,
    FemPlur,
}

impl ParticipleForm {
    /// Select the agreement form for a gender and number requirement.
    pub fn agreeing(gender: Gender, number: Number) -> Self {
        match (gender, number) {
            (Gender::Feminine, Number::Plural) => ParticipleForm::FemPlur,
            (Gender::Feminine, _) => ParticipleForm::FemSing,
            (_, Number::Plural) => ParticipleForm::MascPlur,
            (_, _) => ParticipleForm::MascSing,
        }
    }
}

impl FromStr for ParticipleForm {
    type Err = ParseTagError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim_start_matches(':') {
            "Q1" => Ok(ParticipleForm::MascSing),
            "Q2" => Ok(ParticipleForm::MascPlur),
            "Q3" => Ok(ParticipleForm::FemSing),
            "Q4" => Ok(ParticipleForm::FemPlur),
            _ => Err(ParseTagError(code.to_owned())),
        }
    }
}

/// One parsed morphology tag.
///
/// A tag string is an optional embedded lemma (`>lemma/`) followed by
/// colon-prefixed feature codes, e.g. `>heureux/:A:m:s` or `:V1_:Ip:3s`.
/// Parsing is lenient: codes that are not part of the feature vocabulary
/// are retained in the raw string but carry no typed feature, so a
/// malformed tag degrades to an inert `Morph` instead of an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Morph {
    raw: String,
    lemma: Option<String>,
    pos: Vec<Pos>,
    gender: Option<Gender>,
    number: Option<Number>,
    persons: Vec<Person>,
    tenses: Vec<Tense>,
}

impl Morph {
    /// Parse a tag string.
    pub fn parse(tag: &str) -> Self {
        let mut morph = Morph {
            raw: tag.to_owned(),
            lemma: None,
            pos: Vec::new(),
            gender: None,
            number: None,
            persons: Vec::new(),
            tenses: Vec::new(),
        };

        let mut rest = tag;
        if let Some(stripped) = rest.strip_prefix('>') {
            let end = stripped
                .find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
                .unwrap_or_else(|| stripped.len());
            if end > 0 {
                morph.lemma = Some(stripped[..end].to_owned());
            }
            rest = &stripped[end..];
        }

        for chunk in rest.split(':').skip(1) {
            // Sub-dictionary and annex codes follow the feature codes.
            let code = chunk
                .split(|c| c == '/' || c == ';' || c == '#')
                .next()
                .unwrap_or("");
            morph.push_code(code);
        }

        morph
    }

    fn push_code(&mut self, code: &str) {
        match code {
            "N" => self.pos.push(Pos::Noun),
            "A" => self.pos.push(Pos::Adjective),
            "W" => self.pos.push(Pos::Adverb),
            "X" => self.pos.push(Pos::NegationAdverb),
            "U" => self.pos.push(Pos::InterrogativeAdverb),
            "J" => self.pos.push(Pos::Interjection),
            "B" => self.pos.push(Pos::NumberWord),
            "Br" => self.pos.push(Pos::RomanNumeral),
            "M1" => self.pos.push(Pos::FirstName),
            "M2" => self.pos.push(Pos::FamilyName),
            "MP" => self.pos.push(Pos::ProperNoun),
            "T" => self.pos.push(Pos::Title),
            "G" => self.pos.push(Pos::Grammatical),
            "R" | "Rv" => self.pos.push(Pos::Preposition),
            "m" => {
                self.gender.get_or_insert(Gender::Masculine);
            }
            "f" => {
                self.gender.get_or_insert(Gender::Feminine);
            }
            "e" => {
                self.gender.get_or_insert(Gender::Epicene);
            }
            "s" => {
                self.number.get_or_insert(Number::Singular);
            }
            "p" => {
                self.number.get_or_insert(Number::Plural);
            }
            "i" => {
                self.number.get_or_insert(Number::Invariable);
            }
            _ => {
                if let Ok(person) = code.parse::<Person>() {
                    self.persons.push(person);
                } else if let Ok(tense) = code.parse::<Tense>() {
                    self.tenses.push(tense);
                } else if let Some(group) = parse_verb_code(code) {
                    self.pos.push(Pos::Verb(group));
                } else if code.starts_with('D') {
                    self.pos.push(Pos::Determiner);
                } else if code.starts_with('O') {
                    self.pos.push(Pos::Pronoun);
                } else if code.starts_with('C') {
                    self.pos.push(Pos::Conjunction);
                }
                // Anything else (locutions, prefixes, non-alphanumeric
                // signs) carries no feature relevant to the predicates.
            }
        }
    }

    /// The raw tag string this morph was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The lemma embedded in the tag, if any.
    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn number(&self) -> Option<Number> {
        self.number
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn tenses(&self) -> &[Tense] {
        &self.tenses
    }

    pub fn has_pos(&self, pos: Pos) -> bool {
        self.pos.contains(&pos)
    }

    pub fn has_person(&self, person: Person) -> bool {
        self.persons.contains(&person)
    }

    pub fn has_tense(&self, tense: Tense) -> bool {
        self.tenses.contains(&tense)
    }

    /// Is this a verb tag (any group)?
    pub fn is_verb(&self) -> bool {
        self.verb_group().is_some()
    }

    /// The verb group, if this is a verb tag.
    pub fn verb_group(&self) -> Option<VerbGroup> {
        self.pos.iter().find_map(|pos| match pos {
            Pos::Verb(group) => Some(*group),
            _ => None,
        })
    }

    /// Is this a conjugated (finite) verb form?
    pub fn is_conjugated(&self) -> bool {
        !self.persons.is_empty()
    }

    fn is_proper_noun(&self) -> bool {
        self.has_pos(Pos::FirstName)
            || self.has_pos(Pos::FamilyName)
            || self.has_pos(Pos::ProperNoun)
            || self.has_pos(Pos::Title)
    }
}

fn parse_verb_code(code: &str) -> Option<VerbGroup> {
    let mut chars = code.chars();
    if chars.next() != Some('V') {
        return None;
    }
    match chars.next() {
        Some('0') => match chars.next() {
            Some('a') => Some(VerbGroup::AuxiliaryAvoir),
            Some('e') => Some(VerbGroup::AuxiliaryEtre),
            _ => None,
        },
        Some('1') => Some(VerbGroup::First),
        Some('2') => Some(VerbGroup::Second),
        Some('3') => Some(VerbGroup::Third),
        _ => None,
    }
}

impl fmt::Display for Morph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Morph {
    fn from(tag: &str) -> Self {
        Morph::parse(tag)
    }
}

/// The candidate morphology set of a word form.
///
/// A word form may be ambiguous between several analyses; each analysis is
/// one `Morph`. The *is* predicates hold when every candidate carries the
/// feature (certain), the *maybe* predicates when at least one does
/// (possible). An empty set satisfies every *is* predicate vacuously and no
/// *maybe* predicate, mirroring the quantifier semantics of the predicates.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MorphSet {
    morphs: Vec<Morph>,
}

impl MorphSet {
    pub fn new() -> Self {
        MorphSet { morphs: Vec::new() }
    }

    /// Parse a set from raw tag strings.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        MorphSet {
            morphs: tags
                .into_iter()
                .map(|tag| Morph::parse(tag.as_ref()))
                .collect(),
        }
    }

    pub fn push(&mut self, morph: Morph) {
        self.morphs.push(morph);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Morph> {
        self.morphs.iter()
    }

    pub fn len(&self) -> usize {
        self.morphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphs.is_empty()
    }

    pub(crate) fn morphs_mut(&mut self) -> &mut Vec<Morph> {
        &mut self.morphs
    }

    /// All candidate lemmas, in candidate order.
    pub fn lemmas(&self) -> Vec<&str> {
        let mut lemmas = Vec::new();
        for morph in &self.morphs {
            if let Some(lemma) = morph.lemma() {
                if !lemmas.contains(&lemma) {
                    lemmas.push(lemma);
                }
            }
        }
        lemmas
    }

    /// Does every candidate satisfy the predicate?
    pub fn all<F>(&self, pred: F) -> bool
    where
        F: Fn(&Morph) -> bool,
    {
        self.morphs.iter().all(pred)
    }

    /// Does at least one candidate satisfy the predicate?
    pub fn any<F>(&self, pred: F) -> bool
    where
        F: Fn(&Morph) -> bool,
    {
        self.morphs.iter().any(pred)
    }

    // Certainty predicates: the feature holds in every candidate.

    pub fn is_noun(&self) -> bool {
        self.all(|m| m.has_pos(Pos::Noun))
    }

    pub fn is_adjective(&self) -> bool {
        self.all(|m| m.has_pos(Pos::Adjective))
    }

    pub fn is_noun_or_adjective(&self) -> bool {
        self.all(|m| m.has_pos(Pos::Noun) || m.has_pos(Pos::Adjective))
    }

    pub fn is_noun_not_adjective(&self) -> bool {
        self.all(|m| m.has_pos(Pos::Noun) && !m.has_pos(Pos::Adjective))
    }

    pub fn is_noun_or_conjugated_verb(&self) -> bool {
        self.all(|m| m.has_pos(Pos::Noun) || m.is_conjugated())
    }

    pub fn is_invariable(&self) -> bool {
        self.all(|m| m.number() == Some(Number::Invariable))
    }

    pub fn is_singular(&self) -> bool {
        self.all(|m| m.number() == Some(Number::Singular))
    }

    pub fn is_plural(&self) -> bool {
        self.all(|m| m.number() == Some(Number::Plural))
    }

    pub fn is_epicene(&self) -> bool {
        self.all(|m| m.gender() == Some(Gender::Epicene))
    }

    pub fn is_masculine(&self) -> bool {
        self.all(|m| m.gender() == Some(Gender::Masculine))
    }

    pub fn is_feminine(&self) -> bool {
        self.all(|m| m.gender() == Some(Gender::Feminine))
    }

    // Possibility predicates: the feature holds in at least one candidate.

    pub fn maybe_noun(&self) -> bool {
        self.any(|m| m.has_pos(Pos::Noun))
    }

    pub fn maybe_adjective(&self) -> bool {
        self.any(|m| m.has_pos(Pos::Adjective))
    }

    pub fn maybe_adjective_or_number(&self) -> bool {
        self.any(|m| m.has_pos(Pos::Adjective) || m.has_pos(Pos::NumberWord))
    }

    pub fn maybe_noun_or_adjective(&self) -> bool {
        self.any(|m| m.has_pos(Pos::Noun) || m.has_pos(Pos::Adjective))
    }

    /// At least one noun reading, and no adjective reading anywhere.
    pub fn maybe_noun_not_adjective(&self) -> bool {
        let mut noun = false;
        for morph in &self.morphs {
            if morph.has_pos(Pos::Adjective) {
                return false;
            }
            if morph.has_pos(Pos::Noun) {
                noun = true;
            }
        }
        noun
    }

    pub fn maybe_past_participle_or_noun_not_adjective(&self) -> bool {
        self.any(|m| {
            m.has_tense(Tense::PastParticiple) || (m.has_pos(Pos::Noun) && !m.has_pos(Pos::Adjective))
        })
    }

    pub fn maybe_conjugated(&self) -> bool {
        self.any(Morph::is_conjugated)
    }

    /// A conjugated form of a group 1–3 verb (excludes the auxiliaries).
    pub fn maybe_conjugated_not_auxiliary(&self) -> bool {
        self.any(|m| {
            m.is_conjugated()
                && matches!(
                    m.verb_group(),
                    Some(VerbGroup::First) | Some(VerbGroup::Second) | Some(VerbGroup::Third)
                )
        })
    }

    pub fn maybe_grammatical_word(&self) -> bool {
        self.any(|m| m.has_pos(Pos::Grammatical))
    }

    pub fn maybe_invariable(&self) -> bool {
        self.any(|m| m.number() == Some(Number::Invariable))
    }

    pub fn maybe_singular(&self) -> bool {
        self.any(|m| m.number() == Some(Number::Singular))
    }

    pub fn maybe_plural(&self) -> bool {
        self.any(|m| m.number() == Some(Number::Plural))
    }

    pub fn maybe_epicene(&self) -> bool {
        self.any(|m| m.gender() == Some(Gender::Epicene))
    }

    pub fn maybe_masculine(&self) -> bool {
        self.any(|m| m.gender() == Some(Gender::Masculine))
    }

    pub fn maybe_feminine(&self) -> bool {
        self.any(|m| m.gender() == Some(Gender::Feminine))
    }

    pub fn maybe_proper_noun(&self) -> bool {
        self.any(Morph::is_proper_noun)
    }

    /// A masculine proper-noun reading, with no feminine proper-noun reading.
    pub fn maybe_proper_noun_masc_not_fem(&self) -> bool {
        if self.any(|m| m.is_proper_noun() && m.gender() == Some(Gender::Feminine)) {
            return false;
        }
        self.any(|m| m.is_proper_noun() && m.gender() == Some(Gender::Masculine))
    }

    /// Does any candidate carry the given conjugation cell?
    pub fn maybe_conj(&self, tense: Tense, person: Person) -> bool {
        self.any(|m| m.has_tense(tense) && m.has_person(person))
    }

    /// The gender of the word.
    ///
    /// `None` when no candidate is marked for gender, `Epicene` when the
    /// candidates disagree.
    pub fn gender(&self) -> Option<Gender> {
        let mut gender = None;
        for morph in &self.morphs {
            if let Some(g) = morph.gender() {
                match gender {
                    None => gender = Some(g),
                    Some(seen) if seen != g => return Some(Gender::Epicene),
                    Some(_) => {}
                }
            }
        }
        gender
    }

    /// The number of the word.
    ///
    /// `None` when no candidate is marked for number, `Invariable` when the
    /// candidates disagree.
    pub fn number(&self) -> Option<Number> {
        let mut number = None;
        for morph in &self.morphs {
            if let Some(n) = morph.number() {
                match number {
                    None => number = Some(n),
                    Some(seen) if seen != n => return Some(Number::Invariable),
                    Some(_) => {}
                }
            }
        }
        number
    }

    /// Can the two words agree in gender and number?
    ///
    /// Number agreement fails only when one side is certainly singular and
    /// the other certainly plural; invariable readings never block. Gender
    /// agreement succeeds whenever either side has an epicene reading and
    /// fails only on a certain masculine/feminine clash. The relation is
    /// symmetric.
    pub fn agrees_with(&self, other: &MorphSet) -> bool {
        if !self.maybe_invariable() && !other.maybe_invariable() {
            if self.maybe_singular() && !other.maybe_singular() {
                return false;
            }
            if self.maybe_plural() && !other.maybe_plural() {
                return false;
            }
        }
        if self.maybe_epicene() || other.maybe_epicene() {
            return true;
        }
        if self.maybe_masculine() && !other.maybe_masculine() {
            return false;
        }
        if self.maybe_feminine() && !other.maybe_feminine() {
            return false;
        }
        true
    }
}

impl<S> std::iter::FromIterator<S> for MorphSet
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        MorphSet::from_tags(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::{Gender, Morph, MorphSet, Number, Person, Tense};

    #[test]
    fn parses_lemma_and_features() {
        let morph = Morph::parse(">heureux/:A:m:s");
        assert_eq!(morph.lemma(), Some("heureux"));
        assert_eq!(morph.gender(), Some(Gender::Masculine));
        assert_eq!(morph.number(), Some(Number::Singular));
        assert!(morph.has_pos(super::Pos::Adjective));
    }

    #[test]
    fn parses_verb_tag() {
        let morph = Morph::parse(">manger/:V1_:Ip:3s");
        assert_eq!(morph.verb_group(), Some(super::VerbGroup::First));
        assert!(morph.has_tense(Tense::Present));
        assert!(morph.has_person(Person::ThirdSingular));
        assert!(morph.is_conjugated());
    }

    #[test]
    fn interrogative_person_codes_merge() {
        assert_eq!(
            ":1ś".parse::<Person>().unwrap(),
            Person::FirstSingularInterrogative
        );
        assert_eq!(
            ":1ŝ".parse::<Person>().unwrap(),
            Person::FirstSingularInterrogative
        );
    }

    #[test]
    fn malformed_tag_is_inert() {
        let morph = Morph::parse("junk without codes");
        assert_eq!(morph.lemma(), None);
        assert!(!morph.is_verb());
        assert_eq!(morph.as_str(), "junk without codes");
    }

    #[test]
    fn certainty_implies_possibility() {
        let set = MorphSet::from_tags(vec![">chat/:N:m:s", ">chat/:N:m:p"]);
        assert!(set.is_noun());
        assert!(set.maybe_noun());
        assert!(!set.is_singular());
        assert!(set.maybe_singular());
    }

    #[test]
    fn gender_mixes_to_epicene() {
        let set = MorphSet::from_tags(vec![">aide/:N:m:s", ">aide/:N:f:s"]);
        assert_eq!(set.gender(), Some(Gender::Epicene));
        assert_eq!(set.number(), Some(Number::Singular));
    }

    #[test]
    fn number_mixes_to_invariable() {
        let set = MorphSet::from_tags(vec![">souris/:N:f:s", ">souris/:N:f:p"]);
        assert_eq!(set.number(), Some(Number::Invariable));
    }

    #[test]
    fn unmarked_features_are_unset() {
        let set = MorphSet::from_tags(vec![">hier/:W"]);
        assert_eq!(set.gender(), None);
        assert_eq!(set.number(), None);
    }

    #[test]
    fn agreement_is_symmetric() {
        let sing_masc = MorphSet::from_tags(vec![">chat/:N:m:s"]);
        let plur_masc = MorphSet::from_tags(vec![">chats/:N:m:p"]);
        let sing_fem = MorphSet::from_tags(vec![">chatte/:N:f:s"]);
        let epicene = MorphSet::from_tags(vec![">artiste/:N:e:s"]);
        let invariable = MorphSet::from_tags(vec![">souris/:N:f:i"]);

        assert!(!sing_masc.agrees_with(&plur_masc));
        assert!(!plur_masc.agrees_with(&sing_masc));
        assert!(!sing_masc.agrees_with(&sing_fem));
        assert!(epicene.agrees_with(&sing_masc));
        assert!(epicene.agrees_with(&sing_fem));
        assert!(invariable.agrees_with(&plur_masc));
        assert!(invariable.agrees_with(&sing_masc));
    }

    #[test]
    fn noun_not_adjective_blocks_on_any_adjective_reading() {
        let set = MorphSet::from_tags(vec![">ferme/:N:f:s", ">ferme/:A:e:s"]);
        assert!(!set.maybe_noun_not_adjective());
        let set = MorphSet::from_tags(vec![">ferme/:N:f:s", ">fermer/:V1_:Ip:3s"]);
        assert!(set.maybe_noun_not_adjective());
    }

    #[test]
    fn lemmas_are_deduplicated_in_order() {
        let set = MorphSet::from_tags(vec![
            ">suivre/:V3_:Ip:1s",
            ">être/:V0e:Ip:1s",
            ">suivre/:V3_:Ip:2s",
        ]);
        assert_eq!(set.lemmas(), vec!["suivre", "être"]);
    }

    #[test]
    fn conj_cell_test() {
        let set = MorphSet::from_tags(vec![">aller/:V3_:Ip:1s", ">aller/:V3_:Sp:1s"]);
        assert!(set.maybe_conj(Tense::Present, Person::FirstSingular));
        assert!(!set.maybe_conj(Tense::Present, Person::ThirdPlural));
    }
}
