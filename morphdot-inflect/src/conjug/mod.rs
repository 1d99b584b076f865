//! Verb conjugation.
//!
//! Conjugation is a paradigm lookup: each known lemma maps to a paradigm
//! (a table of suffix codes per tense×person cell) and a verb class
//! (auxiliary, group, transitivity, pronominal compatibility). On top of
//! the raw cell lookups, [`Verb`] assembles full phrases: subject and
//! object pronouns, elision, negation, inverted interrogative forms and
//! compound tenses with past-participle agreement.

use std::fmt;

use serde_derive::Serialize;
use thiserror::Error;

use morphdot_tags::{Morph, ParticipleForm, Person, Tense, VerbGroup};

use crate::suffix::decode_or_diagnose;

mod data;
use data::ParadigmData;

/// Auxiliary verb used in compound tenses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Auxiliary {
    Avoir,
    Etre,
}

impl Auxiliary {
    /// The auxiliary's own lemma.
    pub fn lemma(self) -> &'static str {
        match self {
            Auxiliary::Avoir => "avoir",
            Auxiliary::Etre => "être",
        }
    }
}

/// Conjugation group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Group {
    Auxiliary,
    First,
    Second,
    Third,
}

impl Group {
    pub fn label(self) -> &'static str {
        match self {
            Group::Auxiliary => "auxiliaire",
            Group::First => "1ᵉʳ groupe",
            Group::Second => "2ᵉ groupe",
            Group::Third => "3ᵉ groupe",
        }
    }
}

/// Pronominal compatibility of a verb.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Pronominal {
    /// Never pronominal.
    Never,
    /// Optionally pronominal (*laver* / *se laver*).
    Optional,
    /// Optionally pronominal with the *en* compound (*aller* / *s’en aller*).
    OptionalEn,
    /// Only pronominal (*se méfier*).
    Obligatory,
    /// Reciprocal (*s’entraider*).
    Reciprocal,
    /// Special cases.
    Special,
}

/// Lexical class of a verb.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct VerbClass {
    pub group: Group,
    pub aux: Auxiliary,
    pub pronominal: Pronominal,
    pub transitive_direct: bool,
    pub transitive_indirect: bool,
    pub intransitive: bool,
    pub impersonal: bool,
    /// The paradigm has missing cells beyond the usual imperative gaps.
    pub defective: bool,
}

impl VerbClass {
    /// Human-readable usage description, e.g. `"transitif (+ usage pronominal)"`.
    pub fn usage_label(&self) -> String {
        let mut label = if self.transitive_direct {
            "transitif".to_owned()
        } else if self.transitive_indirect {
            "transitif indirect".to_owned()
        } else if self.intransitive {
            "intransitif".to_owned()
        } else {
            match self.pronominal {
                Pronominal::Reciprocal => "pronominal réciproque".to_owned(),
                Pronominal::Obligatory => "pronominal".to_owned(),
                _ => String::new(),
            }
        };
        if matches!(
            self.pronominal,
            Pronominal::Optional | Pronominal::OptionalEn
        ) {
            label.push_str(" (+ usage pronominal)");
        }
        if self.impersonal {
            label.push_str(" impersonnel");
        }
        label
    }
}

/// Error building a [`Verb`] descriptor.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConjugationError {
    #[error("empty verb lemma")]
    EmptyLemma,
    #[error("unknown verb: '{0}'")]
    UnknownVerb(String),
}

/// Is the lemma a known verb?
pub fn is_verb(lemma: &str) -> bool {
    data::lookup(lemma).is_some()
}

/// The lexical class of a known verb.
pub fn verb_class(lemma: &str) -> Option<&'static VerbClass> {
    data::lookup(lemma).map(|(_, class)| class)
}

/// Look up and decode one conjugation cell.
///
/// `None` for an unknown lemma or a cell the paradigm does not define.
/// The infinitive of a known verb is the lemma itself; the undifferentiated
/// past participle resolves to its masculine singular.
pub fn conjugation(lemma: &str, tense: Tense, person: Person) -> Option<String> {
    let (paradigm, _) = data::lookup(lemma)?;
    match tense {
        Tense::Infinitive => Some(lemma.to_owned()),
        Tense::PresentParticiple => decode_cell(lemma, paradigm.ppres),
        Tense::PastParticiple => decode_cell(lemma, paradigm.ppast[0]),
        _ => paradigm
            .finite_cell(tense, person)
            .and_then(|code| decode_cell(lemma, code)),
    }
}

/// Does the paradigm define this cell?
pub fn has_conjugation(lemma: &str, tense: Tense, person: Person) -> bool {
    match data::lookup(lemma) {
        Some((paradigm, _)) => match tense {
            Tense::Infinitive => true,
            Tense::PresentParticiple => !paradigm.ppres.is_empty(),
            Tense::PastParticiple => !paradigm.ppast[0].is_empty(),
            _ => paradigm.finite_cell(tense, person).is_some(),
        },
        None => false,
    }
}

/// A past participle in one of its four agreement forms.
pub fn past_participle(lemma: &str, form: ParticipleForm) -> Option<String> {
    let (paradigm, _) = data::lookup(lemma)?;
    decode_cell(lemma, paradigm.ppast[participle_index(form)])
}

/// The present participle.
pub fn present_participle(lemma: &str) -> Option<String> {
    let (paradigm, _) = data::lookup(lemma)?;
    decode_cell(lemma, paradigm.ppres)
}

/// All lemmas known to the conjugation tables.
pub fn known_verbs() -> impl Iterator<Item = &'static str> {
    data::known_lemmas()
}

/// Verbal forms of the same lemma a flexed form is commonly confused with.
///
/// The lemma and group are taken from the tag; the selection of cells per
/// group reflects the most frequent near-homophones (1st group: infinitive
/// against imperfect and present forms, and so on). In substantive mode the
/// suggestions are nouns derived from the verb when the derivation table
/// knows any, otherwise the past participles; a lone invariable participle
/// is considered unreliable and suppressed.
pub fn similar_verb_forms(morph: &Morph, substantive: bool) -> Vec<String> {
    let group = match morph.verb_group() {
        Some(group) => group,
        None => return Vec::new(),
    };
    let lemma = match morph.lemma() {
        Some(lemma) if is_verb(lemma) => lemma,
        _ => return Vec::new(),
    };

    let mut forms: Vec<String> = Vec::new();
    let mut add = |form: Option<String>| {
        if let Some(form) = form {
            if !form.is_empty() && !forms.contains(&form) {
                forms.push(form);
            }
        }
    };

    if substantive {
        if let Some(nouns) = data::derived_nouns(lemma) {
            return nouns.iter().map(|s| (*s).to_owned()).collect();
        }
        for form in &[
            ParticipleForm::MascSing,
            ParticipleForm::MascPlur,
            ParticipleForm::FemSing,
            ParticipleForm::FemPlur,
        ] {
            add(past_participle(lemma, *form));
        }
        if forms.len() == 1 {
            // Only an invariable participle: unreliable.
            forms.clear();
        }
        return forms;
    }

    match group {
        VerbGroup::First => {
            add(Some(lemma.to_owned()));
            add(conjugation(lemma, Tense::Present, Person::ThirdSingular));
            add(conjugation(lemma, Tense::Present, Person::SecondPlural));
            add(conjugation(lemma, Tense::Imperfect, Person::FirstSingular));
            add(conjugation(lemma, Tense::Imperfect, Person::ThirdSingular));
            add(conjugation(lemma, Tense::Imperfect, Person::ThirdPlural));
        }
        VerbGroup::Second => {
            add(conjugation(lemma, Tense::Present, Person::FirstSingular));
            add(conjugation(lemma, Tense::Present, Person::ThirdSingular));
        }
        VerbGroup::Third => {
            add(conjugation(lemma, Tense::Present, Person::FirstSingular));
            add(conjugation(lemma, Tense::Present, Person::ThirdSingular));
            add(conjugation(lemma, Tense::SimplePast, Person::FirstSingular));
            add(conjugation(lemma, Tense::SimplePast, Person::ThirdSingular));
        }
        VerbGroup::AuxiliaryAvoir => {
            add(Some("eus".to_owned()));
            add(Some("eut".to_owned()));
        }
        VerbGroup::AuxiliaryEtre => {
            add(Some("étais".to_owned()));
            add(Some("était".to_owned()));
        }
    }
    forms
}

/// Forms of a 1st-group verb phonetically close to its infinitive.
pub fn first_group_infinitive_homophones(lemma: &str) -> Vec<String> {
    if !is_verb(lemma) {
        return Vec::new();
    }
    let cells = [
        (Tense::Imperfect, Person::SecondSingular),
        (Tense::Imperfect, Person::ThirdSingular),
        (Tense::Imperfect, Person::ThirdPlural),
        (Tense::SimplePast, Person::FirstSingular),
        (Tense::Present, Person::SecondPlural),
        (Tense::Imperfect, Person::SecondPlural),
    ];
    let mut forms = Vec::new();
    for (tense, person) in &cells {
        if let Some(form) = conjugation(lemma, *tense, *person) {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
    }
    forms
}

fn decode_cell(lemma: &str, code: &str) -> Option<String> {
    if code.is_empty() {
        None
    } else {
        Some(decode_or_diagnose(lemma, code))
    }
}

fn participle_index(form: ParticipleForm) -> usize {
    match form {
        ParticipleForm::MascSing => 0,
        ParticipleForm::MascPlur => 1,
        ParticipleForm::FemSing => 2,
        ParticipleForm::FemPlur => 3,
    }
}

fn person_index7(person: Person) -> usize {
    match person {
        Person::FirstSingular => 0,
        Person::FirstSingularInterrogative => 1,
        Person::SecondSingular => 2,
        Person::ThirdSingular => 3,
        Person::FirstPlural => 4,
        Person::SecondPlural => 5,
        Person::ThirdPlural => 6,
    }
}

fn person_index6(person: Person) -> Option<usize> {
    match person {
        Person::FirstSingular => Some(0),
        Person::FirstSingularInterrogative => None,
        Person::SecondSingular => Some(1),
        Person::ThirdSingular => Some(2),
        Person::FirstPlural => Some(3),
        Person::SecondPlural => Some(4),
        Person::ThirdPlural => Some(5),
    }
}

fn imperative_index(person: Person) -> Option<usize> {
    match person {
        Person::SecondSingular => Some(0),
        Person::FirstPlural => Some(1),
        Person::SecondPlural => Some(2),
        _ => None,
    }
}

impl ParadigmData {
    fn finite_cell(&self, tense: Tense, person: Person) -> Option<&'static str> {
        let code = match tense {
            Tense::Present => self.present[person_index7(person)],
            Tense::SubjunctivePresent => self.subj_present[person_index7(person)],
            Tense::Imperfect => self.imperfect[person_index6(person)?],
            Tense::SimplePast => self.simple_past[person_index6(person)?],
            Tense::Future => self.future[person_index6(person)?],
            Tense::Conditional => self.conditional[person_index6(person)?],
            Tense::SubjunctiveImperfect => self.subj_imperfect[person_index6(person)?],
            Tense::Imperative => self.imperative[imperative_index(person)?],
            _ => return None,
        };
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }
}

/// Options for rendering a conjugated phrase.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ConjugationOptions {
    /// Render the pronominal use (*se laver*).
    pub pronominal: bool,
    /// Wrap in negation (*ne … pas*).
    pub negated: bool,
    /// Render the compound tense (auxiliary + past participle).
    pub compound: bool,
    /// Render the inverted interrogative form.
    pub interrogative: bool,
    /// Feminine subject agreement.
    pub feminine: bool,
}

const VOWELS: &[char] = &['a', 'e', 'é', 'i', 'o', 'u', 'œ', 'ê'];

fn starts_with_vowel(form: &str) -> bool {
    form.chars().next().map_or(false, |c| VOWELS.contains(&c))
}

/// The euphonic *t* is needed unless the form already ends in a dental.
fn needs_euphonic_t(form: &str) -> bool {
    !form.ends_with(['t', 'd', 'c'].as_ref())
}

fn object_pronoun(person: Person, elided: bool) -> &'static str {
    if elided {
        match person {
            Person::FirstSingular | Person::FirstSingularInterrogative => "m’",
            Person::SecondSingular => "t’",
            Person::ThirdSingular | Person::ThirdPlural => "s’",
            Person::FirstPlural => "nous ",
            Person::SecondPlural => "vous ",
        }
    } else {
        match person {
            Person::FirstSingular | Person::FirstSingularInterrogative => "me ",
            Person::SecondSingular => "te ",
            Person::ThirdSingular | Person::ThirdPlural => "se ",
            Person::FirstPlural => "nous ",
            Person::SecondPlural => "vous ",
        }
    }
}

fn imperative_pronoun(person: Person, with_en: bool) -> &'static str {
    match (person, with_en) {
        (Person::SecondSingular, false) => "-toi",
        (Person::FirstPlural, false) => "-nous",
        (Person::SecondPlural, false) => "-vous",
        (Person::SecondSingular, true) => "-t’en",
        (Person::FirstPlural, true) => "-nous-en",
        (Person::SecondPlural, true) => "-vous-en",
        _ => "",
    }
}

fn imperative_negation(person: Person, with_en: bool) -> &'static str {
    match (person, with_en) {
        (Person::SecondSingular, false) => "ne te ",
        (Person::FirstPlural, false) => "ne nous ",
        (Person::SecondPlural, false) => "ne vous ",
        (Person::SecondSingular, true) => "ne t’en ",
        (Person::FirstPlural, true) => "ne nous en ",
        (Person::SecondPlural, true) => "ne vous en ",
        _ => "",
    }
}

/// The decoded surface forms of one verb.
#[derive(Clone, Debug, Default)]
struct Forms {
    ppres: Option<String>,
    ppast: [Option<String>; 4],
    present: [Option<String>; 7],
    imperfect: [Option<String>; 6],
    simple_past: [Option<String>; 6],
    future: [Option<String>; 6],
    conditional: [Option<String>; 6],
    subj_present: [Option<String>; 7],
    subj_imperfect: [Option<String>; 6],
    imperative: [Option<String>; 3],
}

/// A verb and its conjugation.
///
/// Immutable after construction and cheap to rebuild; it carries no
/// identity beyond its decoded table, so callers may reconstruct freely
/// instead of caching.
#[derive(Clone, Debug)]
pub struct Verb {
    lemma: String,
    class: &'static VerbClass,
    forms: Forms,
}

impl Verb {
    /// Build the descriptor of a known verb.
    pub fn new(lemma: &str) -> Result<Self, ConjugationError> {
        Verb::with_paradigm(lemma, lemma)
    }

    /// Build a descriptor conjugating `lemma` with the paradigm of another
    /// verb.
    ///
    /// Useful for neologisms: an unknown `-er` coinage can be conjugated
    /// with the rules of *parler*.
    pub fn with_paradigm(lemma: &str, paradigm: &str) -> Result<Self, ConjugationError> {
        if lemma.is_empty() {
            return Err(ConjugationError::EmptyLemma);
        }
        let (data, class) = data::lookup(paradigm)
            .ok_or_else(|| ConjugationError::UnknownVerb(paradigm.to_owned()))?;

        let decode = |code: &str| decode_cell(lemma, code);
        let decode6 = |codes: &[&str; 6]| {
            let mut row: [Option<String>; 6] = Default::default();
            for (slot, code) in row.iter_mut().zip(codes.iter()) {
                *slot = decode(code);
            }
            row
        };

        let mut present: [Option<String>; 7] = Default::default();
        for (slot, code) in present.iter_mut().zip(data.present.iter()) {
            *slot = decode(code);
        }
        let mut subj_present: [Option<String>; 7] = Default::default();
        for (slot, code) in subj_present.iter_mut().zip(data.subj_present.iter()) {
            *slot = decode(code);
        }
        let mut ppast: [Option<String>; 4] = Default::default();
        for (slot, code) in ppast.iter_mut().zip(data.ppast.iter()) {
            *slot = decode(code);
        }
        let mut imperative: [Option<String>; 3] = Default::default();
        for (slot, code) in imperative.iter_mut().zip(data.imperative.iter()) {
            *slot = decode(code);
        }

        let forms = Forms {
            ppres: decode(data.ppres),
            ppast,
            present,
            imperfect: decode6(&data.imperfect),
            simple_past: decode6(&data.simple_past),
            future: decode6(&data.future),
            conditional: decode6(&data.conditional),
            subj_present,
            subj_imperfect: decode6(&data.subj_imperfect),
            imperative,
        };

        Ok(Verb {
            lemma: lemma.to_owned(),
            class,
            forms,
        })
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn class(&self) -> &VerbClass {
        self.class
    }

    pub fn group(&self) -> Group {
        self.class.group
    }

    pub fn auxiliary(&self) -> Auxiliary {
        self.class.aux
    }

    pub fn is_defective(&self) -> bool {
        self.class.defective
    }

    pub fn is_impersonal(&self) -> bool {
        self.class.impersonal
    }

    pub fn pronominal(&self) -> Pronominal {
        self.class.pronominal
    }

    fn pronominal_with_en(&self) -> bool {
        self.class.pronominal == Pronominal::OptionalEn
    }

    fn is_reciprocal(&self) -> bool {
        self.class.pronominal == Pronominal::Reciprocal
    }

    /// One cell of the conjugation table.
    pub fn form(&self, tense: Tense, person: Person) -> Option<&str> {
        let cell = match tense {
            Tense::Infinitive => return Some(&self.lemma),
            Tense::PresentParticiple => &self.forms.ppres,
            Tense::PastParticiple => &self.forms.ppast[0],
            Tense::Present => &self.forms.present[person_index7(person)],
            Tense::SubjunctivePresent => &self.forms.subj_present[person_index7(person)],
            Tense::Imperfect => &self.forms.imperfect[person_index6(person)?],
            Tense::SimplePast => &self.forms.simple_past[person_index6(person)?],
            Tense::Future => &self.forms.future[person_index6(person)?],
            Tense::Conditional => &self.forms.conditional[person_index6(person)?],
            Tense::SubjunctiveImperfect => &self.forms.subj_imperfect[person_index6(person)?],
            Tense::Imperative => &self.forms.imperative[imperative_index(person)?],
        };
        cell.as_deref()
    }

    /// One of the four past-participle agreement forms.
    pub fn past_participle(&self, form: ParticipleForm) -> Option<&str> {
        self.forms.ppast[participle_index(form)].as_deref()
    }

    fn subject_pronoun(&self, person: Person, feminine: bool) -> &'static str {
        match person {
            Person::ThirdSingular if self.is_reciprocal() => "on",
            Person::ThirdSingular if feminine => "elle",
            Person::ThirdPlural if feminine => "elles",
            Person::FirstSingular | Person::FirstSingularInterrogative => "je",
            Person::SecondSingular => "tu",
            Person::ThirdSingular => "il",
            Person::FirstPlural => "nous",
            Person::SecondPlural => "vous",
            Person::ThirdPlural => "ils",
        }
    }

    /// The past participle agreeing with the rendered subject.
    ///
    /// With auxiliary *avoir* and no pronominal use the participle never
    /// agrees. A missing agreement cell falls back to the base form.
    fn agreed_past_participle(
        &self,
        pronominal: bool,
        feminine: bool,
        plural: bool,
    ) -> Option<&str> {
        let base = self.forms.ppast[0].as_deref();
        if !pronominal && self.class.aux == Auxiliary::Avoir {
            return base;
        }
        if !feminine {
            return if plural {
                self.forms.ppast[1].as_deref().or(base)
            } else {
                base
            };
        }
        if !plural {
            return self.forms.ppast[2].as_deref().or(base);
        }
        self.forms.ppast[3].as_deref().or(base)
    }

    /// Render the infinitive phrase.
    pub fn render_infinitive(&self, opts: &ConjugationOptions) -> String {
        let mut infi = if opts.compound {
            if opts.pronominal {
                "être".to_owned()
            } else {
                self.class.aux.lemma().to_owned()
            }
        } else {
            self.lemma.clone()
        };
        if opts.pronominal {
            infi = if self.pronominal_with_en() {
                format!("s’en {}", infi)
            } else if starts_with_vowel(&infi) {
                format!("s’{}", infi)
            } else {
                format!("se {}", infi)
            };
        }
        if opts.negated {
            infi = format!("ne pas {}", infi);
        }
        if opts.compound {
            if let Some(ppas) =
                self.agreed_past_participle(opts.pronominal, opts.feminine, self.is_reciprocal())
            {
                infi.push(' ');
                infi.push_str(ppas);
            }
        }
        if opts.interrogative {
            infi.push_str(" … ?");
        }
        infi
    }

    /// Render the present-participle phrase.
    pub fn render_present_participle(&self, opts: &ConjugationOptions) -> String {
        if self.forms.ppres.is_none() {
            return String::new();
        }
        let part = if opts.compound {
            let aux = if opts.pronominal {
                "être"
            } else {
                self.class.aux.lemma()
            };
            present_participle(aux)
        } else {
            self.forms.ppres.clone()
        };
        let mut part = match part {
            Some(part) if !part.is_empty() => part,
            _ => return String::new(),
        };
        let elidable = starts_with_vowel(&part);
        if opts.pronominal {
            part = if self.pronominal_with_en() {
                format!("s’en {}", part)
            } else if elidable {
                format!("s’{}", part)
            } else {
                format!("se {}", part)
            };
        }
        if opts.negated {
            part = if elidable && !opts.pronominal {
                format!("n’{} pas", part)
            } else {
                format!("ne {} pas", part)
            };
        }
        if opts.compound {
            if let Some(ppas) =
                self.agreed_past_participle(opts.pronominal, opts.feminine, self.is_reciprocal())
            {
                part.push(' ');
                part.push_str(ppas);
            }
        }
        if opts.interrogative {
            part.push_str(" … ?");
        }
        part
    }

    /// Render a conjugated phrase for one tense and person.
    ///
    /// Returns an empty string when the paradigm does not define the cell.
    pub fn render(&self, tense: Tense, person: Person, opts: &ConjugationOptions) -> String {
        if self.form(tense, person).is_none() {
            return String::new();
        }
        let mut person = person;
        if !opts.compound
            && opts.interrogative
            && person == Person::FirstSingular
            && self
                .form(tense, Person::FirstSingularInterrogative)
                .is_some()
        {
            person = Person::FirstSingularInterrogative;
        }
        let conj = if opts.compound {
            let aux = if opts.pronominal {
                "être"
            } else {
                self.class.aux.lemma()
            };
            conjugation(aux, tense, person)
        } else {
            self.form(tense, person).map(ToOwned::to_owned)
        };
        let mut conj = match conj {
            Some(conj) if !conj.is_empty() => conj,
            _ => return String::new(),
        };

        let elidable = starts_with_vowel(&conj);
        if opts.pronominal {
            conj = if self.pronominal_with_en() {
                format!("{}en {}", object_pronoun(person, true), conj)
            } else {
                format!("{}{}", object_pronoun(person, elidable), conj)
            };
        }
        if opts.negated {
            conj = if elidable && !opts.pronominal {
                format!("n’{}", conj)
            } else {
                format!("ne {}", conj)
            };
        }
        if opts.interrogative {
            if person == Person::ThirdSingular && needs_euphonic_t(&conj) {
                conj.push_str("-t");
            }
            conj.push('-');
            conj.push_str(self.subject_pronoun(person, opts.feminine));
        } else if person == Person::FirstSingular
            && elidable
            && !opts.negated
            && !opts.pronominal
        {
            conj = format!("j’{}", conj);
        } else {
            conj = format!("{} {}", self.subject_pronoun(person, opts.feminine), conj);
        }
        if opts.negated {
            conj.push_str(" pas");
        }
        if opts.compound {
            let plural = matches!(
                person,
                Person::FirstPlural | Person::SecondPlural | Person::ThirdPlural
            ) || self.is_reciprocal();
            if let Some(ppas) = self.agreed_past_participle(opts.pronominal, opts.feminine, plural)
            {
                conj.push(' ');
                conj.push_str(ppas);
            }
        }
        if opts.interrogative {
            conj.push_str(" … ?");
        }
        conj
    }

    /// Render an imperative phrase.
    ///
    /// Valid persons are second singular, first plural and second plural;
    /// anything else (or a missing cell) renders empty.
    pub fn render_imperative(&self, person: Person, opts: &ConjugationOptions) -> String {
        if self.form(Tense::Imperative, person).is_none() {
            return String::new();
        }
        let impe = if opts.compound {
            let aux = if opts.pronominal {
                "être"
            } else {
                self.class.aux.lemma()
            };
            conjugation(aux, Tense::Imperative, person)
        } else {
            self.form(Tense::Imperative, person).map(ToOwned::to_owned)
        };
        let mut impe = match impe {
            Some(impe) if !impe.is_empty() => impe,
            _ => return String::new(),
        };

        let elidable = starts_with_vowel(&impe);
        let with_en = self.pronominal_with_en();
        if opts.negated {
            if opts.pronominal {
                impe = if !with_en && elidable && person == Person::SecondSingular {
                    format!("ne t’{} pas", impe)
                } else {
                    format!("{}{} pas", imperative_negation(person, with_en), impe)
                };
            } else {
                impe = if elidable {
                    format!("n’{} pas", impe)
                } else {
                    format!("ne {} pas", impe)
                };
            }
        } else if opts.pronominal {
            impe.push_str(imperative_pronoun(person, with_en));
        }
        if opts.compound {
            let plural = matches!(person, Person::FirstPlural | Person::SecondPlural)
                || self.is_reciprocal();
            if let Some(ppas) = self.agreed_past_participle(opts.pronominal, opts.feminine, plural)
            {
                impe.push(' ');
                impe.push_str(ppas);
            }
        }
        impe
    }

    /// Render the whole conjugation table under one option set.
    pub fn conjugation_table(&self, opts: &ConjugationOptions) -> ConjugationTable {
        let persons = [
            Person::FirstSingular,
            Person::SecondSingular,
            Person::ThirdSingular,
            Person::FirstPlural,
            Person::SecondPlural,
            Person::ThirdPlural,
        ];
        let render_tense = |label: &'static str, tense: Tense| RenderedTense {
            label,
            forms: persons
                .iter()
                .map(|person| self.render(tense, *person, opts))
                .collect(),
        };

        let imperative = if opts.interrogative {
            RenderedTense {
                label: "",
                forms: Vec::new(),
            }
        } else {
            RenderedTense {
                label: if opts.compound { "Passé" } else { "Présent" },
                forms: [
                    Person::SecondSingular,
                    Person::FirstPlural,
                    Person::SecondPlural,
                ]
                .iter()
                .map(|person| self.render_imperative(*person, opts))
                .collect(),
            }
        };

        let mut conditional = vec![render_tense(
            if opts.compound {
                "Passé (1ʳᵉ forme)"
            } else {
                "Présent"
            },
            Tense::Conditional,
        )];
        if opts.compound {
            conditional.push(render_tense("Passé (2ᵉ forme)", Tense::SubjunctiveImperfect));
        }

        let subjunctive = if opts.interrogative {
            Vec::new()
        } else {
            vec![
                render_tense(
                    if opts.compound { "Passé" } else { "Présent" },
                    Tense::SubjunctivePresent,
                ),
                render_tense(
                    if opts.compound {
                        "Plus-que-parfait"
                    } else {
                        "Imparfait"
                    },
                    Tense::SubjunctiveImperfect,
                ),
            ]
        };

        ConjugationTable {
            infinitive: self.render_infinitive(opts),
            present_participle: self.render_present_participle(opts),
            past_participles: self
                .forms
                .ppast
                .iter()
                .map(|form| form.clone().unwrap_or_default())
                .collect(),
            imperative,
            indicative: vec![
                render_tense(
                    if opts.compound { "Passé composé" } else { "Présent" },
                    Tense::Present,
                ),
                render_tense(
                    if opts.compound {
                        "Plus-que-parfait"
                    } else {
                        "Imparfait"
                    },
                    Tense::Imperfect,
                ),
                render_tense(
                    if opts.compound {
                        "Passé antérieur"
                    } else {
                        "Passé simple"
                    },
                    Tense::SimplePast,
                ),
                render_tense(
                    if opts.compound {
                        "Futur antérieur"
                    } else {
                        "Futur"
                    },
                    Tense::Future,
                ),
            ],
            conditional,
            subjunctive,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} · {} · {}",
            self.lemma,
            self.class.group.label(),
            self.class.usage_label()
        )
    }
}

/// One rendered tense of a conjugation table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RenderedTense {
    pub label: &'static str,
    pub forms: Vec<String>,
}

/// A fully rendered conjugation table.
#[derive(Clone, Debug, Serialize)]
pub struct ConjugationTable {
    pub infinitive: String,
    pub present_participle: String,
    pub past_participles: Vec<String>,
    pub imperative: RenderedTense,
    pub indicative: Vec<RenderedTense>,
    pub conditional: Vec<RenderedTense>,
    pub subjunctive: Vec<RenderedTense>,
}

#[cfg(test)]
mod tests {
    use morphdot_tags::{Morph, ParticipleForm, Person, Tense};

    use super::{
        conjugation, has_conjugation, is_verb, past_participle, present_participle, verb_class,
        Auxiliary, ConjugationOptions, Group, Verb,
    };

    #[test]
    fn known_and_unknown_verbs() {
        for verb in &["avoir", "être", "aller", "manger", "venir", "faire", "finir"] {
            assert!(is_verb(verb), "{}", verb);
        }
        for word in &["berk", "a", "va", "contre", "super", "", "à"] {
            assert!(!is_verb(word), "{}", word);
        }
    }

    #[test]
    fn attested_cells() {
        for (verb, tense, person, expected) in &[
            ("aller", ":E", ":2s", "va"),
            ("avoir", ":Iq", ":1s", "avais"),
            ("être", ":Ip", ":2p", "êtes"),
            ("manger", ":Sp", ":3s", "mange"),
            ("finir", ":K", ":3p", "finiraient"),
            ("prendre", ":If", ":1p", "prendrons"),
        ] {
            let tense: Tense = tense.parse().unwrap();
            let person: Person = person.parse().unwrap();
            assert!(has_conjugation(verb, tense, person), "{}", verb);
            assert_eq!(
                conjugation(verb, tense, person).as_deref(),
                Some(*expected),
                "{}",
                verb
            );
        }
    }

    #[test]
    fn infinitive_is_the_lemma() {
        assert_eq!(
            conjugation("parler", Tense::Infinitive, Person::FirstSingular).as_deref(),
            Some("parler")
        );
    }

    #[test]
    fn orthographic_subtypes() {
        assert_eq!(
            conjugation("manger", Tense::Present, Person::FirstPlural).as_deref(),
            Some("mangeons")
        );
        assert_eq!(
            conjugation("placer", Tense::Present, Person::FirstPlural).as_deref(),
            Some("plaçons")
        );
    }

    #[test]
    fn prefixed_verbs_share_their_base_paradigm() {
        assert_eq!(
            conjugation("revenir", Tense::Present, Person::ThirdSingular).as_deref(),
            Some("revient")
        );
        assert_eq!(
            conjugation("comprendre", Tense::Future, Person::FirstSingular).as_deref(),
            Some("comprendrai")
        );
        assert_eq!(
            conjugation("redire", Tense::Present, Person::SecondPlural).as_deref(),
            Some("redites")
        );
    }

    #[test]
    fn participles() {
        assert_eq!(present_participle("manger").as_deref(), Some("mangeant"));
        assert_eq!(
            past_participle("prendre", ParticipleForm::FemSing).as_deref(),
            Some("prise")
        );
        assert_eq!(
            past_participle("être", ParticipleForm::MascSing).as_deref(),
            Some("été")
        );
        assert_eq!(past_participle("être", ParticipleForm::FemPlur), None);
    }

    #[test]
    fn defective_cells_are_absent() {
        assert!(!has_conjugation(
            "pleuvoir",
            Tense::Present,
            Person::FirstSingular
        ));
        assert!(has_conjugation(
            "pleuvoir",
            Tense::Present,
            Person::ThirdSingular
        ));
        assert!(!has_conjugation(
            "pouvoir",
            Tense::Imperative,
            Person::SecondSingular
        ));
        assert!(verb_class("pleuvoir").unwrap().impersonal);
        assert!(verb_class("pleuvoir").unwrap().defective);
    }

    #[test]
    fn descriptor_construction() {
        let verb = Verb::new("arriver").unwrap();
        assert_eq!(verb.auxiliary(), Auxiliary::Etre);
        assert_eq!(verb.group(), Group::First);
        assert!(Verb::new("").is_err());
        assert!(Verb::new("xyzzy").is_err());
    }

    #[test]
    fn unknown_coinage_with_borrowed_paradigm() {
        let verb = Verb::with_paradigm("tweeter", "parler").unwrap();
        assert_eq!(
            verb.form(Tense::Present, Person::ThirdSingular),
            Some("tweete")
        );
    }

    #[test]
    fn renders_simple_present() {
        let verb = Verb::new("parler").unwrap();
        let opts = ConjugationOptions::default();
        assert_eq!(
            verb.render(Tense::Present, Person::FirstSingular, &opts),
            "je parle"
        );
        assert_eq!(
            verb.render(Tense::Present, Person::ThirdPlural, &opts),
            "ils parlent"
        );
    }

    #[test]
    fn first_singular_elides_before_vowel() {
        let verb = Verb::new("arriver").unwrap();
        let opts = ConjugationOptions::default();
        assert_eq!(
            verb.render(Tense::Present, Person::FirstSingular, &opts),
            "j’arrive"
        );
    }

    #[test]
    fn negation_wraps_and_elides() {
        let manger = Verb::new("manger").unwrap();
        let arriver = Verb::new("arriver").unwrap();
        let opts = ConjugationOptions {
            negated: true,
            ..Default::default()
        };
        assert_eq!(
            manger.render(Tense::Present, Person::FirstSingular, &opts),
            "je ne mange pas"
        );
        assert_eq!(
            arriver.render(Tense::Present, Person::FirstSingular, &opts),
            "je n’arrive pas"
        );
    }

    #[test]
    fn pronominal_prefix_chooses_elision() {
        let laver = Verb::new("laver").unwrap();
        let ecouter = Verb::new("écouter").unwrap();
        let opts = ConjugationOptions {
            pronominal: true,
            ..Default::default()
        };
        assert_eq!(
            laver.render(Tense::Present, Person::ThirdSingular, &opts),
            "il se lave"
        );
        assert_eq!(
            ecouter.render(Tense::Present, Person::ThirdSingular, &opts),
            "il s’écoute"
        );
    }

    #[test]
    fn pronominal_negation_wraps_the_pronoun() {
        let laver = Verb::new("laver").unwrap();
        let opts = ConjugationOptions {
            pronominal: true,
            negated: true,
            ..Default::default()
        };
        assert_eq!(
            laver.render(Tense::Present, Person::FirstSingular, &opts),
            "je ne me lave pas"
        );
    }

    #[test]
    fn en_compound_pronominal() {
        let aller = Verb::new("aller").unwrap();
        let opts = ConjugationOptions {
            pronominal: true,
            ..Default::default()
        };
        assert_eq!(
            aller.render(Tense::Present, Person::FirstSingular, &opts),
            "je m’en vais"
        );
        assert_eq!(aller.render_infinitive(&opts), "s’en aller");
    }

    #[test]
    fn interrogative_inserts_euphonic_t() {
        let parler = Verb::new("parler").unwrap();
        let prendre = Verb::new("prendre").unwrap();
        let opts = ConjugationOptions {
            interrogative: true,
            ..Default::default()
        };
        assert_eq!(
            parler.render(Tense::Present, Person::ThirdSingular, &opts),
            "parle-t-il … ?"
        );
        assert_eq!(
            prendre.render(Tense::Present, Person::ThirdSingular, &opts),
            "prend-il … ?"
        );
    }

    #[test]
    fn interrogative_first_singular_uses_dedicated_form() {
        let chanter = Verb::new("chanter").unwrap();
        let pouvoir = Verb::new("pouvoir").unwrap();
        let etre = Verb::new("être").unwrap();
        let opts = ConjugationOptions {
            interrogative: true,
            ..Default::default()
        };
        assert_eq!(
            chanter.render(Tense::Present, Person::FirstSingular, &opts),
            "chanté-je … ?"
        );
        assert_eq!(
            pouvoir.render(Tense::Present, Person::FirstSingular, &opts),
            "puis-je … ?"
        );
        // No dedicated form: the ordinary first singular is used.
        assert_eq!(
            etre.render(Tense::Present, Person::FirstSingular, &opts),
            "suis-je … ?"
        );
    }

    #[test]
    fn feminine_subject_pronouns() {
        let parler = Verb::new("parler").unwrap();
        let opts = ConjugationOptions {
            feminine: true,
            ..Default::default()
        };
        assert_eq!(
            parler.render(Tense::Present, Person::ThirdSingular, &opts),
            "elle parle"
        );
        assert_eq!(
            parler.render(Tense::Present, Person::ThirdPlural, &opts),
            "elles parlent"
        );
    }

    #[test]
    fn compound_tense_with_avoir_never_agrees() {
        let manger = Verb::new("manger").unwrap();
        let opts = ConjugationOptions {
            compound: true,
            feminine: true,
            ..Default::default()
        };
        assert_eq!(
            manger.render(Tense::Present, Person::ThirdSingular, &opts),
            "elle a mangé"
        );
    }

    #[test]
    fn compound_tense_with_etre_agrees() {
        let arriver = Verb::new("arriver").unwrap();
        let fem = ConjugationOptions {
            compound: true,
            feminine: true,
            ..Default::default()
        };
        let masc = ConjugationOptions {
            compound: true,
            ..Default::default()
        };
        assert_eq!(
            arriver.render(Tense::Present, Person::ThirdSingular, &fem),
            "elle est arrivée"
        );
        assert_eq!(
            arriver.render(Tense::Present, Person::ThirdPlural, &masc),
            "ils sont arrivés"
        );
        assert_eq!(
            arriver.render(Tense::Present, Person::ThirdPlural, &fem),
            "elles sont arrivées"
        );
    }

    #[test]
    fn compound_interrogative_takes_the_auxiliary() {
        let manger = Verb::new("manger").unwrap();
        let opts = ConjugationOptions {
            compound: true,
            interrogative: true,
            ..Default::default()
        };
        assert_eq!(
            manger.render(Tense::Present, Person::ThirdSingular, &opts),
            "a-t-il mangé … ?"
        );
    }

    #[test]
    fn reciprocal_third_singular_takes_on() {
        let entraider = Verb::new("entraider").unwrap();
        let opts = ConjugationOptions {
            pronominal: true,
            ..Default::default()
        };
        assert_eq!(
            entraider.render(Tense::Present, Person::ThirdSingular, &opts),
            "on s’entraide"
        );
    }

    #[test]
    fn imperative_rendering() {
        let laver = Verb::new("laver").unwrap();
        let plain = ConjugationOptions::default();
        let pro = ConjugationOptions {
            pronominal: true,
            ..Default::default()
        };
        let pro_neg = ConjugationOptions {
            pronominal: true,
            negated: true,
            ..Default::default()
        };
        assert_eq!(laver.render_imperative(Person::SecondSingular, &plain), "lave");
        assert_eq!(
            laver.render_imperative(Person::SecondSingular, &pro),
            "lave-toi"
        );
        assert_eq!(
            laver.render_imperative(Person::SecondPlural, &pro),
            "lavez-vous"
        );
        assert_eq!(
            laver.render_imperative(Person::SecondSingular, &pro_neg),
            "ne te lave pas"
        );
        // No imperative person outside 2s/1p/2p.
        assert_eq!(
            laver.render_imperative(Person::ThirdSingular, &plain),
            ""
        );
    }

    #[test]
    fn negated_infinitive() {
        let manger = Verb::new("manger").unwrap();
        let opts = ConjugationOptions {
            negated: true,
            ..Default::default()
        };
        assert_eq!(manger.render_infinitive(&opts), "ne pas manger");
    }

    #[test]
    fn similar_forms_for_first_group() {
        let morph = Morph::parse(">chanter/:V1_:Ip:3s");
        let forms = super::similar_verb_forms(&morph, false);
        assert!(forms.contains(&"chanter".to_owned()));
        assert!(forms.contains(&"chante".to_owned()));
        assert!(forms.contains(&"chantez".to_owned()));
        assert!(forms.contains(&"chantait".to_owned()));
    }

    #[test]
    fn similar_substantives() {
        let morph = Morph::parse(">travailler/:V1_:Y");
        let forms = super::similar_verb_forms(&morph, true);
        assert!(forms.contains(&"travail".to_owned()));

        // No derived noun: falls back to past participles.
        let morph = Morph::parse(">prendre/:V3_:Y");
        let forms = super::similar_verb_forms(&morph, true);
        assert!(forms.contains(&"pris".to_owned()));
        assert!(forms.contains(&"prise".to_owned()));
    }

    #[test]
    fn lone_invariable_participle_is_suppressed() {
        let morph = Morph::parse(">pleuvoir/:V3_:Y");
        assert!(super::similar_verb_forms(&morph, true).is_empty());
    }

    #[test]
    fn infinitive_homophones() {
        let forms = super::first_group_infinitive_homophones("parler");
        assert!(forms.contains(&"parlais".to_owned()));
        assert!(forms.contains(&"parlez".to_owned()));
        assert!(forms.contains(&"parlai".to_owned()));
    }

    #[test]
    fn conjugation_table_renders_all_moods() {
        let verb = Verb::new("parler").unwrap();
        let table = verb.conjugation_table(&ConjugationOptions::default());
        assert_eq!(table.infinitive, "parler");
        assert_eq!(table.indicative[0].label, "Présent");
        assert_eq!(table.indicative[0].forms[0], "je parle");
        assert_eq!(table.imperative.forms[0], "parle");
        assert_eq!(table.past_participles[0], "parlé");

        let compound = verb.conjugation_table(&ConjugationOptions {
            compound: true,
            ..Default::default()
        });
        assert_eq!(compound.indicative[0].label, "Passé composé");
        assert_eq!(compound.indicative[0].forms[0], "j’ai parlé");
    }
}
