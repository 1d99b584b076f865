//! Agreement and suggestion generation.
//!
//! Each function answers "what should this word be, given that it must
//! agree with its context": it resolves the word's candidate lemmas
//! through the lexicon, derives forms through the conjugation engine or
//! the feminine/plural tables and rules, unions the results over all
//! candidate lemmas, and — when everything else comes up empty and the
//! caller allows it — falls back to the phonetic index. Results are
//! deduplicated, order-preserving lists of surface forms; an empty list
//! means nothing applies, and is never an error.

use itertools::Itertools;

use morphdot_inflect::{conjug, mfsp, phonet};
use morphdot_tags::{Gender, Lexicon, Morph, Number, ParticipleForm, Person, Tense};

fn dedup(suggestions: Vec<String>) -> Vec<String> {
    suggestions.into_iter().unique().collect()
}

fn masculine(morph: &Morph) -> bool {
    morph.gender() == Some(Gender::Masculine)
}

fn feminine(morph: &Morph) -> bool {
    morph.gender() == Some(Gender::Feminine)
}

fn singularish(morph: &Morph) -> bool {
    matches!(
        morph.number(),
        Some(Number::Singular) | Some(Number::Invariable)
    )
}

fn pluralish(morph: &Morph) -> bool {
    matches!(
        morph.number(),
        Some(Number::Plural) | Some(Number::Invariable)
    )
}

/// Conjugations of the word's verb lemmas at a given tense and person.
pub fn sugg_verb_tense<L>(lexicon: &L, word: &str, tense: Tense, person: Person) -> Vec<String>
where
    L: Lexicon,
{
    let mut suggestions = Vec::new();
    for lemma in lexicon.lemmas(word) {
        if conjug::has_conjugation(&lemma, tense, person) {
            if let Some(form) = conjug::conjugation(&lemma, tense, person) {
                suggestions.push(form);
            }
        }
    }
    dedup(suggestions)
}

/// Conjugations at the word's own tenses, but for another person.
///
/// The tenses are read off the word's verbal analyses; an infinitive
/// reading offers the present, imperfect and future, a present-participle
/// reading the present.
pub fn sugg_verb_person<L>(lexicon: &L, word: &str, person: Person) -> Vec<String>
where
    L: Lexicon,
{
    let mut suggestions = Vec::new();
    for morph in lexicon.morph(word).iter() {
        let lemma = match morph.lemma() {
            Some(lemma) if morph.is_verb() => lemma,
            _ => continue,
        };
        let mut tenses: Vec<Tense> = Vec::new();
        for tense in morph.tenses() {
            match tense {
                Tense::Infinitive => {
                    tenses.extend_from_slice(&[Tense::Present, Tense::Imperfect, Tense::Future])
                }
                Tense::PresentParticiple => tenses.push(Tense::Present),
                Tense::PastParticiple => {}
                tense => tenses.push(*tense),
            }
        }
        for tense in tenses {
            if conjug::has_conjugation(lemma, tense, person) {
                if let Some(form) = conjug::conjugation(lemma, tense, person) {
                    suggestions.push(form);
                }
            }
        }
    }
    dedup(suggestions)
}

/// The infinitives reachable from the word's lemmas.
pub fn sugg_verb_infinitive<L>(lexicon: &L, word: &str) -> Vec<String>
where
    L: Lexicon,
{
    let suggestions = lexicon
        .lemmas(word)
        .into_iter()
        .filter(|lemma| conjug::is_verb(lemma))
        .collect();
    dedup(suggestions)
}

/// Imperative forms of the word's verb lemmas.
pub fn sugg_verb_imperative<L>(lexicon: &L, word: &str, person: Person) -> Vec<String>
where
    L: Lexicon,
{
    sugg_verb_tense(lexicon, word, Tense::Imperative, person)
}

/// Past participles of the word's verb lemmas under an agreement
/// requirement.
pub fn sugg_verb_past_participle<L>(
    lexicon: &L,
    word: &str,
    gender: Gender,
    number: Number,
) -> Vec<String>
where
    L: Lexicon,
{
    let form = ParticipleForm::agreeing(gender, number);
    let mut suggestions = Vec::new();
    for lemma in lexicon.lemmas(word) {
        if let Some(participle) = conjug::past_participle(&lemma, form) {
            suggestions.push(participle);
        }
    }
    dedup(suggestions)
}

/// Masculine singular forms of a flexed noun, adjective or participle.
pub fn sugg_mas_sing<L>(lexicon: &L, word: &str, phonetic_fallback: bool) -> Vec<String>
where
    L: Lexicon,
{
    let mut suggestions = Vec::new();
    for morph in lexicon.morph(word).iter() {
        if morph.is_verb() {
            if let Some(lemma) = morph.lemma() {
                if let Some(participle) = conjug::past_participle(lemma, ParticipleForm::MascSing)
                {
                    suggestions.push(participle);
                }
            }
        } else {
            match morph.gender() {
                Some(Gender::Masculine) | Some(Gender::Epicene) => {
                    suggestions.extend(sugg_sing(lexicon, word, false));
                }
                _ => {
                    if let Some(lemma) = morph.lemma() {
                        if mfsp::is_irregular_masculine(lemma)
                            || lexicon.morph(lemma).any(|m| !feminine(m) && m.gender().is_some())
                        {
                            suggestions.push(lemma.to_owned());
                        }
                    }
                }
            }
        }
    }
    if suggestions.is_empty() && phonetic_fallback {
        suggestions.extend(
            phonet::select_similar(word, lexicon, |m| masculine(m) && singularish(m))
                .into_iter()
                .map(ToOwned::to_owned),
        );
    }
    dedup(suggestions)
}

/// Masculine plural forms of a flexed noun, adjective or participle.
pub fn sugg_mas_plur<L>(lexicon: &L, word: &str, phonetic_fallback: bool) -> Vec<String>
where
    L: Lexicon,
{
    let mut suggestions = Vec::new();
    for morph in lexicon.morph(word).iter() {
        if morph.is_verb() {
            if let Some(lemma) = morph.lemma() {
                let participle = conjug::past_participle(lemma, ParticipleForm::MascPlur)
                    .or_else(|| conjug::past_participle(lemma, ParticipleForm::MascSing));
                if let Some(participle) = participle {
                    suggestions.push(participle);
                }
            }
        } else {
            match morph.gender() {
                Some(Gender::Masculine) | Some(Gender::Epicene) => {
                    suggestions.extend(sugg_plur(lexicon, word, false));
                }
                _ => {
                    if let Some(lemma) = morph.lemma() {
                        if mfsp::is_irregular_masculine(lemma)
                            || lexicon.morph(lemma).any(|m| !feminine(m) && m.gender().is_some())
                        {
                            suggestions.extend(sugg_plur(lexicon, lemma, false));
                        }
                    }
                }
            }
        }
    }
    if suggestions.is_empty() && phonetic_fallback {
        suggestions.extend(
            phonet::select_similar(word, lexicon, |m| masculine(m) && pluralish(m))
                .into_iter()
                .map(ToOwned::to_owned),
        );
    }
    dedup(suggestions)
}

/// Feminine singular forms of a flexed noun, adjective or participle.
pub fn sugg_fem_sing<L>(lexicon: &L, word: &str, phonetic_fallback: bool) -> Vec<String>
where
    L: Lexicon,
{
    let mut suggestions = Vec::new();
    for morph in lexicon.morph(word).iter() {
        if morph.is_verb() {
            if let Some(lemma) = morph.lemma() {
                if let Some(participle) = conjug::past_participle(lemma, ParticipleForm::FemSing) {
                    suggestions.push(participle);
                }
            }
        } else {
            match morph.gender() {
                Some(Gender::Feminine) | Some(Gender::Epicene) => {
                    suggestions.extend(sugg_sing(lexicon, word, false));
                }
                _ => {
                    if let Some(lemma) = morph.lemma() {
                        suggestions.extend(feminines_of(lexicon, lemma, false));
                    }
                }
            }
        }
    }
    if suggestions.is_empty() && phonetic_fallback {
        suggestions.extend(
            phonet::select_similar(word, lexicon, |m| feminine(m) && singularish(m))
                .into_iter()
                .map(ToOwned::to_owned),
        );
    }
    dedup(suggestions)
}

/// Feminine plural forms of a flexed noun, adjective or participle.
pub fn sugg_fem_plur<L>(lexicon: &L, word: &str, phonetic_fallback: bool) -> Vec<String>
where
    L: Lexicon,
{
    let mut suggestions = Vec::new();
    for morph in lexicon.morph(word).iter() {
        if morph.is_verb() {
            if let Some(lemma) = morph.lemma() {
                if let Some(participle) = conjug::past_participle(lemma, ParticipleForm::FemPlur) {
                    suggestions.push(participle);
                }
            }
        } else {
            match morph.gender() {
                Some(Gender::Feminine) | Some(Gender::Epicene) => {
                    suggestions.extend(sugg_plur(lexicon, word, false));
                }
                _ => {
                    if let Some(lemma) = morph.lemma() {
                        suggestions.extend(feminines_of(lexicon, lemma, true));
                    }
                }
            }
        }
    }
    if suggestions.is_empty() && phonetic_fallback {
        suggestions.extend(
            phonet::select_similar(word, lexicon, |m| feminine(m) && pluralish(m))
                .into_iter()
                .map(ToOwned::to_owned),
        );
    }
    dedup(suggestions)
}

/// Feminine forms of a masculine base: irregular table first, then the
/// regular ending rules validated against the lexicon.
fn feminines_of<L>(lexicon: &L, lemma: &str, plural: bool) -> Vec<String>
where
    L: Lexicon,
{
    let irregular = mfsp::feminine_forms(lemma, plural);
    if !irregular.is_empty() {
        return irregular;
    }
    mfsp::regular_feminines(lemma, plural)
        .into_iter()
        .filter(|candidate| lexicon.is_valid(candidate))
        .collect()
}

/// Singular forms of the word.
pub fn sugg_sing<L>(lexicon: &L, word: &str, phonetic_fallback: bool) -> Vec<String>
where
    L: Lexicon,
{
    let mut suggestions = Vec::new();
    let morphs = lexicon.morph(word);
    if morphs.maybe_singular() || morphs.maybe_invariable() {
        suggestions.push(word.to_owned());
    }
    for candidate in mfsp::regular_singulars(word) {
        if candidate != word && lexicon.is_valid(&candidate) {
            suggestions.push(candidate);
        }
    }
    if suggestions.is_empty() && phonetic_fallback {
        suggestions.extend(
            phonet::select_similar(word, lexicon, singularish)
                .into_iter()
                .map(ToOwned::to_owned),
        );
    }
    dedup(suggestions)
}

/// Plural forms of the word.
///
/// The irregular-plural table wins; otherwise the regular ending rules
/// propose candidates that are kept when the lexicon validates them. For
/// a word the lexicon does not know at all, the default candidate is kept
/// unvalidated.
pub fn sugg_plur<L>(lexicon: &L, word: &str, phonetic_fallback: bool) -> Vec<String>
where
    L: Lexicon,
{
    let mut suggestions = Vec::new();
    if mfsp::has_misc_plural(word) {
        suggestions.extend(mfsp::misc_plural(word));
    } else {
        let candidates = mfsp::regular_plurals(word);
        for candidate in &candidates {
            if candidate == word || lexicon.is_valid(candidate) {
                suggestions.push(candidate.clone());
            }
        }
        if suggestions.is_empty() {
            if let Some(default) = candidates.first() {
                suggestions.push(default.clone());
            }
        }
    }
    if suggestions.is_empty() && phonetic_fallback {
        suggestions.extend(
            phonet::select_similar(word, lexicon, pluralish)
                .into_iter()
                .map(ToOwned::to_owned),
        );
    }
    dedup(suggestions)
}

/// The opposite-gender forms of the word, per candidate analysis.
pub fn switch_gender<L>(lexicon: &L, word: &str, phonetic_fallback: bool) -> Vec<String>
where
    L: Lexicon,
{
    let mut suggestions = Vec::new();
    for morph in lexicon.morph(word).iter() {
        match morph.gender() {
            Some(Gender::Feminine) => match morph.number() {
                Some(Number::Plural) => {
                    suggestions.extend(sugg_mas_plur(lexicon, word, phonetic_fallback))
                }
                Some(Number::Singular) => {
                    suggestions.extend(sugg_mas_sing(lexicon, word, phonetic_fallback))
                }
                _ => {
                    suggestions.extend(sugg_mas_sing(lexicon, word, phonetic_fallback));
                    suggestions.extend(sugg_mas_plur(lexicon, word, phonetic_fallback));
                }
            },
            Some(Gender::Masculine) => match morph.number() {
                Some(Number::Plural) => {
                    suggestions.extend(sugg_fem_plur(lexicon, word, phonetic_fallback))
                }
                Some(Number::Singular) => {
                    suggestions.extend(sugg_fem_sing(lexicon, word, phonetic_fallback))
                }
                _ => {
                    suggestions.extend(sugg_fem_sing(lexicon, word, phonetic_fallback));
                    suggestions.extend(sugg_fem_plur(lexicon, word, phonetic_fallback));
                }
            },
            _ => {}
        }
    }
    dedup(suggestions)
}

/// The opposite-number forms of the word, per candidate analysis.
pub fn switch_number<L>(lexicon: &L, word: &str, phonetic_fallback: bool) -> Vec<String>
where
    L: Lexicon,
{
    let mut suggestions = Vec::new();
    for morph in lexicon.morph(word).iter() {
        match morph.number() {
            Some(Number::Singular) => {
                suggestions.extend(sugg_plur(lexicon, word, phonetic_fallback))
            }
            Some(Number::Plural) => {
                suggestions.extend(sugg_sing(lexicon, word, phonetic_fallback))
            }
            _ => {}
        }
    }
    dedup(suggestions)
}

/// Does the word have a feminine counterpart?
pub fn has_fem_form<L>(lexicon: &L, word: &str) -> bool
where
    L: Lexicon,
{
    for lemma in lexicon.lemmas(word) {
        if !mfsp::feminine_forms(&lemma, false).is_empty()
            || conjug::past_participle(&lemma, ParticipleForm::FemSing).is_some()
            || mfsp::regular_feminines(&lemma, false)
                .iter()
                .any(|candidate| lexicon.is_valid(candidate))
        {
            return true;
        }
    }
    phonet::has_similar_matching(word, lexicon, feminine)
}

/// Does the word have a masculine counterpart?
pub fn has_mas_form<L>(lexicon: &L, word: &str) -> bool
where
    L: Lexicon,
{
    for lemma in lexicon.lemmas(word) {
        if mfsp::is_irregular_masculine(&lemma)
            || lexicon.morph(&lemma).maybe_masculine()
            || conjug::past_participle(&lemma, ParticipleForm::MascSing).is_some()
        {
            return true;
        }
    }
    phonet::has_similar_matching(word, lexicon, masculine)
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;

    use morphdot_tags::{Gender, MemoryLexicon, Number, Person, Tense};

    use super::*;

    lazy_static! {
        static ref LEXICON: MemoryLexicon = {
            let mut lexicon = MemoryLexicon::new();
            // Adjectives.
            lexicon.insert("petit", vec![">petit/:A:m:s"]);
            lexicon.insert("petits", vec![">petit/:A:m:p"]);
            lexicon.insert("petite", vec![">petit/:A:f:s"]);
            lexicon.insert("petites", vec![">petit/:A:f:p"]);
            lexicon.insert("heureux", vec![">heureux/:A:m:i"]);
            lexicon.insert("heureuse", vec![">heureux/:A:f:s"]);
            lexicon.insert("heureuses", vec![">heureux/:A:f:p"]);
            // Nouns.
            lexicon.insert("chat", vec![">chat/:N:m:s"]);
            lexicon.insert("chats", vec![">chat/:N:m:p"]);
            lexicon.insert("travail", vec![">travail/:N:m:s"]);
            lexicon.insert("travaux", vec![">travail/:N:m:p"]);
            lexicon.insert("danseur", vec![">danseur/:N:m:s"]);
            lexicon.insert("danseuse", vec![">danseur/:N:f:s"]);
            lexicon.insert("danseuses", vec![">danseur/:N:f:p"]);
            // Verb forms.
            lexicon.insert(
                "mange",
                vec![
                    ">manger/:V1_:Ip:1s",
                    ">manger/:V1_:Ip:3s",
                    ">manger/:V1_:Sp:1s",
                    ">manger/:V1_:Sp:3s",
                    ">manger/:V1_:E:2s",
                ],
            );
            lexicon.insert(
                "manges",
                vec![">manger/:V1_:Ip:2s", ">manger/:V1_:Sp:2s"],
            );
            lexicon.insert("manger", vec![">manger/:V1_:Y"]);
            lexicon.insert("mangé", vec![">manger/:V1_:Q:m:s"]);
            lexicon.insert("mangée", vec![">manger/:V1_:Q:f:s"]);
            // Homophones of 'mais'.
            lexicon.insert("mai", vec![">mai/:N:m:s"]);
            lexicon.insert("mais", vec![">mais/:G:W"]);
            lexicon.insert(
                "mets",
                vec![">mets/:N:m:i", ">mettre/:V3_:Ip:1s", ">mettre/:V3_:Ip:2s"],
            );
            lexicon.insert("met", vec![">mettre/:V3_:Ip:3s"]);
            lexicon.insert("mes", vec![">mes/:G:Dp:e:p"]);
            lexicon
        };
    }

    #[test]
    fn mas_sing_of_feminine_adjective() {
        assert_eq!(
            sugg_mas_sing(&*LEXICON, "heureuse", false),
            vec!["heureux"]
        );
        assert_eq!(sugg_mas_sing(&*LEXICON, "petite", false), vec!["petit"]);
    }

    #[test]
    fn fem_sing_via_table_and_rules() {
        assert_eq!(
            sugg_fem_sing(&*LEXICON, "heureux", false),
            vec!["heureuse"]
        );
        assert_eq!(sugg_fem_sing(&*LEXICON, "petit", false), vec!["petite"]);
        assert_eq!(
            sugg_fem_sing(&*LEXICON, "danseur", false),
            vec!["danseuse"]
        );
    }

    #[test]
    fn fem_plur_of_masculine() {
        assert_eq!(
            sugg_fem_plur(&*LEXICON, "danseur", false),
            vec!["danseuses"]
        );
        assert_eq!(
            sugg_fem_plur(&*LEXICON, "heureux", false),
            vec!["heureuses"]
        );
    }

    #[test]
    fn participle_agreement_suggestions() {
        assert_eq!(sugg_mas_sing(&*LEXICON, "mangée", false), vec!["mangé"]);
        assert_eq!(sugg_fem_sing(&*LEXICON, "mangé", false), vec!["mangée"]);
        assert_eq!(
            sugg_verb_past_participle(&*LEXICON, "mange", Gender::Feminine, Number::Singular),
            vec!["mangée"]
        );
    }

    #[test]
    fn number_toggling() {
        assert_eq!(sugg_plur(&*LEXICON, "chat", false), vec!["chats"]);
        assert_eq!(sugg_sing(&*LEXICON, "chats", false), vec!["chat"]);
        assert_eq!(sugg_plur(&*LEXICON, "travail", false), vec!["travaux"]);
        assert_eq!(sugg_sing(&*LEXICON, "travaux", false), vec!["travail"]);
        assert_eq!(switch_number(&*LEXICON, "chat", false), vec!["chats"]);
        assert_eq!(switch_number(&*LEXICON, "chats", false), vec!["chat"]);
    }

    #[test]
    fn plural_of_unknown_word_uses_default_rule() {
        assert_eq!(
            sugg_plur(&*LEXICON, "ornithorynque", false),
            vec!["ornithorynques"]
        );
    }

    #[test]
    fn words_their_own_plural() {
        assert_eq!(sugg_plur(&*LEXICON, "heureux", false), vec!["heureux"]);
    }

    #[test]
    fn gender_toggling() {
        assert_eq!(switch_gender(&*LEXICON, "petite", false), vec!["petit"]);
        assert_eq!(switch_gender(&*LEXICON, "petit", false), vec!["petite"]);
        assert_eq!(
            switch_gender(&*LEXICON, "danseuses", false),
            vec!["danseurs"]
        );
    }

    #[test]
    fn verb_tense_and_person() {
        assert_eq!(
            sugg_verb_tense(&*LEXICON, "mange", Tense::Future, Person::FirstSingular),
            vec!["mangerai"]
        );
        assert_eq!(
            sugg_verb_person(&*LEXICON, "mange", Person::ThirdPlural),
            vec!["mangent"]
        );
        // An infinitive reading offers present, imperfect and future.
        assert_eq!(
            sugg_verb_person(&*LEXICON, "manger", Person::FirstSingular),
            vec!["mange", "mangeais", "mangerai"]
        );
    }

    #[test]
    fn verb_infinitive_and_imperative() {
        assert_eq!(
            sugg_verb_infinitive(&*LEXICON, "mange"),
            vec!["manger"]
        );
        assert_eq!(
            sugg_verb_imperative(&*LEXICON, "manges", Person::SecondSingular),
            vec!["mange"]
        );
    }

    #[test]
    fn phonetic_fallback_when_nothing_derives() {
        assert!(sugg_mas_sing(&*LEXICON, "mais", false).is_empty());
        assert_eq!(
            sugg_mas_sing(&*LEXICON, "mais", true),
            vec!["mai", "mets"]
        );
    }

    #[test]
    fn counterpart_existence() {
        assert!(has_fem_form(&*LEXICON, "heureux"));
        assert!(has_fem_form(&*LEXICON, "danseur"));
        assert!(has_mas_form(&*LEXICON, "heureuse"));
        assert!(has_mas_form(&*LEXICON, "petite"));
        assert!(!has_fem_form(&*LEXICON, "travail"));
    }

    #[test]
    fn empty_for_unknown_words() {
        assert!(sugg_verb_tense(
            &*LEXICON,
            "plonk",
            Tense::Present,
            Person::FirstSingular
        )
        .is_empty());
        assert!(sugg_mas_sing(&*LEXICON, "plonk", true).is_empty());
    }
}
