//! Irregular feminine and plural forms.
//!
//! Static tables keyed by the masculine (resp. singular) base form, with
//! suffix codes for the derived forms. Words not covered here follow the
//! regular ending-driven rules; candidates from those rules still need to
//! be validated against the dictionary before being suggested.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::suffix::decode_or_diagnose;

/// Masculine base → (singular codes, plural codes) of the feminine forms.
static MAS_TO_FEM: &[(&str, &[&str], &[&str])] = &[
    ("acteur", &["3rice"], &["3rices"]),
    ("ambassadeur", &["3rice", "0e"], &["3rices", "0es"]),
    ("ancien", &["0ne"], &["0nes"]),
    ("bas", &["0se"], &["0ses"]),
    ("beau", &["2lle"], &["2lles"]),
    ("bénin", &["1gne"], &["1gnes"]),
    ("blanc", &["0he"], &["0hes"]),
    ("bon", &["0ne"], &["0nes"]),
    ("copain", &["3ine"], &["3ines"]),
    ("dernier", &["2ère"], &["2ères"]),
    ("directeur", &["3rice"], &["3rices"]),
    ("doux", &["1ce"], &["1ces"]),
    ("épais", &["0se"], &["0ses"]),
    ("faux", &["2usse"], &["2usses"]),
    ("favori", &["0te"], &["0tes"]),
    ("fou", &["2olle"], &["2olles"]),
    ("frais", &["3aîche"], &["3aîches"]),
    ("franc", &["0he"], &["0hes"]),
    ("gentil", &["0le"], &["0les"]),
    ("gros", &["0se"], &["0ses"]),
    ("heureux", &["1se"], &["1ses"]),
    ("instituteur", &["3rice"], &["3rices"]),
    ("jumeau", &["2lle"], &["2lles"]),
    ("lecteur", &["3rice"], &["3rices"]),
    ("léger", &["2ère"], &["2ères"]),
    ("long", &["0ue"], &["0ues"]),
    ("loup", &["1ve"], &["1ves"]),
    ("malheureux", &["1se"], &["1ses"]),
    ("malin", &["1gne"], &["1gnes"]),
    ("menteur", &["1se"], &["1ses"]),
    ("mou", &["2olle"], &["2olles"]),
    ("neuf", &["1ve"], &["1ves"]),
    ("nouveau", &["2lle"], &["2lles"]),
    ("pareil", &["0le"], &["0les"]),
    ("premier", &["2ère"], &["2ères"]),
    ("roux", &["2usse"], &["2usses"]),
    ("sec", &["2èche"], &["2èches"]),
    ("tiers", &["1ce"], &["1ces"]),
    ("veuf", &["1ve"], &["1ves"]),
    ("vieux", &["3eille"], &["3eilles"]),
    ("vif", &["1ve"], &["1ves"]),
];

/// Singular → plural codes of nouns with irregular plurals.
static MISC_PLURAL: &[(&str, &[&str])] = &[
    ("aïeul", &["2ux", "0s"]),
    ("ail", &["3aulx", "0s"]),
    ("bail", &["3aux"]),
    ("bal", &["0s"]),
    ("bijou", &["0x"]),
    ("bleu", &["0s"]),
    ("bonhomme", &["5shommes"]),
    ("caillou", &["0x"]),
    ("carnaval", &["0s"]),
    ("chacal", &["0s"]),
    ("chou", &["0x"]),
    ("ciel", &["4cieux", "0s"]),
    ("corail", &["3aux"]),
    ("émail", &["3aux"]),
    ("festival", &["0s"]),
    ("genou", &["0x"]),
    ("gentleman", &["0s", "2en"]),
    ("hibou", &["0x"]),
    ("joujou", &["0x"]),
    ("landau", &["0s"]),
    ("madame", &["6mesdames"]),
    ("match", &["0s", "0es"]),
    ("maximum", &["0s", "1a"]),
    ("minimum", &["0s", "1a"]),
    ("monsieur", &["8messieurs"]),
    ("œil", &["3yeux"]),
    ("pneu", &["0s"]),
    ("pou", &["0x"]),
    ("récital", &["0s"]),
    ("régal", &["0s"]),
    ("sandwich", &["0s", "0es"]),
    ("sarrau", &["0s"]),
    ("soupirail", &["3aux"]),
    ("travail", &["3aux"]),
    ("vantail", &["3aux"]),
    ("vitrail", &["3aux"]),
    ("vœu", &["0x"]),
];

lazy_static! {
    static ref FEM_INDEX: HashMap<&'static str, (&'static [&'static str], &'static [&'static str])> =
        MAS_TO_FEM
            .iter()
            .map(|(word, sing, plur)| (*word, (*sing, *plur)))
            .collect();
    static ref PLURAL_INDEX: HashMap<&'static str, &'static [&'static str]> =
        MISC_PLURAL.iter().copied().collect();
}

/// Does the word have table-driven feminine forms?
pub fn is_irregular_masculine(word: &str) -> bool {
    FEM_INDEX.contains_key(word)
}

/// The feminine forms of a masculine base, singular or plural.
///
/// Empty when the word is not in the table.
pub fn feminine_forms(word: &str, plural: bool) -> Vec<String> {
    match FEM_INDEX.get(word) {
        Some((sing, plur)) => {
            let codes = if plural { plur } else { sing };
            codes
                .iter()
                .map(|code| decode_or_diagnose(word, code))
                .collect()
        }
        None => Vec::new(),
    }
}

/// Does the word have a table-driven plural?
pub fn has_misc_plural(word: &str) -> bool {
    PLURAL_INDEX.contains_key(word)
}

/// The irregular plural forms of a singular base.
///
/// Empty when the word is not in the table.
pub fn misc_plural(word: &str) -> Vec<String> {
    match PLURAL_INDEX.get(word) {
        Some(codes) => codes
            .iter()
            .map(|code| decode_or_diagnose(word, code))
            .collect(),
        None => Vec::new(),
    }
}

/// Candidate plurals by the regular ending rules.
///
/// The candidates are unvalidated; callers check them against the
/// dictionary. Words already ending in `s`, `x` or `z` are their own
/// plural.
pub fn regular_plurals(word: &str) -> Vec<String> {
    if word.ends_with(['s', 'x', 'z'].as_ref()) {
        return vec![word.to_owned()];
    }
    if let Some(stem) = word.strip_suffix("al") {
        return vec![format!("{}aux", stem), format!("{}s", word)];
    }
    if word.ends_with("au") || word.ends_with("eu") {
        return vec![format!("{}x", word), format!("{}s", word)];
    }
    if word.ends_with("ou") {
        return vec![format!("{}s", word), format!("{}x", word)];
    }
    vec![format!("{}s", word)]
}

/// Candidate feminines by the regular ending rules.
///
/// For masculine bases not covered by the irregular table. The candidates
/// are unvalidated; callers check them against the dictionary.
pub fn regular_feminines(word: &str, plural: bool) -> Vec<String> {
    let mut feminines = if word.ends_with('e') {
        // Epicene shape: the feminine equals the masculine.
        vec![word.to_owned()]
    } else if let Some(stem) = word.strip_suffix("eux") {
        vec![format!("{}euse", stem)]
    } else if let Some(stem) = word.strip_suffix("teur") {
        vec![format!("{}trice", stem), format!("{}teuse", stem)]
    } else if let Some(stem) = word.strip_suffix("eur") {
        vec![format!("{}euse", stem)]
    } else if let Some(stem) = word.strip_suffix("er") {
        vec![format!("{}ère", stem)]
    } else if let Some(stem) = word.strip_suffix("et") {
        vec![format!("{}ette", stem), format!("{}ète", stem)]
    } else if let Some(stem) = word.strip_suffix("el") {
        vec![format!("{}elle", stem)]
    } else if let Some(stem) = word.strip_suffix("en") {
        vec![format!("{}enne", stem)]
    } else if let Some(stem) = word.strip_suffix("on") {
        vec![format!("{}onne", stem)]
    } else if let Some(stem) = word.strip_suffix('f') {
        vec![format!("{}ve", stem)]
    } else {
        vec![format!("{}e", word)]
    };
    if plural {
        for feminine in &mut feminines {
            if !feminine.ends_with('s') {
                feminine.push('s');
            }
        }
    }
    feminines
}

/// Candidate singulars by the regular ending rules.
///
/// The candidates are unvalidated; callers check them against the
/// dictionary.
pub fn regular_singulars(word: &str) -> Vec<String> {
    if let Some(stem) = word.strip_suffix("eaux") {
        return vec![format!("{}eau", stem)];
    }
    if let Some(stem) = word.strip_suffix("aux") {
        return vec![format!("{}al", stem), format!("{}ail", stem)];
    }
    if let Some(stem) = word.strip_suffix('s').or_else(|| word.strip_suffix('x')) {
        return vec![stem.to_owned()];
    }
    vec![word.to_owned()]
}
