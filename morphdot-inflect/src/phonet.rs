//! Phonetic equivalence classes.
//!
//! Words that sound alike despite different spellings, grouped into
//! equivalence classes. This is the last-resort suggestion source: it is
//! consulted only when no same-lemma derivation produces a form, because
//! the intended word may not be a grammatical variant of the typed word at
//! all but a different, similar-sounding one.
//!
//! The word → class index is a finite-state map built once at start-up;
//! classes are kept sorted so consumers get stable suggestion ordering.

use std::collections::BTreeMap;

use fst::Map;
use lazy_static::lazy_static;

use morphdot_tags::{Lexicon, Morph};

/// Raw equivalence classes. Sorted at load time; a word belongs to at most
/// one class.
static SETS: &[&[&str]] = &[
    &["ce", "se"],
    &["ces", "saie", "saies", "ses", "sais", "sait"],
    &["cet", "cette", "sept", "set", "sets"],
    &["dé", "dés", "dès", "dais", "des"],
    &["don", "dons", "dont"],
    &["été", "étaie", "étaies", "étais", "était", "étai", "étés", "étaient"],
    &["faire", "fer", "fers", "ferre", "ferres", "ferrent"],
    &["fois", "foi", "foie", "foies"],
    &["la", "là", "las"],
    &["mes", "mets", "met", "mai", "mais"],
    &["mon", "mont", "monts"],
    &["mot", "mots", "maux"],
    &["moi", "mois"],
    &["notre", "nôtre", "nôtres"],
    &["or", "ors", "hors"],
    &["hou", "houe", "houes", "ou", "où", "houx"],
    &["peu", "peux", "peut"],
    &["son", "sons", "sont"],
    &["tes", "tais", "tait", "taie", "taies", "thé", "thés"],
    &["toi", "toit", "toits"],
    &["ton", "tons", "thon", "thons", "tond", "tonds"],
    &["voir", "voire"],
    &["a", "as", "à"],
    &["au", "aux", "eau", "eaux", "haut", "hauts"],
    &["amande", "amandes", "amende", "amendes"],
    &["ancre", "ancres", "encre", "encres"],
    &["autel", "autels", "hôtel", "hôtels"],
    &["balade", "balades", "ballade", "ballades"],
    &["cent", "cents", "sang", "sans", "sent"],
    &["chaîne", "chaînes", "chêne", "chênes"],
    &["champ", "champs", "chant", "chants"],
    &["compte", "comptes", "comte", "comtes", "conte", "contes"],
    &["cou", "cous", "coup", "coups", "coût", "coûts"],
    &["date", "dates", "datte", "dattes"],
    &["on", "ont"],
    &["pain", "pains", "pin", "pins"],
    &["quand", "quant"],
    &["saut", "sauts", "sceau", "sceaux", "seau", "seaux", "sot", "sots"],
    &["tant", "temps"],
    &["ver", "verre", "verres", "vers", "vert", "verts"],
    &["voie", "voies", "vois", "voit", "voix"],
];

lazy_static! {
    static ref CLASSES: Vec<Vec<&'static str>> = SETS
        .iter()
        .map(|set| {
            let mut class: Vec<&'static str> = set.to_vec();
            class.sort_unstable();
            class
        })
        .collect();
    static ref WORD_INDEX: Map<Vec<u8>> = {
        let mut words = BTreeMap::new();
        for (idx, class) in CLASSES.iter().enumerate() {
            for word in class {
                words.insert(*word, idx as u64);
            }
        }
        Map::from_iter(words).expect("phonetic classes are sorted and unique")
    };
}

fn class_index(word: &str) -> Option<usize> {
    if word.is_empty() {
        return None;
    }
    if let Some(idx) = WORD_INDEX.get(word) {
        return Some(idx as usize);
    }
    let first = word.chars().next()?;
    if first.is_uppercase() {
        let lowercased = word.to_lowercase();
        if let Some(idx) = WORD_INDEX.get(&lowercased) {
            return Some(idx as usize);
        }
        if word.chars().all(|c| !c.is_lowercase()) {
            let mut chars = lowercased.chars();
            if let Some(c) = chars.next() {
                let capitalized: String = c.to_uppercase().chain(chars).collect();
                if let Some(idx) = WORD_INDEX.get(&capitalized) {
                    return Some(idx as usize);
                }
            }
        }
    }
    None
}

/// The equivalence class of a word, sorted alphabetically.
///
/// Includes the word itself; empty when the word belongs to no class.
/// Capitalized and all-caps spellings fall back to their lowercase class.
pub fn similar_words(word: &str) -> &'static [&'static str] {
    match class_index(word) {
        Some(idx) => &CLASSES[idx],
        None => &[],
    }
}

/// Do the two words belong to the same equivalence class?
pub fn are_similar(word: &str, other: &str) -> bool {
    match (class_index(word), class_index(other)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Does the word have any phonetic equivalent?
pub fn has_similar(word: &str) -> bool {
    class_index(word).is_some()
}

/// Class members whose dictionary morphology matches the pattern.
pub fn select_similar<L, F>(word: &str, lexicon: &L, pattern: F) -> Vec<&'static str>
where
    L: Lexicon,
    F: Fn(&Morph) -> bool,
{
    similar_words(word)
        .iter()
        .filter(|candidate| lexicon.morph(candidate).any(|m| pattern(m)))
        .copied()
        .collect()
}

/// Does the word have an equivalent whose morphology matches the pattern?
pub fn has_similar_matching<L, F>(word: &str, lexicon: &L, pattern: F) -> bool
where
    L: Lexicon,
    F: Fn(&Morph) -> bool,
{
    !select_similar(word, lexicon, pattern).is_empty()
}

#[cfg(test)]
mod tests {
    use morphdot_tags::{MemoryLexicon, Number};

    use super::{are_similar, has_similar, select_similar, similar_words};

    #[test]
    fn classes_are_sorted_and_contain_the_word() {
        for class in super::SETS {
            for word in *class {
                let similar = similar_words(word);
                assert!(similar.contains(word), "{}", word);
                let mut sorted = similar.to_vec();
                sorted.sort_unstable();
                assert_eq!(similar, sorted.as_slice(), "{}", word);
            }
        }
    }

    #[test]
    fn attested_class() {
        assert_eq!(
            similar_words("mes").to_vec(),
            vec!["mai", "mais", "mes", "met", "mets"]
        );
    }

    #[test]
    fn case_fallback() {
        assert_eq!(similar_words("Mes"), similar_words("mes"));
        assert_eq!(similar_words("MES"), similar_words("mes"));
    }

    #[test]
    fn unknown_word_has_no_class() {
        assert!(similar_words("ornithorynque").is_empty());
        assert!(!has_similar("ornithorynque"));
        assert!(similar_words("").is_empty());
    }

    #[test]
    fn similarity_is_class_membership() {
        assert!(are_similar("mes", "mais"));
        assert!(are_similar("Mes", "mais"));
        assert!(!are_similar("mes", "ses"));
        assert!(!are_similar("mes", "ornithorynque"));
    }

    #[test]
    fn selection_filters_by_morphology() {
        let mut lexicon = MemoryLexicon::new();
        lexicon.insert("mets", vec![">mets/:N:m:i"]);
        lexicon.insert("met", vec![">mettre/:V3_:Ip:3s"]);
        lexicon.insert("mai", vec![">mai/:N:m:s"]);
        lexicon.insert("mais", vec![">mais/:G:W"]);
        lexicon.insert("mes", vec![">mes/:G:Dp:e:p"]);

        let nouns = select_similar("mes", &lexicon, |m| {
            m.has_pos(morphdot_tags::Pos::Noun)
        });
        assert_eq!(nouns, vec!["mai", "mets"]);

        let singulars = select_similar("mes", &lexicon, |m| {
            m.number() == Some(Number::Singular)
        });
        assert_eq!(singulars, vec!["mai"]);
    }
}
