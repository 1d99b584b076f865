//! Verb information for presentation layers.

use serde_derive::Serialize;

use morphdot_inflect::conjug::{
    Auxiliary, ConjugationError, ConjugationOptions, ConjugationTable, Group, Pronominal, Verb,
};

/// Everything a presentation layer displays about a verb: classification,
/// auxiliary, usage, flags and the full conjugation table rendered under
/// the default option set.
#[derive(Clone, Debug, Serialize)]
pub struct VerbInfo {
    pub lemma: String,
    pub group: Group,
    pub group_label: &'static str,
    pub auxiliary: Auxiliary,
    pub usage: String,
    pub pronominal: Pronominal,
    pub impersonal: bool,
    pub defective: bool,
    pub table: ConjugationTable,
}

/// Build the information record of a known verb.
pub fn verb_info(lemma: &str) -> Result<VerbInfo, ConjugationError> {
    let verb = Verb::new(lemma)?;
    let class = verb.class();
    Ok(VerbInfo {
        lemma: verb.lemma().to_owned(),
        group: class.group,
        group_label: class.group.label(),
        auxiliary: class.aux,
        usage: class.usage_label(),
        pronominal: class.pronominal,
        impersonal: class.impersonal,
        defective: class.defective,
        table: verb.conjugation_table(&ConjugationOptions::default()),
    })
}

#[cfg(test)]
mod tests {
    use super::verb_info;
    use morphdot_inflect::conjug::{Auxiliary, Group};

    #[test]
    fn info_for_a_regular_verb() {
        let info = verb_info("parler").unwrap();
        assert_eq!(info.group, Group::First);
        assert_eq!(info.group_label, "1ᵉʳ groupe");
        assert_eq!(info.auxiliary, Auxiliary::Avoir);
        assert!(!info.defective);
        assert_eq!(info.table.infinitive, "parler");
        assert_eq!(info.table.indicative[0].forms[0], "je parle");
    }

    #[test]
    fn info_flags_impersonal_defective_verbs() {
        let info = verb_info("pleuvoir").unwrap();
        assert!(info.impersonal);
        assert!(info.defective);
        assert_eq!(info.usage, "intransitif impersonnel");
        assert_eq!(info.table.indicative[0].forms[0], "");
        assert_eq!(info.table.indicative[0].forms[2], "il pleut");
    }

    #[test]
    fn unknown_verbs_are_an_error() {
        assert!(verb_info("plonk").is_err());
    }
}
