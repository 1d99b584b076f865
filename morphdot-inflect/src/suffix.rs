//! Suffix-code codec.
//!
//! Every derivation table (conjugation, feminine, plural) stores derived
//! forms as compact structural diffs against the stem: a digit giving the
//! number of trailing characters to remove, followed by the suffix to
//! append. Most derived forms share a long prefix with their stem, so this
//! is far more compact than storing full strings.

use log::warn;
use thiserror::Error;

/// A suffix code that cannot be applied to its stem.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("## invalid suffix code: '{code}' on '{stem}' ##")]
pub struct SuffixCodeError {
    pub stem: String,
    pub code: String,
}

/// Apply a suffix code to a stem.
///
/// The code `"0"` leaves the stem unchanged. Otherwise the leading digit is
/// the count of trailing characters (not bytes) removed from the stem
/// before the remainder of the code is appended; `0⟨suffix⟩` appends
/// without removing.
///
/// An empty code, a code without a leading digit, or a digit larger than
/// the stem is malformed.
pub fn apply_suffix_code(stem: &str, code: &str) -> Result<String, SuffixCodeError> {
    let error = || SuffixCodeError {
        stem: stem.to_owned(),
        code: code.to_owned(),
    };

    let mut chars = code.chars();
    let strip = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(error)? as usize;
    let suffix = chars.as_str();

    if strip == 0 {
        return Ok([stem, suffix].concat());
    }

    let stem_len = stem.chars().count();
    if strip > stem_len {
        return Err(error());
    }

    let mut form: String = stem.chars().take(stem_len - strip).collect();
    form.push_str(suffix);
    Ok(form)
}

/// Apply a suffix code, rendering failures as a visible diagnostic.
///
/// Suggestion boundaries must never abort a correction pass; a broken
/// table entry instead surfaces as a recognizable wrong suggestion.
pub fn decode_or_diagnose(stem: &str, code: &str) -> String {
    match apply_suffix_code(stem, code) {
        Ok(form) => form,
        Err(err) => {
            warn!("malformed suffix code in table: {}", err);
            err.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_suffix_code, decode_or_diagnose};

    #[test]
    fn zero_code_is_identity() {
        assert_eq!(apply_suffix_code("travail", "0").unwrap(), "travail");
    }

    #[test]
    fn zero_digit_appends() {
        assert_eq!(apply_suffix_code("vœu", "0x").unwrap(), "vœux");
        assert_eq!(apply_suffix_code("parler", "0ai").unwrap(), "parlerai");
    }

    #[test]
    fn digit_strips_characters_then_appends() {
        assert_eq!(apply_suffix_code("parler", "2e").unwrap(), "parle");
        assert_eq!(apply_suffix_code("travail", "3aux").unwrap(), "travaux");
        assert_eq!(apply_suffix_code("pouvoir", "7puis").unwrap(), "puis");
    }

    #[test]
    fn strips_are_character_based_not_byte_based() {
        // 'être' is six bytes but four characters.
        assert_eq!(apply_suffix_code("être", "4êtes").unwrap(), "êtes");
        assert_eq!(apply_suffix_code("œil", "3yeux").unwrap(), "yeux");
    }

    #[test]
    fn length_arithmetic_holds() {
        for (stem, code) in &[("parler", "2e"), ("finir", "1ssons"), ("être", "4suis")] {
            let digit = code.chars().next().unwrap().to_digit(10).unwrap() as usize;
            let suffix_len = code.chars().count() - 1;
            let form = apply_suffix_code(stem, code).unwrap();
            assert_eq!(
                form.chars().count(),
                stem.chars().count() - digit + suffix_len
            );
        }
    }

    #[test]
    fn malformed_codes_are_rejected() {
        assert!(apply_suffix_code("chat", "").is_err());
        assert!(apply_suffix_code("chat", "x").is_err());
        assert!(apply_suffix_code("chat", "5s").is_err());
    }

    #[test]
    fn diagnose_embeds_the_offending_code() {
        let diag = decode_or_diagnose("chat", "9s");
        assert!(diag.contains("9s"));
        assert!(diag.contains("chat"));
    }
}
