//! Column-name normalization
//!
//! Directive fields come from LLM prose and rarely match sheet headers
//! byte-for-byte. Normalization reduces both sides to a canonical key so
//! that e.g. "Categoría", " categoria " and "CATEGORIA" compare equal.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a column-name-like string for fuzzy equality matching.
///
/// The key is built by NFKD-decomposing the input, dropping combining
/// marks (so accented and unaccented spellings coincide), lowercasing,
/// and collapsing every run of characters outside `[a-z0-9]` into a
/// single `_`, with no leading or trailing separator.
///
/// Total and deterministic. An empty result means the input carried no
/// alphanumeric content at all; callers must treat such a key as
/// unmatchable.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;

    for c in name.nfkd() {
        if is_combining_mark(c) {
            continue;
        }
        for lc in c.to_lowercase() {
            if lc.is_ascii_alphanumeric() {
                if pending_sep && !out.is_empty() {
                    out.push('_');
                }
                pending_sep = false;
                out.push(lc);
            } else {
                // Whitespace (including U+00A0), punctuation, and any
                // non-ASCII leftovers all act as separators.
                pending_sep = true;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_accents_fold() {
        assert_eq!(normalize("Categoría"), "categoria");
        assert_eq!(normalize("categoria"), "categoria");
        assert_eq!(normalize("Año Fiscal"), "ano_fiscal");
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(normalize("  Tipo Cliente "), "tipo_cliente");
        assert_eq!(normalize("TIPO\u{00A0}CLIENTE"), "tipo_cliente");
        assert_eq!(normalize("tipo_cliente"), "tipo_cliente");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        assert_eq!(normalize("Monto  -  Neto"), "monto_neto");
        assert_eq!(normalize("Monto ($)"), "monto");
        assert_eq!(normalize("--Monto--"), "monto");
    }

    #[test]
    fn test_unmatchable_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  "), "");
        assert_eq!(normalize("---!!!"), "");
    }

    proptest! {
        #[test]
        fn prop_output_alphabet(s in "\\PC*") {
            let n = normalize(&s);
            prop_assert!(n.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
            prop_assert!(!n.starts_with('_'));
            prop_assert!(!n.ends_with('_'));
        }

        #[test]
        fn prop_idempotent(s in "\\PC*") {
            let n = normalize(&s);
            prop_assert_eq!(normalize(&n), n.clone());
        }

        #[test]
        fn prop_case_insensitive(s in "[a-zA-Z0-9 _-]*") {
            prop_assert_eq!(normalize(&s.to_uppercase()), normalize(&s.to_lowercase()));
        }
    }
}
