//! Placeholder substitution engine.
//!
//! Templates contain literal text interspersed with `{{NAME}}` tokens. Rendering
//! replaces each token whose name is a key of the [`Configuration`] with the
//! configured value.
//!
//! # Rules
//!
//! - Matching is on the fully delimited token: the key `TYPE` never touches
//!   `{{DATA_TYPE}}`.
//! - The template is scanned once, left to right. Substituted values are
//!   inserted literally and never re-scanned, so a value that itself looks
//!   like `{{NAME}}` is emitted as-is.
//! - Tokens with no configured value are left untouched. Keys the template
//!   never mentions are ignored.

use crate::config::Configuration;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// A `{{NAME}}` token. Names may not contain braces.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("Invalid token regex"));

/// Render a template by substituting configured values for their tokens.
///
/// # Examples
///
/// ```ignore
/// let config = Configuration::from_pairs([("TYPE", "Lab"), ("PORT", "7870")]);
/// assert_eq!(render("run {{TYPE}} on {{PORT}}", &config), "run Lab on 7870");
/// ```
pub fn render(template: &str, config: &Configuration) -> String {
    TOKEN_REGEX
        .replace_all(template, |caps: &Captures<'_>| match config.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// List the distinct token names appearing in a template, sorted.
pub fn placeholders(template: &str) -> BTreeSet<String> {
    TOKEN_REGEX
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// List the token names in a template that have no configured value.
pub fn unresolved(template: &str, config: &Configuration) -> Vec<String> {
    placeholders(template)
        .into_iter()
        .filter(|name| !config.contains(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config<const N: usize>(pairs: [(&str, &str); N]) -> Configuration {
        Configuration::from_pairs(pairs)
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_end_to_end_substitution() {
        let cfg = config([("TYPE", "Lab"), ("PORT", "7870")]);
        assert_eq!(render("run {{TYPE}} on {{PORT}}", &cfg), "run Lab on 7870");
    }

    #[test]
    fn test_missing_key_left_untouched() {
        let cfg = config([("TYPE", "Lab")]);
        assert_eq!(render("{{TYPE}} at {{PORT}}", &cfg), "Lab at {{PORT}}");
    }

    #[test]
    fn test_multiple_occurrences() {
        let cfg = config([("x", "X")]);
        assert_eq!(render("{{x}}-{{x}}-{{x}}", &cfg), "X-X-X");
    }

    #[test]
    fn test_known_tokens_removed_unknown_preserved() {
        let template = "{{a}} {{b}} {{a}} {{c}} {{c}} {{c}}";
        let cfg = config([("a", "1"), ("b", "2")]);
        let out = render(template, &cfg);

        assert_eq!(count(&out, "{{a}}"), 0);
        assert_eq!(count(&out, "{{b}}"), 0);
        assert_eq!(count(&out, "{{c}}"), count(template, "{{c}}"));
    }

    #[test]
    fn test_key_does_not_match_inside_longer_token() {
        let cfg = config([("TYPE", "Lab")]);
        assert_eq!(
            render("{{TYPE}} / {{DATA_TYPE}}", &cfg),
            "Lab / {{DATA_TYPE}}"
        );
    }

    #[test]
    fn test_case_sensitive_keys() {
        let cfg = config([("TYPE", "Lab"), ("type", "lab")]);
        assert_eq!(render("{{TYPE}}:{{type}}", &cfg), "Lab:lab");
    }

    #[test]
    fn test_values_are_not_re_expanded() {
        let cfg = config([("A", "{{B}}"), ("B", "boom")]);
        assert_eq!(render("{{A}} {{B}}", &cfg), "{{B}} boom");
    }

    #[test]
    fn test_self_referencing_value_terminates() {
        let cfg = config([("A", "{{A}}{{A}}")]);
        assert_eq!(render("{{A}}", &cfg), "{{A}}{{A}}");
    }

    #[test]
    fn test_idempotent_for_plain_values() {
        let template = "class Dragon{{CLASS_SUFFIX}}:\n    port = {{PORT}}\n    {{unknown}}";
        let cfg = config([("CLASS_SUFFIX", "Eye"), ("PORT", "7861")]);
        let once = render(template, &cfg);
        assert_eq!(render(&once, &cfg), once);
    }

    #[test]
    fn test_unused_keys_are_ignored() {
        let cfg = config([("UNUSED", "value")]);
        assert_eq!(render("plain text", &cfg), "plain text");
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(render("", &config([("a", "b")])), "");
    }

    #[test]
    fn test_empty_value_substitution() {
        let cfg = config([("COMPONENT_PARAMS", "")]);
        assert_eq!(
            render("gr.File({{COMPONENT_PARAMS}})", &cfg),
            "gr.File()"
        );
    }

    #[test]
    fn test_single_braces_pass_through() {
        let cfg = config([("x", "1")]);
        assert_eq!(
            render("f\"{value}\" {{x}} {}", &cfg),
            "f\"{value}\" 1 {}"
        );
    }

    #[test]
    fn test_extra_braces_around_token() {
        let cfg = config([("TYPE", "Lab")]);
        assert_eq!(render("{{{TYPE}}}", &cfg), "{Lab}");
        assert_eq!(render("{{{{TYPE}}}}", &cfg), "{{Lab}}");
    }

    #[test]
    fn test_unicode_in_template_and_values() {
        let cfg = config([("EMOJI", "🐉"), ("TYPE", "日本語")]);
        assert_eq!(render("{{EMOJI}} Dragon{{TYPE}}", &cfg), "🐉 Dragon日本語");
    }

    #[test]
    fn test_placeholders_are_distinct_and_sorted() {
        let names = placeholders("{{b}} {{a}} {{b}} {x} {{}}");
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_unresolved_lists_missing_names() {
        let cfg = config([("TYPE", "Lab")]);
        assert_eq!(
            unresolved("{{TYPE}} {{PORT}} {{output_type}}", &cfg),
            vec!["PORT".to_string(), "output_type".to_string()]
        );
    }
}
