//! The individual rewrite passes, in pipeline order.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::numbers::digits_to_words;
use super::tables::{lookup, ABBREVIATIONS, CONTRACTIONS, TRANSIENT_CHARS};

static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

static CONTRACTION_RE: LazyLock<Regex> = LazyLock::new(|| contraction_regex(false));
static CONTRACTION_CI_RE: LazyLock<Regex> = LazyLock::new(|| contraction_regex(true));

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[0-9]+\b").unwrap());

fn contraction_regex(case_insensitive: bool) -> Regex {
    let alternation = CONTRACTIONS
        .iter()
        .map(|(from, _)| regex::escape(from))
        .collect::<Vec<_>>()
        .join("|");
    let flags = if case_insensitive { "(?i)" } else { "" };
    Regex::new(&format!(r"{flags}\b(?:{alternation})\b")).unwrap()
}

/// Remove fenced code blocks entirely.
pub(crate) fn strip_code_blocks(text: &str) -> String {
    CODE_FENCE_RE.replace_all(text, "").into_owned()
}

/// Keep word characters, whitespace, and `, . ! ?`.
///
/// Apostrophes and the spoken symbols survive until the expansion passes
/// have had a chance to read them. A typographic apostrophe is folded to
/// the ASCII one so the tables match it.
pub(crate) fn structural_scrub(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .filter(|&c| {
            c.is_alphanumeric()
                || c == '_'
                || c.is_whitespace()
                || matches!(c, ',' | '.' | '!' | '?')
                || TRANSIENT_CHARS.contains(&c)
        })
        .collect()
}

pub(crate) fn expand_contractions(text: &str, case_insensitive: bool) -> String {
    let re = if case_insensitive {
        &*CONTRACTION_CI_RE
    } else {
        &*CONTRACTION_RE
    };
    re.replace_all(text, |caps: &Captures| {
        let matched = &caps[0];
        let expansion = lookup(CONTRACTIONS, &matched.to_lowercase()).unwrap_or(matched);
        match_initial_case(matched, expansion)
    })
    .into_owned()
}

/// Expand whole whitespace-delimited tokens, then sweep leftover
/// apostrophes and symbols.
///
/// Trailing `, ! ?` are carried over to the expansion. A trailing comma may
/// also stand in for an abbreviation's final period ("etc," reads as "etc.,").
pub(crate) fn expand_abbreviations(text: &str, case_insensitive: bool) -> String {
    let expanded = TOKEN_RE.replace_all(text, |caps: &Captures| {
        let token = &caps[0];
        expand_token(token, case_insensitive).unwrap_or_else(|| token.to_string())
    });
    expanded
        .chars()
        .filter(|c| !TRANSIENT_CHARS.contains(c))
        .collect()
}

fn expand_token(token: &str, case_insensitive: bool) -> Option<String> {
    let core = token.trim_end_matches([',', '!', '?']);
    let trailing = &token[core.len()..];
    let key = |s: &str| {
        if case_insensitive {
            s.to_lowercase()
        } else {
            s.to_string()
        }
    };

    if let Some(expansion) = lookup(ABBREVIATIONS, &key(core)) {
        return Some(format!("{}{trailing}", match_initial_case(core, expansion)));
    }

    // "etc," -> "et cetera,"
    if trailing.starts_with(',') {
        let dotted = format!("{core}.");
        if let Some(expansion) = lookup(ABBREVIATIONS, &key(&dotted)) {
            return Some(format!("{}{trailing}", match_initial_case(core, expansion)));
        }
    }
    None
}

/// Spell out every digit run that is not glued to a word character.
pub(crate) fn numerals_to_words(text: &str) -> String {
    DIGIT_RUN_RE
        .replace_all(text, |caps: &Captures| {
            let digits = &caps[0];
            digits_to_words(digits).unwrap_or_else(|| digits.to_string())
        })
        .into_owned()
}

/// Commas become periods for a longer pause in synthesized speech.
pub(crate) fn substitute_pauses(text: &str) -> String {
    text.replace(',', ".")
}

/// Capitalize the replacement when the matched text started with a capital.
fn match_initial_case(matched: &str, replacement: &str) -> String {
    let starts_upper = matched.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_drops_markdown_but_keeps_transients() {
        assert_eq!(
            structural_scrub("**Bold** `code` (it's) 50 % #tag"),
            "Bold code it's 50 % tag"
        );
    }

    #[test]
    fn scrub_folds_typographic_apostrophe() {
        assert_eq!(structural_scrub("can\u{2019}t"), "can't");
    }

    #[test]
    fn contraction_requires_whole_word() {
        assert_eq!(expand_contractions("scan't", false), "scan't");
        assert_eq!(expand_contractions("it's fine", false), "it is fine");
    }

    #[test]
    fn contraction_case_modes() {
        assert_eq!(expand_contractions("It's late", false), "It's late");
        assert_eq!(expand_contractions("It's late", true), "It is late");
    }

    #[test]
    fn abbreviation_keeps_trailing_punctuation() {
        assert_eq!(expand_abbreviations("see dr. who!", false), "see doctor who!");
        assert_eq!(expand_abbreviations("apples, etc.!", false), "apples, et cetera!");
        assert_eq!(expand_abbreviations("apples etc, pears", false), "apples et cetera, pears");
    }

    #[test]
    fn abbreviation_symbols_need_whole_tokens() {
        assert_eq!(expand_abbreviations("salt & pepper", false), "salt and pepper");
        assert_eq!(expand_abbreviations("AT&T", false), "ATT");
    }

    #[test]
    fn abbreviation_sweep_removes_leftover_apostrophes() {
        assert_eq!(expand_abbreviations("I'm here", false), "Im here");
    }

    #[test]
    fn digit_runs_next_to_letters_are_left_alone() {
        assert_eq!(numerals_to_words("route 66 and 3d"), "route sixty six and 3d");
        assert_eq!(numerals_to_words("v2 1.5"), "v2 one.five");
    }

    #[test]
    fn code_fences_are_removed_lazily() {
        assert_eq!(
            strip_code_blocks("a ```x``` b ```y``` c"),
            "a  b  c"
        );
        assert_eq!(strip_code_blocks("open ``` fence"), "open ``` fence");
    }
}
