//! Fixed rewrite tables. Keys are lowercase.

/// Contractions expanded on whole-word matches.
pub(crate) const CONTRACTIONS: &[(&str, &str)] = &[
    ("can't", "cannot"),
    ("won't", "will not"),
    ("i'm", "i am"),
    ("it's", "it is"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("i've", "i have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("didn't", "did not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("hadn't", "had not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    ("couldn't", "could not"),
    ("mustn't", "must not"),
    ("let's", "let us"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("what's", "what is"),
    ("who's", "who is"),
    ("here's", "here is"),
    ("where's", "where is"),
    ("how's", "how is"),
];

/// Abbreviations and spoken symbols expanded on whole-token matches.
pub(crate) const ABBREVIATIONS: &[(&str, &str)] = &[
    ("dr.", "doctor"),
    ("mr.", "mister"),
    ("mrs.", "missus"),
    ("ms.", "miss"),
    ("st.", "saint"),
    ("vs.", "versus"),
    ("etc.", "et cetera"),
    ("e.g.", "for example"),
    ("i.e.", "that is"),
    ("&", "and"),
    ("%", "percent"),
    ("@", "at"),
    ("=", "equals"),
    ("+", "plus"),
    ("/", "slash"),
];

/// Characters the scrub keeps only until the expansion passes consume them.
pub(crate) const TRANSIENT_CHARS: &[char] = &['\'', '&', '%', '@', '=', '+', '/'];

pub(crate) fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercase_and_unique() {
        for table in [CONTRACTIONS, ABBREVIATIONS] {
            let mut seen = std::collections::HashSet::new();
            for (key, _) in table {
                assert_eq!(*key, key.to_lowercase());
                assert!(seen.insert(*key), "duplicate key {key}");
            }
        }
    }

    #[test]
    fn symbol_keys_are_transient() {
        for (key, _) in ABBREVIATIONS {
            if key.chars().count() == 1 {
                let c = key.chars().next().unwrap();
                assert!(TRANSIENT_CHARS.contains(&c), "{c} would be scrubbed first");
            }
        }
    }

    #[test]
    fn lookup_finds_exact_key_only() {
        assert_eq!(lookup(CONTRACTIONS, "can't"), Some("cannot"));
        assert_eq!(lookup(CONTRACTIONS, "Can't"), None);
        assert_eq!(lookup(ABBREVIATIONS, "%"), Some("percent"));
    }
}
