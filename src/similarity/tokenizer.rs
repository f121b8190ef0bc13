use ahash::AHashSet;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Runs of Unicode word characters (letters, digits, connector punctuation)
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
}

/// Split text into word tokens. No case folding, no stemming.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// The distinct tokens of two documents, in first-seen order (all of the
/// first document's tokens, then the second's new ones).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary<'a> {
    terms: Vec<&'a str>,
}

impl<'a> Vocabulary<'a> {
    pub fn union(tokens_a: &[&'a str], tokens_b: &[&'a str]) -> Self {
        let mut seen: AHashSet<&'a str> = AHashSet::new();
        let terms = tokens_a
            .iter()
            .chain(tokens_b.iter())
            .copied()
            .filter(|token| seen.insert(*token))
            .collect();
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[&'a str] {
        &self.terms
    }

    /// `v[i] = 1` when the i-th term occurs at least once in `tokens`.
    pub fn presence_vector(&self, tokens: &[&str]) -> Vec<u8> {
        let present: AHashSet<&str> = tokens.iter().copied().collect();
        self.terms
            .iter()
            .map(|term| u8::from(present.contains(term)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_non_word() {
        assert_eq!(
            tokenize("hello, world! foo_bar-42"),
            vec!["hello", "world", "foo_bar", "42"]
        );
    }

    #[test]
    fn test_tokenize_keeps_case() {
        assert_eq!(tokenize("Hello hello"), vec!["Hello", "hello"]);
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(tokenize("привет мир café"), vec!["привет", "мир", "café"]);
    }

    #[test]
    fn test_tokenize_whitespace_only_is_empty() {
        assert!(tokenize("  \n\t  ").is_empty());
        assert!(tokenize("").is_empty());
        assert!(tokenize("--- ... !!!").is_empty());
    }

    #[test]
    fn test_vocabulary_union_dedupes_in_first_seen_order() {
        let a = tokenize("b a b");
        let b = tokenize("c a d");
        let vocab = Vocabulary::union(&a, &b);
        assert_eq!(vocab.terms(), &["b", "a", "c", "d"]);
    }

    #[test]
    fn test_presence_vector_ignores_frequency() {
        let a = tokenize("x x x y");
        let b = tokenize("y z");
        let vocab = Vocabulary::union(&a, &b);
        assert_eq!(vocab.presence_vector(&a), vec![1, 1, 0]);
        assert_eq!(vocab.presence_vector(&b), vec![0, 1, 1]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = Vocabulary::union(&[], &[]);
        assert!(vocab.is_empty());
        assert!(vocab.presence_vector(&[]).is_empty());
    }
}
