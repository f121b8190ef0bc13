pub mod cosine;
pub mod tokenizer;

pub use cosine::cosine_similarity;
pub use tokenizer::{tokenize, Vocabulary};

/// Presence-vector cosine similarity of two texts.
pub fn text_similarity(content_a: &str, content_b: &str) -> f64 {
    let tokens_a = tokenize(content_a);
    let tokens_b = tokenize(content_b);

    let vocabulary = Vocabulary::union(&tokens_a, &tokens_b);
    let vector_a = vocabulary.presence_vector(&tokens_a);
    let vector_b = vocabulary.presence_vector(&tokens_b);

    cosine_similarity(&vector_a, &vector_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_one() {
        let text = "the quick brown fox jumps over the lazy dog";
        assert!((text_similarity(text, text) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(text_similarity("alpha beta", "gamma delta"), 0.0);
    }

    #[test]
    fn test_whitespace_only_texts_score_one() {
        assert_eq!(text_similarity("   ", "\n\n"), 1.0);
    }

    #[test]
    fn test_repetition_does_not_change_score() {
        assert!((text_similarity("a a a b", "a b") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(text_similarity("Hello", "hello"), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = "one two three four";
        let b = "three four five";
        assert_eq!(text_similarity(a, b), text_similarity(b, a));
    }
}
