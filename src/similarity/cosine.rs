/// Cosine similarity of two presence vectors.
///
/// When either vector has zero magnitude the ratio is undefined; that case
/// scores 1.0, so two documents without tokens count as identical. The same
/// holds when only one side is empty.
pub fn cosine_similarity(a: &[u8], b: &[u8]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "presence vectors must share a vocabulary");

    let (mut dot, mut mag_a, mut mag_b) = (0u64, 0u64, 0u64);
    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (u64::from(x), u64::from(y));
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    let denom = (mag_a as f64).sqrt() * (mag_b as f64).sqrt();
    let similarity = dot as f64 / denom;
    if similarity.is_nan() {
        1.0
    } else {
        similarity
    }
}
