use crate::types::{FeatureVector, SimilarityScore};

/// Cosine similarity between two vectors of one vocabulary space
///
/// Both vectors empty or all-zero counts as identical (1.0); exactly one
/// zero vector scores 0.0. The denominator is a single square root of the
/// product of squared magnitudes, so identical vectors score exactly 1.0.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> SimilarityScore {
    debug_assert_eq!(a.len(), b.len(), "vectors must share one vocabulary");
    if a.len() != b.len() {
        return SimilarityScore::ZERO;
    }

    let squared_a = a.dot(a);
    let squared_b = b.dot(b);

    match (squared_a > 0.0, squared_b > 0.0) {
        (false, false) => SimilarityScore::ONE,
        (true, false) | (false, true) => SimilarityScore::ZERO,
        (true, true) => {
            let dot = a.dot(b);
            SimilarityScore::new(dot / (squared_a * squared_b).sqrt())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_identical_vectors_score_exactly_one() {
        let v = array![1.0, 2.0, 1.4054651081081644, 7.0];
        assert_eq!(cosine_similarity(&v, &v).value(), 1.0);
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let a = array![1.0, 0.0];
        let b = array![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b).value(), 0.0);
    }

    #[test]
    fn test_scale_invariance() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![2.0, 4.0, 6.0];
        let score = cosine_similarity(&a, &b).value();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_overlap() {
        let a = array![1.0, 1.0, 0.0];
        let b = array![1.0, 0.0, 1.0];
        let score = cosine_similarity(&a, &b).value();
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_both_empty_scores_one() {
        let empty = FeatureVector::zeros(0);
        assert_eq!(cosine_similarity(&empty, &empty), SimilarityScore::ONE);
    }

    #[test]
    fn test_one_zero_vector_scores_zero() {
        let a = array![0.0, 0.0];
        let b = array![1.0, 3.0];
        assert_eq!(cosine_similarity(&a, &b), SimilarityScore::ZERO);
        assert_eq!(cosine_similarity(&b, &a), SimilarityScore::ZERO);
    }
}
