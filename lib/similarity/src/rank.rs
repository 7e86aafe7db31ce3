//! Cosine ranking with a relevance floor and stable tie-breaking

use rayon::prelude::*;
use serde::Serialize;
use std::borrow::Borrow;
use stylematch_core::Vector;

/// A candidate together with its similarity to the query vector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<T> {
    pub item: T,
    pub score: f32,
}

/// Cosine similarity in [-1, 1]; 0.0 whenever either side is the zero vector
#[inline]
pub fn cosine(a: &Vector, b: &Vector) -> f32 {
    a.cosine_similarity(b)
}

/// Score `candidates` against `base`, keep those scoring at least
/// `min_similarity`, and return the best `k`.
///
/// The sort is stable, so equal scores keep the order in which candidates
/// were supplied.
pub fn rank<T, V, I>(base: &Vector, candidates: I, k: usize, min_similarity: f32) -> Vec<Ranked<T>>
where
    I: IntoIterator<Item = (T, V)>,
    V: Borrow<Vector>,
{
    let scored = candidates
        .into_iter()
        .map(|(item, vector)| Ranked {
            score: cosine(base, vector.borrow()),
            item,
        })
        .filter(|r| r.score >= min_similarity)
        .collect();

    top_k(scored, k)
}

/// Like [`rank`], but computes candidate vectors in parallel.
///
/// `vector_of` may be expensive (a full style profile); results keep the
/// candidate order before sorting, so the output matches the serial path.
pub fn rank_par<T, F>(
    base: &Vector,
    candidates: Vec<T>,
    vector_of: F,
    k: usize,
    min_similarity: f32,
) -> Vec<Ranked<T>>
where
    T: Send,
    F: Fn(&T) -> Vector + Sync,
{
    let scored: Vec<Ranked<T>> = candidates
        .into_par_iter()
        .map(|item| {
            let score = cosine(base, &vector_of(&item));
            Ranked { item, score }
        })
        .collect();

    let kept = scored
        .into_iter()
        .filter(|r| r.score >= min_similarity)
        .collect();

    top_k(kept, k)
}

fn top_k<T>(mut scored: Vec<Ranked<T>>, k: usize) -> Vec<Ranked<T>> {
    // Sort by score descending
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(data: &[f32]) -> Vector {
        Vector::new(data.to_vec())
    }

    #[test]
    fn test_rank_orders_descending() {
        let base = v(&[1.0, 0.0]);
        let candidates = vec![
            (1, v(&[0.0, 1.0])),
            (2, v(&[1.0, 0.0])),
            (3, v(&[1.0, 1.0])),
        ];
        let ranked = rank(&base, candidates, 10, -1.0);
        let ids: Vec<_> = ranked.iter().map(|r| r.item).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!((ranked[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rank_applies_floor_and_k() {
        let base = v(&[1.0, 0.0]);
        let candidates = vec![
            (1, v(&[-1.0, 0.0])),
            (2, v(&[1.0, 0.0])),
            (3, v(&[1.0, 1.0])),
            (4, v(&[0.0, 1.0])),
        ];
        let ranked = rank(&base, candidates.clone(), 10, 0.5);
        assert_eq!(ranked.iter().map(|r| r.item).collect::<Vec<_>>(), vec![2, 3]);

        let ranked = rank(&base, candidates.clone(), 1, -1.0);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item, 2);

        assert!(rank(&base, candidates, 0, -1.0).is_empty());
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let base = v(&[1.0, 0.0]);
        let same = v(&[0.5, 0.5]);
        let candidates = vec![(3, &same), (7, &same), (9, &same)];
        for _ in 0..5 {
            let ranked = rank(&base, candidates.clone(), 3, 0.0);
            assert_eq!(ranked.iter().map(|r| r.item).collect::<Vec<_>>(), vec![3, 7, 9]);
        }
    }

    #[test]
    fn test_zero_base_scores_zero() {
        let base = Vector::zeros(2);
        let candidates = vec![(1, v(&[1.0, 0.0])), (2, v(&[0.0, 1.0]))];
        let ranked = rank(&base, candidates, 5, 0.0);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.score == 0.0));
        assert_eq!(ranked[0].item, 1);
    }

    #[test]
    fn test_rank_par_matches_serial() {
        let base = v(&[1.0, 0.2, 0.0]);
        let vectors: Vec<Vector> = (0..64)
            .map(|i| v(&[(i % 5) as f32, (i % 3) as f32, 1.0]))
            .collect();

        let serial = rank(&base, vectors.iter().enumerate(), 10, 0.1);
        let parallel = rank_par(
            &base,
            (0..vectors.len()).collect(),
            |i| vectors[*i].clone(),
            10,
            0.1,
        );

        let a: Vec<_> = serial.iter().map(|r| r.item).collect();
        let b: Vec<_> = parallel.iter().map(|r| r.item).collect();
        assert_eq!(a, b);
    }
}
