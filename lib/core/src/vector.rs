use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::ops::{Add, Mul};

/// A dense style vector indexed by lexicon position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// L2 norm
    #[inline]
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// True when every component is zero. The zero vector carries no style signal.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| *x == 0.0)
    }

    /// Compute cosine similarity with another vector.
    ///
    /// Returns exactly 0.0 when either side has zero norm or the dimensions differ.
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> f32 {
        if self.dim() != other.dim() {
            return 0.0;
        }

        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        (self.dot(other) / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }

    /// Normalize the vector to unit length. The zero vector is left unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            let inv_norm = 1.0 / norm;
            for x in &mut self.data {
                *x *= inv_norm;
            }
        }
    }

    /// Get normalized copy
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }

    /// Elementwise product, used to apply the lexicon weight array.
    #[must_use]
    pub fn hadamard(&self, weights: &[f32]) -> Vector {
        assert_eq!(self.dim(), weights.len());
        Vector::new(
            self.data
                .iter()
                .zip(weights.iter())
                .map(|(a, w)| a * w)
                .collect(),
        )
    }

    /// `self += other * scale`
    pub fn add_scaled(&mut self, other: &Vector, scale: f32) {
        assert_eq!(self.dim(), other.dim());
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b * scale;
        }
    }

    /// Elementwise mean of `vectors`, re-normalized to unit length.
    ///
    /// An empty input yields the zero vector of dimension `dim`.
    pub fn average<V: Borrow<Vector>>(vectors: &[V], dim: usize) -> Vector {
        if vectors.is_empty() {
            return Vector::zeros(dim);
        }

        let mut sum = Vector::zeros(dim);
        for v in vectors {
            sum.add_scaled(v.borrow(), 1.0);
        }
        let mut mean = &sum * (1.0 / vectors.len() as f32);
        mean.normalize();
        mean
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, other: &Vector) -> Vector {
        assert_eq!(self.dim(), other.dim());
        Vector::new(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        )
    }
}

impl Mul<f32> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f32) -> Vector {
        Vector::new(self.data.iter().map(|x| x * scalar).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let v1 = Vector::new(vec![1.0, 0.0]);
        let v2 = Vector::new(vec![1.0, 0.0]);
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-6);

        let v3 = Vector::new(vec![1.0, 0.0]);
        let v4 = Vector::new(vec![0.0, 1.0]);
        assert!((v3.cosine_similarity(&v4) - 0.0).abs() < 1e-6);

        let v5 = Vector::new(vec![-1.0, 0.0]);
        assert!((v1.cosine_similarity(&v5) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_against_zero_is_zero() {
        let v = Vector::new(vec![0.3, -0.2, 0.9]);
        let zero = Vector::zeros(3);
        assert_eq!(v.cosine_similarity(&zero), 0.0);
        assert_eq!(zero.cosine_similarity(&v), 0.0);
        assert_eq!(zero.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn test_cosine_dimension_mismatch() {
        let a = Vector::new(vec![1.0, 0.0]);
        let b = Vector::new(vec![1.0, 0.0, 0.0]);
        assert_eq!(a.cosine_similarity(&b), 0.0);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vector::zeros(4);
        v.normalize();
        assert!(v.is_zero());
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vector::new(vec![3.0, 4.0]).normalized();
        assert!((v.norm() - 1.0).abs() < 1e-6);
        assert!((v.as_slice()[0] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_average_empty_is_zero() {
        let empty: Vec<Vector> = Vec::new();
        let avg = Vector::average(empty.as_slice(), 5);
        assert_eq!(avg.dim(), 5);
        assert!(avg.is_zero());
    }

    #[test]
    fn test_average_single_is_normalized_input() {
        let v = Vector::new(vec![2.0, 0.0, 2.0]);
        let avg = Vector::average(&[&v][..], 3);
        assert_eq!(avg, v.normalized());
    }

    #[test]
    fn test_average_mixes_directions() {
        let a = Vector::new(vec![1.0, 0.0]);
        let b = Vector::new(vec![0.0, 1.0]);
        let avg = Vector::average(&[a, b][..], 2);
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((avg.as_slice()[0] - expected).abs() < 1e-6);
        assert!((avg.as_slice()[1] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_hadamard_and_add_scaled() {
        let v = Vector::new(vec![1.0, 2.0]).hadamard(&[2.0, 0.5]);
        assert_eq!(v.as_slice(), &[2.0, 1.0]);

        let mut acc = Vector::zeros(2);
        acc.add_scaled(&v, 0.5);
        assert_eq!(acc.as_slice(), &[1.0, 0.5]);
    }
}
