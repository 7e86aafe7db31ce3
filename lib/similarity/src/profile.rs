//! Style profile builder
//!
//! Blends the signals known about a user into one composite style vector.

use stylematch_core::{Directory, ProfileWeights, User, Vector};

/// Builds composite user style vectors
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileBuilder {
    weights: ProfileWeights,
}

impl ProfileBuilder {
    pub fn new(weights: ProfileWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ProfileWeights {
        &self.weights
    }

    /// Compose the user's style vector from
    /// 1. the quiz vector, if non-zero
    /// 2. the mean of owned listings resolvable in `directory`, if any
    /// 3. the mean of liked-item vectors, if any
    ///
    /// each scaled by its weight, summed and normalized. With no signal the
    /// result is the zero vector. Vectors whose dimension differs from the
    /// quiz vector's are ignored.
    pub fn style_vector<D: Directory + ?Sized>(&self, user: &User, directory: &D) -> Vector {
        let dim = user.quiz_vector.dim();
        let mut composite = Vector::zeros(dim);
        let mut has_signal = false;

        if user.quiz_vector.norm() > 0.0 {
            composite.add_scaled(&user.quiz_vector, self.weights.quiz);
            has_signal = true;
        }

        let owned: Vec<&Vector> = user
            .owned_listing_ids
            .iter()
            .filter_map(|id| directory.listing(*id))
            .map(|listing| listing.vector())
            .filter(|v| v.dim() == dim)
            .collect();
        if !owned.is_empty() {
            let mean = Vector::average(owned.as_slice(), dim);
            composite.add_scaled(&mean, self.weights.owned);
            has_signal = true;
        }

        let liked: Vec<&Vector> = user
            .liked_vectors
            .iter()
            .filter(|v| v.dim() == dim)
            .collect();
        if !liked.is_empty() {
            let mean = Vector::average(liked.as_slice(), dim);
            composite.add_scaled(&mean, self.weights.liked);
            has_signal = true;
        }

        if !has_signal {
            return Vector::zeros(dim);
        }
        composite.normalize();
        composite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylematch_core::{Listing, Privacy, QuizAnswers, Snapshot, Vectorizer};

    fn user_with_quiz(v: &Vectorizer, styles: &[&str]) -> User {
        let mut user = User::new(1, "Meghna", "USYD", v.dim()).unwrap();
        let answers = QuizAnswers {
            styles: styles.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        user.apply_quiz(&answers, v);
        user
    }

    #[test]
    fn test_no_signal_is_zero() {
        let v = Vectorizer::default();
        let snapshot = Snapshot::new();
        let user = User::new(1, "New", "USYD", v.dim()).unwrap();
        let style = ProfileBuilder::default().style_vector(&user, &snapshot);
        assert_eq!(style.dim(), v.dim());
        assert!(style.is_zero());
    }

    #[test]
    fn test_quiz_only_equals_quiz_vector() {
        let v = Vectorizer::default();
        let snapshot = Snapshot::new();
        let user = user_with_quiz(&v, &["boho"]);
        let style = ProfileBuilder::default().style_vector(&user, &snapshot);
        assert!((style.cosine_similarity(&user.quiz_vector) - 1.0).abs() < 1e-5);
        assert!((style.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_unresolvable_owned_ids_are_skipped() {
        let v = Vectorizer::default();
        let snapshot = Snapshot::new();
        let mut user = User::new(1, "Omar", "USYD", v.dim()).unwrap();
        user.owned_listing_ids.push(42);
        assert!(ProfileBuilder::default().style_vector(&user, &snapshot).is_zero());
    }

    #[test]
    fn test_owned_listings_pull_profile() {
        let v = Vectorizer::default();
        let mut snapshot = Snapshot::new();
        snapshot.insert_user(user_with_quiz(&v, &["formal"]));
        snapshot.insert_listing(
            Listing::from_text(1, 1, "Grey hoodie", "sport casual", Privacy::Public, &v).unwrap(),
        );
        let user = &snapshot.users[&1];
        let builder = ProfileBuilder::default();
        let style = builder.style_vector(user, &snapshot);

        let hoodie = snapshot.listings[&1].vector();
        assert!(style.cosine_similarity(hoodie) > 0.0);
        assert!(style.cosine_similarity(&user.quiz_vector) < 1.0 - 1e-4);
        assert!((style.norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_liked_vectors_contribute() {
        let v = Vectorizer::default();
        let snapshot = Snapshot::new();
        let mut user = User::new(1, "Sarah", "USYD", v.dim()).unwrap();
        let liked = v.text_to_vector("vintage denim jacket");
        user.add_liked_vector(liked.clone()).unwrap();

        let style = ProfileBuilder::default().style_vector(&user, &snapshot);
        assert!((style.cosine_similarity(&liked) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_mis_sized_vectors_are_ignored() {
        let v = Vectorizer::default();
        let snapshot = Snapshot::new();
        let mut user = user_with_quiz(&v, &["boho"]);
        user.liked_vectors.push(Vector::new(vec![1.0, 0.0, 0.0]));

        let style = ProfileBuilder::default().style_vector(&user, &snapshot);
        assert_eq!(style.dim(), v.dim());
        assert!((style.cosine_similarity(&user.quiz_vector) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_weight_drops_signal_direction() {
        let v = Vectorizer::default();
        let mut snapshot = Snapshot::new();
        snapshot.insert_user(user_with_quiz(&v, &["formal"]));
        snapshot.insert_listing(
            Listing::from_text(1, 1, "Grey hoodie", "sport", Privacy::Public, &v).unwrap(),
        );
        let builder = ProfileBuilder::new(ProfileWeights { quiz: 0.0, owned: 1.0, liked: 0.0 });
        let style = builder.style_vector(&snapshot.users[&1], &snapshot);
        let hoodie = snapshot.listings[&1].vector();
        assert!((style.cosine_similarity(hoodie) - 1.0).abs() < 1e-5);
    }
}
