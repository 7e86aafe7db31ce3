//! People and listing recommendations
//!
//! Both queries are read-only over a [`Directory`] borrowed for the duration
//! of the call.

use crate::profile::ProfileBuilder;
use crate::rank::{rank, rank_par, Ranked};
use serde::Serialize;
use std::sync::Arc;
use stylematch_core::{
    Directory, EngineConfig, Error, ListingFilter, ListingId, QuizAnswers, Result, User, UserId,
    Vector, Vectorizer, VisibleTo,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonSuggestion {
    pub user_id: UserId,
    pub name: String,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSuggestion {
    pub listing_id: ListingId,
    pub title: String,
    pub owner_name: String,
    pub score: f32,
}

/// Recommendation service over a shared vectorizer and engine defaults
#[derive(Debug, Clone)]
pub struct Recommender {
    vectorizer: Arc<Vectorizer>,
    profiles: ProfileBuilder,
    config: EngineConfig,
}

impl Recommender {
    pub fn new(vectorizer: Arc<Vectorizer>, config: EngineConfig) -> Self {
        Self {
            vectorizer,
            profiles: ProfileBuilder::new(config.weights),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn vectorizer(&self) -> &Arc<Vectorizer> {
        &self.vectorizer
    }

    pub fn compute_quiz_vector(&self, answers: &QuizAnswers) -> Vector {
        self.vectorizer.quiz_vector(answers)
    }

    pub fn compute_listing_vector(&self, title: &str, description: &str) -> Vector {
        self.vectorizer.listing_vector(title, description)
    }

    /// Composite style vector for `user_id`
    pub fn style_vector<D: Directory + ?Sized>(
        &self,
        directory: &D,
        user_id: UserId,
    ) -> Result<Vector> {
        let user = requester(directory, user_id)?;
        Ok(self.profiles.style_vector(user, directory))
    }

    /// Users whose style is closest to the requester's.
    ///
    /// Never includes the requester. Followees are skipped when
    /// `exclude_followed` is set. Only scores at or above `min_similarity` are kept.
    pub fn suggest_people<D: Directory + Sync + ?Sized>(
        &self,
        directory: &D,
        user_id: UserId,
        k: usize,
        min_similarity: f32,
        exclude_followed: bool,
    ) -> Result<Vec<PersonSuggestion>> {
        let user = requester(directory, user_id)?;
        let base = self.profiles.style_vector(user, directory);

        let candidates: Vec<&User> = directory
            .users()
            .filter(|other| other.id != user_id)
            .filter(|other| !(exclude_followed && directory.follows(user_id, other.id)))
            .collect();

        let ranked = rank_par(
            &base,
            candidates,
            |other| self.profiles.style_vector(other, directory),
            k,
            min_similarity,
        );

        Ok(ranked
            .into_iter()
            .map(|Ranked { item, score }| PersonSuggestion {
                user_id: item.id,
                name: item.name.clone(),
                score,
            })
            .collect())
    }

    /// [`Recommender::suggest_people`] with the configured defaults
    pub fn suggest_people_default<D: Directory + Sync + ?Sized>(
        &self,
        directory: &D,
        user_id: UserId,
    ) -> Result<Vec<PersonSuggestion>> {
        self.suggest_people(
            directory,
            user_id,
            self.config.people_k,
            self.config.people_min_similarity,
            self.config.exclude_followed,
        )
    }

    /// Visible listings ranked by how well their content matches the
    /// requester's style. No relevance floor: up to `k` results are always
    /// returned when that many listings are visible.
    pub fn suggest_listings<D: Directory + ?Sized>(
        &self,
        directory: &D,
        user_id: UserId,
        k: usize,
    ) -> Result<Vec<ListingSuggestion>> {
        let user = requester(directory, user_id)?;
        let base = self.profiles.style_vector(user, directory);
        let visible = VisibleTo::new(user, directory);

        let candidates = directory
            .listings()
            .filter(|listing| visible.matches(listing))
            .filter_map(|listing| {
                // a listing whose owner is absent has no name to show
                let owner = directory.user(listing.owner_id)?;
                Some(((listing, owner), listing.vector()))
            });

        Ok(rank(&base, candidates, k, f32::NEG_INFINITY)
            .into_iter()
            .map(|Ranked { item: (listing, owner), score }| ListingSuggestion {
                listing_id: listing.id,
                title: listing.title.clone(),
                owner_name: owner.name.clone(),
                score,
            })
            .collect())
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(Arc::new(Vectorizer::default()), EngineConfig::default())
    }
}

fn requester<D: Directory + ?Sized>(directory: &D, user_id: UserId) -> Result<&User> {
    directory.user(user_id).ok_or(Error::UserNotFound(user_id))
}
