use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use stylematch_core::{
    visible_listings, Directory, Error, Listing, ListingId, Privacy, QuizAnswers, Result, Snapshot,
    User, UserId, Vectorizer,
};

/// In-memory directory of users, listings and follow edges.
///
/// Writers take the lock for a single mutation; readers hold a guard for a
/// whole recommendation query and see one consistent state.
pub struct SocialStore {
    state: Arc<RwLock<Snapshot>>,
    vectorizer: Arc<Vectorizer>,
    next_user_id: AtomicU64,
    next_listing_id: AtomicU64,
}

impl SocialStore {
    pub fn new(vectorizer: Arc<Vectorizer>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Snapshot::new())),
            vectorizer,
            next_user_id: AtomicU64::new(1),
            next_listing_id: AtomicU64::new(1),
        }
    }

    pub fn vectorizer(&self) -> &Arc<Vectorizer> {
        &self.vectorizer
    }

    /// Read guard over the current state
    pub fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.state.read()
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        self.state.read().clone()
    }

    pub fn user_count(&self) -> usize {
        self.state.read().users.len()
    }

    pub fn listing_count(&self) -> usize {
        self.state.read().listings.len()
    }

    pub fn get_user(&self, user_id: UserId) -> Option<User> {
        self.state.read().user(user_id).cloned()
    }

    pub fn get_listing(&self, listing_id: ListingId) -> Option<Listing> {
        self.state.read().listing(listing_id).cloned()
    }

    pub fn add_user(&self, name: &str, circle: &str) -> Result<UserId> {
        let mut state = self.state.write();
        let id = self.next_user_id.load(Ordering::Acquire);
        let user = User::new(id, name, circle, self.vectorizer.dim())?;
        self.next_user_id.store(id + 1, Ordering::Release);
        state.insert_user(user);

        tracing::debug!(user_id = id, circle, "user added");
        Ok(id)
    }

    /// Follow another user. Following yourself is ignored.
    pub fn follow(&self, follower: UserId, followee: UserId) -> Result<()> {
        let mut state = self.state.write();
        ensure_user(&state, follower)?;
        ensure_user(&state, followee)?;
        if follower == followee {
            return Ok(());
        }
        if state.add_follow(follower, followee) {
            tracing::debug!(follower, followee, "follow added");
        }
        Ok(())
    }

    /// Remove a follow edge; absent edges are ignored
    pub fn unfollow(&self, follower: UserId, followee: UserId) {
        if self.state.write().remove_follow(follower, followee) {
            tracing::debug!(follower, followee, "follow removed");
        }
    }

    /// Mutual follow
    pub fn is_connected(&self, a: UserId, b: UserId) -> bool {
        let state = self.state.read();
        state.follows(a, b) && state.follows(b, a)
    }

    pub fn followees(&self, follower: UserId) -> Vec<UserId> {
        self.state.read().followees(follower).collect()
    }

    /// Record quiz answers and recompute the user's quiz vector
    pub fn take_style_quiz(&self, user_id: UserId, answers: &QuizAnswers) -> Result<()> {
        let mut state = self.state.write();
        let user = state
            .users
            .get_mut(&user_id)
            .ok_or(Error::UserNotFound(user_id))?;
        user.apply_quiz(answers, &self.vectorizer);

        tracing::debug!(
            user_id,
            styles = user.quiz_answers.styles.len(),
            signal = !user.quiz_vector.is_zero(),
            "style quiz recorded"
        );
        Ok(())
    }

    /// Create a listing. `privacy` must be `"public"` or `"circle"`.
    pub fn add_listing(
        &self,
        owner_id: UserId,
        title: &str,
        description: &str,
        privacy: &str,
    ) -> Result<ListingId> {
        let privacy: Privacy = privacy.parse()?;
        let mut state = self.state.write();
        ensure_user(&state, owner_id)?;

        let id = self.next_listing_id.load(Ordering::Acquire);
        let listing =
            Listing::from_text(id, owner_id, title, description, privacy, &self.vectorizer)?;
        self.next_listing_id.store(id + 1, Ordering::Release);
        state.insert_listing(listing);

        tracing::debug!(listing_id = id, owner_id, %privacy, "listing added");
        Ok(id)
    }

    pub fn set_listing_privacy(&self, listing_id: ListingId, privacy: &str) -> Result<()> {
        let privacy: Privacy = privacy.parse()?;
        let mut state = self.state.write();
        let listing = state
            .listings
            .get_mut(&listing_id)
            .ok_or(Error::ListingNotFound(listing_id))?;
        listing.privacy = privacy;

        tracing::debug!(listing_id, %privacy, "listing privacy changed");
        Ok(())
    }

    /// Replace a listing's title and description; its vector is recomputed
    pub fn update_listing_text(
        &self,
        listing_id: ListingId,
        title: &str,
        description: &str,
    ) -> Result<()> {
        let mut state = self.state.write();
        let listing = state
            .listings
            .get_mut(&listing_id)
            .ok_or(Error::ListingNotFound(listing_id))?;
        listing.set_text(title, description, &self.vectorizer)
    }

    /// Listings `viewer_id` may see, ascending id
    pub fn visible_listings_for(&self, viewer_id: UserId) -> Result<Vec<Listing>> {
        let state = self.state.read();
        let viewer = state.user(viewer_id).ok_or(Error::UserNotFound(viewer_id))?;
        Ok(visible_listings(viewer, &*state).into_iter().cloned().collect())
    }
}

impl Default for SocialStore {
    fn default() -> Self {
        Self::new(Arc::new(Vectorizer::default()))
    }
}

fn ensure_user(state: &Snapshot, user_id: UserId) -> Result<()> {
    if state.user(user_id).is_some() {
        Ok(())
    } else {
        Err(Error::UserNotFound(user_id))
    }
}
