//! Typed user and listing records, and the snapshot the engine reads from.

use crate::quiz::QuizAnswers;
use crate::vector::Vector;
use crate::vectorizer::Vectorizer;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

pub type UserId = u64;
pub type ListingId = u64;

/// Who may see a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    /// Only visible within the owner's circle
    Circle,
}

impl Privacy {
    pub fn as_str(self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Circle => "circle",
        }
    }
}

impl FromStr for Privacy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Privacy::Public),
            "circle" => Ok(Privacy::Circle),
            _ => Err(Error::InvalidPrivacy(s.to_string())),
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Community label, e.g. a university or workplace
    pub circle: String,
    pub owned_listing_ids: Vec<ListingId>,
    pub quiz_answers: QuizAnswers,
    pub quiz_vector: Vector,
    /// Vectors of items the user liked. Nothing records likes yet; the style
    /// profile already blends them in when present.
    pub liked_vectors: Vec<Vector>,
}

impl User {
    /// A user with no quiz, listings or likes
    pub fn new(id: UserId, name: &str, circle: &str, dim: usize) -> Result<Self> {
        let name = name.trim();
        let circle = circle.trim();
        if name.is_empty() {
            return Err(Error::MissingField("name"));
        }
        if circle.is_empty() {
            return Err(Error::MissingField("circle"));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            circle: circle.to_string(),
            owned_listing_ids: Vec::new(),
            quiz_answers: QuizAnswers::default(),
            quiz_vector: Vector::zeros(dim),
            liked_vectors: Vec::new(),
        })
    }

    /// Store sanitized answers and recompute the quiz vector
    pub fn apply_quiz(&mut self, answers: &QuizAnswers, vectorizer: &Vectorizer) {
        self.quiz_answers = answers.sanitized(vectorizer.lexicon());
        self.quiz_vector = vectorizer.quiz_vector(&self.quiz_answers);
    }

    /// Record a liked item. Its vector must match the quiz vector's dimension.
    pub fn add_liked_vector(&mut self, vector: Vector) -> Result<()> {
        let expected = self.quiz_vector.dim();
        if vector.dim() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: vector.dim(),
            });
        }
        self.liked_vectors.push(vector);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub privacy: Privacy,
    /// Derived from title and description, never edited in place
    vector: Vector,
}

impl Listing {
    pub fn from_text(
        id: ListingId,
        owner_id: UserId,
        title: &str,
        description: &str,
        privacy: Privacy,
        vectorizer: &Vectorizer,
    ) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::MissingField("title"));
        }

        Ok(Self {
            id,
            owner_id,
            title: title.to_string(),
            description: description.to_string(),
            privacy,
            vector: vectorizer.listing_vector(title, description),
        })
    }

    #[inline]
    pub fn vector(&self) -> &Vector {
        &self.vector
    }

    /// Replace title and description, recomputing the content vector
    pub fn set_text(
        &mut self,
        title: &str,
        description: &str,
        vectorizer: &Vectorizer,
    ) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::MissingField("title"));
        }
        self.title = title.to_string();
        self.description = description.to_string();
        self.vector = vectorizer.listing_vector(&self.title, &self.description);
        Ok(())
    }
}

/// Read access to users, listings and the follow graph.
///
/// Iteration is in ascending id order so rankings break ties deterministically.
pub trait Directory {
    fn user(&self, id: UserId) -> Option<&User>;

    fn users(&self) -> Box<dyn Iterator<Item = &User> + '_>;

    fn listing(&self, id: ListingId) -> Option<&Listing>;

    fn listings(&self) -> Box<dyn Iterator<Item = &Listing> + '_>;

    /// Does `follower` follow `followee`
    fn follows(&self, follower: UserId, followee: UserId) -> bool;
}

/// Users, listings and follow edges at one point in time
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub users: BTreeMap<UserId, User>,
    pub listings: BTreeMap<ListingId, Listing>,
    following: BTreeMap<UserId, BTreeSet<UserId>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Insert a listing and record it on its owner, if the owner is present
    pub fn insert_listing(&mut self, listing: Listing) {
        if let Some(owner) = self.users.get_mut(&listing.owner_id) {
            if !owner.owned_listing_ids.contains(&listing.id) {
                owner.owned_listing_ids.push(listing.id);
            }
        }
        self.listings.insert(listing.id, listing);
    }

    /// Returns false when the edge already existed
    pub fn add_follow(&mut self, follower: UserId, followee: UserId) -> bool {
        self.following.entry(follower).or_default().insert(followee)
    }

    pub fn remove_follow(&mut self, follower: UserId, followee: UserId) -> bool {
        self.following
            .get_mut(&follower)
            .map(|set| set.remove(&followee))
            .unwrap_or(false)
    }

    /// Users that `follower` follows, ascending
    pub fn followees(&self, follower: UserId) -> impl Iterator<Item = UserId> + '_ {
        self.following
            .get(&follower)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}

impl Directory for Snapshot {
    fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    fn users(&self) -> Box<dyn Iterator<Item = &User> + '_> {
        Box::new(self.users.values())
    }

    fn listing(&self, id: ListingId) -> Option<&Listing> {
        self.listings.get(&id)
    }

    fn listings(&self) -> Box<dyn Iterator<Item = &Listing> + '_> {
        Box::new(self.listings.values())
    }

    fn follows(&self, follower: UserId, followee: UserId) -> bool {
        self.following
            .get(&follower)
            .map(|set| set.contains(&followee))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_parse() {
        assert_eq!("public".parse::<Privacy>().unwrap(), Privacy::Public);
        assert_eq!(" Circle ".parse::<Privacy>().unwrap(), Privacy::Circle);
        assert!(matches!(
            "friends".parse::<Privacy>(),
            Err(Error::InvalidPrivacy(v)) if v == "friends"
        ));
    }

    #[test]
    fn test_user_requires_name_and_circle() {
        assert!(matches!(User::new(1, "  ", "USYD", 4), Err(Error::MissingField("name"))));
        assert!(matches!(User::new(1, "Sarah", "", 4), Err(Error::MissingField("circle"))));
        let user = User::new(1, "Sarah", "USYD", 4).unwrap();
        assert!(user.quiz_vector.is_zero());
        assert_eq!(user.quiz_vector.dim(), 4);
    }

    #[test]
    fn test_liked_vector_dimension_checked() {
        let mut user = User::new(1, "Sarah", "USYD", 4).unwrap();
        assert!(matches!(
            user.add_liked_vector(Vector::new(vec![1.0, 0.0, 0.0])),
            Err(Error::DimensionMismatch { expected: 4, actual: 3 })
        ));
        assert!(user.liked_vectors.is_empty());

        user.add_liked_vector(Vector::new(vec![0.0, 1.0, 0.0, 0.0])).unwrap();
        assert_eq!(user.liked_vectors.len(), 1);
    }

    #[test]
    fn test_listing_text_change_recomputes_vector() {
        let vectorizer = Vectorizer::default();
        let mut listing =
            Listing::from_text(1, 1, "Grey hoodie", "sport", Privacy::Public, &vectorizer).unwrap();
        let before = listing.vector().clone();

        listing.set_text("Silk dress", "formal", &vectorizer).unwrap();
        assert_ne!(listing.vector(), &before);
        assert_eq!(listing.vector(), &vectorizer.listing_vector("Silk dress", "formal"));
    }

    #[test]
    fn test_listing_requires_title() {
        let vectorizer = Vectorizer::default();
        let res = Listing::from_text(1, 1, "", "boots", Privacy::Public, &vectorizer);
        assert!(matches!(res, Err(Error::MissingField("title"))));
    }

    #[test]
    fn test_snapshot_follow_edges() {
        let mut snapshot = Snapshot::new();
        assert!(snapshot.add_follow(1, 2));
        assert!(!snapshot.add_follow(1, 2));
        assert!(snapshot.follows(1, 2));
        assert!(!snapshot.follows(2, 1));
        assert_eq!(snapshot.followees(1).collect::<Vec<_>>(), vec![2]);
        assert!(snapshot.remove_follow(1, 2));
        assert!(!snapshot.remove_follow(1, 2));
    }

    #[test]
    fn test_insert_listing_records_ownership() {
        let vectorizer = Vectorizer::default();
        let mut snapshot = Snapshot::new();
        snapshot.insert_user(User::new(7, "Omar", "USYD", vectorizer.dim()).unwrap());
        let listing =
            Listing::from_text(3, 7, "Grey hoodie", "", Privacy::Circle, &vectorizer).unwrap();
        snapshot.insert_listing(listing);
        assert_eq!(snapshot.users[&7].owned_listing_ids, vec![3]);
    }
}
