//! # StyleMatch
//!
//! Style-vector recommendations for a clothing sharing marketplace.
//!
//! Users and listings are projected onto a fixed clothing vocabulary
//! (garment types, styles, seasons, fits, colors, materials). Users get a
//! composite style vector from their onboarding quiz and the listings they
//! own; listings get a content vector from their title and description.
//! Cosine similarity ranks people with a similar style and listings that
//! match a style, while circle-restricted listings stay inside their circle.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! stylematch --http-port 8000 --demo
//! curl localhost:8000/users/1/suggestions/listings?k=5
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use stylematch::prelude::*;
//!
//! let recommender = Recommender::default();
//! let store = SocialStore::new(recommender.vectorizer().clone());
//!
//! let me = store.add_user("Meghna", "USYD").unwrap();
//! let sarah = store.add_user("Sarah", "USYD").unwrap();
//! store
//!     .take_style_quiz(me, &QuizAnswers::from_personas(&["street"]))
//!     .unwrap();
//! store
//!     .add_listing(sarah, "Black leather boots", "winter streetwear", "circle")
//!     .unwrap();
//!
//! let snapshot = store.read();
//! let listings = recommender.suggest_listings(&*snapshot, me, 5).unwrap();
//! assert_eq!(listings[0].owner_name, "Sarah");
//! ```
//!
//! ## Crate Structure
//!
//! - `stylematch-core` - Lexicon, vectors, vectorizer, typed records, visibility
//! - `stylematch-similarity` - Style profiles, ranking, recommendations
//! - `stylematch-storage` - In-memory social directory
//! - `stylematch-api` - REST API

pub mod demo;

// Re-export core types
pub use stylematch_core::lexicon;
pub use stylematch_core::{
    can_view, Category, Directory, EngineConfig, Error, Lexicon, Listing, ListingId, Persona,
    Privacy, ProfileWeights, QuizAnswers, Result, Snapshot, User, UserId, Vector, Vectorizer,
};

// Re-export engine
pub use stylematch_similarity::{
    cosine, rank, ListingSuggestion, PersonSuggestion, ProfileBuilder, Ranked, Recommender,
};

// Re-export storage
pub use stylematch_storage::SocialStore;

// Re-export API
pub use stylematch_api::{ApiState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Directory, EngineConfig, Error, Lexicon, Listing, Privacy, QuizAnswers, Recommender,
        Result, Snapshot, SocialStore, User, Vector, Vectorizer,
    };
}
