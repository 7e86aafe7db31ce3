//! # StyleMatch Similarity
//!
//! Style-based recommendations on top of `stylematch-core`.
//!
//! ## Features
//!
//! - **Style profiles**: quiz, owned listings and liked items blended into one vector
//! - **Cosine ranking**: top-k with a relevance floor and stable tie-breaking
//! - **Recommendations**: people with a similar style, listings matching a style,
//!   filtered by circle visibility
//!
//! ## Example
//!
//! ```rust
//! use stylematch_core::{Listing, Privacy, QuizAnswers, Snapshot, User};
//! use stylematch_similarity::Recommender;
//!
//! let recommender = Recommender::default();
//! let vectorizer = recommender.vectorizer().clone();
//!
//! let mut snapshot = Snapshot::new();
//! let mut me = User::new(1, "Meghna", "USYD", vectorizer.dim()).unwrap();
//! me.apply_quiz(
//!     &QuizAnswers { styles: vec!["streetwear".into()], ..Default::default() },
//!     &vectorizer,
//! );
//! snapshot.insert_user(me);
//! snapshot.insert_user(User::new(2, "Sarah", "USYD", vectorizer.dim()).unwrap());
//! snapshot.insert_listing(
//!     Listing::from_text(
//!         1,
//!         2,
//!         "Black leather boots",
//!         "winter streetwear",
//!         Privacy::Circle,
//!         &vectorizer,
//!     )
//!     .unwrap(),
//! );
//!
//! let listings = recommender.suggest_listings(&snapshot, 1, 5).unwrap();
//! assert_eq!(listings[0].title, "Black leather boots");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Directory  │────>│   Profile   │────>│    Rank     │
//! │ (snapshot)  │     │ (user → v)  │     │ (cosine)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        ▲
//!       │              ┌─────────────┐           │
//!       └─────────────>│ Visibility  │───────────┘
//!                      │ (listings)  │
//!                      └─────────────┘
//! ```

pub mod profile;
pub mod rank;
pub mod recommend;

pub use profile::ProfileBuilder;
pub use rank::{cosine, rank, rank_par, Ranked};
pub use recommend::{ListingSuggestion, PersonSuggestion, Recommender};
