//! # StyleMatch Core
//!
//! Core library for the StyleMatch recommendation engine.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`Lexicon`] - Closed clothing vocabulary with per-category weights
//! - [`Vector`] - Dense style vector over the lexicon
//! - [`Vectorizer`] - Free text and quiz answers to style vectors
//! - [`User`], [`Listing`], [`Snapshot`] - Typed records read by the engine
//! - [`can_view`] - Public / circle visibility rule
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use stylematch_core::{Lexicon, QuizAnswers, Vectorizer};
//!
//! let vectorizer = Vectorizer::new(Arc::new(Lexicon::standard()));
//!
//! let listing = vectorizer.listing_vector("Black leather boots", "winter streetwear");
//! let quiz = vectorizer.quiz_vector(&QuizAnswers {
//!     styles: vec!["streetwear".to_string()],
//!     colors: vec!["black".to_string()],
//!     ..Default::default()
//! });
//!
//! assert!(quiz.cosine_similarity(&listing) > 0.6);
//! ```

pub mod config;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod quiz;
pub mod vector;
pub mod vectorizer;
pub mod visibility;

pub use config::{EngineConfig, ProfileWeights};
pub use error::{Error, Result};
pub use lexicon::{Category, Lexicon, LexiconEntry};
pub use model::{Directory, Listing, ListingId, Privacy, Snapshot, User, UserId};
pub use quiz::{Persona, QuizAnswers};
pub use vector::Vector;
pub use vectorizer::Vectorizer;
pub use visibility::{can_view, visible_listings, ListingFilter, VisibleTo};
