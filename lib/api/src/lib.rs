//! REST surface for StyleMatch.
//!
//! Thin actix-web handlers over [`stylematch_storage::SocialStore`] and
//! [`stylematch_similarity::Recommender`]. Errors are returned as
//! `{"error": "..."}` with 404 for unknown users and listings, 400 otherwise.

pub mod rest;

pub use rest::{configure, ApiState, RestApi};
