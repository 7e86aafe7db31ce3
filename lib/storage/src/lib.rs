//! In-memory social directory backing the StyleMatch engine.
//!
//! [`SocialStore`] owns users, listings and follow edges behind a
//! `parking_lot::RwLock`. Recommendation queries borrow a read guard for
//! their whole duration.

pub mod store;

pub use store::SocialStore;
