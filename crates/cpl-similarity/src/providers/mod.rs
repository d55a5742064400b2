//! Embedding providers usable behind [`crate::EmbeddingSimilarity`].

pub mod hashed_tf;

pub use hashed_tf::HashedTfProvider;
