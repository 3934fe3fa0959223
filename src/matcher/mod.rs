//! Matching engine classifying company records against portal records

pub mod engine;

pub use engine::*;
