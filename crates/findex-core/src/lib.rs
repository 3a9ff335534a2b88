//! Core types and errors for findex.
//!
//! This crate provides the fundamental data structures shared by the
//! findex ecosystem: the decode error taxonomy and the insertion-ordered
//! path collection produced by the database reader.

mod error;
mod paths;

pub use error::DecodeError;
pub use paths::PathSet;
