//! Variable-order word-level Markov text generation library.
//!
//! This crate provides a word chain generator including:
//! - Fixed-length prefix windows, tracked for every order up to a maximum
//! - Chain construction from a line-oriented corpus
//! - Ingestion-time obfuscation of words listed in an avoid list
//! - Random generation with an injectable random source
//!
//! ```no_run
//! use markov_core::model::chain::ChainModel;
//!
//! # fn main() -> markov_core::Result<()> {
//! let mut model = ChainModel::new(2)?;
//! model.build("the cat sat\nthe dog ran".as_bytes(), "dog".as_bytes())?;
//! println!("{}", model.generate(20));
//! # Ok(())
//! # }
//! ```

/// Chain model, prefix windows, avoid list and the high-level generator.
pub mod model;

/// Error type shared across the crate.
pub mod error;

/// I/O utilities (opening corpus files).
///
/// Not exposed
pub(crate) mod io;

pub use error::{ChainError, Result};
