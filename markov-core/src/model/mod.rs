//! Top-level module for the word chain generation system.
//!
//! This module provides:
//! - Fixed-order prefix windows (`Prefix`, `PrefixWindows`)
//! - The avoid list used during ingestion (`AvoidSet`)
//! - The multi-order chain itself (`ChainModel`)
//! - Generation configuration (`GeneratorConfig`)
//! - A high-level generation interface (`Generator`)

/// High-level interface owning a built chain and its random source.
pub mod generator;

/// Multi-order word chain: construction and generation.
///
/// Every order from 1 to `max_order` is tracked simultaneously and
/// stored in a single flat prefix mapping.
pub mod chain;

/// Fixed-length word windows used as chain lookup keys.
pub mod prefix;

/// Lowercased word list whose members get obfuscated at ingestion.
pub mod avoid;

/// Generator configuration (maximum order, seed).
pub mod config;
