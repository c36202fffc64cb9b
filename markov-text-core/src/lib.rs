//! First-order Markov chain text generation library.
//!
//! This crate builds a transition table from a whitespace-tokenized corpus
//! and generates pseudo-random text by walking that table, including:
//! - A duplicate-preserving, insertion-ordered transition table (`TermTable`)
//! - A corpus-owning type with a lazily built, cached table (`MarkovText`)
//! - Random-walk generation with frequency-faithful successor sampling
//! - A bounded table excerpt for display and diagnostics
//!
//! Only the high-level API is exposed publicly. Randomness can be supplied
//! by the caller for deterministic generation.

/// Core Markov model and generation logic.
///
/// This module exposes the transition table and the generation interface.
pub mod model;

/// Error type and `Result` alias for this crate.
pub mod errors;
