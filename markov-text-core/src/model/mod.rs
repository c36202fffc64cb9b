//! Top-level module for the Markov text generation system.
//!
//! This module provides a first-order Markov text generator, including:
//! - The transition table built from a corpus (`TermTable`)
//! - The corpus-owning generation interface (`MarkovText`)

/// High-level interface owning a corpus and its cached transition table.
///
/// Exposes lazy table construction, random-walk generation with optional
/// seeding, and a bounded table excerpt for display.
pub mod markov_text;

/// First-order transition table (term to observed successor terms).
///
/// Handles corpus tokenization, duplicate-preserving successor recording,
/// and uniform random key selection.
pub mod term_table;
