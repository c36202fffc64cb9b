use indexmap::IndexMap;
use rand::Rng;
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::errors::{MarkovTextError, Result};
use super::term_table::TermTable;

/// High-level Markov text generator owning a corpus.
///
/// # Responsibilities
/// - Hold the immutable source corpus
/// - Build the transition table lazily on first need and cache it
/// - Generate text by a bounded random walk over the table
/// - Expose a bounded table excerpt for display
///
/// # Invariants
/// - The cached table is never mutated after construction; a rebuild
///   recomputes it from the same corpus and yields an identical table
/// - Generated output only contains terms present in the corpus
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MarkovText {
	/// The raw source text.
	corpus: String,

	/// Transition table cache; `None` until first needed.
	term_table: Option<TermTable>,
}

impl MarkovText {
	/// Default target number of terms produced by a generation walk.
	pub const DEFAULT_TERM_COUNT: usize = 15;

	/// Creates a generator over the given corpus.
	///
	/// The transition table is not built yet; it is computed on the first
	/// operation that needs it.
	pub fn new(corpus: impl Into<String>) -> Self {
		Self {
			corpus: corpus.into(),
			term_table: None,
		}
	}

	/// Returns the source corpus.
	pub fn corpus(&self) -> &str {
		&self.corpus
	}

	/// Returns the transition table, building and caching it if absent.
	pub fn term_table(&mut self) -> &TermTable {
		let corpus = &self.corpus;
		self.term_table.get_or_insert_with(|| TermTable::from_corpus(corpus))
	}

	/// Recomputes the transition table and overwrites the cache.
	///
	/// Idempotent for an unchanged corpus; the result is identical to the
	/// previously cached table.
	pub fn rebuild_term_table(&mut self) -> &TermTable {
		self.term_table.insert(TermTable::from_corpus(&self.corpus))
	}

	/// Generates text by a random walk over the transition table, drawing
	/// randomness from the thread-local generator.
	///
	/// See [`generate_with_rng`](Self::generate_with_rng) for the semantics
	/// and for deterministic generation from a seeded source.
	pub fn generate(&mut self, seed_term: Option<&str>, term_count: usize) -> Result<String> {
		self.generate_with_rng(&mut rand::rng(), seed_term, term_count)
	}

	/// Generates a whitespace-joined sequence of up to `term_count` terms.
	///
	/// # Parameters
	/// - `rng`: Source of randomness; pass a seeded generator for
	///   reproducible output.
	/// - `seed_term`: Starting term. Must be a key of the transition table
	///   when given; when `None`, a uniformly random key is used.
	/// - `term_count`: Target output length including the starting term.
	///
	/// # Behavior
	/// - An empty table (corpus with fewer than two terms) yields `Ok("")`.
	/// - Each step draws uniformly from the current term's follower list;
	///   duplicates in the list bias the draw toward frequent successors.
	/// - Reaching a term with no recorded followers ends the walk early with
	///   the partial sequence. This is not an error.
	///
	/// # Errors
	/// Returns [`MarkovTextError::InvalidSeed`] if `seed_term` is given but
	/// is not a key of the transition table.
	pub fn generate_with_rng<R: Rng + ?Sized>(
		&mut self,
		rng: &mut R,
		seed_term: Option<&str>,
		term_count: usize,
	) -> Result<String> {
		let table = self.term_table();
		if table.is_empty() {
			return Ok(String::new());
		}

		let start = match seed_term {
			Some(seed) => {
				if !table.contains_key(seed) {
					return Err(MarkovTextError::InvalidSeed(seed.to_owned()));
				}
				seed.to_owned()
			}
			// Non-empty table, random_key cannot fail
			None => table.random_key(rng).unwrap_or_default().to_owned(),
		};

		let mut generated = vec![start];
		for _ in 1..term_count {
			let current = generated.last().map(String::as_str).unwrap_or_default();
			match table.followers(current).and_then(|followers| followers.choose(rng)) {
				Some(next) => generated.push(next.clone()),
				// Current term has no recorded followers, stop early
				None => break,
			}
		}

		Ok(generated.join(" "))
	}

	/// Returns a compact excerpt of the transition table for display.
	///
	/// Builds the table first if absent. Takes the first `n_keys` keys in
	/// table iteration order with at most `max_followers` followers each;
	/// truncated lists end with a `"..."` marker. The returned mapping is an
	/// independent copy.
	pub fn sample_term_dict(
		&mut self,
		n_keys: usize,
		max_followers: usize,
	) -> IndexMap<String, Vec<String>> {
		self.term_table().sample(n_keys, max_followers)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const CORPUS: &str = "the cat sat on the mat the cat ran";

	#[test]
	fn empty_corpus_generates_an_empty_string() {
		let mut model = MarkovText::new("");
		assert_eq!(model.generate(None, MarkovText::DEFAULT_TERM_COUNT).unwrap(), "");
	}

	#[test]
	fn single_term_corpus_generates_an_empty_string() {
		let mut model = MarkovText::new("lonely");
		assert_eq!(model.generate(None, 5).unwrap(), "");
	}

	#[test]
	fn unknown_seed_is_rejected() {
		let mut model = MarkovText::new(CORPUS);
		let result = model.generate(Some("dog"), 5);
		assert!(matches!(result, Err(MarkovTextError::InvalidSeed(seed)) if seed == "dog"));
	}

	#[test]
	fn last_corpus_term_is_not_a_valid_seed() {
		let mut model = MarkovText::new(CORPUS);
		assert!(matches!(model.generate(Some("ran"), 5), Err(MarkovTextError::InvalidSeed(_))));
	}

	#[test]
	fn output_length_is_bounded_by_term_count() {
		let mut model = MarkovText::new(CORPUS);
		let mut rng = StdRng::seed_from_u64(1);

		for term_count in 1..=20 {
			let generated = model.generate_with_rng(&mut rng, None, term_count).unwrap();
			let count = generated.split_whitespace().count();
			assert!(count >= 1, "non-empty table must yield at least one term");
			assert!(count <= term_count, "walk produced {count} terms for term_count {term_count}");
		}
	}

	#[test]
	fn walk_starts_at_the_seed_and_follows_recorded_transitions() {
		let mut model = MarkovText::new(CORPUS);
		let mut rng = StdRng::seed_from_u64(99);

		let generated = model.generate_with_rng(&mut rng, Some("the"), 3).unwrap();
		let terms: Vec<&str> = generated.split_whitespace().collect();
		assert_eq!(terms.len(), 3);
		assert_eq!(terms[0], "the");

		let table = model.term_table();
		for pair in terms.windows(2) {
			let followers = table.followers(pair[0]).unwrap();
			assert!(followers.iter().any(|f| f == pair[1]), "'{}' never follows '{}' in the corpus", pair[1], pair[0]);
		}
	}

	#[test]
	fn every_generated_term_comes_from_the_corpus() {
		let mut model = MarkovText::new(CORPUS);
		let mut rng = StdRng::seed_from_u64(3);

		let generated = model.generate_with_rng(&mut rng, None, 50).unwrap();
		for term in generated.split_whitespace() {
			assert!(CORPUS.split_whitespace().any(|t| t == term));
		}
	}

	#[test]
	fn walk_stops_early_when_the_chain_is_exhausted() {
		// "b" is the last term and has no followers
		let mut model = MarkovText::new("a b");
		let mut rng = StdRng::seed_from_u64(0);

		let generated = model.generate_with_rng(&mut rng, Some("a"), 10).unwrap();
		assert_eq!(generated, "a b");
	}

	#[test]
	fn rebuild_yields_the_same_table() {
		let mut model = MarkovText::new(CORPUS);
		let first = model.term_table().clone();
		let rebuilt = model.rebuild_term_table();
		assert_eq!(&first, rebuilt);
	}

	#[test]
	fn sample_term_dict_builds_the_table_on_demand() {
		let mut model = MarkovText::new(CORPUS);
		let sample = model.sample_term_dict(2, 1);

		assert_eq!(sample.len(), 2);
		let keys: Vec<&String> = sample.keys().collect();
		assert_eq!(keys, vec!["the", "cat"]);
		assert!(sample["the"].ends_with(&["...".to_owned()]));
	}
}
