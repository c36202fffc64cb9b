use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Marker appended to a truncated follower list in [`TermTable::sample`].
pub const TRUNCATION_MARKER: &str = "...";

/// Represents the first-order transition table of a corpus.
///
/// The `TermTable` maps each term (a whitespace-delimited token) to the
/// ordered sequence of terms observed immediately after it anywhere in the
/// corpus. Duplicates in a follower list are kept on purpose: sampling
/// uniformly over the list reproduces empirical transition frequencies.
///
/// Conceptually, this is a Markov chain where each key is a node and its
/// follower list encodes the outgoing edge weights.
///
/// # Responsibilities
/// - Tokenize a corpus on whitespace and record adjacent term pairs
/// - Answer follower lookups during a random walk
/// - Select a uniformly random starting key
/// - Produce a bounded, truncated excerpt for display
///
/// # Invariants
/// - Key iteration order is first-occurrence order in the corpus
/// - Every key has at least one follower
/// - A single-term or empty corpus yields an empty table
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TermTable {
	/// Followers indexed by term, in first-occurrence order.
	/// Example: { "the" => ["cat", "mat", "cat"], "cat" => ["sat", "ran"] }
	terms: IndexMap<String, Vec<String>>,
}

impl TermTable {
	/// Builds a transition table from a corpus string.
	///
	/// Splits the corpus on runs of whitespace (no empty tokens, no case or
	/// punctuation normalization) and appends each term to the follower list
	/// of the term preceding it, left to right.
	///
	/// # Notes
	/// - Accepts any input; a corpus with fewer than two terms produces an
	///   empty table.
	/// - The last term of the corpus is not a key unless it also occurs
	///   earlier followed by another term.
	pub fn from_corpus(corpus: &str) -> Self {
		let tokens: Vec<&str> = corpus.split_whitespace().collect();

		let mut terms: IndexMap<String, Vec<String>> = IndexMap::new();
		for pair in tokens.windows(2) {
			terms.entry(pair[0].to_owned()).or_default().push(pair[1].to_owned());
		}

		Self { terms }
	}

	/// Returns the recorded followers of `term`, or `None` if `term` is not
	/// a key of the table.
	pub fn followers(&self, term: &str) -> Option<&[String]> {
		self.terms.get(term).map(Vec::as_slice)
	}

	/// Returns `true` if `term` is a key of the table.
	pub fn contains_key(&self, term: &str) -> bool {
		self.terms.contains_key(term)
	}

	/// Returns the number of keys in the table.
	pub fn len(&self) -> usize {
		self.terms.len()
	}

	/// Returns `true` if the table has no keys.
	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	/// Iterates over the keys in first-occurrence order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.terms.keys().map(String::as_str)
	}

	/// Iterates over `(term, followers)` entries in first-occurrence order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.terms.iter().map(|(key, followers)| (key.as_str(), followers.as_slice()))
	}

	/// Returns a uniformly random key of the table.
	///
	/// Useful for starting a generation walk when no seed is given.
	/// Returns `None` if the table is empty.
	pub fn random_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.terms.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.terms.len());
		self.terms.get_index(index).map(|(key, _)| key.as_str())
	}

	/// Returns a compact excerpt of the table for display.
	///
	/// Takes the first `n_keys` keys in iteration order; for each, keeps up
	/// to `max_followers` followers verbatim and appends
	/// [`TRUNCATION_MARKER`] when the true list is longer.
	///
	/// The result is an independent copy; mutating it does not affect the
	/// table.
	pub fn sample(&self, n_keys: usize, max_followers: usize) -> IndexMap<String, Vec<String>> {
		self.terms
			.iter()
			.take(n_keys)
			.map(|(key, followers)| {
				let shown = if followers.len() > max_followers {
					let mut shown = followers[..max_followers].to_vec();
					shown.push(TRUNCATION_MARKER.to_owned());
					shown
				} else {
					followers.clone()
				};
				(key.clone(), shown)
			})
			.collect()
	}
}
