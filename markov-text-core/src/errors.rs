/// Result type of this crate.
///
/// Uses [`MarkovTextError`] as the default error type.
pub type Result<T, E = MarkovTextError> = std::result::Result<T, E>;

/// Errors raised by the Markov text model.
///
/// Degenerate inputs (empty corpus, a walk that runs out of successors)
/// are valid cases and never produce an error.
#[derive(Debug, thiserror::Error)]
pub enum MarkovTextError {
	/// A caller-supplied seed term is not a key of the transition table.
	#[error("seed term '{0}' is not a key of the transition table")]
	InvalidSeed(String),
}
