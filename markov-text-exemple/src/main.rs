use markov_text_core::model::markov_text::MarkovText;

const CORPUS: &str = "\
the quick brown fox jumps over the lazy dog \
the lazy dog sleeps under the old oak tree \
the quick cat watches the brown fox from the tree \
a brown fox and a quick cat met under the oak";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a generator over an in-memory corpus; the transition table is
    // computed lazily on first use
    let mut model = MarkovText::new(CORPUS);

    // Inspect a compact excerpt of the transition table
    // Long follower lists are truncated and marked with "..."
    println!("Transition table excerpt:");
    for (term, followers) in model.sample_term_dict(10, 4) {
        println!("  {} -> {:?}", term, followers);
    }

    // Generate from a random starting term with the default length
    println!("\nRandom walks:");
    for i in 0..5 {
        let generated = model.generate(None, MarkovText::DEFAULT_TERM_COUNT)?;
        println!("  {}: {}", i + 1, generated);
    }

    // Generate from a chosen seed term
    println!("\nSeeded walks:");
    for _ in 0..3 {
        println!("  {}", model.generate(Some("the"), 8)?);
    }

    // A seed that never occurs in the corpus (or only occurs as the final
    // term) is rejected
    match model.generate(Some("unicorn"), 8) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("\nExpected error: {}", e),
    }

    // A corpus with fewer than two terms produces an empty table and an
    // empty generated string, not an error
    let mut degenerate = MarkovText::new("singleton");
    assert_eq!(degenerate.generate(None, 8)?, "");
    println!("Degenerate corpus generated an empty string, as expected");

    Ok(())
}
