//! The interactive read-answer loop.
//!
//! One question per line, one answer per line. An empty line or end of
//! input ends the session.

use std::io::{self, Write};

use trivium_kb::TripleStore;
use trivium_nlp::QueryEngine;

/// Prompt, read and answer until an empty line or end of input.
pub fn run(store: &TripleStore, engine: &QueryEngine) -> io::Result<()> {
    println!("Ask a question (empty line to quit).");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // end of input: finish the prompt line before exiting
            println!();
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            break;
        }
        println!("{}", engine.answer(store, question));
    }

    Ok(())
}
