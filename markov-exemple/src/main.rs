use std::env;

use log::warn;
use markov_core::model::config::GeneratorConfig;
use markov_core::model::generator::Generator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows build statistics
    env_logger::init();

    // Positional arguments: corpus, avoid list, max order, lines, words per line
    let args: Vec<String> = env::args().skip(1).collect();
    let corpus = args.first().map(String::as_str).unwrap_or("./data/corpus.txt");
    let avoid = args.get(1).map(String::as_str).unwrap_or("./data/avoid.txt");
    let max_order: usize = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(2);
    let lines: usize = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(10);
    let max_words: usize = args.get(4).map(|s| s.parse()).transpose()?.unwrap_or(30);

    // Every order from 1 to max_order is tracked
    let config = GeneratorConfig::new(max_order)?;

    // Words of the avoid list (and their one-letter suffix variants)
    // are learned with a hyphen after their first letter
    let mut app = Generator::new(&config, corpus, avoid)?;

    if app.model().is_empty() {
        warn!("{} produced no transitions", corpus);
    }

    // Line endings take a slot of the word budget, lines can be shorter
    for (i, line) in app.generate_lines(lines, max_words).iter().enumerate() {
        println!("Generated line {}: {}", i + 1, line);
    }

    Ok(())
}
