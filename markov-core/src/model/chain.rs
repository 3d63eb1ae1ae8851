use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

use log::{debug, trace};
use rand::Rng;

use super::avoid::{AvoidSet, obfuscate};
use super::prefix::PrefixWindows;
use crate::error::{ChainError, Result};
use crate::io;

/// Sentinel recorded as the "next word" when a line ends.
pub const END_LINE: &str = "____ENDLINE";

/// A word chain tracking every prefix order from 1 to `max_order`.
///
/// All orders share one flat mapping keyed by the serialized prefix. Keys
/// of different orders never collide: words contain no whitespace, so a
/// key of order `k` always holds exactly `k - 1` spaces.
///
/// # Responsibilities
/// - Ingest a corpus line by line, resetting windows at every line
/// - Obfuscate words from an avoid list before learning them
/// - Generate text by pooling the continuations of every order
///
/// # Invariants
/// - `max_order >= 1`
/// - Every stored observation list is non-empty
/// - Observation lists keep insertion order and duplicates (frequency)
#[derive(Clone, Debug)]
pub struct ChainModel {
	max_order: usize,
	transitions: HashMap<String, Vec<String>>,
}

impl ChainModel {
	/// Creates an empty chain tracking orders `1..=max_order`.
	///
	/// # Errors
	/// Returns `ChainError::InvalidConfig` if `max_order` is 0.
	pub fn new(max_order: usize) -> Result<Self> {
		if max_order == 0 {
			return Err(ChainError::InvalidConfig("max_order must be >= 1".to_owned()));
		}
		Ok(Self { max_order, transitions: HashMap::new() })
	}

	/// Returns the highest tracked order.
	pub fn max_order(&self) -> usize {
		self.max_order
	}

	/// Number of distinct prefixes, all orders together.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Total number of recorded observations, end-of-line markers included.
	pub fn observation_count(&self) -> usize {
		self.transitions.values().map(Vec::len).sum()
	}

	/// Observations recorded after `key`, in insertion order.
	pub fn transitions(&self, key: &str) -> Option<&[String]> {
		self.transitions.get(key).map(Vec::as_slice)
	}

	/// Builds the chain from a corpus and an avoid list.
	///
	/// The avoid list is read as whitespace-separated words regardless of
	/// lines; the corpus is read line by line.
	///
	/// # Errors
	/// Returns `ChainError::Io` if either source cannot be read.
	pub fn build<C: Read, A: Read>(&mut self, corpus: C, avoid: A) -> Result<()> {
		let avoid = AvoidSet::from_reader(BufReader::new(avoid))?;
		self.build_with_avoid(BufReader::new(corpus), &avoid)
	}

	/// Builds the chain from a corpus against an existing avoid set.
	///
	/// # Behavior
	/// - Windows restart from placeholders at every line
	/// - Avoided words are learned in their hyphenated form
	/// - Each word is recorded under the current key of every order,
	///   then shifted into every window
	/// - At the end of each line `END_LINE` is recorded under every
	///   order's final key
	/// - Bytes that are not valid UTF-8 are replaced, not rejected
	///
	/// # Errors
	/// Returns `ChainError::Io` if the corpus cannot be read.
	pub fn build_with_avoid<C: BufRead>(&mut self, corpus: C, avoid: &AvoidSet) -> Result<()> {
		let mut lines = 0usize;
		let mut tokens = 0usize;
		let mut obfuscated = 0usize;

		io::for_each_line(corpus, |line| {
			let mut windows = PrefixWindows::new(self.max_order);

			for word in line.split_whitespace() {
				let word = if avoid.matches(word) {
					obfuscated += 1;
					obfuscate(word)
				} else {
					word.to_owned()
				};
				for window in windows.iter_mut() {
					self.record(window.key(), &word);
					window.shift(&word);
				}
				tokens += 1;
			}

			for key in windows.keys() {
				self.record(key, END_LINE);
			}
			lines += 1;
		})?;

		debug!(
			"chain built: {} lines, {} tokens ({} obfuscated), {} prefixes",
			lines,
			tokens,
			obfuscated,
			self.transitions.len()
		);
		Ok(())
	}

	fn record(&mut self, key: String, word: &str) {
		self.transitions.entry(key).or_default().push(word.to_owned());
	}

	/// Generates at most `max_words` words using the thread-local RNG.
	///
	/// See `generate_with`.
	pub fn generate(&self, max_words: usize) -> String {
		self.generate_with(&mut rand::rng(), max_words)
	}

	/// Generates at most `max_words` words drawing from `rng`.
	///
	/// # Behavior
	/// - Windows start from placeholders once per call and persist across steps
	/// - At each step the observations of every order are pooled, duplicates kept
	/// - An empty pool stops generation
	/// - A drawn `END_LINE` is redrawn once; the second draw is kept as is
	/// - `END_LINE` occupies a step but is removed from the returned text
	///
	/// # Notes
	/// - Takes `&self`: window state is local to the call
	/// - With a seeded `rng` the output is reproducible
	pub fn generate_with<R: Rng>(&self, rng: &mut R, max_words: usize) -> String {
		let mut windows = PrefixWindows::new(self.max_order);
		let mut words: Vec<&str> = Vec::with_capacity(max_words);
		let mut choices: Vec<&str> = Vec::new();

		for _ in 0..max_words {
			choices.clear();
			for key in windows.keys() {
				if let Some(observed) = self.transitions.get(&key) {
					choices.extend(observed.iter().map(String::as_str));
				}
			}
			if choices.is_empty() {
				trace!("generation stopped after {} words: no continuation", words.len());
				break;
			}

			let mut next = choices[rng.random_range(0..choices.len())];
			// Make line endings less frequent
			if next == END_LINE {
				next = choices[rng.random_range(0..choices.len())];
			}
			words.push(next);
			windows.shift_all(next);
		}

		words.join(" ").replace(END_LINE, "")
	}
}
