use std::collections::HashSet;
use std::io::BufRead;

use log::debug;

use crate::error::Result;
use crate::io;

/// Shortest word (in characters) kept in an avoid list.
pub const MIN_AVOID_LEN: usize = 3;

/// Set of lowercased words to obfuscate while building a chain.
///
/// Used only during ingestion; it is not part of the built model.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvoidSet {
	words: HashSet<String>,
}

impl AvoidSet {
	/// Reads whitespace-separated words from `source`, line structure ignored.
	///
	/// Bytes that are not valid UTF-8 are replaced, not rejected.
	///
	/// # Errors
	/// Returns `ChainError::Io` if the source cannot be read.
	pub fn from_reader<R: BufRead>(source: R) -> Result<Self> {
		let mut set = Self::default();
		io::for_each_line(source, |line| set.extend(line.split_whitespace()))?;
		debug!("avoid list loaded: {} words", set.len());
		Ok(set)
	}

	/// Builds a set from in-memory words, applying the same filtering as `from_reader`.
	pub fn from_words<'a, I>(words: I) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut set = Self::default();
		set.extend(words);
		set
	}

	fn extend<'a, I>(&mut self, words: I)
	where
		I: IntoIterator<Item = &'a str>,
	{
		for word in words {
			if word.chars().count() >= MIN_AVOID_LEN {
				self.words.insert(word.to_lowercase());
			}
		}
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Exact (already lowercased) membership.
	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	/// Whether a corpus word must be obfuscated.
	///
	/// The word is lowercased and one leading `<` and one trailing `>` are
	/// stripped. It matches if that key, or the key minus its last
	/// character, is in the set.
	pub fn matches(&self, word: &str) -> bool {
		if self.words.is_empty() {
			return false;
		}
		let lowered = word.to_lowercase();
		let key = lowered.strip_prefix('<').unwrap_or(lowered.as_str());
		let key = key.strip_suffix('>').unwrap_or(key);
		if self.words.contains(key) {
			return true;
		}
		let mut chars = key.chars();
		if chars.next_back().is_some() && !chars.as_str().is_empty() {
			return self.words.contains(chars.as_str());
		}
		false
	}
}

/// Inserts a hyphen after the first character of `word` (`foo` becomes `f-oo`).
pub fn obfuscate(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => {
			let mut out = String::with_capacity(word.len() + 1);
			out.push(first);
			out.push('-');
			out.push_str(chars.as_str());
			out
		}
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_long_lowercased_words() {
		let set = AvoidSet::from_reader("Cat a an DOGS\n  bird\n\nox".as_bytes()).unwrap();
		assert_eq!(set.len(), 3);
		assert!(set.contains("cat"));
		assert!(set.contains("dogs"));
		assert!(set.contains("bird"));
		assert!(!set.contains("ox"));
	}

	#[test]
	fn invalid_utf8_does_not_drop_other_words() {
		let set = AvoidSet::from_reader(&b"cat \xfe\xff dog\nbird"[..]).unwrap();
		assert!(set.contains("cat"));
		assert!(set.contains("dog"));
		assert!(set.contains("bird"));
		assert!(set.matches("Dogs"));
	}

	#[test]
	fn punctuation_is_kept() {
		let set = AvoidSet::from_words(["cat,"]);
		assert!(set.contains("cat,"));
		assert!(!set.contains("cat"));
	}

	#[test]
	fn construction_is_repeatable() {
		let source = "alpha beta\ngamma";
		let first = AvoidSet::from_reader(source.as_bytes()).unwrap();
		let second = AvoidSet::from_reader(source.as_bytes()).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn empty_source_is_empty_set() {
		assert!(AvoidSet::from_reader("".as_bytes()).unwrap().is_empty());
	}

	#[test]
	fn matches_case_insensitively() {
		let set = AvoidSet::from_words(["cat"]);
		assert!(set.matches("Cat"));
		assert!(set.matches("CAT"));
		assert!(!set.matches("sat"));
	}

	#[test]
	fn matches_one_trailing_character() {
		let set = AvoidSet::from_words(["cat"]);
		assert!(set.matches("cats"));
		assert!(set.matches("cat!"));
		assert!(!set.matches("catss"));
	}

	#[test]
	fn matches_tagged_words() {
		let set = AvoidSet::from_words(["cat"]);
		assert!(set.matches("<cat>"));
		assert!(set.matches("<cat"));
		assert!(set.matches("cat>"));
		assert!(set.matches("<cats>"));
		assert!(!set.matches("<<cat>>"));
	}

	#[test]
	fn obfuscate_inserts_hyphen() {
		assert_eq!(obfuscate("foo"), "f-oo");
		assert_eq!(obfuscate("Cat"), "C-at");
		assert_eq!(obfuscate("<cat>"), "<-cat>");
		assert_eq!(obfuscate("élan"), "é-lan");
		assert_eq!(obfuscate("x"), "x-");
	}
}
