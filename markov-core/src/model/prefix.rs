use std::fmt;

/// A fixed-length window over the most recent words.
///
/// A `Prefix` of order `k` always holds exactly `k` words. A fresh window
/// holds `k` empty placeholders, so its key is `k - 1` spaces.
///
/// # Invariants
/// - `order() >= 1`
/// - `shift` never changes the length
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
	words: Box<[String]>,
}

impl Prefix {
	/// Creates a window of `order` empty placeholders.
	///
	/// Callers guarantee `order >= 1`; chain construction rejects 0.
	pub fn new(order: usize) -> Self {
		Self { words: vec![String::new(); order].into_boxed_slice() }
	}

	/// Number of words held by the window.
	pub fn order(&self) -> usize {
		self.words.len()
	}

	/// Serializes the window into the chain lookup key (words joined by a single space).
	pub fn key(&self) -> String {
		self.words.join(" ")
	}

	/// Drops the oldest word and appends `word`.
	pub fn shift(&mut self, word: &str) {
		self.words.rotate_left(1);
		if let Some(last) = self.words.last_mut() {
			last.clear();
			last.push_str(word);
		}
	}
}

impl fmt::Display for Prefix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.key())
	}
}

/// One `Prefix` per order, from 1 up to a maximum.
///
/// Build uses a fresh set per line, generation a fresh set per call.
#[derive(Clone, Debug)]
pub struct PrefixWindows {
	windows: Vec<Prefix>,
}

impl PrefixWindows {
	/// Creates fresh windows for orders `1..=max_order`.
	pub fn new(max_order: usize) -> Self {
		Self { windows: (1..=max_order).map(Prefix::new).collect() }
	}

	/// Current keys, lowest order first.
	pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
		self.windows.iter().map(Prefix::key)
	}

	/// Shifts `word` into every window.
	pub fn shift_all(&mut self, word: &str) {
		for window in &mut self.windows {
			window.shift(word);
		}
	}

	/// Windows in order, lowest order first.
	pub fn iter(&self) -> impl Iterator<Item = &Prefix> {
		self.windows.iter()
	}

	/// Mutable windows, lowest order first; build records and shifts through it.
	pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Prefix> {
		self.windows.iter_mut()
	}
}
