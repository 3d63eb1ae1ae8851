use std::path::Path;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::avoid::AvoidSet;
use super::chain::ChainModel;
use super::config::GeneratorConfig;
use crate::error::Result;
use crate::io;

/// High-level generator owning a built chain and its random source.
///
/// # Responsibilities
/// - Load a corpus and an avoid list from disk and build the chain once
/// - Keep a single random source so successive calls keep drawing from it
/// - Generate one or several lines of text
#[derive(Debug)]
pub struct Generator {
	model: ChainModel,
	rng: StdRng,
}

impl Generator {
	/// Builds a generator from a corpus file and an avoid-list file.
	///
	/// # Errors
	/// - Returns an error if the configuration is invalid.
	/// - Returns an error if either file cannot be opened or read.
	pub fn new<PC, PA>(config: &GeneratorConfig, corpus_path: PC, avoid_path: PA) -> Result<Self>
	where
		PC: AsRef<Path>,
		PA: AsRef<Path>,
	{
		let avoid = AvoidSet::from_reader(io::open_reader(&avoid_path)?)?;
		let mut model = ChainModel::new(config.max_order())?;
		model.build_with_avoid(io::open_reader(&corpus_path)?, &avoid)?;
		info!(
			"loaded {} (order {}): {} prefixes, {} observations",
			corpus_path.as_ref().display(),
			model.max_order(),
			model.len(),
			model.observation_count()
		);
		Ok(Self::from_model(model, config.seed))
	}

	/// Wraps an already built chain.
	///
	/// With `Some(seed)` every later generation is reproducible.
	pub fn from_model(model: ChainModel, seed: Option<u64>) -> Self {
		let rng = match seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self { model, rng }
	}

	/// Read-only access to the underlying chain.
	pub fn model(&self) -> &ChainModel {
		&self.model
	}

	/// Generates one line of at most `max_words` words.
	pub fn generate(&mut self, max_words: usize) -> String {
		self.model.generate_with(&mut self.rng, max_words)
	}

	/// Generates `count` lines of at most `max_words` words each.
	pub fn generate_lines(&mut self, count: usize, max_words: usize) -> Vec<String> {
		(0..count).map(|_| self.generate(max_words)).collect()
	}
}
