use crate::error::{ChainError, Result};

/// Default highest prefix order.
pub const DEFAULT_MAX_ORDER: usize = 2;

/// Parameters used to build and drive a `Generator`.
///
/// # Invariants
/// - `max_order >= 1`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
	/// Highest prefix order tracked (every order from 1 up to it is used).
	max_order: usize,

	/// Seed of the random source; `None` draws one from the OS.
	pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self { max_order: DEFAULT_MAX_ORDER, seed: None }
	}
}

impl GeneratorConfig {
	/// Creates a configuration with the given maximum order.
	///
	/// # Errors
	/// Returns an error if `max_order` is 0.
	pub fn new(max_order: usize) -> Result<Self> {
		let mut config = Self::default();
		config.set_max_order(max_order)?;
		Ok(config)
	}

	/// Returns the current maximum order.
	pub fn max_order(&self) -> usize {
		self.max_order
	}

	/// Sets the maximum order (>= 1).
	///
	/// # Errors
	/// Returns an error if the value is 0; the configuration is left unchanged.
	pub fn set_max_order(&mut self, max_order: usize) -> Result<()> {
		if max_order == 0 {
			return Err(ChainError::InvalidConfig("max_order must be >= 1".to_owned()));
		}
		self.max_order = max_order;
		Ok(())
	}

	/// Builder-style seed setter.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_bigram_unseeded() {
		let config = GeneratorConfig::default();
		assert_eq!(config.max_order(), DEFAULT_MAX_ORDER);
		assert_eq!(config.seed, None);
	}

	#[test]
	fn zero_order_rejected_and_unchanged() {
		let mut config = GeneratorConfig::new(4).unwrap().with_seed(9);
		assert!(config.set_max_order(0).is_err());
		assert_eq!(config.max_order(), 4);
		assert_eq!(config.seed, Some(9));
		assert!(GeneratorConfig::new(0).is_err());
	}
}
