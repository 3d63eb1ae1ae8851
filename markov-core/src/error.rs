use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = ChainError> = std::result::Result<T, E>;

/// Failures surfaced while configuring a model or reading its inputs.
///
/// Building and generating never fail on their own; only invalid
/// configuration and unreadable sources produce errors.
#[derive(Debug, Error)]
pub enum ChainError {
	/// A configuration value was rejected.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
	/// Reading the corpus or the avoid list failed.
	#[error("io error{}: {source}", describe_path(.path))]
	Io {
		source: std::io::Error,
		/// Path of the source, when it came from a file.
		path: Option<PathBuf>,
	},
}

fn describe_path(path: &Option<PathBuf>) -> String {
	match path {
		Some(path) => format!(" while reading {}", path.display()),
		None => String::new(),
	}
}

impl ChainError {
	/// Wraps an IO error, attaching the path it relates to if known.
	pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
		Self::Io { source, path }
	}
}

impl From<std::io::Error> for ChainError {
	fn from(source: std::io::Error) -> Self {
		Self::Io { source, path: None }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io;

	#[test]
	fn io_error_message_names_path() {
		let err = ChainError::io(
			io::Error::new(io::ErrorKind::NotFound, "missing"),
			Some(PathBuf::from("corpus.txt")),
		);
		assert_eq!(err.to_string(), "io error while reading corpus.txt: missing");
	}

	#[test]
	fn bare_io_error_has_no_path() {
		let err: ChainError = io::Error::other("boom").into();
		assert!(matches!(err, ChainError::Io { path: None, .. }));
		assert_eq!(err.to_string(), "io error: boom");
	}
}
