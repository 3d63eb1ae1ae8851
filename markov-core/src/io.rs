use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ChainError, Result};

/// Opens a text file for line-by-line reading.
///
/// - Failures carry the offending path
pub(crate) fn open_reader<P: AsRef<Path>>(filename: P) -> Result<BufReader<File>> {
	let path = filename.as_ref();
	let file = File::open(path).map_err(|e| ChainError::io(e, Some(path.to_path_buf())))?;
	Ok(BufReader::new(file))
}

/// Calls `f` with every line of `reader`.
///
/// - Strips a trailing `\n` and then a trailing `\r`
/// - Invalid UTF-8 is replaced with U+FFFD, only read failures are errors
pub(crate) fn for_each_line<R, F>(mut reader: R, mut f: F) -> Result<()>
where
	R: BufRead,
	F: FnMut(&str),
{
	let mut buf = Vec::new();
	loop {
		buf.clear();
		if reader.read_until(b'\n', &mut buf)? == 0 {
			return Ok(());
		}
		if buf.last() == Some(&b'\n') {
			buf.pop();
		}
		if buf.last() == Some(&b'\r') {
			buf.pop();
		}
		f(&String::from_utf8_lossy(&buf));
	}
}
