use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cmd::{CliError, Result};

/// Read a document from `path`, or stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
	let io_err = |source| CliError::Io {
		path: PathBuf::from(path),
		source,
	};

	if path.as_os_str() == "-" {
		let mut out = Vec::new();
		std::io::stdin().read_to_end(&mut out).map_err(io_err)?;
		return Ok(out);
	}
	std::fs::read(path).map_err(io_err)
}

/// Print a serializable value as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}
