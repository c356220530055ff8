use std::path::PathBuf;

use linkedql::registry::{DecodeError, RegistryError};
use thiserror::Error;

/// Document decode command.
pub mod decode;
/// Registered type listing command.
pub mod types;

mod util;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Step vocabulary failed to register.
	#[error(transparent)]
	Registry(#[from] RegistryError),
	/// Document failed to decode.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Input could not be read.
	#[error("io: {path}: {source}")]
	Io {
		/// Input path, `-` for stdin.
		path: PathBuf,
		/// Underlying failure.
		source: std::io::Error,
	},
	/// Requested type is not registered.
	#[error("unknown type: {name}")]
	UnknownType {
		/// Requested discriminator.
		name: String,
	},
	/// JSON output failed to serialize.
	#[error("json output: {0}")]
	Json(#[from] serde_json::Error),
}
