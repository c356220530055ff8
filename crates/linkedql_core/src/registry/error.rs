use thiserror::Error;

/// Crate-local result type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Per-call errors produced while decoding wire documents.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Input was not valid JSON, was not an object, or a scalar field failed to deserialize.
	#[error("malformed input: {0}")]
	MalformedInput(#[from] serde_json::Error),
	/// Object had no string-valued `@type` field.
	#[error("missing or non-string @type discriminator")]
	MissingDiscriminator,
	/// Discriminator does not name a registered shape.
	#[error("unsupported item: {name:?}")]
	UnsupportedType {
		/// Unknown discriminator value.
		name: String,
	},
	/// Leaf value did not match any JSON-LD value form.
	#[error("cannot parse JSON-LD value: {raw}")]
	UnparsableValue {
		/// Compact JSON rendering of the offending value.
		raw: String,
	},
	/// Wire value had the wrong JSON kind for its field.
	#[error("invalid field shape: expected {expected}, got {got}")]
	InvalidFieldShape {
		/// Expected wire or payload kind.
		expected: &'static str,
		/// Actual wire or payload kind.
		got: &'static str,
	},
	/// Nested objects exceeded the configured depth ceiling.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Shape declared a field its `set_field` does not handle.
	#[error("{shape} has no field {field}")]
	UnknownField {
		/// Discriminator of the shape.
		shape: &'static str,
		/// Field name passed to `set_field`.
		field: &'static str,
	},
	/// Root item decoded to a different shape than requested.
	#[error("unexpected item type: expected {expected}, got {got}")]
	UnexpectedType {
		/// Requested discriminator.
		expected: &'static str,
		/// Decoded discriminator.
		got: String,
	},
	/// Failure while decoding one field of a shape.
	#[error("{shape}.{field}: {source}")]
	Field {
		/// Discriminator of the enclosing shape.
		shape: &'static str,
		/// Field name within the shape.
		field: &'static str,
		/// Underlying failure.
		source: Box<DecodeError>,
	},
}

impl DecodeError {
	/// Innermost error beneath any field context wrappers.
	pub fn root_cause(&self) -> &DecodeError {
		let mut current = self;
		while let DecodeError::Field { source, .. } = current {
			current = source;
		}
		current
	}

	pub(crate) fn in_field(self, shape: &'static str, field: &'static str) -> Self {
		DecodeError::Field {
			shape,
			field,
			source: Box::new(self),
		}
	}
}

/// Configuration-time errors raised while populating a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// Discriminator name was already registered.
	#[error("this name was already registered: {name}")]
	DuplicateRegistration {
		/// Conflicting discriminator.
		name: &'static str,
	},
	/// Candidate shape is not composite.
	#[error("only struct shapes may be registered: {name} is atomic ({native})")]
	InvalidRegistrant {
		/// Rejected discriminator.
		name: &'static str,
		/// Native type label of the atomic shape.
		native: &'static str,
	},
	/// Every registration failure collected during startup.
	#[error("registry startup failed with {} error(s): {}", .0.len(), render_all(.0))]
	Startup(Vec<RegistryError>),
}

fn render_all(errors: &[RegistryError]) -> String {
	errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
