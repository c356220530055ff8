use std::fmt;

use serde_json::{Map, Value as Json};

use crate::registry::{DecodeError, Result};

macro_rules! xsd {
	($local:literal) => {
		concat!("http://www.w3.org/2001/XMLSchema#", $local)
	};
}

/// XML Schema datatype namespace.
pub const XSD: &str = xsd!("");
/// Datatype attached to JSON integers.
pub const XSD_INTEGER: &str = xsd!("integer");
/// Datatype attached to JSON floating point numbers.
pub const XSD_FLOAT: &str = xsd!("float");
/// Datatype attached to JSON booleans.
pub const XSD_BOOLEAN: &str = xsd!("boolean");

const BLANK_PREFIX: &str = "_:";

/// Node reference by IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri(pub Box<str>);

impl Iri {
	/// Wrap an IRI string.
	pub fn new(value: impl Into<Box<str>>) -> Self {
		Self(value.into())
	}

	/// IRI text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Iri {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{}>", self.0)
	}
}

/// Anonymous node reference by local id (without the `_:` prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlankNode(pub Box<str>);

impl BlankNode {
	/// Wrap a local blank node id.
	pub fn new(value: impl Into<Box<str>>) -> Self {
		Self(value.into())
	}

	/// Local id text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for BlankNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{BLANK_PREFIX}{}", self.0)
	}
}

/// RDF-style leaf value decoded from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
	/// Plain string literal.
	String(Box<str>),
	/// Literal with a datatype IRI.
	TypedString {
		/// Lexical form.
		value: Box<str>,
		/// Datatype IRI.
		datatype: Iri,
	},
	/// Literal with a language tag.
	LangString {
		/// Lexical form.
		value: Box<str>,
		/// Language tag.
		lang: Box<str>,
	},
	/// IRI node reference.
	Iri(Iri),
	/// Blank node reference.
	BlankNode(BlankNode),
}

impl Value {
	/// Build a typed literal.
	pub fn typed(value: impl Into<Box<str>>, datatype: &str) -> Self {
		Self::TypedString {
			value: value.into(),
			datatype: Iri::new(datatype),
		}
	}

	/// Stable lowercase label for the variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::String(_) => "string",
			Self::TypedString { .. } => "typed_string",
			Self::LangString { .. } => "lang_string",
			Self::Iri(_) => "iri",
			Self::BlankNode(_) => "blank_node",
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::String(value) => write!(f, "{value:?}"),
			Self::TypedString { value, datatype } => write!(f, "{value:?}^^{datatype}"),
			Self::LangString { value, lang } => write!(f, "{value:?}@{lang}"),
			Self::Iri(iri) => fmt::Display::fmt(iri, f),
			Self::BlankNode(node) => fmt::Display::fmt(node, f),
		}
	}
}

/// Parse one wire-level JSON value into a [`Value`].
pub fn parse_value(raw: &Json) -> Result<Value> {
	match raw {
		Json::String(text) => Ok(Value::String(text.as_str().into())),
		Json::Number(number) => {
			if number.is_i64() || number.is_u64() {
				return Ok(Value::typed(number.to_string(), XSD_INTEGER));
			}
			match number.as_f64() {
				Some(float) => Ok(Value::typed(format!("{float:.6}"), XSD_FLOAT)),
				None => Err(unparsable(raw)),
			}
		}
		Json::Bool(flag) => Ok(Value::typed(flag.to_string(), XSD_BOOLEAN)),
		Json::Object(map) => parse_value_object(map).ok_or_else(|| unparsable(raw)),
		Json::Null | Json::Array(_) => Err(unparsable(raw)),
	}
}

fn parse_value_object(map: &Map<String, Json>) -> Option<Value> {
	if let Some(id) = map.get("@id").and_then(Json::as_str) {
		return Some(match id.strip_prefix(BLANK_PREFIX) {
			Some(local) => Value::BlankNode(BlankNode::new(local)),
			None => Value::Iri(Iri::new(id)),
		});
	}

	let value = map.get("@value").and_then(Json::as_str)?;
	if let Some(lang) = map.get("@language").and_then(Json::as_str) {
		return Some(Value::LangString {
			value: value.into(),
			lang: lang.into(),
		});
	}
	let datatype = map.get("@type").and_then(Json::as_str)?;
	Some(Value::typed(value, datatype))
}

fn unparsable(raw: &Json) -> DecodeError {
	DecodeError::UnparsableValue { raw: raw.to_string() }
}

/// Label the JSON kind of a wire value for error messages.
pub(crate) fn json_kind(raw: &Json) -> &'static str {
	match raw {
		Json::Null => "null",
		Json::Bool(_) => "boolean",
		Json::Number(_) => "number",
		Json::String(_) => "string",
		Json::Array(_) => "array",
		Json::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests;
