use serde_json::{Map, Value as Json};
use tracing::trace;

use crate::registry::value::json_kind;
use crate::registry::{DecodeError, FieldData, FieldKind, RegistryItem, Result, Shape, ShapeDescriptor, TypeRegistry, parse_value};

/// Wire key holding an object's discriminator.
pub const WIRE_TYPE_KEY: &str = "@type";

/// Runtime limits for item decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting depth of polymorphic objects.
	pub max_depth: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_depth: 64 }
	}
}

/// Registry-driven decoder for polymorphic wire documents.
#[derive(Debug, Clone)]
pub struct Decoder<'r> {
	registry: &'r TypeRegistry,
	options: DecodeOptions,
}

impl<'r> Decoder<'r> {
	/// Decoder with default options.
	pub fn new(registry: &'r TypeRegistry) -> Self {
		Self::with_options(registry, DecodeOptions::default())
	}

	/// Decoder with explicit options.
	pub fn with_options(registry: &'r TypeRegistry, options: DecodeOptions) -> Self {
		Self { registry, options }
	}

	/// Decode one item from raw JSON bytes.
	pub fn decode(&self, bytes: &[u8]) -> Result<Box<dyn RegistryItem>> {
		let wire: Map<String, Json> = serde_json::from_slice(bytes)?;
		self.decode_object(&wire, 0)
	}

	/// Decode one item from an already-parsed JSON value.
	pub fn decode_value(&self, raw: &Json) -> Result<Box<dyn RegistryItem>> {
		self.decode_nested(raw, 0)
	}

	/// Decode one item that must be of shape `T`.
	pub fn decode_as<T: Shape>(&self, bytes: &[u8]) -> Result<Box<T>> {
		let item = self.decode(bytes)?;
		let got = item.item_type();
		item.downcast::<T>().ok_or_else(|| DecodeError::UnexpectedType {
			expected: T::TYPE,
			got: got.to_owned(),
		})
	}

	fn decode_nested(&self, raw: &Json, depth: u32) -> Result<Box<dyn RegistryItem>> {
		match raw {
			Json::Object(wire) => self.decode_object(wire, depth),
			other => Err(DecodeError::InvalidFieldShape {
				expected: "object",
				got: json_kind(other),
			}),
		}
	}

	fn decode_object(&self, wire: &Map<String, Json>, depth: u32) -> Result<Box<dyn RegistryItem>> {
		if depth >= self.options.max_depth {
			return Err(DecodeError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}

		let name = wire.get(WIRE_TYPE_KEY).and_then(Json::as_str).ok_or(DecodeError::MissingDiscriminator)?;
		let entry = self.registry.lookup(name).ok_or_else(|| DecodeError::UnsupportedType { name: name.to_owned() })?;
		trace!(item_type = name, depth, "decoding item");

		(entry.decode)(self, &entry.descriptor, wire, depth)
	}

	fn decode_field(&self, kind: FieldKind, raw: &Json, depth: u32) -> Result<FieldData> {
		match kind {
			FieldKind::Value => Ok(FieldData::Value(parse_value(raw)?)),
			FieldKind::ValueSequence => {
				let values = expect_array(raw)?.iter().map(parse_value).collect::<Result<Vec<_>>>()?;
				Ok(FieldData::Values(values))
			}
			FieldKind::Polymorphic => Ok(FieldData::Item(self.decode_nested(raw, depth + 1)?)),
			FieldKind::PolymorphicSequence => {
				let items = expect_array(raw)?
					.iter()
					.map(|element| self.decode_nested(element, depth + 1))
					.collect::<Result<Vec<_>>>()?;
				Ok(FieldData::Items(items))
			}
			FieldKind::Scalar | FieldKind::StructuredScalar => Ok(FieldData::Raw(raw.clone())),
		}
	}
}

/// Populate a default `S` from the wire fields its descriptor declares.
pub(crate) fn decode_shape<S: Shape>(decoder: &Decoder<'_>, descriptor: &ShapeDescriptor, wire: &Map<String, Json>, depth: u32) -> Result<Box<dyn RegistryItem>> {
	let mut item = S::default();

	for field in descriptor.fields() {
		if field.skip {
			continue;
		}
		let key = field.wire_key();
		// The discriminator is consumed before fields are read.
		if key == WIRE_TYPE_KEY {
			continue;
		}
		let Some(raw) = wire.get(key) else {
			continue;
		};

		let data = decoder.decode_field(field.kind, raw, depth).map_err(|err| err.in_field(descriptor.name, field.name))?;
		item.set_field(field.name, data).map_err(|err| err.in_field(descriptor.name, field.name))?;
	}

	Ok(Box::new(item))
}

fn expect_array(raw: &Json) -> Result<&Vec<Json>> {
	raw.as_array().ok_or(DecodeError::InvalidFieldShape {
		expected: "array",
		got: json_kind(raw),
	})
}
