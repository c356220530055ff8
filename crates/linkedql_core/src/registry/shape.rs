/// Tag value marking a field that is never read from the wire.
const SKIP_TAG: &str = "-";

/// How a field's wire value is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Primitive native value, decoded with `serde`.
	Scalar,
	/// One JSON-LD leaf value.
	Value,
	/// Array of JSON-LD leaf values.
	ValueSequence,
	/// Nested item with its own `@type`.
	Polymorphic,
	/// Array of nested items, each with its own `@type`.
	PolymorphicSequence,
	/// Non-polymorphic composite value (list of strings, map, struct), decoded with `serde`.
	StructuredScalar,
}

impl FieldKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Scalar => "scalar",
			Self::Value => "value",
			Self::ValueSequence => "value_sequence",
			Self::Polymorphic => "polymorphic",
			Self::PolymorphicSequence => "polymorphic_sequence",
			Self::StructuredScalar => "structured_scalar",
		}
	}
}

/// One field declaration of a registered shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
	/// Field identifier passed back to [`Shape::set_field`](crate::registry::Shape::set_field).
	pub name: &'static str,
	/// Explicit wire key, when it differs from `name`.
	pub wire: Option<&'static str>,
	/// Decoding strategy.
	pub kind: FieldKind,
	/// Never decode this field, even when the wire key is present.
	pub skip: bool,
}

impl FieldSpec {
	/// Field read from the wire under its own name.
	pub const fn new(name: &'static str, kind: FieldKind) -> Self {
		Self {
			name,
			wire: None,
			kind,
			skip: false,
		}
	}

	/// Read this field from a different wire key.
	pub const fn rename(mut self, wire: &'static str) -> Self {
		self.wire = Some(wire);
		self
	}

	/// Never read this field from the wire.
	pub const fn skipped(mut self) -> Self {
		self.skip = true;
		self
	}

	/// Build a field from a JSON-style tag: `""` keeps the name, `"-"` skips, `"key,opts"` renames.
	pub fn from_tag(name: &'static str, kind: FieldKind, tag: &'static str) -> Self {
		let key = tag.split(',').next().unwrap_or_default();
		let field = Self::new(name, kind);
		match key {
			SKIP_TAG => field.skipped(),
			"" => field,
			key => field.rename(key),
		}
	}

	/// Wire key this field is read from.
	pub fn wire_key(&self) -> &'static str {
		self.wire.unwrap_or(self.name)
	}
}

/// Structural layout of a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeLayout {
	/// Composite type with declared fields in source order.
	Struct {
		/// Field declarations.
		fields: Vec<FieldSpec>,
	},
	/// Primitive type with no fields; never registrable.
	Atomic {
		/// Native type label.
		native: &'static str,
	},
}

/// Registration descriptor of one concrete item type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeDescriptor {
	/// Discriminator name.
	pub name: &'static str,
	/// Field table or atomic marker.
	pub layout: ShapeLayout,
}

impl ShapeDescriptor {
	/// Composite shape with the given fields.
	pub fn new(name: &'static str, fields: impl Into<Vec<FieldSpec>>) -> Self {
		Self {
			name,
			layout: ShapeLayout::Struct { fields: fields.into() },
		}
	}

	/// Atomic shape wrapping a native type.
	pub fn atomic(name: &'static str, native: &'static str) -> Self {
		Self {
			name,
			layout: ShapeLayout::Atomic { native },
		}
	}

	/// Field declarations, empty for atomic shapes.
	pub fn fields(&self) -> &[FieldSpec] {
		match &self.layout {
			ShapeLayout::Struct { fields } => fields,
			ShapeLayout::Atomic { .. } => &[],
		}
	}

	/// Look up a field by identifier.
	pub fn field(&self, name: &str) -> Option<&FieldSpec> {
		self.fields().iter().find(|field| field.name == name)
	}
}
