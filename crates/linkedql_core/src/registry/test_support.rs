use std::collections::BTreeMap;

use crate::registry::{DecodeError, FieldData, FieldKind, FieldSpec, RegistryItem, Result, Shape, ShapeLayout, Value};

#[derive(Debug, Default)]
pub(crate) struct Foo {
	pub name: String,
	pub children: Option<Vec<Box<dyn RegistryItem>>>,
}

impl RegistryItem for Foo {
	fn item_type(&self) -> &'static str {
		Self::TYPE
	}
}

impl Shape for Foo {
	const TYPE: &'static str = "Foo";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![
				FieldSpec::new("name", FieldKind::Scalar),
				FieldSpec::new("children", FieldKind::PolymorphicSequence),
			],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> Result<()> {
		match field {
			"name" => self.name = data.into_scalar()?,
			"children" => self.children = Some(data.into_items()?),
			field => return Err(DecodeError::UnknownField { shape: Self::TYPE, field }),
		}
		Ok(())
	}
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct Bar {
	pub x: i64,
}

impl RegistryItem for Bar {
	fn item_type(&self) -> &'static str {
		Self::TYPE
	}
}

impl Shape for Bar {
	const TYPE: &'static str = "Bar";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![FieldSpec::new("x", FieldKind::Scalar)],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> Result<()> {
		match field {
			"x" => self.x = data.into_scalar()?,
			field => return Err(DecodeError::UnknownField { shape: Self::TYPE, field }),
		}
		Ok(())
	}
}

/// Exercises every non-scalar kind plus rename and skip.
#[derive(Debug, Default)]
pub(crate) struct Tagged {
	pub label: Option<Value>,
	pub values: Option<Vec<Value>>,
	pub inner: Option<Box<dyn RegistryItem>>,
	pub meta: BTreeMap<String, String>,
	pub secret: Option<String>,
}

impl RegistryItem for Tagged {
	fn item_type(&self) -> &'static str {
		Self::TYPE
	}
}

impl Shape for Tagged {
	const TYPE: &'static str = "http://example/Tagged";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![
				FieldSpec::new("label", FieldKind::Value),
				FieldSpec::new("values", FieldKind::ValueSequence).rename("vals"),
				FieldSpec::new("inner", FieldKind::Polymorphic),
				FieldSpec::new("meta", FieldKind::StructuredScalar),
				FieldSpec::from_tag("secret", FieldKind::Scalar, "-"),
			],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> Result<()> {
		match field {
			"label" => self.label = Some(data.into_value()?),
			"values" => self.values = Some(data.into_values()?),
			"inner" => self.inner = Some(data.into_item()?),
			"meta" => self.meta = data.into_scalar()?,
			field => return Err(DecodeError::UnknownField { shape: Self::TYPE, field }),
		}
		Ok(())
	}
}

#[derive(Debug, Default)]
pub(crate) struct Number(pub i64);

impl RegistryItem for Number {
	fn item_type(&self) -> &'static str {
		Self::TYPE
	}
}

impl Shape for Number {
	const TYPE: &'static str = "Number";

	fn layout() -> ShapeLayout {
		ShapeLayout::Atomic { native: "i64" }
	}

	fn set_field(&mut self, _field: &'static str, _data: FieldData) -> Result<()> {
		Ok(())
	}
}

/// Second shape claiming the `Foo` discriminator.
#[derive(Debug, Default)]
pub(crate) struct FooImpostor;

impl RegistryItem for FooImpostor {
	fn item_type(&self) -> &'static str {
		Self::TYPE
	}
}

impl Shape for FooImpostor {
	const TYPE: &'static str = "Foo";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct { fields: Vec::new() }
	}

	fn set_field(&mut self, _field: &'static str, _data: FieldData) -> Result<()> {
		Ok(())
	}
}

/// Declares a field its `set_field` never handles.
#[derive(Debug, Default)]
pub(crate) struct Misdeclared {
	pub name: String,
}

impl RegistryItem for Misdeclared {
	fn item_type(&self) -> &'static str {
		Self::TYPE
	}
}

impl Shape for Misdeclared {
	const TYPE: &'static str = "Misdeclared";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![FieldSpec::new("name", FieldKind::Scalar), FieldSpec::new("nmae", FieldKind::Scalar)],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> Result<()> {
		match field {
			"name" => self.name = data.into_scalar()?,
			field => return Err(DecodeError::UnknownField { shape: Self::TYPE, field }),
		}
		Ok(())
	}
}
