use std::any::Any;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value as Json;

use crate::registry::{DecodeError, Result, ShapeDescriptor, ShapeLayout, Value};

/// Decoded object produced by the registry; every variant knows its discriminator.
pub trait RegistryItem: Any + fmt::Debug + Send + Sync {
	/// Discriminator identity of this item.
	fn item_type(&self) -> &'static str;
}

impl dyn RegistryItem {
	/// Whether the concrete type is `T`.
	pub fn is<T: RegistryItem>(&self) -> bool {
		(self as &dyn Any).is::<T>()
	}

	/// Borrow as concrete type `T`.
	pub fn downcast_ref<T: RegistryItem>(&self) -> Option<&T> {
		(self as &dyn Any).downcast_ref::<T>()
	}

	/// Convert into concrete type `T`, or `None` if the item is another shape.
	pub fn downcast<T: RegistryItem>(self: Box<Self>) -> Option<Box<T>> {
		let any: Box<dyn Any> = self;
		any.downcast::<T>().ok()
	}
}

/// Registrable item type with a field table and a zero value.
pub trait Shape: RegistryItem + Default {
	/// Discriminator name.
	const TYPE: &'static str;

	/// Field table, or an atomic marker for primitive wrappers.
	fn layout() -> ShapeLayout;

	/// Store one decoded field on a default-initialized instance.
	fn set_field(&mut self, field: &'static str, data: FieldData) -> Result<()>;

	/// Full registration descriptor.
	fn descriptor() -> ShapeDescriptor {
		ShapeDescriptor {
			name: Self::TYPE,
			layout: Self::layout(),
		}
	}
}

/// Decoded payload of one field, shaped by its [`FieldKind`](crate::registry::FieldKind).
#[derive(Debug)]
pub enum FieldData {
	/// Single leaf value.
	Value(Value),
	/// Ordered leaf values.
	Values(Vec<Value>),
	/// Nested item.
	Item(Box<dyn RegistryItem>),
	/// Ordered nested items.
	Items(Vec<Box<dyn RegistryItem>>),
	/// Raw JSON for scalar kinds, deserialized by the shape.
	Raw(Json),
}

impl FieldData {
	/// Stable lowercase label for the payload kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Value(_) => "value",
			Self::Values(_) => "values",
			Self::Item(_) => "item",
			Self::Items(_) => "items",
			Self::Raw(_) => "raw",
		}
	}

	/// Take a single leaf value.
	pub fn into_value(self) -> Result<Value> {
		match self {
			Self::Value(value) => Ok(value),
			other => Err(other.mismatch("value")),
		}
	}

	/// Take ordered leaf values.
	pub fn into_values(self) -> Result<Vec<Value>> {
		match self {
			Self::Values(values) => Ok(values),
			other => Err(other.mismatch("values")),
		}
	}

	/// Take a nested item of any shape.
	pub fn into_item(self) -> Result<Box<dyn RegistryItem>> {
		match self {
			Self::Item(item) => Ok(item),
			other => Err(other.mismatch("item")),
		}
	}

	/// Take a nested item that must be of concrete type `T`.
	pub fn into_item_as<T: Shape>(self) -> Result<Box<T>> {
		let item = self.into_item()?;
		let got = item.item_type();
		item.downcast::<T>().ok_or_else(|| DecodeError::UnexpectedType {
			expected: T::TYPE,
			got: got.to_owned(),
		})
	}

	/// Take ordered nested items.
	pub fn into_items(self) -> Result<Vec<Box<dyn RegistryItem>>> {
		match self {
			Self::Items(items) => Ok(items),
			other => Err(other.mismatch("items")),
		}
	}

	/// Deserialize a scalar field into its native type.
	pub fn into_scalar<T: DeserializeOwned>(self) -> Result<T> {
		match self {
			Self::Raw(raw) => Ok(serde_json::from_value(raw)?),
			other => Err(other.mismatch("raw")),
		}
	}

	fn mismatch(&self, expected: &'static str) -> DecodeError {
		DecodeError::InvalidFieldShape { expected, got: self.kind() }
	}
}
