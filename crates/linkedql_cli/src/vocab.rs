//! LinkedQL query steps registered by the CLI.

use linkedql::registry::{DecodeError, FieldData, FieldKind, FieldSpec, RegistryError, RegistryItem, Shape, ShapeLayout, TypeRegistry, Value};

macro_rules! registry_item {
	($($ty:ty),* $(,)?) => {
		$(
			impl RegistryItem for $ty {
				fn item_type(&self) -> &'static str {
					<$ty as Shape>::TYPE
				}
			}
		)*
	};
}

/// Build the registry of every step this tool understands.
pub fn registry() -> Result<TypeRegistry, RegistryError> {
	TypeRegistry::builder()
		.with::<Vertex>()
		.with::<Placeholder>()
		.with::<Out>()
		.with::<In>()
		.with::<Has>()
		.with::<Limit>()
		.with::<Skip>()
		.with::<Count>()
		.with::<Select>()
		.with::<Union>()
		.finish()
}

/// Follow the `from` link of a step, if it has one.
pub fn step_from(item: &dyn RegistryItem) -> Option<&dyn RegistryItem> {
	let from = if let Some(step) = item.downcast_ref::<Out>() {
		&step.from
	} else if let Some(step) = item.downcast_ref::<In>() {
		&step.from
	} else if let Some(step) = item.downcast_ref::<Has>() {
		&step.from
	} else if let Some(step) = item.downcast_ref::<Limit>() {
		&step.from
	} else if let Some(step) = item.downcast_ref::<Skip>() {
		&step.from
	} else if let Some(step) = item.downcast_ref::<Count>() {
		&step.from
	} else if let Some(step) = item.downcast_ref::<Select>() {
		&step.from
	} else if let Some(step) = item.downcast_ref::<Union>() {
		&step.from
	} else {
		return None;
	};
	from.as_deref()
}

/// Leaf values carried by one step, paired with their field names.
pub fn step_values(item: &dyn RegistryItem) -> Vec<(&'static str, &Value)> {
	fn tagged<'a>(field: &'static str, values: Option<&'a Vec<Value>>) -> impl Iterator<Item = (&'static str, &'a Value)> {
		values.into_iter().flatten().map(move |value| (field, value))
	}

	if let Some(step) = item.downcast_ref::<Vertex>() {
		tagged("values", step.values.as_ref()).collect()
	} else if let Some(step) = item.downcast_ref::<Out>() {
		tagged("properties", step.properties.as_ref()).collect()
	} else if let Some(step) = item.downcast_ref::<In>() {
		tagged("properties", step.properties.as_ref()).collect()
	} else if let Some(step) = item.downcast_ref::<Has>() {
		let property = step.property.iter().map(|value| ("property", value));
		property.chain(tagged("values", step.values.as_ref())).collect()
	} else {
		Vec::new()
	}
}

/// Discriminators from `item` down its `from` chain.
pub fn step_chain(item: &dyn RegistryItem) -> Vec<&'static str> {
	let mut out = vec![item.item_type()];
	let mut current = item;
	while let Some(next) = step_from(current) {
		out.push(next.item_type());
		current = next;
	}
	out
}

/// Start from the given nodes, or from every node when empty.
#[derive(Debug, Default)]
pub struct Vertex {
	/// Starting nodes.
	pub values: Option<Vec<Value>>,
}

impl Shape for Vertex {
	const TYPE: &'static str = "linkedql:Vertex";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![FieldSpec::new("values", FieldKind::ValueSequence)],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> linkedql::registry::Result<()> {
		match field {
			"values" => self.values = Some(data.into_values()?),
			field => return Err(unknown_field::<Self>(field)),
		}
		Ok(())
	}
}

/// Stand-in for the path being matched inside a nested query.
#[derive(Debug, Default)]
pub struct Placeholder;

impl Shape for Placeholder {
	const TYPE: &'static str = "linkedql:Placeholder";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct { fields: Vec::new() }
	}

	fn set_field(&mut self, field: &'static str, _data: FieldData) -> linkedql::registry::Result<()> {
		Err(unknown_field::<Self>(field))
	}
}

/// Follow outgoing edges along `properties`.
#[derive(Debug, Default)]
pub struct Out {
	/// Upstream step.
	pub from: Option<Box<dyn RegistryItem>>,
	/// Edge predicates to follow.
	pub properties: Option<Vec<Value>>,
}

/// Follow incoming edges along `properties`.
#[derive(Debug, Default)]
pub struct In {
	/// Upstream step.
	pub from: Option<Box<dyn RegistryItem>>,
	/// Edge predicates to follow.
	pub properties: Option<Vec<Value>>,
}

fn edge_layout() -> ShapeLayout {
	ShapeLayout::Struct {
		fields: vec![
			FieldSpec::new("from", FieldKind::Polymorphic),
			FieldSpec::new("properties", FieldKind::ValueSequence),
		],
	}
}

fn set_edge_field<S: Shape>(
	from: &mut Option<Box<dyn RegistryItem>>,
	properties: &mut Option<Vec<Value>>,
	field: &'static str,
	data: FieldData,
) -> linkedql::registry::Result<()> {
	match field {
		"from" => *from = Some(data.into_item()?),
		"properties" => *properties = Some(data.into_values()?),
		field => return Err(unknown_field::<S>(field)),
	}
	Ok(())
}

fn unknown_field<S: Shape>(field: &'static str) -> DecodeError {
	DecodeError::UnknownField { shape: S::TYPE, field }
}

impl Shape for Out {
	const TYPE: &'static str = "linkedql:Out";

	fn layout() -> ShapeLayout {
		edge_layout()
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> linkedql::registry::Result<()> {
		set_edge_field::<Self>(&mut self.from, &mut self.properties, field, data)
	}
}

impl Shape for In {
	const TYPE: &'static str = "linkedql:In";

	fn layout() -> ShapeLayout {
		edge_layout()
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> linkedql::registry::Result<()> {
		set_edge_field::<Self>(&mut self.from, &mut self.properties, field, data)
	}
}

/// Keep nodes having `property` pointing at one of `values`.
#[derive(Debug, Default)]
pub struct Has {
	/// Upstream step.
	pub from: Option<Box<dyn RegistryItem>>,
	/// Predicate to test.
	pub property: Option<Value>,
	/// Accepted objects.
	pub values: Option<Vec<Value>>,
}

impl Shape for Has {
	const TYPE: &'static str = "linkedql:Has";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![
				FieldSpec::new("from", FieldKind::Polymorphic),
				FieldSpec::new("property", FieldKind::Value),
				FieldSpec::new("values", FieldKind::ValueSequence),
			],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> linkedql::registry::Result<()> {
		match field {
			"from" => self.from = Some(data.into_item()?),
			"property" => self.property = Some(data.into_value()?),
			"values" => self.values = Some(data.into_values()?),
			field => return Err(unknown_field::<Self>(field)),
		}
		Ok(())
	}
}

/// Cap the number of results.
#[derive(Debug, Default)]
pub struct Limit {
	/// Upstream step.
	pub from: Option<Box<dyn RegistryItem>>,
	/// Maximum result count.
	pub limit: u64,
}

impl Shape for Limit {
	const TYPE: &'static str = "linkedql:Limit";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![FieldSpec::new("from", FieldKind::Polymorphic), FieldSpec::new("limit", FieldKind::Scalar)],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> linkedql::registry::Result<()> {
		match field {
			"from" => self.from = Some(data.into_item()?),
			"limit" => self.limit = data.into_scalar()?,
			field => return Err(unknown_field::<Self>(field)),
		}
		Ok(())
	}
}

/// Drop the first `offset` results.
#[derive(Debug, Default)]
pub struct Skip {
	/// Upstream step.
	pub from: Option<Box<dyn RegistryItem>>,
	/// Results to drop.
	pub offset: u64,
}

impl Shape for Skip {
	const TYPE: &'static str = "linkedql:Skip";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![FieldSpec::new("from", FieldKind::Polymorphic), FieldSpec::new("offset", FieldKind::Scalar)],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> linkedql::registry::Result<()> {
		match field {
			"from" => self.from = Some(data.into_item()?),
			"offset" => self.offset = data.into_scalar()?,
			field => return Err(unknown_field::<Self>(field)),
		}
		Ok(())
	}
}

/// Count upstream results.
#[derive(Debug, Default)]
pub struct Count {
	/// Upstream step.
	pub from: Option<Box<dyn RegistryItem>>,
}

impl Shape for Count {
	const TYPE: &'static str = "linkedql:Count";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![FieldSpec::new("from", FieldKind::Polymorphic)],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> linkedql::registry::Result<()> {
		match field {
			"from" => self.from = Some(data.into_item()?),
			field => return Err(unknown_field::<Self>(field)),
		}
		Ok(())
	}
}

/// Project tagged values.
#[derive(Debug, Default)]
pub struct Select {
	/// Upstream step.
	pub from: Option<Box<dyn RegistryItem>>,
	/// Tags to project.
	pub tags: Vec<String>,
	/// Filled in by query planning, never read from documents.
	pub resolved: Option<String>,
}

impl Shape for Select {
	const TYPE: &'static str = "linkedql:Select";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![
				FieldSpec::new("from", FieldKind::Polymorphic),
				FieldSpec::new("tags", FieldKind::StructuredScalar),
				FieldSpec::from_tag("resolved", FieldKind::Scalar, "-"),
			],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> linkedql::registry::Result<()> {
		match field {
			"from" => self.from = Some(data.into_item()?),
			"tags" => self.tags = data.into_scalar()?,
			field => return Err(unknown_field::<Self>(field)),
		}
		Ok(())
	}
}

/// Merge results of several steps.
#[derive(Debug, Default)]
pub struct Union {
	/// Upstream step.
	pub from: Option<Box<dyn RegistryItem>>,
	/// Steps merged into the result.
	pub steps: Option<Vec<Box<dyn RegistryItem>>>,
}

impl Shape for Union {
	const TYPE: &'static str = "linkedql:Union";

	fn layout() -> ShapeLayout {
		ShapeLayout::Struct {
			fields: vec![
				FieldSpec::new("from", FieldKind::Polymorphic),
				FieldSpec::new("steps", FieldKind::PolymorphicSequence),
			],
		}
	}

	fn set_field(&mut self, field: &'static str, data: FieldData) -> linkedql::registry::Result<()> {
		match field {
			"from" => self.from = Some(data.into_item()?),
			"steps" => self.steps = Some(data.into_items()?),
			field => return Err(unknown_field::<Self>(field)),
		}
		Ok(())
	}
}

registry_item!(Vertex, Placeholder, Out, In, Has, Limit, Skip, Count, Select, Union);

#[cfg(test)]
mod tests;
