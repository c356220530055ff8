use linkedql::registry::{FieldSpec, ShapeDescriptor, TypeRegistry};
use serde::Serialize;

use crate::cmd::util::emit_json;
use crate::cmd::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Show the fields of one type.
	#[arg(long = "type")]
	pub type_name: Option<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Debug, Serialize)]
struct TypeJson {
	name: &'static str,
	fields: Vec<FieldJson>,
}

#[derive(Debug, Serialize)]
struct FieldJson {
	name: &'static str,
	wire: &'static str,
	kind: &'static str,
	skip: bool,
}

impl From<&FieldSpec> for FieldJson {
	fn from(field: &FieldSpec) -> Self {
		Self {
			name: field.name,
			wire: field.wire_key(),
			kind: field.kind.as_str(),
			skip: field.skip,
		}
	}
}

impl From<&ShapeDescriptor> for TypeJson {
	fn from(shape: &ShapeDescriptor) -> Self {
		Self {
			name: shape.name,
			fields: shape.fields().iter().map(FieldJson::from).collect(),
		}
	}
}

/// Print registered types, or the field table of one type.
pub fn run(registry: &TypeRegistry, args: Args) -> Result<()> {
	let Args { type_name, json } = args;

	let Some(name) = type_name else {
		let shapes = registry.shapes();
		if json {
			return emit_json(&shapes.into_iter().map(TypeJson::from).collect::<Vec<_>>());
		}
		println!("types: {}", shapes.len());
		for shape in shapes {
			println!("  {}", shape.name);
		}
		return Ok(());
	};

	let entry = registry.lookup(&name).ok_or(CliError::UnknownType { name })?;
	let shape = &entry.descriptor;
	if json {
		return emit_json(&TypeJson::from(shape));
	}

	println!("type: {}", shape.name);
	println!("field_count: {}", shape.fields().len());
	for field in shape.fields() {
		let skip = if field.skip { " skip" } else { "" };
		println!("  {} {} wire={}{}", field.name, field.kind.as_str(), field.wire_key(), skip);
	}
	Ok(())
}
