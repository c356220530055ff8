use std::path::PathBuf;

use linkedql::registry::{DecodeOptions, Decoder, RegistryItem, TypeRegistry};
use linkedql_cli::vocab::{step_chain, step_from, step_values};
use serde::Serialize;
use tracing::debug;

use crate::cmd::Result;
use crate::cmd::util::{emit_json, read_input};

#[derive(clap::Args)]
pub struct Args {
	/// Document path, or `-` for stdin.
	pub file: PathBuf,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Debug, Serialize)]
struct DecodeJson {
	#[serde(rename = "type")]
	item_type: &'static str,
	steps: Vec<&'static str>,
	values: Vec<ValueJson>,
}

#[derive(Debug, Serialize)]
struct ValueJson {
	step: &'static str,
	field: &'static str,
	value: String,
}

/// Every leaf value along the `from` chain, rendered as N-Quads terms.
fn collect_values(root: &dyn RegistryItem) -> Vec<ValueJson> {
	let mut out = Vec::new();
	let mut current = Some(root);
	while let Some(step) = current {
		out.extend(step_values(step).into_iter().map(|(field, value)| ValueJson {
			step: step.item_type(),
			field,
			value: value.to_string(),
		}));
		current = step_from(step);
	}
	out
}

/// Decode one document and print its root type, step chain, leaf values and item tree.
pub fn run(registry: &TypeRegistry, args: Args) -> Result<()> {
	let Args { file, max_depth, json } = args;

	let mut options = DecodeOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let bytes = read_input(&file)?;
	debug!(path = %file.display(), bytes = bytes.len(), "read document");
	let item = Decoder::with_options(registry, options).decode(&bytes)?;
	let values = collect_values(&*item);
	let steps = step_chain(&*item);

	if json {
		return emit_json(&DecodeJson {
			item_type: item.item_type(),
			steps,
			values,
		});
	}

	println!("path: {}", file.display());
	println!("type: {}", item.item_type());
	println!("steps: {}", steps.join(" <- "));
	println!("values:");
	for entry in &values {
		println!("  {} {} {}", entry.step, entry.field, entry.value);
	}
	println!("item:");
	println!("{item:#?}");
	Ok(())
}
