#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "linkedql", about = "LinkedQL document decoding tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List registered step types or one type's fields.
	Types(cmd::types::Args),
	/// Decode a LinkedQL document and print the item tree.
	Decode(cmd::decode::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();
	let registry = linkedql_cli::vocab::registry()?;

	match cli.command {
		Commands::Types(args) => cmd::types::run(&registry, args),
		Commands::Decode(args) => cmd::decode::run(&registry, args),
	}
}
