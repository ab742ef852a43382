use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod path;
mod render;
mod telemetry;

#[derive(Parser)]
#[command(name = "tagjson")]
#[command(about = "Transcode, navigate, build and format tagjson documents", long_about = None)]
#[command(version)]
struct Cli {
	/// Log level (error, warn, info, debug, trace). Falls back to RUST_LOG env var.
	#[arg(long, global = true)]
	log_level: Option<tracing::Level>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Parse JSON text into its binary encoding and report sizes
	Transcode(commands::transcode::TranscodeArgs),

	/// Parse, then navigate to a property/element path and print the value
	Get(commands::get::GetArgs),

	/// Pretty-print a JSON document
	Indent(commands::indent::IndentArgs),

	/// Strip insignificant whitespace from a JSON document
	Compress(commands::compress::CompressArgs),

	/// Emit a small fixed document through the builder, as a smoke test
	Build(commands::build::BuildArgs),

	/// Parse, navigate and re-emit every `*.json` fixture under a directory
	Check(commands::check::CheckArgs),
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	telemetry::init(cli.log_level)?;

	match cli.command {
		Commands::Transcode(args) => commands::transcode::run(args),
		Commands::Get(args) => commands::get::run(args),
		Commands::Indent(args) => commands::indent::run(args),
		Commands::Compress(args) => commands::compress::run(args),
		Commands::Build(args) => commands::build::run(args),
		Commands::Check(args) => commands::check::run(args),
	}
}
