use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct TranscodeArgs {
	/// JSON text file to transcode.
	input: PathBuf,

	/// Where to write the binary encoding. Defaults to stdout.
	#[arg(short, long)]
	output: Option<PathBuf>,
}

pub fn run(args: TranscodeArgs) -> Result<()> {
	let text = fs::read(&args.input)
		.with_context(|| format!("reading {}", args.input.display()))?;
	let before = text.len();

	let parsed = tagjson::parse(text).with_context(|| format!("transcoding {}", args.input.display()))?;
	tracing::info!(
		input = %args.input.display(),
		text_bytes = before,
		binary_bytes = parsed.final_binary_size,
		"transcoded",
	);

	match args.output {
		Some(path) => fs::write(&path, &parsed.binary).with_context(|| format!("writing {}", path.display()))?,
		None => {
			use std::io::Write;
			std::io::stdout().write_all(&parsed.binary)?;
		}
	}
	Ok(())
}
