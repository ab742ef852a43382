use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct CompressArgs {
	/// JSON text file to strip whitespace from.
	input: PathBuf,
}

pub fn run(args: CompressArgs) -> Result<()> {
	let text = fs::read_to_string(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
	let compact = tagjson::compress(&text).with_context(|| format!("compressing {}", args.input.display()))?;
	println!("{compact}");
	Ok(())
}
