use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct IndentArgs {
	/// JSON text file to pretty-print.
	input: PathBuf,
}

pub fn run(args: IndentArgs) -> Result<()> {
	let text = fs::read_to_string(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
	let pretty = tagjson::indent(&text).with_context(|| format!("indenting {}", args.input.display()))?;
	println!("{pretty}");
	Ok(())
}
