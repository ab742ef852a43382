use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{path, render};

#[derive(Args)]
pub struct GetArgs {
	/// JSON text file to parse.
	input: PathBuf,

	/// A dotted/bracketed path into the document, e.g. `a.b[2].c`.
	path: String,
}

pub fn run(args: GetArgs) -> Result<()> {
	let text = fs::read(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
	let parsed = tagjson::parse(text).with_context(|| format!("transcoding {}", args.input.display()))?;
	let root = tagjson::navigate(&parsed.binary)?;

	let segments = path::parse(&args.path)?;
	let value = path::resolve(root, &segments)?;

	println!("{}", render::render(value)?);
	Ok(())
}
