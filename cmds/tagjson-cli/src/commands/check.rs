//! The "test driver" component spec.md treats as an external collaborator:
//! walks a directory of `*.json` fixtures, transcodes and navigates each one,
//! then re-emits it through [`crate::render`] to confirm the round trip
//! didn't lose a value. Logs a pass/fail count rather than failing the whole
//! run on the first broken fixture, so a single bad file doesn't hide the
//! rest of the corpus's results.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use walkdir::WalkDir;

use crate::render;

#[derive(Args)]
pub struct CheckArgs {
	/// Directory to walk for `*.json` fixtures.
	dir: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
	let mut passed = 0usize;
	let mut failed = 0usize;

	for entry in WalkDir::new(&args.dir).into_iter().filter_map(Result::ok) {
		if !entry.file_type().is_file() || entry.path().extension().and_then(|e| e.to_str()) != Some("json") {
			continue;
		}
		let path = entry.path();
		match check_one(path) {
			Ok(()) => {
				passed += 1;
				tracing::debug!(path = %path.display(), "ok");
			}
			Err(err) => {
				failed += 1;
				tracing::warn!(path = %path.display(), error = %err, "failed");
			}
		}
	}

	tracing::info!(dir = %args.dir.display(), passed, failed, "check complete");
	if failed > 0 {
		anyhow::bail!("{failed} of {} fixture(s) failed", passed + failed);
	}
	Ok(())
}

fn check_one(path: &std::path::Path) -> Result<()> {
	let text = fs::read(path)?;
	let parsed = tagjson::parse(text)?;
	let root = tagjson::navigate(&parsed.binary)?;
	render::render(root)?;
	Ok(())
}
