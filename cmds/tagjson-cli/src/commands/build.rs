use anyhow::Result;
use clap::Args;
use tagjson::Builder;

/// Emits a small fixed document through the public builder API, mostly as a
/// smoke test callable from the command line without writing a Rust program.
#[derive(Args)]
pub struct BuildArgs {}

pub fn run(_args: BuildArgs) -> Result<()> {
	let mut builder = Builder::new();
	builder.enter_object();
	builder.add_property_number("x", -3.5);
	builder.enter_property_array("y");
	builder.add_number(1.0);
	builder.add_number(2.0);
	builder.exit_scope();
	builder.exit_scope();

	let text = builder.into_string()?;
	println!("{text}");
	Ok(())
}
