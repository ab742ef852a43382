//! A minimal `a.b[2].c` path syntax for reaching into a decoded document
//! from the command line, without pulling in a general query language.

use anyhow::{anyhow, bail, Result};
use tagjson::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Key(String),
	Index(usize),
}

pub fn parse(path: &str) -> Result<Vec<Segment>> {
	let mut segments = Vec::new();
	let mut rest = path;
	while !rest.is_empty() {
		if let Some(after_dot) = rest.strip_prefix('.') {
			rest = after_dot;
			continue;
		}
		if let Some(after_bracket) = rest.strip_prefix('[') {
			let end = after_bracket.find(']').ok_or_else(|| anyhow!("unterminated '[' in path {path:?}"))?;
			let index: usize = after_bracket[..end]
				.parse()
				.map_err(|_| anyhow!("not a valid array index in path {path:?}"))?;
			segments.push(Segment::Index(index));
			rest = &after_bracket[end + 1..];
			continue;
		}
		let end = rest.find(['.', '[']).unwrap_or(rest.len());
		if end == 0 {
			bail!("empty path segment in {path:?}");
		}
		segments.push(Segment::Key(rest[..end].to_string()));
		rest = &rest[end..];
	}
	Ok(segments)
}

pub fn resolve<'a>(root: Value<'a>, segments: &[Segment]) -> Result<Value<'a>> {
	let mut current = root;
	for segment in segments {
		current = match segment {
			Segment::Key(key) => current
				.get_property(key)
				.ok_or_else(|| anyhow!("no property named {key:?}"))?,
			Segment::Index(index) => current
				.element_at(*index)
				.ok_or_else(|| anyhow!("no element at index {index}"))?,
		};
	}
	Ok(current)
}
