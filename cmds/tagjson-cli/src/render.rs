//! Renders a navigated [`Value`] back into JSON text, by replaying it
//! through a [`Builder`]. This is how `get` prints whatever sub-value a path
//! resolved to, without the library crates needing a serializer of their
//! own.

use anyhow::{bail, Result};
use tagjson::{Builder, Value};

pub fn render(value: Value<'_>) -> Result<String> {
	let mut builder = Builder::new();
	render_value(&mut builder, value)?;
	Ok(builder.into_string()?)
}

fn render_value(b: &mut Builder, value: Value<'_>) -> Result<()> {
	match value {
		Value::Invalid => bail!("refusing to render a malformed (Invalid) value"),
		Value::Null => b.add_null(),
		Value::Bool(x) => b.add_bool(x),
		Value::Number(n) => b.add_number(n.as_f64()),
		Value::String(_) => match value.as_str() {
			Some(s) => b.add_string(s),
			None => bail!("refusing to render a string with an unpaired \\u surrogate escape"),
		},
		Value::Object(o) => {
			b.enter_object();
			for (key, child) in o.properties() {
				render_property(b, key, child)?;
			}
			b.exit_scope();
		}
		Value::Array(a) => {
			b.enter_array();
			for child in a.elements() {
				render_value(b, child)?;
			}
			b.exit_scope();
		}
	}
	Ok(())
}

fn render_property(b: &mut Builder, key: &str, value: Value<'_>) -> Result<()> {
	match value {
		Value::Invalid => bail!("refusing to render a malformed (Invalid) value at property {key:?}"),
		Value::Null => b.add_property_null(key),
		Value::Bool(x) => b.add_property_bool(key, x),
		Value::Number(n) => b.add_property_number(key, n.as_f64()),
		Value::String(_) => match value.as_str() {
			Some(s) => b.add_property_string(key, s),
			None => bail!("refusing to render a string with an unpaired \\u surrogate escape at property {key:?}"),
		},
		Value::Object(o) => {
			b.enter_property_object(key);
			for (k, child) in o.properties() {
				render_property(b, k, child)?;
			}
			b.exit_scope();
		}
		Value::Array(a) => {
			b.enter_property_array(key);
			for child in a.elements() {
				render_value(b, child)?;
			}
			b.exit_scope();
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn renders_a_parsed_document_back_to_equivalent_text() {
		let parsed = tagjson::parse(br#"{"a":1,"b":[true,null,"x"]}"#.to_vec()).unwrap();
		let root = tagjson::navigate(&parsed.binary).unwrap();
		assert_eq!(render(root).unwrap(), r#"{"a":1,"b":[true,null,"x"]}"#);
	}

	#[test]
	fn refuses_to_render_an_invalid_value() {
		assert!(render(Value::Invalid).is_err());
	}
}
