//! Walks the fixture corpus and exercises the full parse -> navigate ->
//! render round trip, plus the formatter's idempotence properties, the way
//! `tagjson check` does for an arbitrary directory of JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use tagjson::{Builder, Value};
use walkdir::WalkDir;

fn fixtures_dir() -> PathBuf {
	let mut root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	root.push("fixtures");
	root
}

fn render(value: Value<'_>) -> String {
	let mut b = Builder::new();
	render_value(&mut b, value);
	b.into_string().expect("render produced a well-formed document")
}

fn render_value(b: &mut Builder, value: Value<'_>) {
	match value {
		Value::Invalid => panic!("fixture corpus must not contain malformed values"),
		Value::Null => b.add_null(),
		Value::Bool(x) => b.add_bool(x),
		Value::Number(n) => b.add_number(n.as_f64()),
		Value::String(_) => b.add_string(value.as_str().expect("fixture corpus strings are valid utf-8")),
		Value::Object(o) => {
			b.enter_object();
			for (key, child) in o.properties() {
				render_property(b, key, child);
			}
			b.exit_scope();
		}
		Value::Array(a) => {
			b.enter_array();
			for child in a.elements() {
				render_value(b, child);
			}
			b.exit_scope();
		}
	}
}

fn render_property(b: &mut Builder, key: &str, value: Value<'_>) {
	match value {
		Value::Invalid => panic!("fixture corpus must not contain malformed values"),
		Value::Null => b.add_property_null(key),
		Value::Bool(x) => b.add_property_bool(key, x),
		Value::Number(n) => b.add_property_number(key, n.as_f64()),
		Value::String(_) => {
			b.add_property_string(key, value.as_str().expect("fixture corpus strings are valid utf-8"));
		}
		Value::Object(o) => {
			b.enter_property_object(key);
			for (k, child) in o.properties() {
				render_property(b, k, child);
			}
			b.exit_scope();
		}
		Value::Array(a) => {
			b.enter_property_array(key);
			for child in a.elements() {
				render_value(b, child);
			}
			b.exit_scope();
		}
	}
}

fn each_fixture(mut f: impl FnMut(&Path, String)) {
	let mut seen = 0usize;
	for entry in WalkDir::new(fixtures_dir()).into_iter().filter_map(Result::ok) {
		if !entry.file_type().is_file() || entry.path().extension().and_then(|e| e.to_str()) != Some("json") {
			continue;
		}
		let text = fs::read_to_string(entry.path()).expect("fixture is readable");
		f(entry.path(), text);
		seen += 1;
	}
	assert!(seen > 0, "fixture directory is empty");
}

#[test]
fn every_fixture_transcodes_and_navigates() {
	each_fixture(|path, text| {
		let parsed = tagjson::parse(text.into_bytes())
			.unwrap_or_else(|e| panic!("{}: transcode failed: {e}", path.display()));
		let root = tagjson::navigate(&parsed.binary)
			.unwrap_or_else(|e| panic!("{}: navigate failed: {e}", path.display()));
		assert_ne!(root.kind(), "invalid", "{}", path.display());
	});
}

#[test]
fn every_fixture_survives_a_render_round_trip() {
	each_fixture(|path, text| {
		let parsed = tagjson::parse(text.into_bytes()).unwrap();
		let root = tagjson::navigate(&parsed.binary).unwrap();
		let rendered = render(root);

		let reparsed = tagjson::parse(rendered.clone().into_bytes())
			.unwrap_or_else(|e| panic!("{}: re-parsing rendered output failed: {e}", path.display()));
		let reroot = tagjson::navigate(&reparsed.binary).unwrap();
		assert_eq!(render(reroot), rendered, "{}: render is not stable across a second pass", path.display());
	});
}

#[test]
fn compress_is_idempotent_on_every_fixture() {
	each_fixture(|path, text| {
		let once = tagjson::compress(&text).unwrap_or_else(|e| panic!("{}: compress failed: {e}", path.display()));
		let twice = tagjson::compress(&once).unwrap();
		assert_eq!(once, twice, "{}", path.display());
	});
}

#[test]
fn indent_then_compress_matches_compress_alone() {
	each_fixture(|path, text| {
		let indented = tagjson::indent(&text).unwrap_or_else(|e| panic!("{}: indent failed: {e}", path.display()));
		let compressed_direct = tagjson::compress(&text).unwrap();
		let compressed_via_indent = tagjson::compress(&indented).unwrap();
		assert_eq!(compressed_via_indent, compressed_direct, "{}", path.display());
	});
}

#[test]
fn a_string_straddling_the_small_large_boundary_round_trips() {
	// SMALL_MAX_LEN counts tag + content + NUL, so content of exactly
	// SMALL_MAX_LEN - 2 bytes is the largest Small string; one more byte
	// of content tips it into Large.
	let boundary_len = tagjson::SMALL_MAX_LEN - 2;
	for len in [boundary_len - 1, boundary_len, boundary_len + 1, boundary_len + 2] {
		let content: String = "a".repeat(len);
		let text = format!(r#"{{"s":"{content}"}}"#);
		let parsed = tagjson::parse(text.clone().into_bytes()).unwrap();
		let root = tagjson::navigate(&parsed.binary).unwrap();
		let s = root.get_property("s").unwrap().as_str().unwrap();
		assert_eq!(s.len(), len);
		assert_eq!(s, content);
	}
}

#[test]
fn deeply_nested_arrays_round_trip() {
	let depth = 200;
	let mut text = String::new();
	text.push_str(&"[".repeat(depth));
	text.push('0');
	text.push_str(&"]".repeat(depth));

	let parsed = tagjson::parse(text.clone().into_bytes()).unwrap();
	let root = tagjson::navigate(&parsed.binary).unwrap();

	let mut cursor = root;
	for _ in 0..depth {
		cursor = cursor.element_at(0).expect("every level has exactly one child");
	}
	assert_eq!(cursor.as_number().unwrap().mantissa, 0);

	assert_eq!(render(root), text);
}
