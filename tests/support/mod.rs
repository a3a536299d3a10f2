#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use oslopolicy2rego::generator::rule_set::{self, RuleSet};
use oslopolicy2rego::parser::document::{self, PolicyDocument};

pub(crate) fn fixture_dir(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture)
}

pub(crate) fn fixture_input_path(fixture: &str) -> PathBuf {
    let dir = fixture_dir(fixture);
    let yaml = dir.join("input.yaml");
    if yaml.exists() {
        yaml
    } else {
        dir.join("input.json")
    }
}

pub(crate) fn read_fixture_input(fixture: &str) -> String {
    std::fs::read_to_string(fixture_input_path(fixture)).expect("fixture input should be readable")
}

pub(crate) fn load_fixture_document(fixture: &str) -> PolicyDocument {
    document::parse_document(&read_fixture_input(fixture)).expect("fixture input should parse")
}

pub(crate) fn load_fixture_rule_set(fixture: &str) -> RuleSet {
    rule_set::assemble(&load_fixture_document(fixture)).expect("fixture should assemble")
}

pub(crate) fn translate_fixture(fixture: &str) -> String {
    oslopolicy2rego::translate(&read_fixture_input(fixture)).expect("fixture should translate")
}

/// The rendered `allow` / alias blocks of a generated document, header stripped.
pub(crate) fn blocks(rego: &str) -> Vec<String> {
    rego.split("\n\n")
        .map(str::trim)
        .filter(|chunk| chunk.ends_with('}'))
        .map(str::to_string)
        .collect()
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}
