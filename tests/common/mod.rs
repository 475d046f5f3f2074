// Test utility module for code-prompts integration tests
#![allow(dead_code)]

use code_prompts::{EntityKind, Record};
use std::path::{Path, PathBuf};

/// Input table fixture written into a temporary directory
pub struct InputFixture {
    pub dir: tempfile::TempDir,
    pub input: PathBuf,
}

impl InputFixture {
    pub fn new(records: &[Record]) -> Self {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let input = dir.path().join("input.csv");
        std::fs::write(&input, input_table(records)).expect("Failed to write input table");
        Self { dir, input }
    }

    pub fn raw(contents: &str) -> Self {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let input = dir.path().join("input.csv");
        std::fs::write(&input, contents).expect("Failed to write input table");
        Self { dir, input }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("prompts")
    }
}

/// Render records as an extraction table with header
pub fn input_table(records: &[Record]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(Record::HEADERS).unwrap();
    for record in records {
        writer.write_record(record.to_row()).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

/// Read an output table back as (prompt, completion) rows, header excluded
pub fn read_output(path: &Path) -> Vec<(String, String)> {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open output table");
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["prompt", "completion"]
    );
    reader
        .records()
        .map(|row| {
            let row = row.unwrap();
            (row[0].to_string(), row[1].to_string())
        })
        .collect()
}

pub fn class(simple: &str, name: &str, parent: &str) -> Record {
    Record::new(EntityKind::Class, simple, name)
        .with_parent(parent)
        .with_definition(format!("public class {simple}"))
        .with_body(format!("public class {simple} {{\n}}"))
}

pub fn method(simple: &str, parent: &str) -> Record {
    Record::new(EntityKind::Method, simple, format!("{parent}.{simple}"))
        .with_parent(parent)
        .with_definition(format!("void {simple}()"))
        .with_body(format!("void {simple}() {{\n    return;\n}}"))
}

pub fn field(simple: &str, parent: &str) -> Record {
    Record::new(EntityKind::Field, simple, format!("{parent}.{simple}"))
        .with_parent(parent)
        .with_definition(format!("private int {simple};"))
}
