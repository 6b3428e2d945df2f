//! Rendering command results as plain text or JSON.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::{json, Value};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one value per line.
    Text,
    /// `{"ok": <value>}` on a single line.
    Json,
}

/// A command result in both renderings.
#[derive(Debug, Clone)]
pub struct Report {
    text: String,
    value: Value,
}

impl Report {
    pub fn new(text: impl Into<String>, value: impl Serialize) -> Result<Self> {
        Ok(Self {
            text: text.into(),
            value: serde_json::to_value(value)?,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

pub fn write_report(out: &mut impl Write, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.text())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &json!({ "ok": report.value() }))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Convert 0-based positions to the 1-based numbering shown to users.
pub fn one_based(positions: &[usize]) -> Vec<usize> {
    positions.iter().map(|p| p + 1).collect()
}

/// Space-separated list.
pub fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &Report, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_is_one_line() {
        let report = Report::new("7", 7).unwrap();
        assert_eq!(render(&report, OutputFormat::Text), "7\n");
    }

    #[test]
    fn json_wraps_in_ok() {
        let report = Report::new("2 4 10", vec![2, 4, 10]).unwrap();
        assert_eq!(render(&report, OutputFormat::Json), "{\"ok\":[2,4,10]}\n");
    }

    #[test]
    fn positions_shift_to_one_based() {
        assert_eq!(join(&one_based(&[1, 3, 9])), "2 4 10");
        assert_eq!(join::<usize>(&[]), "");
    }
}
