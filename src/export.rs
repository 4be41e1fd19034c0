//! JSON export of the accumulated categories
//!
//! Writes the import file consumed by the bot's `category import` command:
//! a JSON array of category objects, keys alphabetically sorted at every
//! nesting level, 4-space indentation.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

use crate::model::Category;
use crate::wizard::colors;

/// Render a JSON value with 4-space indentation
pub fn pretty_json(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Write all categories to `path`, overwriting any existing file.
///
/// The array preserves entry order. The write is not atomic; a failure
/// propagates with path context rather than being swallowed.
pub fn export(categories: &[Category], path: &Path) -> Result<()> {
    let values = categories
        .iter()
        .map(Category::to_value)
        .collect::<Result<Vec<_>>>()?;
    let json = pretty_json(&Value::Array(values))?;

    std::fs::write(path, &json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {} bytes to {}", json.len(), path.display());

    println!("{}", colors::success("File has been saved"));
    Ok(())
}
