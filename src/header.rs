/// Renders and writes the PROGMEM headers.
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::sanitize::identifier_for;

pub const RAW_DELIMITER: &str = "rawliteral";

/// The sequence that ends a `R"rawliteral(` literal in C++.
fn closing_token() -> String {
    format!("){}\"", RAW_DELIMITER)
}

/// Builds the header text. Fails if `content` would terminate the raw literal early.
pub fn render_header(source_name: &str, identifier: &str, content: &str) -> Result<String> {
    if content.contains(&closing_token()) {
        bail!(
            "{} contains the raw literal terminator {}; the header would not compile",
            source_name,
            closing_token()
        );
    }
    Ok(format!(
        "#pragma once\n\n\
         // Auto-generated from: {source_name}\n\
         const char {identifier}[] PROGMEM = R\"{delim}(\n\
         {content}\n\
         ){delim}\";\n",
        delim = RAW_DELIMITER,
    ))
}

/// Read `input_path`, wrap it and overwrite `output_path`. Returns the identifier used.
pub fn create_header(input_path: &Path, output_path: &Path) -> Result<String> {
    let content = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {:?} as UTF-8 text", input_path))?;

    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input_path
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let identifier = identifier_for(&stem, &ext);
    let source_name = input_path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let header = render_header(&source_name, &identifier, &content)
        .with_context(|| format!("Cannot embed {:?}", input_path))?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    fs::write(output_path, header.as_bytes())
        .with_context(|| format!("Failed to write {:?}", output_path))?;
    Ok(identifier)
}
