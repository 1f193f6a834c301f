// src/file.rs

use std::{
    fs,
    path::Path,
};

use crate::config::options::WidgetOptions;
use crate::dom::Node;
use crate::core::html::parse_fragment;
use crate::error::{CardFilterError, Result};

/// Read and parse an HTML document holding a card container.
pub fn load_document(path: &Path) -> Result<Vec<Node>> {
    let text = fs::read_to_string(path).map_err(|e| CardFilterError::io(path, e))?;
    let doc = parse_fragment(&text);
    logf!("File: parsed {} ({} bytes, {} top-level node(s))", path.display(), text.len(), doc.len());
    Ok(doc)
}

/// Read widget options from JSON. Missing fields take their defaults.
pub fn load_options(path: &Path) -> Result<WidgetOptions> {
    let text = fs::read_to_string(path).map_err(|e| CardFilterError::io(path, e))?;
    let opts: WidgetOptions = serde_json::from_str(&text).map_err(|source| CardFilterError::Options {
        path: path.to_path_buf(),
        source,
    })?;
    logf!("File: options from {} ({} filter(s))", path.display(), opts.selects.config.len());
    Ok(opts.normalized())
}

/// Write rendered markup, creating parent directories as needed.
pub fn write_html(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, html).map_err(|e| CardFilterError::io(path, e))?;
    logf!("File: wrote {} ({} bytes)", path.display(), html.len());
    Ok(())
}

fn ensure_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| CardFilterError::io(dir, e))
}
