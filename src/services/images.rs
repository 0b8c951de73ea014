//! Logo resolution and inline image encoding.
//!
//! Every image on the page is embedded as a base64 data URI, so the browser
//! never fetches image files from the server. Logo lookup is total: a missing
//! per-entry logo resolves to the shared placeholder instead of failing.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::FALLBACK_LOGO;

/// Resolves the logo file for a `(type_prefix, index)` pair.
///
/// Prefers `{images_dir}/{type_prefix}{index}.jpeg`; falls back to
/// `{images_dir}/nologo.jpeg` when the specific file does not exist. Never
/// errors — whether the fallback itself exists is checked at load time.
#[must_use]
pub fn resolve_logo(images_dir: &Path, type_prefix: &str, index: u32) -> PathBuf {
    let specific = images_dir.join(format!("{type_prefix}{index}.jpeg"));
    if specific.exists() {
        specific
    } else {
        images_dir.join(FALLBACK_LOGO)
    }
}

/// Reads an image file and encodes it as a `data:image/jpeg;base64,...` URI.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn encode_data_uri(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    Ok(format!("data:image/jpeg;base64,{}", B64.encode(bytes)))
}
