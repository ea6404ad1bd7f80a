//! Base path rewriting
//!
//! Pages are rendered against a `{{root}}` token; the same output can then be
//! deployed at `/` or under a sub-path by swapping in the base path.

use std::fs;
use std::path::Path;

use crate::error::{BuildError, Result};
use crate::templates::TOKEN_ROOT;

/// Replace every `{{root}}` with the deployment base path
pub fn inject_base_path(page: &str, base_path: &str) -> String {
    page.replace(TOKEN_ROOT, base_path)
}

/// Rewrite the `.html` files directly inside `dir` in place.
///
/// Not recursive. Returns the number of files rewritten.
pub fn rewrite_html_files(dir: &Path, base_path: &str) -> Result<usize> {
    let mut rewritten = 0;

    for entry in fs::read_dir(dir).map_err(|e| BuildError::io(dir, e))? {
        let entry = entry.map_err(|e| BuildError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| BuildError::io(&path, e))?;

        let is_html = path.extension().map(|ext| ext == "html").unwrap_or(false);
        if !file_type.is_file() || !is_html {
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|e| BuildError::io(&path, e))?;
        fs::write(&path, inject_base_path(&content, base_path))
            .map_err(|e| BuildError::io(&path, e))?;
        tracing::debug!("Rewrote base path in {:?}", path);
        rewritten += 1;
    }

    Ok(rewritten)
}
