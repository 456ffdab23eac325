// src/report/browser.rs
use std::path::Path;

use url::Url;

use crate::error::ExportError;

/// Absolute `file://` URL for a local artifact. The file need not exist.
pub fn file_url(path: &Path) -> Result<Url, ExportError> {
    let abs = std::path::absolute(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Url::from_file_path(&abs).map_err(|_| ExportError::FileUrl(abs))
}

/// Hand the artifact to the OS default handler.
pub fn open_in_browser(path: &Path) -> Result<Url, ExportError> {
    let url = file_url(path)?;
    open::that(url.as_str()).map_err(|source| ExportError::Browser {
        url: url.to_string(),
        source,
    })?;
    logf!("Browser: opened {url}");
    Ok(url)
}
