//! Isolated executor: surfaces that receive synthesized documents.
//!
//! Each load replaces the surface's whole content. Failures inside the
//! document are handled by the document's own script; a surface only reports
//! its own IO problems.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use session_logging::{session_debug, session_info};
use thiserror::Error;

use crate::persist::{ensure_output_dir, AtomicFileWriter, PersistError};

/// The only capabilities the sandboxed frame receives.
pub const SANDBOX_CAPABILITIES: [&str; 2] = ["allow-scripts", "allow-same-origin"];

pub const PREVIEW_FILE: &str = "preview.html";
pub const HOST_FILE: &str = "index.html";

pub fn sandbox_attribute() -> String {
    SANDBOX_CAPABILITIES.join(" ")
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

pub trait PreviewSurface: Send + Sync {
    /// Replaces everything on the surface with `document`.
    fn load(&self, document: &str) -> Result<(), SurfaceError>;
    /// Leaves the surface blank.
    fn clear(&self) -> Result<(), SurfaceError>;
}

/// Writes the document to `preview.html` and a host page `index.html` that
/// shows it in a sandboxed frame.
#[derive(Debug, Clone)]
pub struct FileSurface {
    writer: AtomicFileWriter,
}

impl FileSurface {
    pub fn new(dir: PathBuf) -> Result<Self, SurfaceError> {
        ensure_output_dir(&dir)?;
        Ok(Self {
            writer: AtomicFileWriter::new(dir),
        })
    }

    pub fn dir(&self) -> &Path {
        self.writer.dir()
    }

    pub fn host_page_path(&self) -> PathBuf {
        self.writer.dir().join(HOST_FILE)
    }
}

impl PreviewSurface for FileSurface {
    fn load(&self, document: &str) -> Result<(), SurfaceError> {
        let preview = self.writer.write(PREVIEW_FILE, document)?;
        let host = self.writer.write(HOST_FILE, &host_page(document))?;
        session_debug!(
            "Surface loaded {} bytes into {} and {}",
            document.len(),
            preview.display(),
            host.display()
        );
        Ok(())
    }

    fn clear(&self) -> Result<(), SurfaceError> {
        self.writer.write(PREVIEW_FILE, "")?;
        self.writer.write(HOST_FILE, &host_page(""))?;
        session_info!("Surface cleared in {}", self.writer.dir().display());
        Ok(())
    }
}

/// Host page embedding `document` through `srcdoc`.
pub fn host_page(document: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\" />\n  \
         <title>Live Preview</title>\n  <style>html, body {{ margin: 0; height: 100%; }} \
         iframe {{ border: 0; width: 100%; height: 100%; }}</style>\n</head>\n<body>\n  \
         <iframe title=\"Live Preview\" sandbox=\"{}\" srcdoc=\"{}\"></iframe>\n</body>\n</html>\n",
        sandbox_attribute(),
        escape_attribute(document)
    )
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + value.len() / 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// In-memory surface; clones share the same content.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    content: Arc<Mutex<Option<String>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current document, `None` when blank.
    pub fn content(&self) -> Option<String> {
        self.content
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl PreviewSurface for MemorySurface {
    fn load(&self, document: &str) -> Result<(), SurfaceError> {
        if let Ok(mut guard) = self.content.lock() {
            *guard = Some(document.to_string());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SurfaceError> {
        if let Ok(mut guard) = self.content.lock() {
            *guard = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{host_page, sandbox_attribute};

    #[test]
    fn sandbox_grants_exactly_scripts_and_same_origin() {
        assert_eq!(sandbox_attribute(), "allow-scripts allow-same-origin");
    }

    #[test]
    fn host_page_escapes_document_into_srcdoc() {
        let page = host_page("<p class=\"x\">a & b</p>");
        assert!(page.contains("srcdoc=\"&lt;p class=&quot;x&quot;&gt;a &amp; b&lt;/p&gt;\""));
        assert!(page.contains("sandbox=\"allow-scripts allow-same-origin\""));
    }
}
