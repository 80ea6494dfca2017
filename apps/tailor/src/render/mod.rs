//! Document rendering seam.
//!
//! The pipeline hands a `DocumentBody` (header block + plain-text paragraphs)
//! to a `DocumentRenderer` and later reads the persisted artifact back as a
//! `Document` for coverage and lint. The binary layout belongs to the
//! renderer; nothing else in the crate knows how a document is stored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::write_atomic;
use crate::text::to_ascii;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a readable document: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// What the pipeline asks to have rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentBody {
    /// Name and contact lines placed at the top of the body, as written.
    pub header_block: Vec<String>,
    /// Body paragraphs; empty strings are blank lines and are preserved.
    pub paragraphs: Vec<String>,
}

impl DocumentBody {
    /// Splits filled template text into paragraphs, one per line.
    /// Lines are right-trimmed and folded to ASCII; blank lines stay blank.
    pub fn from_text(header_block: Vec<String>, text: &str) -> Self {
        let paragraphs = text
            .lines()
            .map(|raw| {
                let line = raw.trim_end();
                if line.is_empty() {
                    String::new()
                } else {
                    to_ascii(line)
                }
            })
            .collect();
        Self {
            header_block,
            paragraphs,
        }
    }
}

/// A table as seen by the inspector: rows of cell text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

/// A rendered document, as read back from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Section header paragraphs (page header, not the body's header block).
    #[serde(default)]
    pub header: Vec<String>,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub footer: Vec<String>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Document {
    /// Header block, a blank separator line, then the body.
    pub fn from_body(body: &DocumentBody) -> Self {
        let mut paragraphs = body.header_block.clone();
        paragraphs.push(String::new());
        paragraphs.extend(body.paragraphs.iter().cloned());
        Self {
            paragraphs,
            ..Self::default()
        }
    }

    /// Paragraph text joined by newlines, as an ATS parser would extract it.
    pub fn visible_text(&self) -> String {
        self.paragraphs.join("\n")
    }
}

/// Turns a body into a persisted artifact and reads artifacts back.
pub trait DocumentRenderer: Send + Sync {
    /// File extension (without the dot) of produced artifacts.
    fn extension(&self) -> &'static str;

    fn render(&self, body: &DocumentBody, path: &Path) -> Result<(), RenderError>;

    fn open(&self, path: &Path) -> Result<Document, RenderError>;
}

/// Stores the document structure as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentRenderer;

impl DocumentRenderer for JsonDocumentRenderer {
    fn extension(&self) -> &'static str {
        "resume.json"
    }

    fn render(&self, body: &DocumentBody, path: &Path) -> Result<(), RenderError> {
        let document = Document::from_body(body);
        let bytes = serde_json::to_vec_pretty(&document)?;
        write_atomic(path, &bytes).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn open(&self, path: &Path) -> Result<Document, RenderError> {
        let bytes = std::fs::read(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| RenderError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_preserves_blank_lines_and_folds_ascii() {
        let body = DocumentBody::from_text(
            vec!["Graham Hill".to_string()],
            "## Summary\n\nCafé closer —  fast.   \n",
        );
        assert_eq!(body.paragraphs, vec!["## Summary", "", "Cafe closer   fast."]);
    }

    #[test]
    fn test_document_layout_puts_header_block_first() {
        let body = DocumentBody {
            header_block: vec!["Graham Hill".to_string(), "Toronto | g@x.com".to_string()],
            paragraphs: vec!["Summary".to_string()],
        };
        let doc = Document::from_body(&body);
        assert_eq!(
            doc.paragraphs,
            vec!["Graham Hill", "Toronto | g@x.com", "", "Summary"]
        );
        assert!(doc.header.is_empty());
        assert!(doc.footer.is_empty());
        assert!(doc.tables.is_empty());
        assert_eq!(doc.visible_text(), "Graham Hill\nToronto | g@x.com\n\nSummary");
    }

    #[test]
    fn test_json_renderer_writes_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.resume.json");
        let body = DocumentBody::from_text(vec!["Graham Hill".to_string()], "Line one\n\nLine two");

        let renderer = JsonDocumentRenderer;
        renderer.render(&body, &path).unwrap();
        let doc = renderer.open(&path).unwrap();

        assert_eq!(doc, Document::from_body(&body));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonDocumentRenderer
            .open(&dir.path().join("nope.resume.json"))
            .unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }

    #[test]
    fn test_open_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.resume.json");
        std::fs::write(&path, b"not json").unwrap();
        let err = JsonDocumentRenderer.open(&path).unwrap_err();
        assert!(matches!(err, RenderError::Decode { .. }));
    }
}
