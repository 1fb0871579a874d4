//! Text extraction: turns an uploaded PDF or DOCX blob into plain text.
//!
//! Uploads are buffered in a `SpooledTempFile`: small files stay in memory, large ones
//! roll over to an anonymous temp file. The buffer is owned by `Document` and dropped
//! when extraction finishes, whichever way it finishes.
//!
//! Parsing is CPU-bound. Callers on the async runtime must go through
//! `tokio::task::spawn_blocking`.

pub mod docx;
pub mod pdf;

use std::fmt;
use std::io::{Seek, SeekFrom, Write};

use tempfile::SpooledTempFile;
use thiserror::Error;

/// Uploads larger than this spill from memory to disk.
const SPOOL_THRESHOLD: usize = 512 * 1024;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format '{0}'. Please upload a PDF or DOCX file.")]
    UnsupportedFormat(String),

    #[error("Could not read {kind} document: {reason}")]
    Extraction { kind: DocumentKind, reason: String },

    #[error("I/O error while buffering upload: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentKind {
    /// Classifies an upload by its file extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Self {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if lower.ends_with(".docx") {
            DocumentKind::Docx
        } else {
            DocumentKind::Unsupported
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Unsupported => "unsupported",
        };
        f.write_str(label)
    }
}

/// A single uploaded document. Exists only for the duration of one request.
pub struct Document {
    pub file_name: String,
    pub kind: DocumentKind,
    blob: SpooledTempFile,
    len: usize,
}

impl Document {
    pub fn new(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            kind: DocumentKind::from_file_name(&file_name),
            file_name,
            blob: SpooledTempFile::new(SPOOL_THRESHOLD),
            len: 0,
        }
    }

    /// Appends a chunk of the upload body to the scoped buffer.
    pub fn append(&mut self, chunk: &[u8]) -> Result<(), ExtractError> {
        self.blob.write_all(chunk)?;
        self.len += chunk.len();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("file_name", &self.file_name)
            .field("kind", &self.kind)
            .field("len", &self.len)
            .finish()
    }
}

/// Plain text of a document in reading order, paragraph breaks as `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing but whitespace to analyse.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for ExtractedText {
    fn from(text: String) -> Self {
        ExtractedText(text)
    }
}

impl From<&str> for ExtractedText {
    fn from(text: &str) -> Self {
        ExtractedText(text.to_string())
    }
}

/// Extracts plain text from the document, consuming it.
pub fn extract(document: Document) -> Result<ExtractedText, ExtractError> {
    let Document {
        file_name,
        kind,
        mut blob,
        ..
    } = document;

    blob.seek(SeekFrom::Start(0))?;

    let text = match kind {
        DocumentKind::Pdf => pdf::extract_pdf(&mut blob)?,
        DocumentKind::Docx => docx::extract_docx(&mut blob)?,
        DocumentKind::Unsupported => return Err(ExtractError::UnsupportedFormat(file_name)),
    };

    Ok(ExtractedText(text))
}

#[cfg(test)]
impl Document {
    pub fn from_bytes(file_name: impl Into<String>, bytes: &[u8]) -> Result<Self, ExtractError> {
        let mut document = Self::new(file_name);
        document.append(bytes)?;
        Ok(document)
    }
}
