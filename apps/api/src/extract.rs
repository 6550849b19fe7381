//! Document text extraction — turns an uploaded resume file into plain text.
//!
//! Format dispatch is strictly by filename suffix, case-insensitive. This is
//! spoofable (a renamed file is taken at its word) but predictable; content
//! sniffing is deliberately not done. Unrecognized suffixes are rejected
//! before any bytes are read.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves the format from the uploaded filename. Legacy `.doc` gets a
    /// dedicated conversion hint; anything else unrecognized is rejected.
    pub fn from_filename(filename: &str) -> Result<Self, AppError> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(DocumentFormat::Docx)
        } else if lower.ends_with(".doc") {
            Err(AppError::UnsupportedFormat(
                "DOC format not supported, please convert to DOCX or PDF".to_string(),
            ))
        } else {
            Err(AppError::UnsupportedFormat(
                "Unsupported file format".to_string(),
            ))
        }
    }
}

/// Extracts the document's text from its raw bytes.
pub fn extract_resume_text(format: DocumentFormat, bytes: &[u8]) -> Result<String, AppError> {
    match format {
        DocumentFormat::Pdf => extract_pdf_text(bytes),
        DocumentFormat::Docx => extract_docx_text(bytes),
    }
}

/// Pages are concatenated in order with no separator guarantee; words may
/// merge across page boundaries.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| AppError::Extraction(e.to_string()))
}

/// Paragraph text in document order, one newline per paragraph. Tables and
/// other non-paragraph content are skipped; only plain text runs are read.
fn extract_docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx = read_docx(bytes).map_err(|e| AppError::Extraction(e.to_string()))?;
    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}
