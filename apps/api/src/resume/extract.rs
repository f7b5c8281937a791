//! Uploaded-document text extraction.
//!
//! PDF bytes are staged to a temp file and run through `pdf_extract` on the
//! blocking pool; plain-text uploads are decoded lossily. Anything else is
//! reported as unsupported.

use std::io::Write;
use std::path::Path;

use bytes::Bytes;
use tempfile::NamedTempFile;

use crate::report::AnalysisError;

pub(crate) async fn document_text(filename: &str, data: Bytes) -> Result<String, AnalysisError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "pdf" => pdf_text(data).await,
        "txt" | "md" | "text" => Ok(String::from_utf8_lossy(&data).into_owned()),
        other => Err(AnalysisError::Input(format!(
            "Unsupported resume format '{other}'. Upload a PDF or plain-text file."
        ))),
    }
}

async fn pdf_text(data: Bytes) -> Result<String, AnalysisError> {
    let extracted = tokio::task::spawn_blocking(move || {
        let mut staged = NamedTempFile::new().map_err(|e| e.to_string())?;
        staged.write_all(&data).map_err(|e| e.to_string())?;
        pdf_extract::extract_text(staged.path()).map_err(|e| e.to_string())
    })
    .await
    // a panic inside the extractor reads the same as a parse failure
    .unwrap_or_else(|e| Err(e.to_string()));

    extracted.map_err(|e| {
        AnalysisError::Input(format!("Could not extract text from the document: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_passes_through() {
        let text = document_text("resume.txt", Bytes::from_static(b"Jane Doe\nEngineer"))
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[tokio::test]
    async fn test_markdown_and_text_extensions_accepted() {
        assert!(document_text("resume.md", Bytes::from_static(b"# Jane")).await.is_ok());
        assert!(document_text("resume.text", Bytes::from_static(b"Jane")).await.is_ok());
    }

    #[tokio::test]
    async fn test_extension_check_is_case_insensitive() {
        assert!(document_text("RESUME.TXT", Bytes::from_static(b"Jane")).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decoded_lossily() {
        let text = document_text("resume.txt", Bytes::from_static(b"Jane \xff Doe"))
            .await
            .unwrap();
        assert!(text.contains("Jane"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[tokio::test]
    async fn test_unknown_extension_is_unsupported() {
        let err = document_text("resume.docx", Bytes::from_static(b"PK"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported resume format 'docx'"));
    }

    #[tokio::test]
    async fn test_garbage_pdf_reports_extraction_failure() {
        let err = document_text("resume.pdf", Bytes::from_static(b"not a pdf at all"))
            .await
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Could not extract text from the document:"));
    }
}
