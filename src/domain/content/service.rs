use async_trait::async_trait;

use super::error::ContentError;
use super::model::Content;

/// Source document formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    PlainText,
    Pdf,
    Docx,
}

impl SourceFormat {
    pub fn from_filename(filename: &str) -> Option<SourceFormat> {
        let extension = filename.rsplit_once('.')?.1.to_lowercase();
        match extension.as_str() {
            "txt" => Some(SourceFormat::PlainText),
            "pdf" => Some(SourceFormat::Pdf),
            "docx" => Some(SourceFormat::Docx),
            _ => None,
        }
    }
}

/// Result of one extraction: the content plus any non-fatal warnings
/// (e.g. PDF pages that had to be skipped).
#[derive(Debug, Clone)]
pub struct ContentExtraction {
    pub content: Content,
    pub warnings: Vec<String>,
}

pub struct ContentService;

impl ContentService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContentService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
pub trait ContentServiceApi: Send + Sync {
    /// Turn pasted text into session content.
    async fn extract_from_text(&self, text: &str) -> Result<ContentExtraction, ContentError>;

    /// Turn an uploaded file into session content.
    ///
    /// The format is chosen by file extension; anything other than
    /// .txt/.pdf/.docx is rejected before any extraction is attempted.
    async fn extract_from_file(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> Result<ContentExtraction, ContentError>;
}

#[async_trait]
impl ContentServiceApi for ContentService {
    async fn extract_from_text(&self, text: &str) -> Result<ContentExtraction, ContentError> {
        let content = Content::new(normalize_whitespace(text))?;
        Ok(ContentExtraction {
            content,
            warnings: Vec::new(),
        })
    }

    async fn extract_from_file(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> Result<ContentExtraction, ContentError> {
        let format = SourceFormat::from_filename(filename)
            .ok_or_else(|| ContentError::UnsupportedFormat(filename.to_string()))?;

        tracing::info!(
            filename = %filename,
            format = ?format,
            size_bytes = bytes.len(),
            "Extracting text from upload"
        );

        let (text, warnings) = match format {
            SourceFormat::PlainText => (extract_plain_text(bytes)?, Vec::new()),
            SourceFormat::Pdf => extract_pdf(bytes)?,
            SourceFormat::Docx => (extract_docx(bytes)?, Vec::new()),
        };

        let content = Content::new(normalize_whitespace(&text)).map_err(|e| match e {
            // An upload that extracts to nothing is a document problem, not
            // an input-validation problem.
            ContentError::EmptyContent => ContentError::NoExtractableText,
            other => other,
        })?;

        tracing::info!(
            filename = %filename,
            chars = content.char_count(),
            warnings = warnings.len(),
            "Extraction complete"
        );

        Ok(ContentExtraction { content, warnings })
    }
}

fn extract_plain_text(bytes: &[u8]) -> Result<String, ContentError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| ContentError::InvalidEncoding)
}

/// Extract a PDF page by page, in page order.
///
/// A page whose text extraction fails is skipped with a warning; only a
/// document with no extractable text at all is fatal to the stage.
fn extract_pdf(bytes: &[u8]) -> Result<(String, Vec<String>), ContentError> {
    let document =
        lopdf::Document::load_mem(bytes).map_err(|e| ContentError::Unreadable(e.to_string()))?;

    let mut text = String::new();
    let mut warnings = Vec::new();

    for &page_number in document.get_pages().keys() {
        match document.extract_text(&[page_number]) {
            Ok(page_text) => {
                if !page_text.trim().is_empty() {
                    text.push_str(&page_text);
                    text.push('\n');
                }
            }
            Err(e) => {
                tracing::warn!(
                    page = page_number,
                    error = %e,
                    "Skipping PDF page that failed extraction"
                );
                warnings.push(format!("page {page_number} skipped: {e}"));
            }
        }
    }

    // Some PDF producers emit code points the synthesis provider chokes on;
    // drop everything outside the BMP.
    let text: String = text.chars().filter(|c| (*c as u32) < 0x10000).collect();

    Ok((text, warnings))
}

/// Extract a .docx as its paragraph texts joined in document order.
fn extract_docx(bytes: &[u8]) -> Result<String, ContentError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ContentError::Unreadable(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let line = paragraph_text(paragraph);
            if !line.trim().is_empty() {
                text.push_str(&line);
                text.push('\n');
            }
        }
    }

    Ok(text)
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut line = String::new();
    for child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text) = run_child {
                    line.push_str(&text.text);
                }
            }
        }
    }
    line
}

/// Collapse runs of blank lines so prompts stay compact.
fn normalize_whitespace(text: &str) -> String {
    let blank_lines = regex::Regex::new(r"\n{3,}").unwrap();
    blank_lines.replace_all(text, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(
            SourceFormat::from_filename("notes.txt"),
            Some(SourceFormat::PlainText)
        );
        assert_eq!(
            SourceFormat::from_filename("Paper.PDF"),
            Some(SourceFormat::Pdf)
        );
        assert_eq!(
            SourceFormat::from_filename("report.docx"),
            Some(SourceFormat::Docx)
        );
        assert_eq!(SourceFormat::from_filename("data.csv"), None);
        assert_eq!(SourceFormat::from_filename("no-extension"), None);
    }

    #[tokio::test]
    async fn test_pasted_text_becomes_content() {
        let service = ContentService::new();
        let extraction = service
            .extract_from_text("Rust provides memory safety without garbage collection.")
            .await
            .unwrap();
        assert_eq!(
            extraction.content.text(),
            "Rust provides memory safety without garbage collection."
        );
        assert!(extraction.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_empty_pasted_text_is_rejected() {
        let service = ContentService::new();
        let result = service.extract_from_text("   ").await;
        assert!(matches!(result, Err(ContentError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_csv_upload_is_rejected_without_extraction() {
        let service = ContentService::new();
        let result = service
            .extract_from_file("data.csv", b"a,b,c\n1,2,3")
            .await;
        assert!(matches!(result, Err(ContentError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_txt_upload_is_decoded() {
        let service = ContentService::new();
        let extraction = service
            .extract_from_file("notes.txt", "line one\nline two".as_bytes())
            .await
            .unwrap();
        assert_eq!(extraction.content.text(), "line one\nline two");
    }

    #[tokio::test]
    async fn test_txt_upload_with_invalid_utf8_is_rejected() {
        let service = ContentService::new();
        let result = service
            .extract_from_file("notes.txt", &[0xff, 0xfe, 0x00])
            .await;
        assert!(matches!(result, Err(ContentError::InvalidEncoding)));
    }

    #[tokio::test]
    async fn test_pdf_without_text_has_no_extractable_text() {
        // one page, no content stream (like a scanned/image-only document)
        use lopdf::{dictionary, Document, Object};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();

        let service = ContentService::new();
        let result = service.extract_from_file("scan.pdf", &bytes).await;
        assert!(matches!(result, Err(ContentError::NoExtractableText)));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_unreadable() {
        let service = ContentService::new();
        let result = service
            .extract_from_file("scan.pdf", b"this is not a pdf")
            .await;
        assert!(matches!(result, Err(ContentError::Unreadable(_))));
    }

    #[test]
    fn test_normalize_whitespace_collapses_blank_runs() {
        let input = "para one\n\n\n\n\npara two\n";
        assert_eq!(normalize_whitespace(input), "para one\n\npara two");
    }
}
