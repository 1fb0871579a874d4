use std::io::{Read, Seek};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::extract::{DocumentKind, ExtractError};

const DOCUMENT_PART: &str = "word/document.xml";

/// Upper bound on the decompressed main part. The upload cap limits the archive,
/// not what it inflates to.
const MAX_DOCUMENT_XML_BYTES: u64 = 16 * 1024 * 1024;

/// Extracts paragraph text from a DOCX package, one paragraph per line in document order.
pub fn extract_docx<R: Read + Seek>(reader: R) -> Result<String, ExtractError> {
    extract_docx_limited(reader, MAX_DOCUMENT_XML_BYTES)
}

fn extract_docx_limited<R: Read + Seek>(reader: R, limit: u64) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(reader).map_err(failure)?;

    let mut bytes = Vec::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| failure(format!("{DOCUMENT_PART}: {e}")))?
        .take(limit + 1)
        .read_to_end(&mut bytes)
        .map_err(failure)?;

    if bytes.len() as u64 > limit {
        return Err(failure(format!(
            "{DOCUMENT_PART} exceeds {limit} bytes when decompressed"
        )));
    }

    let xml = String::from_utf8(bytes).map_err(failure)?;
    paragraphs_from_xml(&xml)
}

/// Walks the WordprocessingML body. Runs (`w:t`) are joined inside a paragraph,
/// `w:tab` becomes a tab and `w:br`/`w:cr` a newline. Paragraphs nested in text boxes
/// are emitted before the paragraph that anchors them.
fn paragraphs_from_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<String> = Vec::new();
    let mut paragraphs: Vec<String> = Vec::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event().map_err(failure)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_run_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" => push_to_open(&mut open, "\t"),
                b"w:br" | b"w:cr" => push_to_open(&mut open, "\n"),
                _ => {}
            },
            Event::Text(t) if in_run_text => {
                let text = t.unescape().map_err(failure)?;
                push_to_open(&mut open, &text);
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

fn push_to_open(open: &mut [String], text: &str) {
    if let Some(current) = open.last_mut() {
        current.push_str(text);
    }
}

fn failure(reason: impl std::fmt::Display) -> ExtractError {
    ExtractError::Extraction {
        kind: DocumentKind::Docx,
        reason: reason.to_string(),
    }
}

/// Builds a minimal DOCX package in memory. Shared with the router tests.
#[cfg(test)]
pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    writer.start_file(DOCUMENT_PART, options).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn wrap(body: &str) -> String {
        format!(
            "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\"><w:body>{body}</w:body></w:document>"
        )
    }

    #[test]
    fn test_runs_are_joined_within_paragraph() {
        let xml = wrap(
            "<w:p><w:r><w:t>Senior </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Skills</w:t></w:r></w:p>",
        );
        assert_eq!(paragraphs_from_xml(&xml).unwrap(), "Senior Engineer\nSkills");
    }

    #[test]
    fn test_empty_paragraph_keeps_line() {
        let xml = wrap("<w:p><w:r><w:t>Summary</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>Skills</w:t></w:r></w:p>");
        assert_eq!(paragraphs_from_xml(&xml).unwrap(), "Summary\n\nSkills");
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let xml = wrap(
            "<w:p><w:r><w:t>R&amp;D</w:t><w:tab/><w:t>2021</w:t><w:br/><w:t>Lead</w:t></w:r></w:p>",
        );
        assert_eq!(paragraphs_from_xml(&xml).unwrap(), "R&D\t2021\nLead");
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let xml = wrap("<w:p><w:r><w:instrText>PAGE</w:instrText><w:t>Education</w:t></w:r></w:p>");
        assert_eq!(paragraphs_from_xml(&xml).unwrap(), "Education");
    }

    #[test]
    fn test_full_package_round_trip() {
        let bytes = build_docx(&["Jane Doe", "Experience", "Built things"]);
        let text = extract_docx(Cursor::new(bytes)).unwrap();
        assert_eq!(text, "Jane Doe\nExperience\nBuilt things");
    }

    #[test]
    fn test_oversized_document_part_is_rejected() {
        let bytes = build_docx(&["Jane Doe", "Experience", "Built things"]);
        let err = extract_docx_limited(Cursor::new(bytes.clone()), 64).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Extraction {
                kind: DocumentKind::Docx,
                ..
            }
        ));
        assert!(err.to_string().contains("exceeds 64 bytes"));

        assert!(extract_docx_limited(Cursor::new(bytes), MAX_DOCUMENT_XML_BYTES).is_ok());
    }

    #[test]
    fn test_not_a_zip_is_extraction_error() {
        let err = extract_docx(Cursor::new(b"plain text".to_vec())).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Extraction {
                kind: DocumentKind::Docx,
                ..
            }
        ));
    }

    #[test]
    fn test_zip_without_document_part_is_rejected() {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("readme.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hi").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_docx(Cursor::new(bytes)).unwrap_err();
        assert!(err.to_string().contains(DOCUMENT_PART));
    }
}
