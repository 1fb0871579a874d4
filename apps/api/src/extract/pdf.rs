use std::io::Read;
use std::panic;

use tracing::debug;

use crate::extract::{DocumentKind, ExtractError};

/// Extracts the text of every page in page order, one page per block.
///
/// Pages are joined with a newline so the last word of one page never runs into
/// the first word of the next. `pdf-extract` can panic on malformed content
/// streams; a panic is reported as an extraction failure instead of taking the
/// worker down.
pub fn extract_pdf<R: Read>(reader: &mut R) -> Result<String, ExtractError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let outcome = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes));

    match outcome {
        Ok(Ok(pages)) => {
            let text = pages.join("\n");
            debug!(
                "Extracted {} chars from {} pages ({} bytes)",
                text.len(),
                pages.len(),
                bytes.len()
            );
            Ok(text)
        }
        Ok(Err(e)) => Err(failure(e)),
        Err(_) => Err(failure("parser aborted on malformed content")),
    }
}

fn failure(reason: impl std::fmt::Display) -> ExtractError {
    ExtractError::Extraction {
        kind: DocumentKind::Pdf,
        reason: reason.to_string(),
    }
}

/// Builds a minimal PDF in memory, one Helvetica text line per page, every line
/// at the same position. Shared with the router tests.
#[cfg(test)]
pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
    // 1: catalog, 2: page tree, 3: font, then a page object and its content stream per page.
    let kids = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect::<Vec<_>>()
        .join(" ");

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", pages.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];
    for (i, text) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_at = out.len();
    let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        tail.push_str(&format!("{offset:010} 00000 n \n"));
    }
    tail.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    out.extend_from_slice(tail.as_bytes());
    out
}
