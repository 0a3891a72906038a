use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

const TITLE_STYLE: &str = "ReportTitle";

/// Generate a DOCX document from composed report text.
///
/// The report uses a small markup subset:
/// - the first non-empty line is the document title
/// - `**bold**` and `__bold__` → bold runs
/// - blank line → empty paragraph
/// - everything else → normal paragraph, one per line
pub fn generate_docx(report: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new().add_style(
        Style::new(TITLE_STYLE, StyleType::Paragraph)
            .name("report title")
            .size(styles.title_size * 2) // OOXML uses half-points
            .bold(),
    );

    let mut title_done = false;
    for line in report.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if !title_done {
            title_done = true;
            docx = docx.add_paragraph(
                Paragraph::new().style(TITLE_STYLE).add_run(
                    Run::new()
                        .add_text(trimmed)
                        .fonts(RunFonts::new().ascii(&styles.title_font)),
                ),
            );
            continue;
        }

        let mut para = Paragraph::new().align(AlignmentType::Left);
        for run in parse_inline(trimmed, styles) {
            para = para.add_run(run);
        }
        docx = docx.add_paragraph(para);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Position and delimiter of the next `**` or `__` marker.
fn next_marker(text: &str) -> Option<(usize, &'static str)> {
    ["**", "__"]
        .into_iter()
        .filter_map(|marker| text.find(marker).map(|pos| (pos, marker)))
        .min_by_key(|(pos, _)| *pos)
}

/// Split a line into plain and bold runs.
pub(crate) fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some((start, marker)) = next_marker(remaining) {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(body_run(before, styles));
        }

        let after_start = &remaining[start + marker.len()..];
        if let Some(end) = after_start.find(marker) {
            runs.push(body_run(&after_start[..end], styles).bold());
            remaining = &after_start[end + marker.len()..];
        } else {
            // unclosed marker: keep the rest verbatim
            runs.push(body_run(&remaining[start..], styles));
            return runs;
        }
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }

    runs
}
