use std::path::Path;

use crate::docx::generate_docx;
use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Write the report as UTF-8 text.
pub fn export_txt(path: &Path, report: &str) -> Result<(), ExportError> {
    write_file(path, report.as_bytes())?;
    tracing::info!(path = %path.display(), "report exported as text");
    Ok(())
}

/// Write the report as a DOCX document.
pub fn export_docx(path: &Path, report: &str, styles: &DocumentStyles) -> Result<(), ExportError> {
    let bytes = generate_docx(report, styles)?;
    write_file(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "report exported as DOCX");
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
