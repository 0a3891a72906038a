use doctor11_core::models::report::ReportData;
use doctor11_report::compose_report;
use doctor11_report::docx::generate_docx;
use doctor11_report::error::ExportError;
use doctor11_report::export::{export_docx, export_txt};
use doctor11_report::styles::DocumentStyles;

#[test]
fn txt_export_writes_report_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zprava.txt");
    let report = compose_report(&ReportData::default());

    export_txt(&path, &report).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), report);
}

#[test]
fn docx_is_a_zip_package() {
    let report = compose_report(&ReportData::default());
    let bytes = generate_docx(&report, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn docx_handles_unclosed_markers() {
    let bytes = generate_docx("title\n**open bold\n__x", &DocumentStyles::default()).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn docx_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zprava.docx");

    export_docx(&path, "title\n\n**Anamnéza**:", &DocumentStyles::default()).unwrap();
    assert!(std::fs::read(&path).unwrap().starts_with(b"PK"));
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("zprava.txt");

    let err = export_txt(&path, "x").unwrap_err();
    assert!(matches!(err, ExportError::Write { .. }));
}
